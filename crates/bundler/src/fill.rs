use alloy_primitives::Address;
use alloy_sol_types::SolInterface;
use thiserror::Error;
use tracing::{debug, trace};

use intent_abi::{ISpokePool, IntentFillPayload};
use intent_address_book::SpokePoolRegistry;
use intent_types::{ChainExecution, Repayment};

use crate::helpers::FillEncoder;

#[derive(Debug, Error)]
pub enum FillError {
    #[error("No spoke pool registered for chain {0}")]
    UnknownChain(u64),
    #[error("Fill target {actual} does not match spoke pool {expected} on chain {chain_id}")]
    AddressMismatch { actual: Address, expected: Address, chain_id: u64 },
    #[error("Calldata does not decode as a spoke pool call: {0}")]
    Decode(#[from] alloy_sol_types::Error),
    #[error("Function {0} does not match expected function fill")]
    UnexpectedFunction(&'static str),
    #[error("Repayment address count {actual} does not match {expected} deposits")]
    RepaymentAddressLength { actual: usize, expected: usize },
    #[error("Repayment chain id count {actual} does not match {expected} deposits")]
    RepaymentChainIdLength { actual: usize, expected: usize },
}

/// Each `tokenIn` entry of a segment is one deposit; repayment routing arrays
/// are sized against the sum over all segments.
pub fn number_of_deposits(payload: &IntentFillPayload) -> usize {
    payload.segments.iter().map(|segment| segment.tokenIn.len()).sum()
}

/// Rewrites a fill call so the exclusive relayer is cleared and repayment
/// routing points at the caller-supplied targets.
///
/// Everything but the calldata is carried through unchanged. The input is
/// never mutated; any validation failure aborts before a new call is encoded.
pub fn update_target_fill_payload(
    target: &ChainExecution,
    repayment_address: Repayment<Address>,
    repayment_chain_ids: Repayment<u64>,
    registry: &SpokePoolRegistry,
) -> Result<ChainExecution, FillError> {
    let expected = registry.spoke_pool(target.chain_id).ok_or(FillError::UnknownChain(target.chain_id))?;
    if target.to != expected {
        return Err(FillError::AddressMismatch { actual: target.to, expected, chain_id: target.chain_id });
    }

    let fill = match ISpokePool::ISpokePoolCalls::abi_decode(target.data.as_ref(), false)? {
        ISpokePool::ISpokePoolCalls::fill(fill) => fill,
        ISpokePool::ISpokePoolCalls::refund(_) => return Err(FillError::UnexpectedFunction("refund")),
    };

    let deposits = number_of_deposits(&fill.payload);
    trace!("fill on chain {} carries {} deposits", target.chain_id, deposits);

    let repayment_addresses = match repayment_address {
        Repayment::PerDeposit(addresses) => {
            if addresses.len() != deposits {
                return Err(FillError::RepaymentAddressLength { actual: addresses.len(), expected: deposits });
            }
            addresses
        }
        Repayment::Broadcast(address) => vec![address],
    };

    let repayment_chain_ids = match repayment_chain_ids {
        Repayment::PerDeposit(chain_ids) => {
            if chain_ids.len() != deposits {
                return Err(FillError::RepaymentChainIdLength { actual: chain_ids.len(), expected: deposits });
            }
            chain_ids
        }
        Repayment::Broadcast(chain_id) => vec![chain_id],
    };

    let data = FillEncoder::encode_fill(fill.payload, Address::ZERO, repayment_addresses, repayment_chain_ids);
    debug!("rewrote fill for chain {}, calldata {} bytes", target.chain_id, data.len());

    Ok(ChainExecution { to: target.to, value: target.value, data, chain_id: target.chain_id })
}
