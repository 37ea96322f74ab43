use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolInterface;

use intent_abi::{ISpokePool, IntentFillPayload};

pub struct FillEncoder;

impl FillEncoder {
    pub fn encode_fill(
        payload: IntentFillPayload,
        exclusive_relayer: Address,
        repayment_addresses: Vec<Address>,
        repayment_chain_ids: Vec<u64>,
    ) -> Bytes {
        ISpokePool::ISpokePoolCalls::fill(ISpokePool::fillCall {
            payload,
            exclusiveRelayer: exclusive_relayer,
            repaymentAddresses: repayment_addresses,
            repaymentChainIds: repayment_chain_ids.into_iter().map(U256::from).collect(),
        })
        .abi_encode()
        .into()
    }

    pub fn encode_refund(payload: IntentFillPayload) -> Bytes {
        ISpokePool::ISpokePoolCalls::refund(ISpokePool::refundCall { payload }).abi_encode().into()
    }
}
