use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::Execution;

/// Multi-chain order bundle as assembled by the orchestrator.
///
/// Segment order is semantically meaningful: each segment settles one origin
/// chain's deposits, and witness executions run in list order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChainCompact {
    pub sponsor: Address,
    pub nonce: U256,
    pub expires: U256,
    pub segments: Vec<ChainSegment>,
}

/// One origin chain's share of a multi-chain order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSegment {
    pub arbiter: Address,
    pub chain_id: u64,
    pub ids_and_amounts: Vec<[U256; 2]>,
    pub witness: SegmentWitness,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentWitness {
    pub recipient: Address,
    pub token_out: Vec<[U256; 2]>,
    pub deposit_id: U256,
    pub target_chain: u64,
    pub fill_deadline: u32,
    pub execs: Vec<Execution>,
}
