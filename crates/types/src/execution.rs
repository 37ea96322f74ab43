use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// A single auxiliary call to run alongside intent fulfillment.
/// Injected executions are prepended to a segment witness as-is, never edited.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub target: Address,
    pub value: U256,
    pub call_data: Bytes,
}

impl Execution {
    pub fn new(target: Address, value: U256, call_data: &Bytes) -> Execution {
        Execution { target, value, call_data: call_data.clone() }
    }
}

/// One fill transaction addressed to a specific chain's spoke pool.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainExecution {
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub chain_id: u64,
}

impl ChainExecution {
    pub fn new(to: Address, value: U256, data: &Bytes, chain_id: u64) -> ChainExecution {
        ChainExecution { to, value, data: data.clone(), chain_id }
    }
}
