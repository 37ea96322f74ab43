pub use registry::{LoadConfigError, SpokePoolRegistry};

mod registry;

use alloy_primitives::{address, Address};

#[non_exhaustive]
pub struct Chain;

impl Chain {
    pub const ETHEREUM: u64 = 1;
    pub const OPTIMISM: u64 = 10;
    pub const POLYGON: u64 = 137;
    pub const BASE: u64 = 8453;
    pub const ARBITRUM: u64 = 42161;
}

#[non_exhaustive]
pub struct SpokePool;

impl SpokePool {
    pub const ETHEREUM: Address = address!("5c7BCd6E7De5423a257D81B442095A1a6ced35C5");
    pub const OPTIMISM: Address = address!("6f26Bf09B1C792e3228e5467807a900A503c0281");
    pub const POLYGON: Address = address!("9295ee1d8C5b022Be115A2AD3c30C72E34e7F096");
    pub const BASE: Address = address!("09aea4b2242abC8bb4BB78D537A67a245A7bEC64");
    pub const ARBITRUM: Address = address!("e35e9842fceaCA96570B734083f4a58e8F7C5f2A");
}
