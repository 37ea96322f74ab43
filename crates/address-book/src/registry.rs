use std::collections::HashMap;
use std::path::PathBuf;

use alloy_primitives::Address;
use lazy_static::lazy_static;
use serde::Deserialize;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::{Chain, SpokePool};

lazy_static! {
    static ref KNOWN_SPOKE_POOLS: HashMap<u64, Address> = HashMap::from([
        (Chain::ETHEREUM, SpokePool::ETHEREUM),
        (Chain::OPTIMISM, SpokePool::OPTIMISM),
        (Chain::POLYGON, SpokePool::POLYGON),
        (Chain::BASE, SpokePool::BASE),
        (Chain::ARBITRUM, SpokePool::ARBITRUM),
    ]);
}

#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Deserialize)]
struct SpokePoolEntry {
    chain_id: u64,
    address: Address,
}

#[derive(Clone, Debug, Deserialize)]
struct SpokePoolConfig {
    spoke_pool: Vec<SpokePoolEntry>,
}

/// Per-chain spoke pool lookup consumed by the fill payload rewriter.
///
/// An unknown chain returns `None` and must surface as an error upstream,
/// never as a silently substituted address.
#[derive(Clone, Debug)]
pub struct SpokePoolRegistry {
    spoke_pools: HashMap<u64, Address>,
}

impl SpokePoolRegistry {
    pub fn new() -> SpokePoolRegistry {
        SpokePoolRegistry { spoke_pools: HashMap::new() }
    }

    pub fn with_spoke_pool(mut self, chain_id: u64, address: Address) -> Self {
        self.spoke_pools.insert(chain_id, address);
        self
    }

    pub fn spoke_pool(&self, chain_id: u64) -> Option<Address> {
        self.spoke_pools.get(&chain_id).copied()
    }

    /// Loads registry overrides from a TOML file on top of the known deployments.
    pub async fn load_from_file(file_path: PathBuf) -> Result<SpokePoolRegistry, LoadConfigError> {
        let contents = fs::read_to_string(&file_path).await?;
        let config: SpokePoolConfig = toml::from_str(&contents)?;
        let mut registry = SpokePoolRegistry::default();
        for entry in config.spoke_pool.iter() {
            registry.spoke_pools.insert(entry.chain_id, entry.address);
        }
        debug!("loaded {} spoke pool entries from {:?}", config.spoke_pool.len(), file_path);
        Ok(registry)
    }
}

impl Default for SpokePoolRegistry {
    fn default() -> Self {
        SpokePoolRegistry { spoke_pools: KNOWN_SPOKE_POOLS.clone() }
    }
}
