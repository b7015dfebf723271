//! Seed datasets for the store.
//!
//! The builtin dataset mirrors what a small demo deployment tracks; an
//! operator can replace it with a JSON file via `[seed] path` in the config.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use alloy::primitives::{address, U256};
use serde::{Deserialize, Serialize};

use crate::projects::types::Project;
use crate::wallets::types::{Transaction, Wallet};

/// The collections loaded into a fresh [`MockStore`](super::MockStore).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeedData {
    pub projects: Vec<Project>,
    pub wallets: Vec<Wallet>,
    pub transactions: Vec<Transaction>,
}

impl SeedData {
    /// Load seed data from a JSON file.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let seed: SeedData = serde_json::from_reader(reader)?;
        tracing::info!(path = %path.display(), "Seed file loaded");
        Ok(seed)
    }

    /// The builtin demo dataset.
    ///
    /// Shape notes relied on by the integration tests: the third wallet has
    /// no transactions, and one transaction reaches a tracked wallet from an
    /// address with no wallet record of its own.
    pub fn builtin() -> Self {
        let w1 = address!("0x742d35cc6634c0532925a3b844bc454e4438f44e");
        let w2 = address!("0x53d284357ec70ce289d6d64134dfac8e511c8a3d");
        let w3 = address!("0x8626f6940e2eb28930efb4cef49b2d1f2c9c1199");
        let outsider = address!("0x1f9090aae28b8a3dceadf281b0f12828e676c326");

        let gwei = U256::from(1_000_000_000u64);
        let eth = gwei * gwei;

        Self {
            projects: vec![
                Project {
                    id: "proj-001".into(),
                    name: "Hook Registry".into(),
                    chain: "ethereum".into(),
                    status: "active".into(),
                    created_at: 1_735_700_000,
                },
                Project {
                    id: "proj-002".into(),
                    name: "Paymaster Gateway".into(),
                    chain: "base".into(),
                    status: "in-progress".into(),
                    created_at: 1_736_100_000,
                },
                Project {
                    id: "proj-003".into(),
                    name: "Legacy Bridge".into(),
                    chain: "polygon".into(),
                    status: "archived".into(),
                    created_at: 1_710_000_000,
                },
                Project {
                    id: "proj-004".into(),
                    name: "Points Indexer".into(),
                    chain: "ethereum".into(),
                    status: "active".into(),
                    created_at: 1_737_000_000,
                },
            ],
            wallets: vec![
                Wallet {
                    address: w1,
                    chain_id: 1,
                    balance: eth * U256::from(12u64),
                    token: "ETH".into(),
                },
                Wallet {
                    address: w1,
                    chain_id: 8453,
                    balance: eth / U256::from(2u64),
                    token: "ETH".into(),
                },
                Wallet {
                    address: w2,
                    chain_id: 1,
                    balance: eth * U256::from(3u64),
                    token: "ETH".into(),
                },
                Wallet {
                    address: w3,
                    chain_id: 137,
                    balance: eth * U256::from(250u64),
                    token: "MATIC".into(),
                },
            ],
            transactions: vec![
                Transaction {
                    id: "tx-001".into(),
                    from: w1,
                    to: w2,
                    value: eth,
                    token: None,
                    tx_hash: "0x9b7bb827c2e5e3c1a0a44dc53e573a6a136c65a9e7c5fd1f2913a5a6ad9933df"
                        .into(),
                    timestamp: 1_737_400_000,
                },
                Transaction {
                    id: "tx-002".into(),
                    from: w2,
                    to: w1,
                    value: eth / U256::from(4u64),
                    token: None,
                    tx_hash: "0x5f2e9f7dd6d3a9c231f0f2b7f13d8a6f0f9242a76a3e1c06517dc4d5b0e88f21"
                        .into(),
                    timestamp: 1_737_500_000,
                },
                Transaction {
                    id: "tx-003".into(),
                    from: outsider,
                    to: w2,
                    value: eth * U256::from(2u64),
                    token: None,
                    tx_hash: "0x1c7a0a2ce080cc3b1a9a1f2702f91d7e3f2b8d07f7f6d832a1e9b56f1ae0a5cd"
                        .into(),
                    timestamp: 1_737_600_000,
                },
                Transaction {
                    id: "tx-004".into(),
                    from: w1,
                    to: outsider,
                    value: gwei * U256::from(750_000u64),
                    token: None,
                    tx_hash: "0xe3d5a0c9bb6f48a25c2f9a6d02c97bd1c15e2f8858c9a3d14310b6af9c2e70b4"
                        .into(),
                    timestamp: 1_737_700_000,
                },
                Transaction {
                    id: "tx-005".into(),
                    from: w1,
                    to: w2,
                    value: U256::from(2_500_000_000u64),
                    token: Some("USDC".into()),
                    tx_hash: "0x7a1df2b93c64cf2ae66a5c2b98be71dd91e2b8f41e6a2209cb6d2b1702ad495a"
                        .into(),
                    timestamp: 1_737_800_000,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_shape_holds() {
        let seed = SeedData::builtin();
        assert_eq!(seed.projects.len(), 4);
        assert_eq!(seed.wallets.len(), 4);
        assert_eq!(seed.transactions.len(), 5);

        // The quiet wallet stays quiet.
        let quiet = address!("0x8626f6940e2eb28930efb4cef49b2d1f2c9c1199");
        assert!(seed.wallets.iter().any(|w| w.address == quiet));
        assert!(!seed.transactions.iter().any(|t| t.involves(quiet)));
    }

    #[test]
    fn seed_round_trips_through_json() {
        let seed = SeedData::builtin();
        let json = serde_json::to_string(&seed).unwrap();
        let decoded: SeedData = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.wallets, seed.wallets);
        assert_eq!(decoded.transactions, seed.transactions);
    }
}
