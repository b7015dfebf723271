//! Wallet and transaction record types.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A known blockchain account snapshot.
///
/// Immutable once seeded; the tracker never updates balances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    pub address: Address,
    /// Chain the balance was observed on.
    #[serde(rename = "chainId")]
    pub chain_id: u64,
    /// Balance in the token's smallest unit.
    pub balance: U256,
    /// Token symbol the balance is denominated in (e.g. "ETH", "MATIC").
    pub token: String,
}

/// A transfer record.
///
/// `from`/`to` are not required to reference seeded [`Wallet`] records:
/// external counterparties appear here with no wallet entry of their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: String,
    pub from: Address,
    pub to: Address,
    pub value: U256,
    /// Token symbol for token transfers; `None` for native transfers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: String,
    /// Seconds since epoch.
    pub timestamp: u64,
}

impl Transaction {
    /// Whether `address` participates in this transfer as sender or receiver.
    ///
    /// `Address` equality is byte equality, so matching is inherently
    /// case-insensitive with respect to the original hex text.
    pub fn involves(&self, address: Address) -> bool {
        self.from == address || self.to == address
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> Address {
        Address::repeat_byte(n)
    }

    fn tx(from: Address, to: Address) -> Transaction {
        Transaction {
            id: "tx-1".into(),
            from,
            to,
            value: U256::from(1_000u64),
            token: None,
            tx_hash: "0xabc".into(),
            timestamp: 1_700_000_000,
        }
    }

    #[test]
    fn involves_matches_sender_and_receiver_symmetrically() {
        let a = addr(0x11);
        let b = addr(0x22);
        assert!(tx(a, b).involves(a));
        assert!(tx(a, b).involves(b));
        assert!(tx(b, a).involves(a));
        assert!(!tx(a, b).involves(addr(0x33)));
    }

    #[test]
    fn wallet_serializes_with_api_field_names() {
        let wallet = Wallet {
            address: addr(0x42),
            chain_id: 137,
            balance: U256::from(5u64),
            token: "MATIC".into(),
        };
        let json = serde_json::to_value(&wallet).unwrap();
        assert!(json.get("chainId").is_some());
        assert!(json.get("chain_id").is_none());
    }
}
