//! In-memory data store.
//!
//! # Responsibilities
//! - Own the project, wallet, and transaction collections
//! - Serve reads as cheap clones of flat arrays
//! - Append created projects (the only mutation in the system)
//!
//! # Design Decisions
//! - The store is an explicitly owned object handed to handlers through
//!   application state, never ambient global state
//! - Wallets and transactions are immutable after seeding and need no lock;
//!   projects sit behind one `RwLock<Vec<_>>`
//! - A poisoned lock surfaces as [`StoreError`] and flows to the generic
//!   internal-error responder

pub mod seed;

use std::sync::RwLock;
use std::time::{SystemTime, UNIX_EPOCH};

use alloy::primitives::Address;
use thiserror::Error;
use uuid::Uuid;

use crate::projects::types::{CreateProject, Project};
use crate::validation::parse_evm_address;
use crate::wallets::types::{Transaction, Wallet};

pub use seed::SeedData;

/// Errors raised by store access.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the project lock.
    #[error("project collection lock poisoned")]
    Poisoned,
}

/// The mock data store backing the API.
pub struct MockStore {
    projects: RwLock<Vec<Project>>,
    wallets: Vec<Wallet>,
    transactions: Vec<Transaction>,
}

impl MockStore {
    /// Build a store from seed data.
    pub fn new(seed: SeedData) -> Self {
        tracing::info!(
            projects = seed.projects.len(),
            wallets = seed.wallets.len(),
            transactions = seed.transactions.len(),
            "Store seeded"
        );
        Self {
            projects: RwLock::new(seed.projects),
            wallets: seed.wallets,
            transactions: seed.transactions,
        }
    }

    /// All projects, in insertion order.
    pub fn projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.read().map_err(|_| StoreError::Poisoned)?.clone())
    }

    /// Look up a single project by identifier.
    pub fn project_by_id(&self, id: &str) -> Result<Option<Project>, StoreError> {
        let projects = self.projects.read().map_err(|_| StoreError::Poisoned)?;
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    /// Append a new project and return the persisted record.
    ///
    /// The store assigns the identifier and insertion timestamp; field
    /// content is stored exactly as supplied.
    pub fn add_project(&self, fields: &CreateProject) -> Result<Project, StoreError> {
        let project = Project {
            id: Uuid::new_v4().to_string(),
            name: fields.name.clone(),
            chain: fields.chain.clone(),
            status: fields.status_or_default(),
            created_at: epoch_secs(),
        };
        let mut projects = self.projects.write().map_err(|_| StoreError::Poisoned)?;
        projects.push(project.clone());
        Ok(project)
    }

    /// All wallet snapshots.
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    /// Wallets matching a textual address.
    ///
    /// The candidate is normalized through address parsing, so hex case is
    /// irrelevant. Text that is not a well-formed address matches nothing.
    pub fn wallets_by_address(&self, address: &str) -> Vec<Wallet> {
        match parse_evm_address(address) {
            Some(addr) => self.wallets_for(addr),
            None => Vec::new(),
        }
    }

    /// Wallets recorded for a parsed address.
    pub fn wallets_for(&self, address: Address) -> Vec<Wallet> {
        self.wallets
            .iter()
            .filter(|w| w.address == address)
            .cloned()
            .collect()
    }

    /// Whether any wallet record exists for the address.
    pub fn has_wallet(&self, address: Address) -> bool {
        self.wallets.iter().any(|w| w.address == address)
    }

    /// All transaction records.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions where the address appears as sender or receiver.
    pub fn transactions_for(&self, address: Address) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.involves(address))
            .cloned()
            .collect()
    }

    /// Record counts for the status endpoint.
    pub fn counts(&self) -> Result<(usize, usize, usize), StoreError> {
        let projects = self.projects.read().map_err(|_| StoreError::Poisoned)?;
        Ok((projects.len(), self.wallets.len(), self.transactions.len()))
    }
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MockStore {
        MockStore::new(SeedData::builtin())
    }

    #[test]
    fn add_project_assigns_id_and_timestamp() {
        let store = store();
        let before = store.projects().unwrap().len();
        let created = store
            .add_project(&CreateProject {
                name: "X".into(),
                chain: "eth".into(),
                status: None,
            })
            .unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.status, "in-progress");
        assert!(created.created_at > 0);

        let projects = store.projects().unwrap();
        assert_eq!(projects.len(), before + 1);
        assert_eq!(projects.last().unwrap(), &created);
        assert_eq!(store.project_by_id(&created.id).unwrap(), Some(created));
    }

    #[test]
    fn unknown_project_id_resolves_to_none() {
        assert_eq!(store().project_by_id("nonexistent-id").unwrap(), None);
    }

    #[test]
    fn wallet_lookup_ignores_hex_case() {
        let store = store();
        let wallet = &store.wallets()[0];
        let lower = format!("{:?}", wallet.address).to_lowercase();
        let upper = format!("0x{}", lower[2..].to_uppercase());
        assert_eq!(store.wallets_by_address(&lower), store.wallets_by_address(&upper));
        assert!(!store.wallets_by_address(&lower).is_empty());
    }

    #[test]
    fn malformed_address_lookup_matches_nothing() {
        assert!(store().wallets_by_address("not-an-address").is_empty());
        assert!(store().wallets_by_address("").is_empty());
    }

    #[test]
    fn transactions_match_as_sender_or_receiver() {
        let store = store();
        for wallet in store.wallets() {
            for tx in store.transactions_for(wallet.address) {
                assert!(tx.from == wallet.address || tx.to == wallet.address);
            }
        }
    }
}
