//! Project record types.

use serde::{Deserialize, Serialize};

/// Status assigned to a project created without one.
pub const DEFAULT_STATUS: &str = "in-progress";

/// A tracked blockchain initiative.
///
/// `status` is a free-form label (e.g. "active", "in-progress", "archived");
/// it is only ever interpreted by the case-insensitive list filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Unique identifier (UUID for created records).
    pub id: String,
    pub name: String,
    /// Chain label (e.g. "ethereum", "base").
    pub chain: String,
    pub status: String,
    /// Insertion time, seconds since epoch.
    pub created_at: u64,
}

/// Request payload for creating a project.
///
/// No field validation is performed by design: the tracker accepts whatever
/// labels the caller supplies, including a body with `name` or `chain`
/// missing entirely (stored as empty labels). Only `status` gets special
/// treatment, falling back to [`DEFAULT_STATUS`] when absent or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub chain: String,
    pub status: Option<String>,
}

impl CreateProject {
    /// The effective status for the new record.
    pub fn status_or_default(&self) -> String {
        match self.status.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => DEFAULT_STATUS.to_string(),
        }
    }
}
