//! Project tracking.
//!
//! List, lookup, and creation of tracked blockchain initiatives. The only
//! write path in the system is project creation.

pub mod handlers;
pub mod types;

pub use types::{CreateProject, Project};
