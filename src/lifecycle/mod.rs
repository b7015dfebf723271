//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Seed store → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or broadcast → Stop accepting → Drain in-flight → Exit
//! ```

pub mod shutdown;

pub use shutdown::{wait_for_shutdown, Shutdown};
