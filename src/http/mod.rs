//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routing)
//!     → domain handlers (projects, wallets)
//!     → response.rs (envelope, error mapping)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use response::{ApiError, ApiResponse};
pub use server::HttpServer;
