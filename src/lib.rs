//! Blockchain Project Tracker Library

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod projects;
pub mod store;
pub mod validation;
pub mod wallets;

pub use config::TrackerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{MockStore, SeedData};
