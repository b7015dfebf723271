//! Rust client SDK for the Blockchain Project Tracker API.

pub mod client;

pub use client::{Envelope, NewProject, TrackerClient, TrackerError};
