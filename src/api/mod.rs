//! Network boundary: explicitly configured client plus typed response shapes.
//!
//! Nothing in the parsing core depends on this module.

pub mod client;
pub mod config;
pub mod types;

pub use client::Client;
pub use config::ApiConfig;
