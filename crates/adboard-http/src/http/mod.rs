//! HTTP API components
//!
//! - Wire types shared by the client and the stub
//! - Client configuration and the typed `reqwest` client
//! - CLI command handlers
//! - The axum contract stub

pub mod cli;
pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod stub;

pub use common::*;
