//! HTTP layer for the advertisement API contract suite: typed client,
//! command-line client and a local contract stub.

pub mod http;

pub use http::*;
