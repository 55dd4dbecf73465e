//! roadmap: search and filter the Microsoft 365 public roadmap.
//!
//! This crate re-exports the workspace layers so that integration tests and
//! the binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! feeds ──► core (QueryEngine) ──► server / cli
//! ```
//!
//! Every search fetches a fresh snapshot through a feed; nothing is cached
//! between queries.

pub mod cli;

pub use roadmap_core::*;
pub use roadmap_feeds as feeds;
pub use roadmap_server as server;
