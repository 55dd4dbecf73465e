//! roadmap-core: query engine for the Microsoft 365 public roadmap.
//!
//! This crate holds the shared [`Record`] type, the [`FilterSpec`] callers
//! build, and the search pipeline that turns one into a [`SearchResult`].
//!
//! # Architecture
//!
//! ```text
//! RecordSource ──► QueryEngine ──► SearchResult
//!   (feeds)         │  filter ─► truncate
//!                   └─ facets (matched set)
//! ```
//!
//! Each search fetches a fresh snapshot. Filtering and faceting are pure,
//! in-memory passes over it.

pub mod config;
pub mod error;
pub mod facets;
pub mod filter;
pub mod search;
pub mod source;
pub mod summary;
pub mod types;

pub use error::FetchError;
pub use facets::{FacetBucket, Facets};
pub use filter::FilterSpec;
pub use search::{run_query, QueryEngine, SearchResult};
pub use source::{Clock, FixedClock, RecordSource, StaticSource, SystemClock};
pub use summary::FiltersApplied;
pub use types::Record;
