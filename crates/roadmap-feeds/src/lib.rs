//! roadmap-feeds: roadmap feed sources.
//!
//! Each feed produces a full snapshot of [`roadmap_core::Record`] values,
//! newest first, by implementing [`roadmap_core::RecordSource`]. Malformed
//! entries are dropped during parsing; only a failure to fetch or decode the
//! snapshot as a whole is reported as an error.

pub mod file;
pub mod http;
pub mod parse;

pub use file::FileFeed;
pub use http::HttpFeed;
pub use parse::{decode_snapshot, parse_entry};
