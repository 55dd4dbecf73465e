//! File feed: reads a saved roadmap snapshot from disk.
//!
//! The file has the same shape as the upstream response. It is re-read on
//! every fetch, so edits show up on the next query.

use crate::parse::decode_snapshot;
use roadmap_core::{FetchError, Record, RecordSource};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileFeed {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        tracing::debug!(path = %self.path.display(), "reading roadmap snapshot");
        let body = tokio::fs::read(&self.path).await?;
        decode_snapshot(&body)
    }
}
