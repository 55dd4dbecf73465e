//! Seams between the query engine and the outside world: where records come
//! from and what time it is.

use crate::{FetchError, Record};
use chrono::{DateTime, Utc};
use std::future::Future;

/// Anything that can produce a full roadmap snapshot.
///
/// Implementations fetch fresh on every call; the engine never caches.
/// Records must come back sorted by `created`, newest first.
pub trait RecordSource: Send + Sync {
    fn fetch_records(&self) -> impl Future<Output = Result<Vec<Record>, FetchError>> + Send;
}

/// A fixed, in-memory snapshot. Used by tests and by callers that already hold
/// the records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for StaticSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        Ok(self.records.clone())
    }
}

/// Source of "now" for recency cutoffs.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A frozen instant, for deterministic recency filtering.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
