//! Search layer: the predicate pipeline, ID fast path and result assembly.
//!
//! A query is one sequential pass over a freshly fetched snapshot:
//!
//! ```text
//! fetch ──► (feature_id? fast path) ──► pipeline ──► truncate ──► facets
//! ```
//!
//! [`run_query`] is the pure part and takes "now" explicitly. [`QueryEngine`]
//! wires it to a [`RecordSource`] and a [`Clock`].

use crate::facets::{compute_facets, Facets};
use crate::filter::{clamp_window, supplied, FilterSpec, DEFAULT_LIMIT};
use crate::source::{Clock, RecordSource, SystemClock};
use crate::summary::{FiltersApplied, Window};
use crate::{FetchError, Record};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matches before truncation.
    pub total_found: usize,
    /// The first `limit` matches, in feed order.
    pub features: Vec<Record>,
    pub filters_applied: FiltersApplied,
    /// Present only when facets were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facets: Option<Facets>,
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// One active filter, with its needle already lowercased/normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Predicate {
    Status(String),
    Product(String),
    CloudInstance(String),
    ReleasePhase(String),
    Platform(String),
    RolloutDate(String),
    PreviewDate(String),
    Keyword(String),
    CreatedSince(DateTime<Utc>),
    ModifiedSince(DateTime<Utc>),
}

impl Predicate {
    fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Status(needle) => record
                .status
                .as_deref()
                .is_some_and(|s| s.to_lowercase() == *needle),
            Predicate::Product(needle) => any_contains(&record.tags, needle),
            Predicate::CloudInstance(needle) => any_contains(&record.cloud_instances, needle),
            Predicate::ReleasePhase(needle) => any_contains(&record.release_phases, needle),
            Predicate::Platform(needle) => any_contains(&record.platforms, needle),
            Predicate::RolloutDate(needle) => display_date_matches(&record.rollout_date, needle),
            Predicate::PreviewDate(needle) => display_date_matches(&record.preview_date, needle),
            Predicate::Keyword(needle) => {
                record.title.to_lowercase().contains(needle.as_str())
                    || record.description.to_lowercase().contains(needle.as_str())
            }
            Predicate::CreatedSince(cutoff) => is_since(&record.created, *cutoff),
            Predicate::ModifiedSince(cutoff) => is_since(&record.modified, *cutoff),
        }
    }
}

fn any_contains(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| v.to_lowercase().contains(needle))
}

fn display_date_matches(value: &Option<String>, needle: &str) -> bool {
    value
        .as_deref()
        .is_some_and(|v| normalize_display_date(v).contains(needle))
}

fn is_since(timestamp: &Option<String>, cutoff: DateTime<Utc>) -> bool {
    timestamp
        .as_deref()
        .and_then(parse_timestamp)
        .is_some_and(|ts| ts >= cutoff)
}

/// Lowercase a display date and drop the calendar-year marker, so
/// "December CY2026" and "December 2026" compare equal.
///
/// Only the literal `" cy"` token is rewritten; other fiscal notations pass
/// through untouched.
pub fn normalize_display_date(value: &str) -> String {
    value.to_lowercase().replace(" cy", " ")
}

/// Parse an ISO-8601 timestamp from the feed. Values without an offset are
/// taken as UTC; bare dates as midnight UTC.
///
/// Accepts extended and basic forms, `+HHMM` offsets without a colon, and
/// hour-only times (`2024-03-05T10`).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z", "%Y%m%dT%H%M%S%.f%z"] {
        if let Ok(ts) = DateTime::parse_from_str(value, fmt) {
            return Some(ts.with_timezone(&Utc));
        }
    }

    let naive_value = value.strip_suffix('Z').unwrap_or(value);
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y%m%dT%H%M%S%.f",
        "%Y%m%dT%H%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(naive_value, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Some(ts) = parse_hour_only(naive_value) {
        return Some(ts);
    }
    ["%Y-%m-%d", "%Y%m%d"]
        .into_iter()
        .find_map(|fmt| NaiveDate::parse_from_str(naive_value, fmt).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM-DDTHH`: chrono will not build a time without minutes.
fn parse_hour_only(value: &str) -> Option<DateTime<Utc>> {
    let (date, hour) = value.split_once('T')?;
    if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()?
        .and_hms_opt(hour.parse().ok()?, 0, 0)
        .map(|naive| naive.and_utc())
}

// ---------------------------------------------------------------------------
// Query planning
// ---------------------------------------------------------------------------

/// The ordered, active predicates for one query plus the windows they used.
#[derive(Debug)]
struct Plan {
    predicates: Vec<Predicate>,
    added: Option<Window>,
    modified: Option<Window>,
}

impl Plan {
    /// Build the pipeline once per query. Cutoffs are computed here, not per record.
    fn build(spec: &FilterSpec, now: DateTime<Utc>) -> Self {
        let window = |days: Option<i64>| {
            days.map(clamp_window).map(|days| Window {
                days,
                cutoff: now - Duration::days(days),
            })
        };
        let added = window(spec.added_within_days);
        let modified = window(spec.modified_within_days);

        let lower = |v: &Option<String>| supplied(v).map(str::to_lowercase);
        let date = |v: &Option<String>| supplied(v).map(normalize_display_date);

        let stages: [Option<Predicate>; 10] = [
            lower(&spec.status).map(Predicate::Status),
            lower(&spec.product).map(Predicate::Product),
            lower(&spec.cloud_instance).map(Predicate::CloudInstance),
            lower(&spec.release_phase).map(Predicate::ReleasePhase),
            lower(&spec.platform).map(Predicate::Platform),
            date(&spec.rollout_date).map(Predicate::RolloutDate),
            date(&spec.preview_date).map(Predicate::PreviewDate),
            lower(&spec.query).map(Predicate::Keyword),
            added.map(|w| Predicate::CreatedSince(w.cutoff)),
            modified.map(|w| Predicate::ModifiedSince(w.cutoff)),
        ];

        Self {
            predicates: stages.into_iter().flatten().collect(),
            added,
            modified,
        }
    }

    fn matches(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }
}

// ---------------------------------------------------------------------------
// Query execution
// ---------------------------------------------------------------------------

/// Run `spec` against a snapshot, using `now` for recency cutoffs and
/// [`DEFAULT_LIMIT`] when the caller gave none.
pub fn run_query(records: Vec<Record>, spec: &FilterSpec, now: DateTime<Utc>) -> SearchResult {
    run_query_with_default(records, spec, now, DEFAULT_LIMIT)
}

fn run_query_with_default(
    records: Vec<Record>,
    spec: &FilterSpec,
    now: DateTime<Utc>,
    default_limit: i64,
) -> SearchResult {
    if let Some(id) = spec.feature_id_value() {
        return lookup_feature(records, id);
    }

    let limit = spec.effective_limit(default_limit);
    let plan = Plan::build(spec, now);
    tracing::debug!(predicates = ?plan.predicates, limit, "running roadmap query");

    let matched: Vec<Record> = records.into_iter().filter(|r| plan.matches(r)).collect();
    let facets = spec.include_facets.then(|| compute_facets(&matched));
    let total_found = matched.len();
    let features = matched.into_iter().take(limit).collect();

    SearchResult {
        total_found,
        features,
        filters_applied: FiltersApplied::for_spec(spec, plan.added, plan.modified),
        facets,
    }
}

/// ID fast path: exact, case-sensitive, ignores every other filter.
fn lookup_feature(records: Vec<Record>, id: &str) -> SearchResult {
    let features: Vec<Record> = records.into_iter().filter(|r| r.id == id).take(1).collect();
    SearchResult {
        total_found: features.len(),
        features,
        filters_applied: FiltersApplied::for_feature_id(id),
        facets: None,
    }
}

/// Fetches a snapshot per query and runs it through the pipeline.
///
/// Holds no per-query state, so one engine can serve concurrent searches.
#[derive(Debug, Clone)]
pub struct QueryEngine<S, C = SystemClock> {
    source: S,
    clock: C,
    default_limit: i64,
}

impl<S: RecordSource> QueryEngine<S, SystemClock> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            clock: SystemClock,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl<S: RecordSource, C: Clock> QueryEngine<S, C> {
    /// Replace the clock, e.g. with a [`FixedClock`](crate::source::FixedClock) in tests.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> QueryEngine<S, C2> {
        QueryEngine {
            source: self.source,
            clock,
            default_limit: self.default_limit,
        }
    }

    /// Limit applied when a spec carries none. Still subject to clamping.
    pub fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the current snapshot and run `spec` against it.
    ///
    /// A fetch failure fails the whole search; nothing is retried.
    pub async fn search(&self, spec: &FilterSpec) -> Result<SearchResult, FetchError> {
        let records = self.source.fetch_records().await.inspect_err(|e| {
            tracing::warn!(error = %e, "roadmap fetch failed");
        })?;
        let fetched = records.len();
        let result = run_query_with_default(records, spec, self.clock.now(), self.default_limit);
        tracing::debug!(fetched, total_found = result.total_found, "roadmap query done");
        Ok(result)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
