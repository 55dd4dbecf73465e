//! [`FilterSpec`]: the full set of optional parameters for one search.
//!
//! Callers build one per query (from CLI flags, a JSON body, or URL query
//! parameters) and hand it to the engine by reference. Out-of-range numbers
//! are never rejected here; the engine clamps them when it plans the query.

use serde::{Deserialize, Serialize};

/// Limit used when the caller does not supply one.
pub const DEFAULT_LIMIT: i64 = 10;
/// Upper bound on returned features.
pub const MAX_LIMIT: i64 = 100;
/// Bounds for `added_within_days` / `modified_within_days`.
pub const MIN_WINDOW_DAYS: i64 = 1;
pub const MAX_WINDOW_DAYS: i64 = 365;

/// Optional filters for a roadmap search. `None` and empty strings both mean
/// "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSpec {
    /// Keyword matched against title and description.
    pub query: Option<String>,
    /// Partial match against any product tag ("Teams" matches "Microsoft Teams").
    pub product: Option<String>,
    /// Exact, case-insensitive status.
    pub status: Option<String>,
    pub cloud_instance: Option<String>,
    /// Exact roadmap ID. When set, every other filter is ignored.
    pub feature_id: Option<String>,
    pub added_within_days: Option<i64>,
    pub release_phase: Option<String>,
    pub platform: Option<String>,
    /// Partial match against the rollout display date, e.g. "December 2026".
    pub rollout_date: Option<String>,
    /// Partial match against the preview display date, e.g. "July 2026".
    pub preview_date: Option<String>,
    pub modified_within_days: Option<i64>,
    pub include_facets: bool,
    pub limit: Option<i64>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, v: impl Into<String>) -> Self {
        self.query = Some(v.into());
        self
    }

    pub fn product(mut self, v: impl Into<String>) -> Self {
        self.product = Some(v.into());
        self
    }

    pub fn status(mut self, v: impl Into<String>) -> Self {
        self.status = Some(v.into());
        self
    }

    pub fn cloud_instance(mut self, v: impl Into<String>) -> Self {
        self.cloud_instance = Some(v.into());
        self
    }

    pub fn feature_id(mut self, v: impl Into<String>) -> Self {
        self.feature_id = Some(v.into());
        self
    }

    pub fn added_within_days(mut self, days: i64) -> Self {
        self.added_within_days = Some(days);
        self
    }

    pub fn release_phase(mut self, v: impl Into<String>) -> Self {
        self.release_phase = Some(v.into());
        self
    }

    pub fn platform(mut self, v: impl Into<String>) -> Self {
        self.platform = Some(v.into());
        self
    }

    pub fn rollout_date(mut self, v: impl Into<String>) -> Self {
        self.rollout_date = Some(v.into());
        self
    }

    pub fn preview_date(mut self, v: impl Into<String>) -> Self {
        self.preview_date = Some(v.into());
        self
    }

    pub fn modified_within_days(mut self, days: i64) -> Self {
        self.modified_within_days = Some(days);
        self
    }

    pub fn include_facets(mut self, include: bool) -> Self {
        self.include_facets = include;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The ID for the fast path, if one was supplied.
    pub fn feature_id_value(&self) -> Option<&str> {
        supplied(&self.feature_id)
    }

    /// Effective truncation limit: `[0, 100]` with facets, `[1, 100]` without.
    pub fn effective_limit(&self, default_limit: i64) -> usize {
        let floor = if self.include_facets { 0 } else { 1 };
        // Clamped into 0..=100, so the cast cannot wrap.
        self.limit.unwrap_or(default_limit).clamp(floor, MAX_LIMIT) as usize
    }

    /// True when no filter at all was supplied (limit and facets don't count).
    pub fn is_unfiltered(&self) -> bool {
        [
            &self.query,
            &self.product,
            &self.status,
            &self.cloud_instance,
            &self.feature_id,
            &self.release_phase,
            &self.platform,
            &self.rollout_date,
            &self.preview_date,
        ]
        .into_iter()
        .all(|v| supplied(v).is_none())
            && self.added_within_days.is_none()
            && self.modified_within_days.is_none()
    }
}

/// Clamp a day window into `[1, 365]`.
pub fn clamp_window(days: i64) -> i64 {
    days.clamp(MIN_WINDOW_DAYS, MAX_WINDOW_DAYS)
}

/// `Some(value)` for a non-empty string filter.
pub(crate) fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
