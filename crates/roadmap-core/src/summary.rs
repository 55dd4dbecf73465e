//! The `filters_applied` echo returned with every search result.

use crate::filter::{supplied, FilterSpec};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Informational note returned when a search carried no filters.
pub const UNFILTERED_NOTE: &str = "No filters applied, returning most recent features";

/// Which filters a search used. Only supplied filters are serialized.
///
/// String filters echo the caller's raw value. Day windows echo the clamped
/// value, each paired with the cutoff instant it produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersApplied {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_within_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_within_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_cutoff_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rollout_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A day window after clamping, with the instant it cuts off at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub days: i64,
    pub cutoff: DateTime<Utc>,
}

impl FiltersApplied {
    /// Echo for the ID fast path: the ID and nothing else.
    pub fn for_feature_id(id: &str) -> Self {
        Self {
            feature_id: Some(id.to_string()),
            ..Self::default()
        }
    }

    /// Echo for the general path.
    pub fn for_spec(spec: &FilterSpec, added: Option<Window>, modified: Option<Window>) -> Self {
        let echo = |v: &Option<String>| supplied(v).map(str::to_string);
        let mut applied = Self {
            query: echo(&spec.query),
            product: echo(&spec.product),
            status: echo(&spec.status),
            cloud_instance: echo(&spec.cloud_instance),
            added_within_days: added.map(|w| w.days),
            cutoff_date: added.map(|w| format_instant(w.cutoff)),
            modified_within_days: modified.map(|w| w.days),
            modified_cutoff_date: modified.map(|w| format_instant(w.cutoff)),
            release_phase: echo(&spec.release_phase),
            platform: echo(&spec.platform),
            rollout_date: echo(&spec.rollout_date),
            preview_date: echo(&spec.preview_date),
            ..Self::default()
        };
        if applied == Self::default() {
            applied.note = Some(UNFILTERED_NOTE.to_string());
        }
        applied
    }
}

/// RFC 3339 at microsecond precision; a zero fraction is omitted.
fn format_instant(instant: DateTime<Utc>) -> String {
    instant.trunc_subsecs(6).to_rfc3339_opts(SecondsFormat::AutoSi, false)
}
