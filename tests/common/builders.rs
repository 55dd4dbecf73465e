//! Test builders: ergonomic constructors for `Record` fixtures and corpora.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use chrono::{DateTime, Duration, Utc};
use roadmap::Record;

// ---------------------------------------------------------------------------
// RecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Record`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = RecordBuilder::new("534606", "Universal Print")
///     .status("Rolling out")
///     .tag("Universal Print")
///     .rollout_date("December CY2026")
///     .created("2025-11-20T08:00:00Z")
///     .build();
/// ```
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            record: Record::new(id, title),
        }
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.record.description = v.into();
        self
    }

    pub fn status(mut self, v: impl Into<String>) -> Self {
        self.record.status = Some(v.into());
        self
    }

    pub fn tag(mut self, v: impl Into<String>) -> Self {
        self.record.tags.push(v.into());
        self
    }

    pub fn cloud_instance(mut self, v: impl Into<String>) -> Self {
        self.record.cloud_instances.push(v.into());
        self
    }

    pub fn release_phase(mut self, v: impl Into<String>) -> Self {
        self.record.release_phases.push(v.into());
        self
    }

    pub fn platform(mut self, v: impl Into<String>) -> Self {
        self.record.platforms.push(v.into());
        self
    }

    pub fn rollout_date(mut self, v: impl Into<String>) -> Self {
        self.record.rollout_date = Some(v.into());
        self
    }

    pub fn preview_date(mut self, v: impl Into<String>) -> Self {
        self.record.preview_date = Some(v.into());
        self
    }

    pub fn created(mut self, v: impl Into<String>) -> Self {
        self.record.created = Some(v.into());
        self
    }

    pub fn created_at(self, ts: DateTime<Utc>) -> Self {
        self.created(ts.to_rfc3339())
    }

    pub fn modified(mut self, v: impl Into<String>) -> Self {
        self.record.modified = Some(v.into());
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Record A from the reference two-record scenario.
pub fn record_a() -> Record {
    RecordBuilder::new("A", "Teams meeting recap")
        .tag("Teams")
        .status("In development")
        .created("2024-01-01T00:00:00Z")
        .build()
}

/// Record B from the reference two-record scenario.
pub fn record_b() -> Record {
    RecordBuilder::new("B", "SharePoint page analytics")
        .tag("SharePoint")
        .status("Launched")
        .created("2023-01-01T00:00:00Z")
        .build()
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

const PRODUCTS: &[&str] = &["Microsoft Teams", "SharePoint", "Outlook", "Microsoft Copilot"];
const STATUSES: &[&str] = &["In development", "Rolling out", "Launched"];
const CLOUDS: &[&str] = &["Worldwide (Standard Multi-Tenant)", "GCC", "GCC High", "DoD"];
const PHASES: &[&str] = &["General Availability", "Preview", "Targeted Release"];
const PLATFORMS: &[&str] = &["Web", "Desktop", "iOS", "Android", "Mac"];
const MONTHS: &[&str] = &["January", "April", "July", "December"];

/// Build `n` records, one created per day going back from `now`, newest first,
/// cycling through products, statuses, clouds and dates.
pub fn build_corpus(n: usize, now: DateTime<Utc>) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let mut b = RecordBuilder::new(format!("{}", 100_000 + i), format!("Feature {i}"))
                .description(format!("{} improvement number {i}", PRODUCTS[i % PRODUCTS.len()]))
                .tag(PRODUCTS[i % PRODUCTS.len()])
                .cloud_instance(CLOUDS[i % CLOUDS.len()])
                .release_phase(PHASES[i % PHASES.len()])
                .platform(PLATFORMS[i % PLATFORMS.len()])
                .rollout_date(format!("{} CY{}", MONTHS[i % MONTHS.len()], 2025 + i % 3))
                .created_at(now - Duration::days(i as i64))
                .modified((now - Duration::days((i / 2) as i64)).to_rfc3339());
            if i % 5 != 4 {
                b = b.status(STATUSES[i % STATUSES.len()]);
            }
            if i % 3 == 0 {
                b = b.tag("Microsoft 365 app").platform("Web");
            }
            b.build()
        })
        .collect()
}
