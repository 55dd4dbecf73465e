//! Facet aggregation: per-category value counts over a matched record set.
//!
//! Counts accumulate in an insertion-ordered map, then each category is
//! stably sorted by descending count, so ties keep first-seen order.

use crate::Record;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One `(value, count)` pair in a facet category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetBucket {
    pub name: String,
    pub count: usize,
}

/// Facet counts for the five fixed categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub tags: Vec<FacetBucket>,
    pub statuses: Vec<FacetBucket>,
    pub release_phases: Vec<FacetBucket>,
    pub platforms: Vec<FacetBucket>,
    pub cloud_instances: Vec<FacetBucket>,
}

impl Facets {
    /// `(category name, buckets)` in serialization order.
    pub fn categories(&self) -> [(&'static str, &[FacetBucket]); 5] {
        [
            ("tags", self.tags.as_slice()),
            ("statuses", self.statuses.as_slice()),
            ("release_phases", self.release_phases.as_slice()),
            ("platforms", self.platforms.as_slice()),
            ("cloud_instances", self.cloud_instances.as_slice()),
        ]
    }
}

#[derive(Default)]
struct Tally(IndexMap<String, usize>);

impl Tally {
    fn add_all<'a>(&mut self, values: impl IntoIterator<Item = &'a String>) {
        for value in values {
            *self.0.entry(value.clone()).or_insert(0) += 1;
        }
    }

    fn into_buckets(self) -> Vec<FacetBucket> {
        let mut buckets: Vec<FacetBucket> = self
            .0
            .into_iter()
            .map(|(name, count)| FacetBucket { name, count })
            .collect();
        // `sort_by` is stable.
        buckets.sort_by(|a, b| b.count.cmp(&a.count));
        buckets
    }
}

/// Count every category value across `records`.
///
/// Multi-valued fields count once per value, so a category's total may exceed
/// the number of records. A record without a status adds nothing to `statuses`.
pub fn compute_facets<'a>(records: impl IntoIterator<Item = &'a Record>) -> Facets {
    let mut tags = Tally::default();
    let mut statuses = Tally::default();
    let mut release_phases = Tally::default();
    let mut platforms = Tally::default();
    let mut cloud_instances = Tally::default();

    for record in records {
        tags.add_all(&record.tags);
        statuses.add_all(record.status.iter().filter(|s| !s.is_empty()));
        release_phases.add_all(&record.release_phases);
        platforms.add_all(&record.platforms);
        cloud_instances.add_all(&record.cloud_instances);
    }

    Facets {
        tags: tags.into_buckets(),
        statuses: statuses.into_buckets(),
        release_phases: release_phases.into_buckets(),
        platforms: platforms.into_buckets(),
        cloud_instances: cloud_instances.into_buckets(),
    }
}
