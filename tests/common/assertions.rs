//! Domain-specific assertion macros for roadmap harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! search invariant was violated.

use roadmap::{Record, SearchResult};

// ---------------------------------------------------------------------------
// Result assertions
// ---------------------------------------------------------------------------

/// Assert the IDs of a result's features, in order.
///
/// ```rust
/// assert_ids!(result, ["A", "B"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($result:expr, [$($id:expr),* $(,)?]) => {{
        let result: &roadmap::SearchResult = &$result;
        let actual: Vec<&str> = result.features.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_ids! failed: feature IDs differ");
    }};
}

/// Assert that every returned feature satisfies a predicate.
///
/// ```rust
/// assert_features_all!(result, |r| r.status.as_deref() == Some("Launched"));
/// ```
#[macro_export]
macro_rules! assert_features_all {
    ($result:expr, $pred:expr) => {{
        fn typed<F: Fn(&roadmap::Record) -> bool>(f: F) -> F {
            f
        }
        let result: &roadmap::SearchResult = &$result;
        let pred = typed($pred);
        let failing: Vec<&str> = result
            .features
            .iter()
            .filter(|r| !pred(*r))
            .map(|r| r.id.as_str())
            .collect();
        if !failing.is_empty() {
            panic!(
                "assert_features_all! failed: {} of {} features did not satisfy predicate: {:?}",
                failing.len(),
                result.features.len(),
                failing
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Invariant helpers
// ---------------------------------------------------------------------------

/// `features` is a prefix of the matched set, so it can never exceed
/// `total_found`, and every returned record must come from the snapshot.
pub fn assert_result_consistent(result: &SearchResult, snapshot: &[Record]) {
    assert!(
        result.features.len() <= result.total_found,
        "features ({}) exceed total_found ({})",
        result.features.len(),
        result.total_found
    );
    for feature in &result.features {
        assert!(
            snapshot.contains(feature),
            "search fabricated a record not in the snapshot: {:?}",
            feature.id
        );
    }
}

/// IDs of a result's features, for set comparisons.
pub fn feature_ids(result: &SearchResult) -> Vec<String> {
    result.features.iter().map(|r| r.id.clone()).collect()
}
