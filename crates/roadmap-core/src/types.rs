//! Core types for roadmap-core.
//!
//! This module defines the [`Record`] shared by every layer: the feed builds
//! it, the query engine reads it, and the transport serializes it.

use serde::{Deserialize, Serialize};

/// A normalised roadmap feature produced by a feed and read by the query engine.
///
/// Records are immutable once a snapshot has been fetched. Every field is
/// always serialized, `None` values as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Roadmap ID, unique within a snapshot.
    pub id: String,
    pub title: String,
    /// Free text, frequently HTML.
    pub description: String,
    /// "In development", "Rolling out", "Launched", or whatever else the feed
    /// starts sending.
    pub status: Option<String>,
    /// Product tags (e.g. "Microsoft Teams"), in feed order.
    pub tags: Vec<String>,
    /// Deployment environments (e.g. "Worldwide (Standard Multi-Tenant)", "GCC High").
    pub cloud_instances: Vec<String>,
    pub release_phases: Vec<String>,
    pub platforms: Vec<String>,
    /// Display date such as "December CY2026". Not guaranteed to be parseable.
    pub rollout_date: Option<String>,
    /// Display date such as "July CY2026". Not guaranteed to be parseable.
    pub preview_date: Option<String>,
    /// ISO-8601 timestamp of when the feature was added to the roadmap.
    pub created: Option<String>,
    /// ISO-8601 timestamp of the last modification.
    pub modified: Option<String>,
}

impl Record {
    /// A record with only an ID and title; every other field empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: None,
            tags: Vec::new(),
            cloud_instances: Vec::new(),
            release_phases: Vec::new(),
            platforms: Vec::new(),
            rollout_date: None,
            preview_date: None,
            created: None,
            modified: None,
        }
    }
}
