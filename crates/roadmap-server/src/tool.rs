//! Static description of the `search_roadmap` tool, served at `GET /tools`.

use serde::Serialize;

pub const TOOL_NAME: &str = "search_roadmap";

const INSTRUCTIONS: &str = "Query and search the Microsoft 365 Roadmap for upcoming features, \
release dates, and cloud instance availability. All filters are optional and combine with AND. \
With no filters the most recent features are returned. feature_id bypasses every other filter. \
Use include_facets=true (optionally with limit=0) to discover available filter values.";

#[derive(Debug, Clone, Serialize)]
pub struct ToolParameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescription {
    pub name: &'static str,
    pub instructions: &'static str,
    pub parameters: Vec<ToolParameter>,
}

const fn param(name: &'static str, kind: &'static str, description: &'static str) -> ToolParameter {
    ToolParameter {
        name,
        kind,
        description,
    }
}

pub fn describe() -> ToolDescription {
    ToolDescription {
        name: TOOL_NAME,
        instructions: INSTRUCTIONS,
        parameters: vec![
            param("query", "string", "Keyword matched against title and description (case-insensitive)."),
            param("product", "string", "Product tag, partial match (\"Teams\" matches \"Microsoft Teams\")."),
            param("status", "string", "Exact status: In development, Rolling out, Launched."),
            param("cloud_instance", "string", "Cloud instance, partial match (GCC, GCC High, DoD)."),
            param("feature_id", "string", "Roadmap ID. When set, all other filters are ignored."),
            param("added_within_days", "integer", "Only features created within N days (clamped to 1-365)."),
            param("release_phase", "string", "Release phase, partial match (General Availability, Preview)."),
            param("platform", "string", "Platform, partial match (Web, Desktop, iOS, Android, Mac)."),
            param("rollout_date", "string", "Rollout date, partial match (\"December 2026\"); the CY marker is optional."),
            param("preview_date", "string", "Preview date, partial match (\"July 2026\"); the CY marker is optional."),
            param("modified_within_days", "integer", "Only features modified within N days (clamped to 1-365)."),
            param("include_facets", "boolean", "Include per-category counts over the matched set."),
            param("limit", "integer", "Maximum features returned (default 10, max 100; 0 allowed with facets)."),
        ],
    }
}
