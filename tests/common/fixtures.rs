//! Static upstream payloads used across harnesses.
//!
//! Shapes mirror the public roadmap API: a `value` array of entries whose
//! classification lists live under `tagsContainer`.

use serde_json::{json, Value};

/// A small upstream snapshot, deliberately not in `created` order, with one
/// malformed entry (numeric title) that the feed must drop.
pub fn upstream_payload() -> Value {
    json!({
        "@odata.context": "https://www.microsoft.com/releasecommunications/api/v2/$metadata#m365",
        "value": [
            {
                "id": 400001,
                "title": "SharePoint: page analytics",
                "description": "Usage analytics for modern pages.",
                "status": "Launched",
                "tagsContainer": {
                    "products": [{"tagName": "SharePoint"}],
                    "cloudInstances": [{"tagName": "Worldwide (Standard Multi-Tenant)"}, {"tagName": "GCC"}],
                    "releasePhase": [{"tagName": "General Availability"}],
                    "platforms": [{"tagName": "Web"}]
                },
                "publicDisclosureAvailabilityDate": "March CY2025",
                "publicPreviewDate": null,
                "created": "2024-11-02T10:00:00Z",
                "modified": "2025-02-01T10:00:00Z"
            },
            {
                "id": 534606,
                "title": "Universal Print: anywhere printing",
                "description": "Release print jobs from any Microsoft Teams device.",
                "status": "In development",
                "tagsContainer": {
                    "products": [{"tagName": "Universal Print"}, {"tagName": "Microsoft Teams"}],
                    "cloudInstances": [{"tagName": "Worldwide (Standard Multi-Tenant)"}],
                    "releasePhase": [{"tagName": "Preview"}, {"tagName": "General Availability"}],
                    "platforms": [{"tagName": "Web"}, {"tagName": "Desktop"}]
                },
                "publicDisclosureAvailabilityDate": "December CY2026",
                "publicPreviewDate": "July CY2026",
                "created": "2025-11-20T08:00:00Z",
                "modified": "2025-12-01T08:00:00Z"
            },
            {
                "id": "malformed-1",
                "title": 12345,
                "created": "2030-01-01T00:00:00Z"
            },
            {
                "id": 498112,
                "title": "Teams: GCC High meeting recap",
                "description": "Intelligent recap for government clouds.",
                "status": "Rolling out",
                "tagsContainer": {
                    "products": [{"tagName": "Microsoft Teams"}],
                    "cloudInstances": [{"tagName": "GCC High"}, {"tagName": "DoD"}],
                    "releasePhase": [{"tagName": "General Availability"}],
                    "platforms": [{"tagName": "Desktop"}, {"tagName": "Mac"}]
                },
                "publicDisclosureAvailabilityDate": "December CY2025",
                "publicPreviewDate": "October CY2025",
                "created": "2025-06-15T12:00:00Z",
                "modified": null
            }
        ]
    })
}

/// IDs of [`upstream_payload`] after parsing: malformed entry gone, newest first.
pub const UPSTREAM_IDS_NEWEST_FIRST: &[&str] = &["534606", "498112", "400001"];

/// Write `payload` to `dir/snapshot.json` and return the path.
pub fn write_snapshot(dir: &std::path::Path, payload: &Value) -> std::path::PathBuf {
    let path = dir.join("snapshot.json");
    std::fs::write(&path, serde_json::to_vec_pretty(payload).unwrap()).unwrap();
    path
}
