//! Parser: turns an upstream roadmap payload into sorted [`Record`] values.
//!
//! The payload is either `{"value": [...]}` or a bare array. Each entry is
//! converted independently by [`parse_entry`]; entries it rejects are dropped
//! and the rest of the snapshot still loads.

use roadmap_core::{FetchError, Record};
use serde_json::{Map, Value};

type Object = Map<String, Value>;

/// Decode a full snapshot body: container shape, per-entry parsing, then
/// newest-created-first ordering.
pub fn decode_snapshot(body: &[u8]) -> Result<Vec<Record>, FetchError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let items = match &payload {
        Value::Array(items) => items,
        Value::Object(obj) => match obj.get("value") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(FetchError::Decode(
                    "expected a `value` array in the feed object".to_string(),
                ))
            }
        },
        _ => {
            return Err(FetchError::Decode(
                "expected a JSON object or array at the top level".to_string(),
            ))
        }
    };

    let mut records: Vec<Record> = items.iter().filter_map(parse_entry).collect();
    let dropped = items.len() - records.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = records.len(), "dropped malformed roadmap entries");
    }

    sort_newest_first(&mut records);
    Ok(records)
}

/// Stable sort by `created`, descending. A missing `created` sorts as "".
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| {
        let a = a.created.as_deref().unwrap_or("");
        let b = b.created.as_deref().unwrap_or("");
        b.cmp(a)
    });
}

/// Convert one raw upstream entry, or `None` if it is malformed: not an
/// object, no usable `id` (non-empty string or integer), or a field of the
/// wrong JSON type.
pub fn parse_entry(raw: &Value) -> Option<Record> {
    let obj = raw.as_object()?;

    let id = match obj.get("id")? {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        _ => return None,
    };

    Some(Record {
        id,
        title: opt_string(obj, "title")?.unwrap_or_default(),
        description: opt_string(obj, "description")?.unwrap_or_default(),
        status: opt_string(obj, "status")?,
        tags: tag_list(obj, "products", &["products", "tags"])?,
        cloud_instances: tag_list(obj, "cloudInstances", &["cloudInstances"])?,
        release_phases: tag_list(obj, "releasePhase", &["releaseRings", "releasePhases"])?,
        platforms: tag_list(obj, "platforms", &["platforms"])?,
        rollout_date: first_string(obj, &["publicDisclosureAvailabilityDate", "generalAvailabilityDate"])?,
        preview_date: first_string(obj, &["publicPreviewDate", "previewAvailabilityDate"])?,
        created: opt_string(obj, "created")?,
        modified: opt_string(obj, "modified")?,
    })
}

/// `Some(None)` when absent or null, `None` when present with the wrong type.
fn opt_string(obj: &Object, key: &str) -> Option<Option<String>> {
    match obj.get(key) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => Some(Some(s.clone())),
        Some(_) => None,
    }
}

/// [`opt_string`] on the first of `keys` present in the entry. A present
/// `null` does not fall through to the next key.
fn first_string(obj: &Object, keys: &[&str]) -> Option<Option<String>> {
    match keys.iter().find(|k| obj.contains_key(**k)) {
        Some(key) => opt_string(obj, key),
        None => Some(None),
    }
}

/// Read a classification list from `tagsContainer.<container_key>`, falling
/// back to the first flat top-level key present.
fn tag_list(obj: &Object, container_key: &str, flat_keys: &[&str]) -> Option<Vec<String>> {
    if let Some(container) = obj.get("tagsContainer").and_then(Value::as_object) {
        if container.contains_key(container_key) {
            return string_list(container.get(container_key));
        }
    }
    let flat = flat_keys.iter().find_map(|k| obj.get(*k));
    string_list(flat)
}

/// Accepts `null`, an array of strings, or an array of `{"tagName": ..}` objects.
fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    match value {
        None | Some(Value::Null) => Some(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Object(tag) => tag.get("tagName").and_then(Value::as_str).map(str::to_string),
                _ => None,
            })
            .collect(),
        Some(_) => None,
    }
}
