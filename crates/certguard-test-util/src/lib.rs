//! Shared test utilities for the certguard workspace.
//!
//! This crate exists because `xtask` and the integration tests of several crates need the
//! same synthetic certificates and report normalization, and a `#[cfg(test)]` module cannot
//! be shared across crates.

mod cert;

pub use cert::{CertificateBuilder, pem_encode};

use serde_json::Value;

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only when the *root*
///    object looks like a report envelope (has `schema`, `tool`, `verdict`, `certificates`
///    and `data`).
///
/// 2. **Recursive**: `started_at`, `finished_at` and `duration_ms` are normalized at any
///    depth because their placeholder values are fixed and cannot collide with real data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "certificates", "data"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_version_and_timestamps_are_pinned() {
        let report = json!({
            "schema": "certguard.report.v1",
            "tool": { "name": "certguard", "version": "0.1.0" },
            "started_at": "2026-01-01T00:00:00Z",
            "finished_at": "2026-01-01T00:00:01Z",
            "verdict": "pass",
            "certificates": [],
            "data": { "profile": "strict" }
        });
        let normalized = normalize_nondeterministic(report);
        assert_eq!(normalized["tool"]["version"], "__VERSION__");
        assert_eq!(normalized["started_at"], "__TIMESTAMP__");
        assert_eq!(normalized["finished_at"], "__TIMESTAMP__");
        assert_eq!(normalized["data"]["profile"], "strict");
    }

    #[test]
    fn nested_tool_objects_are_left_alone() {
        let value = json!({
            "data": { "tool": { "name": "x", "version": "9" }, "duration_ms": 12 }
        });
        let normalized = normalize_nondeterministic(value);
        assert_eq!(normalized["data"]["tool"]["version"], "9");
        assert_eq!(normalized["data"]["duration_ms"], 0);
    }
}
