//! Hashing - SHA-256 Digests for Artifacts
//!
//! Identical wireframes hash identically regardless of key order in the
//! submitted JSON.

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::model::Wireframe;

pub fn sha256_hex(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Canonical JSON: object keys sorted at every depth, no whitespace
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(value)?;
    serde_json::to_string(&sorted(value))
}

fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sorted(v))).collect::<Map<_, _>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}

/// Digest of a rendered artifact
pub fn compute_content_hash(content: &str) -> String {
    sha256_hex(content.as_bytes())
}

/// input_hash = sha256(canonical_wireframe + ":" + engine_version)
pub fn compute_input_hash(wireframe: &Wireframe, engine_version: &str) -> Result<String, serde_json::Error> {
    let canonical = canonical_json(wireframe)?;
    Ok(sha256_hex(format!("{}:{}", canonical, engine_version).as_bytes()))
}
