use std::collections::BTreeMap;
use std::iter::FromIterator;

use mgen_core::{ErrorInfo, MgenError};
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON bytes with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, MgenError> {
    let value = serde_json::to_value(value)
        .map_err(|err| MgenError::Serde(ErrorInfo::new("json-serialize", err.to_string())))?;
    serde_json::to_vec(&canonicalize(value))
        .map_err(|err| MgenError::Serde(ErrorInfo::new("json-write", err.to_string())))
}

/// SHA-256 of the canonical JSON form, hex encoded.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, MgenError> {
    let bytes = to_canonical_json_bytes(value)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}
