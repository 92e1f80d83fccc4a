use super::models::Identified;
use crate::error::{decode_error, shape_error, StaffoResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// How undecodable responses are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Swallow decode failures and return whatever could be decoded
    #[default]
    Lenient,
    /// Report decode failures as errors
    Strict,
}

impl DecodeMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            DecodeMode::Strict
        } else {
            DecodeMode::Lenient
        }
    }
}

/// Decode a JSON array of records.
///
/// In lenient mode malformed JSON and non-array bodies give an empty list and
/// elements that fail to decode are skipped.
pub fn decode_list<T: DeserializeOwned>(body: &[u8], mode: DecodeMode) -> StaffoResult<Vec<T>> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => return lenient_or(mode, decode_error(&e.to_string())),
    };

    let items = match value {
        Value::Array(items) => items,
        other => {
            return lenient_or(
                mode,
                shape_error(&format!("expected a JSON array, got {}", kind(&other))),
            )
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(e) => match mode {
                DecodeMode::Strict => {
                    return Err(decode_error(&format!("element {}: {}", index, e)));
                }
                DecodeMode::Lenient => warn!("Skipping undecodable element {}: {}", index, e),
            },
        }
    }

    Ok(records)
}

/// Decode a single JSON object; lenient mode yields `None` on failure
pub fn decode_object<T: DeserializeOwned>(body: &[u8], mode: DecodeMode) -> StaffoResult<Option<T>> {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => return lenient_or(mode, decode_error(&e.to_string())),
    };

    if !value.is_object() {
        return lenient_or(
            mode,
            shape_error(&format!("expected a JSON object, got {}", kind(&value))),
        );
    }

    match serde_json::from_value::<T>(value) {
        Ok(record) => Ok(Some(record)),
        Err(e) => lenient_or(mode, decode_error(&e.to_string())),
    }
}

/// The `id` of every record as a string, in order; duplicates are kept
pub fn project_ids<T: Identified>(records: &[T]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

fn lenient_or<T: Default>(mode: DecodeMode, err: crate::error::Error) -> StaffoResult<T> {
    match mode {
        DecodeMode::Strict => Err(err),
        DecodeMode::Lenient => {
            warn!("Ignoring undecodable response: {}", err);
            Ok(T::default())
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
