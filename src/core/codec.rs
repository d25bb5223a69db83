use crate::utils::error::{CommandsError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parses a JSON array of records. `path` only labels the error.
pub fn parse_records<T: DeserializeOwned>(path: &str, raw: &[u8]) -> Result<Vec<T>> {
    serde_json::from_slice(raw).map_err(|e| CommandsError::parse(path, e))
}

/// Two-space indented JSON with no trailing newline.
pub fn to_pretty_json<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}
