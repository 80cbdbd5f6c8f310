//! Persisted representation of a [`MappingCollection`].
//!
//! The collection is stored as a JSON array, newest first, where every
//! element has exactly two string fields in this order:
//!
//! ```json
//! [{"longUrl":"https://b.com","shortUrl":"short.ly/k3x9qa"},
//!  {"longUrl":"https://a.com","shortUrl":"short.ly/0p2m7d"}]
//! ```

use crate::validate::validate_url;
use serde::{Deserialize, Serialize};
use shortly_core::{Alias, MappingCollection, Record};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("failed to serialize mappings: {0}")]
    Serialize(String),
    #[error("failed to deserialize mappings: {0}")]
    Deserialize(String),
    #[error("record {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecordRef<'a> {
    long_url: &'a str,
    short_url: &'a Alias,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct StoredRecord {
    long_url: String,
    short_url: Alias,
}

pub fn encode(collection: &MappingCollection) -> Result<String, CodecError> {
    let stored: Vec<StoredRecordRef<'_>> = collection
        .iter()
        .map(|record| StoredRecordRef {
            long_url: record.original_url(),
            short_url: record.alias(),
        })
        .collect();
    serde_json::to_string(&stored).map_err(|e| CodecError::Serialize(e.to_string()))
}

/// Decodes a stored collection, checking every record against the same
/// rules new records are held to.
pub fn decode(raw: &str) -> Result<MappingCollection, CodecError> {
    let stored: Vec<StoredRecord> =
        serde_json::from_str(raw).map_err(|e| CodecError::Deserialize(e.to_string()))?;

    let records = stored
        .into_iter()
        .enumerate()
        .map(|(index, stored)| -> Result<Record, CodecError> {
            let invalid = |reason: String| CodecError::InvalidRecord { index, reason };

            let url = validate_url(&stored.long_url).map_err(|e| match e {
                crate::ValidationError::MalformedUrl { reason } => invalid(reason),
                other => invalid(other.to_string()),
            })?;
            if url.len() != stored.long_url.len() {
                return Err(invalid("long url has surrounding whitespace".to_string()));
            }

            Ok(Record::new(stored.long_url, stored.short_url))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MappingCollection::from_newest_first(records))
}
