//! Storage trigger events.
//!
//! A trigger delivers a CloudEvents envelope whose `data` describes the
//! object that was just finalized:
//!
//! ```json
//! {
//!   "id": "7120863402373371",
//!   "type": "google.cloud.storage.object.v1.finalized",
//!   "source": "//storage.googleapis.com/projects/_/buckets/uploads",
//!   "data": {
//!     "bucket": "uploads",
//!     "name": "cats/tabby.png",
//!     "metageneration": "1",
//!     "timeCreated": "2026-10-18T09:30:00.000Z",
//!     "updated": "2026-10-18T09:30:00.000Z"
//!   }
//! }
//! ```
//!
//! Only `data.bucket` and `data.name` drive processing. Everything else is
//! carried for logging.

use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed event: {0}")]
    Json(#[from] serde_json::Error),
}

/// CloudEvents envelope carrying storage object metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub data: StorageObjectData,
}

/// Metadata of the stored object that triggered the event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageObjectData {
    pub bucket: String,
    pub name: String,
    /// Sent as a JSON string by the storage service; plain numbers are accepted too.
    #[serde(default, deserialize_with = "int_or_string")]
    pub metageneration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

fn int_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Str(s) if s.is_empty() => Ok(0),
        Raw::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

impl CloudEvent {
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, EventError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read an event from a file, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self, EventError> {
        if path == Path::new("-") {
            return Self::from_reader(std::io::stdin().lock());
        }
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Log every metadata field at `info`.
    pub fn log_metadata(&self) {
        let data = &self.data;
        log::info!("Event ID: {}", self.id);
        log::info!("Event Type: {}", self.event_type);
        log::info!("Bucket: {}", data.bucket);
        log::info!("File: {}", data.name);
        log::info!("Metageneration: {}", data.metageneration);
        log::info!("Created: {}", data.time_created.as_deref().unwrap_or("-"));
        log::info!("Updated: {}", data.updated.as_deref().unwrap_or("-"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINALIZED: &str = r#"{
        "id": "42",
        "type": "google.cloud.storage.object.v1.finalized",
        "source": "//storage.googleapis.com/projects/_/buckets/uploads",
        "data": {
            "bucket": "uploads",
            "name": "cats/tabby.png",
            "metageneration": "3",
            "timeCreated": "2026-10-18T09:30:00.000Z",
            "updated": "2026-10-18T09:31:00.000Z",
            "contentType": "image/png"
        }
    }"#;

    #[test]
    fn parses_finalized_event() {
        let event = CloudEvent::from_json(FINALIZED).unwrap();
        assert_eq!(event.id, "42");
        assert_eq!(event.event_type, "google.cloud.storage.object.v1.finalized");
        assert_eq!(event.data.bucket, "uploads");
        assert_eq!(event.data.name, "cats/tabby.png");
        assert_eq!(event.data.metageneration, 3);
        assert_eq!(
            event.data.time_created.as_deref(),
            Some("2026-10-18T09:30:00.000Z")
        );
    }

    #[test]
    fn metageneration_accepts_numbers_and_missing() {
        let numeric = r#"{"id":"1","type":"t","data":{"bucket":"b","name":"n","metageneration":7}}"#;
        assert_eq!(CloudEvent::from_json(numeric).unwrap().data.metageneration, 7);

        let missing = r#"{"id":"1","type":"t","data":{"bucket":"b","name":"n"}}"#;
        let event = CloudEvent::from_json(missing).unwrap();
        assert_eq!(event.data.metageneration, 0);
        assert_eq!(event.data.updated, None);
    }

    #[test]
    fn non_numeric_metageneration_is_malformed() {
        let bad = r#"{"id":"1","type":"t","data":{"bucket":"b","name":"n","metageneration":"x"}}"#;
        assert!(matches!(
            CloudEvent::from_json(bad),
            Err(EventError::Json(_))
        ));
    }

    #[test]
    fn missing_object_name_is_malformed() {
        let bad = r#"{"id":"1","type":"t","data":{"bucket":"b"}}"#;
        assert!(CloudEvent::from_json(bad).is_err());
    }

    #[test]
    fn load_reads_event_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("event.json");
        std::fs::write(&path, FINALIZED).unwrap();

        let event = CloudEvent::load(&path).unwrap();
        assert_eq!(event.data.name, "cats/tabby.png");
    }
}
