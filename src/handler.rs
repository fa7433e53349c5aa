//! Storage event handler.
//!
//! One event, one outcome: the source object is downloaded into memory,
//! transformed, and the thumbnail is uploaded to the destination bucket under
//! the same key. Any failure is returned to the caller as-is, with nothing
//! uploaded. Retrying is the trigger's business.

use crate::config::Settings;
use crate::event::CloudEvent;
use crate::imaging::{Dimensions, FormatTag, ThumbnailBackend, ThumbnailError, create_thumbnail};
use crate::store::{ObjectStore, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Thumbnail(#[from] ThumbnailError),
}

/// Address of an object in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub bucket: String,
    pub key: String,
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

/// What a successful [`handle_event`] produced.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleOutcome {
    pub source: ObjectRef,
    pub destination: ObjectRef,
    pub format: FormatTag,
    pub original: Dimensions,
    pub thumbnail: Dimensions,
    pub source_bytes: u64,
    pub thumbnail_bytes: u64,
}

/// Process one storage event.
pub fn handle_event(
    store: &impl ObjectStore,
    backend: &impl ThumbnailBackend,
    settings: &Settings,
    event: &CloudEvent,
) -> Result<HandleOutcome, HandlerError> {
    event.log_metadata();

    let source = ObjectRef {
        bucket: event.data.bucket.clone(),
        key: event.data.name.clone(),
    };
    let destination = ObjectRef {
        bucket: settings.destination_bucket.clone(),
        key: event.data.name.clone(),
    };

    let mut original = Vec::new();
    let source_bytes = store.download(&source.bucket, &source.key, &mut original)?;

    let thumb = create_thumbnail(backend, &original, settings.target_size)?;
    drop(original);

    let thumbnail_bytes =
        store.upload(&destination.bucket, &destination.key, &mut thumb.bytes.as_slice())?;
    log::info!(
        "Thumbnail {} ({}x{} {}) written to {}",
        source,
        thumb.dimensions.width,
        thumb.dimensions.height,
        thumb.format,
        destination
    );

    Ok(HandleOutcome {
        source,
        destination,
        format: thumb.format,
        original: thumb.original,
        thumbnail: thumb.dimensions,
        source_bytes,
        thumbnail_bytes,
    })
}
