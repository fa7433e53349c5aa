//! Object store access.
//!
//! The [`ObjectStore`] trait is the only way the handler touches storage:
//! copy an object out to a writer, or copy a reader into an object. Objects
//! are addressed by `(bucket, key)`.
//!
//! Two implementations ship with the crate:
//!
//! - [`LocalStore`] maps buckets to directories under a root. Keys may
//!   contain `/` and become nested paths. Uploads are staged in a temp file
//!   next to the destination and renamed into place, so readers never see a
//!   half-written object.
//! - [`MemoryStore`] keeps objects in a map, for tests and embedding.

use std::collections::HashMap;
use std::io::{self, Read, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },
    #[error("invalid bucket name {0:?}")]
    InvalidBucket(String),
    #[error("invalid object key {0:?}")]
    InvalidKey(String),
}

/// Read/write access to a key-addressed object store.
pub trait ObjectStore {
    /// Copy the object's contents into `writer`.
    fn download(&self, bucket: &str, key: &str, writer: &mut dyn Write) -> Result<u64, StoreError>;

    /// Create or replace the object with everything `reader` yields.
    fn upload(&self, bucket: &str, key: &str, reader: &mut dyn Read) -> Result<u64, StoreError>;
}

fn validate_bucket(bucket: &str) -> Result<(), StoreError> {
    let ok = !bucket.is_empty()
        && bucket != "."
        && bucket != ".."
        && !bucket.contains(['/', '\\']);
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidBucket(bucket.to_string()))
    }
}

/// Split a key into path segments, rejecting anything that could escape
/// the bucket directory.
fn key_segments(key: &str) -> Result<Vec<&str>, StoreError> {
    let invalid = || StoreError::InvalidKey(key.to_string());
    if key.is_empty() || key.contains('\\') {
        return Err(invalid());
    }
    let segments: Vec<&str> = key.split('/').collect();
    for segment in &segments {
        let is_normal = matches!(
            Path::new(segment).components().collect::<Vec<_>>().as_slice(),
            [Component::Normal(_)]
        );
        if segment.is_empty() || !is_normal {
            return Err(invalid());
        }
    }
    Ok(segments)
}

// =============================================================================
// Directory-backed store
// =============================================================================

/// Store rooted at a local directory: `<root>/<bucket>/<key>`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Filesystem path of an object, after validating bucket and key.
    pub fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StoreError> {
        validate_bucket(bucket)?;
        let mut path = self.root.join(bucket);
        path.extend(key_segments(key)?);
        Ok(path)
    }
}

impl ObjectStore for LocalStore {
    fn download(&self, bucket: &str, key: &str, writer: &mut dyn Write) -> Result<u64, StoreError> {
        let path = self.object_path(bucket, key)?;
        let mut file = match std::fs::File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    bucket: bucket.to_string(),
                    key: key.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        Ok(io::copy(&mut file, writer)?)
    }

    fn upload(&self, bucket: &str, key: &str, reader: &mut dyn Read) -> Result<u64, StoreError> {
        let path = self.object_path(bucket, key)?;
        // object_path always appends at least one segment
        let dir = path.parent().unwrap_or(&self.root);
        std::fs::create_dir_all(dir)?;

        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        let written = io::copy(reader, &mut staged)?;
        staged.as_file().sync_all()?;
        staged.persist(&path).map_err(|e| StoreError::Io(e.error))?;
        log::debug!("stored {} bytes at {}", written, path.display());
        Ok(written)
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object directly.
    pub fn insert(&self, bucket: &str, key: &str, bytes: impl Into<Vec<u8>>) {
        self.lock()
            .insert((bucket.to_string(), key.to_string()), bytes.into());
    }

    /// Copy of an object's bytes, if present.
    pub fn get(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.lock()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(String, String), Vec<u8>>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.objects.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ObjectStore for MemoryStore {
    fn download(&self, bucket: &str, key: &str, writer: &mut dyn Write) -> Result<u64, StoreError> {
        validate_bucket(bucket)?;
        key_segments(key)?;
        let bytes = self.get(bucket, key).ok_or_else(|| StoreError::NotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })?;
        writer.write_all(&bytes)?;
        Ok(bytes.len() as u64)
    }

    fn upload(&self, bucket: &str, key: &str, reader: &mut dyn Read) -> Result<u64, StoreError> {
        validate_bucket(bucket)?;
        key_segments(key)?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let len = bytes.len() as u64;
        self.insert(bucket, key, bytes);
        Ok(len)
    }
}
