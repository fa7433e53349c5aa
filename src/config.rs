//! Thumbnailer configuration.
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Stock defaults ([`Config::default`])
//! 2. `thumbnail.toml` in the config directory (optional, sparse)
//! 3. Environment variables `THUMBNAIL_SIZE` and `DESTINATION_BUCKET`
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//! target_size = 200          # Longer edge of the thumbnail, in pixels
//! destination_bucket = ""    # Bucket that receives thumbnails
//! ```
//!
//! Unknown keys are rejected to catch typos early. The merged result is
//! validated exactly once by [`Config::resolve`], which turns it into
//! [`Settings`] for the handler.

use crate::imaging::{TargetSize, ThumbnailError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the config directory.
pub const CONFIG_FILE: &str = "thumbnail.toml";
pub const ENV_TARGET_SIZE: &str = "THUMBNAIL_SIZE";
pub const ENV_DESTINATION_BUCKET: &str = "DESTINATION_BUCKET";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse {var}={value:?} as an integer")]
    Env { var: &'static str, value: String },
    #[error(transparent)]
    Thumbnail(#[from] ThumbnailError),
}

/// Raw, unvalidated configuration as read from disk and environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Longer edge of generated thumbnails, in pixels. Must be positive.
    pub target_size: i64,
    /// Bucket receiving thumbnails, stored under the source object's key.
    pub destination_bucket: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_size: 200,
            destination_bucket: String::new(),
        }
    }
}

/// Validated configuration handed to the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub target_size: TargetSize,
    /// Opaque to the thumbnailer; the object store decides whether it is usable.
    pub destination_bucket: String,
}

impl Config {
    /// Validate and convert into [`Settings`].
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        Ok(Settings {
            target_size: TargetSize::new(self.target_size)?,
            destination_bucket: self.destination_bucket.clone(),
        })
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Unset variables leave the current value alone. An empty
    /// `DESTINATION_BUCKET` is still an override.
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(ENV_TARGET_SIZE) {
            self.target_size = raw.trim().parse().map_err(|_| ConfigError::Env {
                var: ENV_TARGET_SIZE,
                value: raw.clone(),
            })?;
        }
        if let Some(bucket) = lookup(ENV_DESTINATION_BUCKET) {
            self.destination_bucket = bucket;
        }
        Ok(self)
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load `thumbnail.toml` from a directory.
///
/// Keys missing from the file keep their stock defaults. Returns `Ok(None)`
/// if the file does not exist.
pub fn load_file_config(dir: &Path) -> Result<Option<Config>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Load the file layer from `dir` and the environment layer through `lookup`.
///
/// Does not validate; call [`Config::resolve`] on the result.
pub fn load_config_with(
    dir: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    load_file_config(dir)?
        .unwrap_or_default()
        .apply_env(lookup)
}

/// Load config from `dir` and the process environment.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    load_config_with(dir, |var| std::env::var(var).ok())
}

/// Returns a fully-commented stock `thumbnail.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Thumbnail Maker Configuration
# =============================
#
# Place this file as thumbnail.toml in the config directory (--config-dir).
# Every key is optional; values shown are the defaults.
#
# Environment variables override this file:
#   THUMBNAIL_SIZE      -> target_size
#   DESTINATION_BUCKET  -> destination_bucket

# Length of the thumbnail's longer edge, in pixels. Must be positive.
# The shorter edge is scaled proportionally (truncated, never rounded up).
target_size = 200

# Bucket that receives thumbnails. Each thumbnail is stored under the same
# object key as its source image.
destination_bucket = ""
"##
}
