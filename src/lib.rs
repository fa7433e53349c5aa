//! # Thumbnail Maker
//!
//! Reacts to a newly stored image object and writes a size-reduced copy of
//! it, in the same format and under the same key, to a destination bucket.
//!
//! # Architecture: Three-Stage Transform
//!
//! ```text
//! bytes ─▶ decode ─▶ (PixelGrid, FormatTag) ─▶ resample ─▶ PixelGrid ─▶ encode(FormatTag) ─▶ bytes
//! ```
//!
//! Each stage owns its input and hands a new value to the next one. The
//! format tag found while decoding is the one used for encoding; GIF, JPEG
//! and PNG are the only formats accepted, anything else is rejected.
//!
//! Around the transform sit the collaborators: a storage trigger event names
//! the new object, an [`ObjectStore`](store::ObjectStore) reads and writes
//! it, and configuration supplies the target size and destination bucket.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | The transform: classification, decoding, long-edge resampling, encoding |
//! | [`handler`] | One event in, one thumbnail out: download → transform → upload |
//! | [`event`] | Storage trigger event model (CloudEvents envelope) |
//! | [`store`] | [`ObjectStore`](store::ObjectStore) trait, directory and in-memory stores |
//! | [`config`] | Layered configuration: defaults → `thumbnail.toml` → environment |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Long-Edge Sizing With Truncation
//!
//! One number controls the output: the length of the longer edge. The shorter
//! edge is `shorter * target / longer`, truncated. Square images take the
//! portrait branch and come out `target × target`. See
//! [`imaging::calculate_target_dimensions`].
//!
//! ## Closed Format Set
//!
//! [`imaging::FormatTag`] is an enum and the encoder matches on it
//! exhaustively. Adding a format means adding an encode arm, or the crate does
//! not compile.
//!
//! ## No Partial Output
//!
//! The thumbnail is fully encoded in memory before anything is written, and
//! [`store::LocalStore`] stages uploads in a temp file that is renamed into
//! place. A failed invocation leaves the destination untouched.

pub mod config;
pub mod event;
pub mod handler;
pub mod imaging;
pub mod output;
pub mod store;
