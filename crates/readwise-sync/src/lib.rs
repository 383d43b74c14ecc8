//! # readwise-sync
//!
//! Republish reference-manager annotations as Readwise highlights.
//!
//! The converter crate ([`annomark`]) turns the HTML comment of an
//! annotation into Markdown; this crate handles everything around it:
//! mapping annotation fields onto the Readwise highlight record, tag
//! sanitization, splitting over-length highlight text into segments, the
//! upload batch with its failed-item bookkeeping, and the persisted
//! last-sync version.
//!
//! The wire transport sits behind the [`client::Transport`] trait; payload
//! construction and error policy live here and are testable without a
//! network.

pub mod annotation;
pub mod client;
pub mod highlight;
pub mod mapper;
pub mod split;
pub mod version;

use std::path::PathBuf;

pub use annotation::Annotation;
pub use client::{Readwise, Response, Transport};
pub use highlight::{Category, Highlight};
pub use version::SinceStore;

/// Errors produced by the sync pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The annotation carries no highlight text; Readwise rejects those.
    #[error("annotation has no highlight text")]
    EmptyHighlightText,

    /// The upload was rejected; the raw response body has been persisted
    /// for diagnostics.
    #[error(
        "uploading to Readwise failed: POST status {status} ({reason}); \
         response saved to {log_path}"
    )]
    Upload {
        status: u16,
        reason: String,
        log_path: PathBuf,
    },

    /// The transport could not complete the request at all.
    #[error("transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;
