//! Readwise API client: batching, failure bookkeeping, upload error policy.
//!
//! The actual HTTP POST sits behind [`Transport`] so the batch logic stays
//! synchronous, deterministic and testable. One transport call per batch;
//! retries and authentication flows are the caller's concern.

use std::fs;
use std::path::{Path, PathBuf};

use crate::annotation::Annotation;
use crate::highlight::{Highlight, HighlightRequest};
use crate::mapper::{format_note, highlight_for_segment};
use crate::split::split_long_text;
use crate::{Result, SyncError};

/// Readwise v2 API base URL.
pub const API_BASE_URL: &str = "https://readwise.io/api/v2";
/// Highlight creation endpoint.
pub const HIGHLIGHTS_URL: &str = "https://readwise.io/api/v2/highlights/";

/// A completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Performs the single blocking POST per batch.
pub trait Transport {
    /// POST a JSON body with token authorization, returning the exchange.
    fn post_json(&self, url: &str, token: &str, body: &str) -> Result<Response>;
}

/// Pushes annotation batches to Readwise.
pub struct Readwise<T: Transport> {
    token: String,
    transport: T,
    error_log_dir: PathBuf,
    failed: Vec<Annotation>,
}

impl<T: Transport> Readwise<T> {
    pub fn new(token: impl Into<String>, transport: T) -> Self {
        Self {
            token: token.into(),
            transport,
            error_log_dir: PathBuf::from("."),
            failed: Vec::new(),
        }
    }

    /// Where to persist the raw response of a rejected upload.
    pub fn with_error_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.error_log_dir = dir.into();
        self
    }

    /// Annotations that could not be formatted in previous `push` calls.
    pub fn failed_items(&self) -> &[Annotation] {
        &self.failed
    }

    /// Map a batch of annotations to highlights and upload them.
    ///
    /// A record that cannot be formatted is logged, appended to the
    /// failed-items list, and skipped; the batch continues. A rejected
    /// upload aborts the whole batch after the raw response has been
    /// written to an error-log file. Returns the number of highlights
    /// uploaded.
    pub fn push(&mut self, annotations: &[Annotation]) -> Result<usize> {
        tracing::info!(count = annotations.len(), "pushing annotations to Readwise");

        let mut highlights: Vec<Highlight> = Vec::new();
        let mut split_count = 0usize;

        for annot in annotations {
            match self.build_highlights(annot) {
                Ok(batch) => {
                    if batch.len() > 1 {
                        split_count += 1;
                    }
                    highlights.extend(batch);
                }
                Err(err) => {
                    tracing::warn!(error = %err, title = annot.title.as_deref(), "skipping annotation");
                    self.failed.push(annot.clone());
                }
            }
        }

        if split_count > 0 {
            tracing::info!(split_count, "split long annotations into segments");
        }

        self.create_highlights(&highlights)?;
        tracing::info!(
            uploaded = highlights.len(),
            failed = self.failed.len(),
            "upload complete"
        );
        Ok(highlights.len())
    }

    /// One annotation → one highlight per segment, with `(part i/n) `
    /// note prefixes when the text had to be split.
    fn build_highlights(&self, annot: &Annotation) -> Result<Vec<Highlight>> {
        if annot.text.trim().is_empty() {
            return Err(SyncError::EmptyHighlightText);
        }

        let segments = split_long_text(&annot.text);
        let total = segments.len();
        let base_note = format_note(&annot.tags, annot.comment.as_deref());

        Ok(segments
            .into_iter()
            .enumerate()
            .map(|(idx, text)| {
                let note = if total > 1 {
                    Some(format!(
                        "(part {}/{}) {}",
                        idx + 1,
                        total,
                        base_note.as_deref().unwrap_or_default()
                    ))
                } else {
                    base_note.clone()
                };
                highlight_for_segment(annot, text, note)
            })
            .collect())
    }

    fn create_highlights(&self, highlights: &[Highlight]) -> Result<()> {
        let body = serde_json::to_string(&HighlightRequest { highlights })?;
        let response = self.transport.post_json(HIGHLIGHTS_URL, &self.token, &body)?;
        if response.is_success() {
            return Ok(());
        }

        let log_path = self.error_log_dir.join(format!(
            "error_log_{}_failed_post_request_to_readwise.json",
            response.status
        ));
        fs::write(&log_path, &response.body)?;
        Err(SyncError::Upload {
            status: response.status,
            reason: response.reason,
            log_path,
        })
    }

    /// Persist the failed-items list as JSON for later inspection.
    pub fn save_failed_items(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.failed)?)?;
        tracing::info!(count = self.failed.len(), path = %path.display(), "saved failed items");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::MAX_HIGHLIGHT_LEN;
    use std::cell::RefCell;

    struct MockTransport {
        status: u16,
        requests: RefCell<Vec<String>>,
    }

    impl MockTransport {
        fn ok() -> Self {
            Self::with_status(200)
        }

        fn with_status(status: u16) -> Self {
            Self {
                status,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for MockTransport {
        fn post_json(&self, _url: &str, _token: &str, body: &str) -> Result<Response> {
            self.requests.borrow_mut().push(body.to_string());
            Ok(Response {
                status: self.status,
                reason: if self.status == 200 { "OK" } else { "Bad Request" }.to_string(),
                body: "{\"detail\":\"mock\"}".to_string(),
            })
        }
    }

    fn annotation(text: &str) -> Annotation {
        Annotation {
            text: text.to_string(),
            title: Some("Title".to_string()),
            ..Annotation::default()
        }
    }

    #[test]
    fn test_push_uploads_payload() {
        let mut client = Readwise::new("token", MockTransport::ok());
        let uploaded = client.push(&[annotation("passage one")]).unwrap();
        assert_eq!(uploaded, 1);

        let requests = client.transport.requests.borrow();
        let payload: serde_json::Value = serde_json::from_str(&requests[0]).unwrap();
        assert_eq!(payload["highlights"][0]["text"], "passage one");
        assert_eq!(payload["highlights"][0]["category"], "articles");
    }

    #[test]
    fn test_empty_text_is_collected_not_fatal() {
        let mut client = Readwise::new("token", MockTransport::ok());
        let uploaded = client.push(&[annotation("  "), annotation("kept")]).unwrap();
        assert_eq!(uploaded, 1);
        assert_eq!(client.failed_items().len(), 1);
        assert_eq!(client.failed_items()[0].text, "  ");
    }

    #[test]
    fn test_long_text_gets_part_prefixes() {
        let para = "word ".repeat(1200).trim_end().to_string(); // ~6000 chars
        let text = format!("{para}\n\n{para}");
        let mut annot = annotation(&text);
        annot.comment = Some("note body".to_string());

        let mut client = Readwise::new("token", MockTransport::ok());
        let uploaded = client.push(std::slice::from_ref(&annot)).unwrap();
        assert_eq!(uploaded, 2);

        let requests = client.transport.requests.borrow();
        let payload: serde_json::Value = serde_json::from_str(&requests[0]).unwrap();
        let highlights = payload["highlights"].as_array().unwrap();
        assert_eq!(highlights[0]["note"], "(part 1/2) note body");
        assert_eq!(highlights[1]["note"], "(part 2/2) note body");
        for h in highlights {
            assert!(h["text"].as_str().unwrap().chars().count() <= MAX_HIGHLIGHT_LEN);
        }
    }

    #[test]
    fn test_rejected_upload_persists_response_and_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut client =
            Readwise::new("token", MockTransport::with_status(400)).with_error_log_dir(dir.path());

        let err = client.push(&[annotation("passage")]).unwrap_err();
        match err {
            SyncError::Upload { status, log_path, .. } => {
                assert_eq!(status, 400);
                let saved = std::fs::read_to_string(log_path).unwrap();
                assert!(saved.contains("mock"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_save_failed_items() {
        let dir = tempfile::tempdir().unwrap();
        let mut client = Readwise::new("token", MockTransport::ok());
        client.push(&[annotation("")]).unwrap();

        let path = dir.path().join("failed/failed_readwise_items.json");
        client.save_failed_items(&path).unwrap();
        let items: Vec<Annotation> =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(items.len(), 1);
    }
}
