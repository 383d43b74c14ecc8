//! Readwise highlight records and the wire payload.

use serde::{Deserialize, Serialize};

/// Readwise highlight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Articles,
    Books,
}

impl Category {
    /// Only "book" documents land in the books category; everything else
    /// is an article.
    pub fn for_document_type(document_type: Option<&str>) -> Self {
        if document_type == Some("book") {
            Category::Books
        } else {
            Category::Articles
        }
    }
}

/// One highlight as the Readwise v2 API expects it.
///
/// Optional fields are omitted from the serialized record when absent;
/// in particular a missing `location` is the "no location" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<u32>,
    pub location_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_url: Option<String>,
}

/// Request body for `POST /highlights/`.
#[derive(Debug, Serialize)]
pub struct HighlightRequest<'a> {
    pub highlights: &'a [Highlight],
}
