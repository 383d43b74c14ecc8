//! The annotation record consumed by the mapper.

use serde::{Deserialize, Serialize};

/// One annotation or note retrieved from the reference library.
///
/// `comment` holds Markdown: the HTML body is converted on the way in (see
/// [`Annotation::set_html_comment`]), so downstream stages never see HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// The highlighted passage itself.
    pub text: String,
    /// Title of the annotated document.
    pub title: Option<String>,
    /// Creators/authors, already joined into one display string.
    pub creators: Option<String>,
    /// User tags attached to the annotation.
    #[serde(default)]
    pub tags: Vec<String>,
    /// User comment, in Markdown.
    pub comment: Option<String>,
    /// Page label, numeric or not ("12", "xii", "A-3").
    pub page_label: Option<String>,
    /// Document type of the parent item ("book", "journalArticle", ...).
    pub document_type: Option<String>,
    /// Library URL of the attachment the annotation lives in.
    pub attachment_url: Option<String>,
    /// Library URL of the annotation itself.
    pub annotation_url: Option<String>,
    /// Public URL of the annotated source, when there is one.
    pub source_url: Option<String>,
    /// Timestamp the annotation was made, as reported by the library.
    pub annotated_at: Option<String>,
}

impl Annotation {
    /// Store an HTML comment body, converting it to Markdown first.
    ///
    /// An empty or whitespace-only conversion clears the comment.
    pub fn set_html_comment(&mut self, html: &str) {
        let markdown = annomark::convert(html);
        self.comment = (!markdown.is_empty()).then_some(markdown);
    }
}
