//! Annotation-to-highlight field mapping.

use crate::annotation::Annotation;
use crate::highlight::{Category, Highlight};

/// Make a tag usable as a Readwise inline tag token.
pub fn sanitize_tag(tag: &str) -> String {
    tag.trim().replace(' ', "_")
}

/// Render tags as space-joined `.lowercased_underscored_tag` tokens.
pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!(".{}", sanitize_tag(&t.to_lowercase())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the highlight note: tag tokens first, then the Markdown comment.
/// Returns `None` when both are empty.
pub fn format_note(tags: &[String], comment: Option<&str>) -> Option<String> {
    let mut note = String::new();
    let tag_line = format_tags(tags);
    if !tag_line.is_empty() {
        note.push_str(&tag_line);
        note.push('\n');
    }
    if let Some(comment) = comment {
        note.push_str(comment);
    }
    (!note.is_empty()).then_some(note)
}

/// Numeric page labels become locations; anything else is "no location".
pub fn page_location(page_label: Option<&str>) -> Option<u32> {
    let label = page_label?;
    if label.is_empty() || !label.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    label.parse().ok()
}

/// Deep link into the library's PDF reader, when the annotation lives in
/// an attachment. Falls back to the plain annotation URL.
///
/// The `?page={n}%&annotation=` format is what the service already stores;
/// it is kept byte-for-byte so existing highlights keep matching.
pub fn highlight_url(annot: &Annotation, location: Option<u32>) -> Option<String> {
    match (annot.attachment_url.as_deref(), annot.annotation_url.as_deref()) {
        (Some(attachment), Some(annotation)) => Some(format!(
            "zotero://open-pdf/library/items/{}?page={}%&annotation={}",
            trailing_segment(attachment),
            location.unwrap_or(0),
            trailing_segment(annotation),
        )),
        _ => annot.annotation_url.clone(),
    }
}

fn trailing_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Map one annotation (or one segment of it) onto a highlight record.
pub fn highlight_for_segment(
    annot: &Annotation,
    text: String,
    note: Option<String>,
) -> Highlight {
    let location = page_location(annot.page_label.as_deref());
    Highlight {
        text,
        title: nonempty(annot.title.as_deref()),
        author: nonempty(annot.creators.as_deref()),
        note: note.filter(|n| !n.is_empty()),
        category: Category::for_document_type(annot.document_type.as_deref()),
        location,
        location_type: "page",
        highlighted_at: nonempty(annot.annotated_at.as_deref()),
        source_url: nonempty(annot.source_url.as_deref()),
        highlight_url: highlight_url(annot, location),
    }
}

fn nonempty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
