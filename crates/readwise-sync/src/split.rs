//! Long-text segmentation.
//!
//! Readwise rejects highlight text over 8191 characters. Over-length text
//! is split along paragraph boundaries first; a paragraph that is still too
//! long on its own is word-wrapped at the threshold width.

/// Safety threshold, kept below the service's 8191-character hard limit.
pub const MAX_HIGHLIGHT_LEN: usize = 8000;

/// Split text into segments no longer than [`MAX_HIGHLIGHT_LEN`].
///
/// Text within the threshold comes back as a single segment. Paragraph
/// splitting preserves content exactly: re-joining the segments with
/// `"\n\n"` reconstructs the input as long as no paragraph needed the
/// wrapping fallback.
pub fn split_long_text(text: &str) -> Vec<String> {
    if text.chars().count() <= MAX_HIGHLIGHT_LEN {
        return vec![text.to_string()];
    }

    let mut segments = Vec::new();
    for paragraph in text.split("\n\n") {
        if paragraph.chars().count() <= MAX_HIGHLIGHT_LEN {
            segments.push(paragraph.to_string());
        } else {
            segments.extend(wrap_words(paragraph, MAX_HIGHLIGHT_LEN));
        }
    }
    segments
}

/// Greedy word wrap. Words are never broken; a single word longer than
/// `width` becomes its own segment.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
