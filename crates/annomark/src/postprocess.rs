//! Post-processing of rendered Markdown.
//!
//! The renderer concatenates per-node output without worrying about blank
//! lines; this pass normalizes the result. It is idempotent: running it on
//! its own output is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

static EOL_VARIANTS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r").unwrap());
static TRAILING_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+\n").unwrap());
static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize line endings, trailing whitespace and blank-line density.
///
/// With `collapse_blank_lines`, runs of three or more newlines collapse to
/// exactly two (at most one blank line between blocks).
pub(crate) fn post_process(output: &str, collapse_blank_lines: bool) -> String {
    let text = EOL_VARIANTS.replace_all(output, "\n");
    let text = TRAILING_WS.replace_all(&text, "\n");
    let text = if collapse_blank_lines {
        BLANK_RUNS.replace_all(&text, "\n\n").into_owned()
    } else {
        text.into_owned()
    };
    text.trim_matches(['\n', '\r', ' ']).to_string()
}
