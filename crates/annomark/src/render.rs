//! Tree-to-Markdown rendering.
//!
//! A single depth-first, document-order walk over the [`Node`] tree. Each
//! element is dispatched on its tag name (with a class check for math taking
//! priority), producing Markdown text that is later cleaned up by the
//! post-processing pass. Elements without a rule of their own contribute
//! only their rendered children, so unknown containers flatten instead of
//! failing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::node::{Element, Node};

static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// Render a node and its subtree to raw (un-post-processed) Markdown.
pub(crate) fn render(node: &Node) -> String {
    let el = match node {
        // Text arrives entity-decoded from the parser; emit verbatim.
        Node::Text(text) => return text.clone(),
        Node::Element(el) => el,
    };

    // Math is detected by class, not tag, so it outranks the tag dispatch.
    if el.has_class("math") {
        return render_math(el);
    }

    match el.tag() {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = (el.tag().as_bytes()[1] - b'0') as usize;
            format!("\n{} {}\n", "#".repeat(level), render_children(el).trim())
        }
        "p" => format!("\n{}\n", render_children(el).trim()),
        "br" => "\n".to_string(),
        "strong" | "b" => format!("**{}**", render_children(el)),
        "em" | "i" => format!("*{}*", render_children(el)),
        "code" | "pre" => wrap_code(&el.text_content()),
        "a" => {
            let href = el.attr("href").unwrap_or("#");
            format!("[{}]({})", render_children(el).trim(), href)
        }
        "ul" => format!("\n{}\n", list_to_md(el, "- ")),
        "ol" => format!("\n{}\n", list_to_md(el, "1. ")),
        // A list item outside ul/ol dispatch still renders as a bullet.
        "li" => format!("- {}\n", render_children(el).trim()),
        "blockquote" => render_blockquote(el),
        // Fallback for div, span and anything else: children only.
        _ => render_children(el),
    }
}

/// Render all children of an element in document order.
pub(crate) fn render_children(el: &Element) -> String {
    el.children().map(render).collect()
}

fn render_math(el: &Element) -> String {
    let raw = el.compact_text();
    let expr = strip_math_delimiters(&raw);
    // Block math: a preformatted container, or an expression spanning lines.
    let is_block = el.tag() == "pre" || raw.contains('\n');
    if is_block {
        format!("\n$$\n{expr}\n$$\n")
    } else {
        format!("${expr}$")
    }
}

/// Remove surrounding `$`, `$$` or `\[ ... \]` delimiters from a TeX string.
fn strip_math_delimiters(tex: &str) -> String {
    let mut s = tex.trim();
    s = s.strip_prefix("$$").or_else(|| s.strip_prefix('$')).unwrap_or(s);
    s = s.strip_suffix("$$").or_else(|| s.strip_suffix('$')).unwrap_or(s);
    if let Some(inner) = s.strip_prefix("\\[").and_then(|r| r.strip_suffix("\\]")) {
        s = inner;
    }
    s.trim().to_string()
}

/// Wrap text as inline code or, when it spans lines, a fenced block.
fn wrap_code(text: &str) -> String {
    let text = text.trim_end_matches(['\n', '\r', '\t', ' ']);
    if text.contains('\n') {
        format!("\n```\n{text}\n```\n")
    } else {
        format!("`{}`", text.replace('`', "\\`"))
    }
}

/// One `- `/`1. ` line per direct `li` child. Nested lists beyond one level
/// are flattened into their item's text.
fn list_to_md(el: &Element, bullet: &str) -> String {
    let mut out = String::new();
    for li in el.children_with_tag("li") {
        out.push_str(bullet);
        out.push_str(render_children(li).trim());
        out.push('\n');
    }
    out
}

fn render_blockquote(el: &Element) -> String {
    let content = render_children(el);
    let content = content.trim();
    let collapsed = NEWLINE_RUNS.replace_all(content, "\n");
    let quoted: Vec<String> = collapsed.lines().map(|line| format!("> {line}")).collect();
    format!("\n{}\n", quoted.join("\n"))
}
