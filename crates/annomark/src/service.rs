//! Converter entry point: options plus the conversion pipeline.

use crate::html::parse_html;
use crate::postprocess::post_process;
use crate::render::render;

/// Options controlling a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Collapse runs of blank lines down to a single blank line.
    pub collapse_blank_lines: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            collapse_blank_lines: true,
        }
    }
}

/// Converts annotation HTML to Markdown.
///
/// Conversion is a pure function of the input string and the options: each
/// call parses its own tree, renders it depth-first and post-processes the
/// result. No I/O, no shared state, safe to call from anywhere.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom options.
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the current options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert an HTML fragment or document to Markdown.
    ///
    /// Empty input yields an empty string. Malformed markup is recovered,
    /// never an error.
    pub fn convert(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }
        let tree = parse_html(html);
        let rendered = render(&tree);
        post_process(&rendered, self.options.collapse_blank_lines)
    }
}

/// Convert HTML to Markdown with default options.
pub fn convert(html: &str) -> String {
    Converter::new().convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_simple_paragraph_with_bold() {
        assert_eq!(convert("<p>Hello <strong>world</strong></p>"), "Hello **world**");
    }

    #[test]
    fn test_heading_then_paragraph() {
        assert_eq!(
            convert("<h1>Title</h1><p>Paragraph with <em>emphasis</em></p>"),
            "# Title\n\nParagraph with *emphasis*"
        );
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(convert("<h3>Sub</h3>"), "### Sub");
        assert_eq!(convert("<h6>Deep</h6>"), "###### Deep");
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(convert("<ul><li>Apple</li><li>Banana</li></ul>"), "- Apple\n- Banana");
    }

    #[test]
    fn test_ordered_list_uses_fixed_prefix() {
        assert_eq!(convert("<ol><li>One</li><li>Two</li></ol>"), "1. One\n1. Two");
    }

    #[test]
    fn test_pre_block_preserves_lines() {
        assert_eq!(convert("<pre>line1\nline2</pre>"), "```\nline1\nline2\n```");
    }

    #[test]
    fn test_pre_single_line_is_inline_code() {
        assert_eq!(convert("<pre>just one line</pre>"), "`just one line`");
    }

    #[test]
    fn test_inline_code() {
        assert_eq!(convert("<p>Use <code>print()</code> here</p>"), "Use `print()` here");
    }

    #[test]
    fn test_entities() {
        assert_eq!(convert("<p>HTML entities: &amp; &lt; &gt;</p>"), "HTML entities: & < >");
    }

    #[test]
    fn test_link_and_default_href() {
        assert_eq!(
            convert(r#"<a href="https://example.com">Link</a>"#),
            "[Link](https://example.com)"
        );
        assert_eq!(convert("<a>bare</a>"), "[bare](#)");
    }

    #[test]
    fn test_line_break() {
        assert_eq!(convert("<p>one<br>two</p>"), "one\ntwo");
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            convert("<blockquote><p>first</p><p>second</p></blockquote>"),
            "> first\n> second"
        );
    }

    #[test]
    fn test_inline_math() {
        assert_eq!(convert(r#"<span class="math">$E = mc^2$</span>"#), "$E = mc^2$");
    }

    #[test]
    fn test_block_math() {
        assert_eq!(
            convert("<pre class=\"math\">$$\\sum_i x_i$$</pre>"),
            "$$\n\\sum_i x_i\n$$"
        );
    }

    #[test]
    fn test_text_only_input_is_unescaped_and_trimmed() {
        assert_eq!(convert("  plain &amp; simple  "), "plain & simple");
    }

    #[test]
    fn test_nested_containers_flatten() {
        assert_eq!(
            convert("<div><section><p>deep <b>text</b></p></section></div>"),
            "deep **text**"
        );
    }

    #[test]
    fn test_collapse_blank_lines_option() {
        let html = "<p>a</p><br><br><br><p>b</p>";
        let collapsed = convert(html);
        assert!(!collapsed.contains("\n\n\n"));
        let kept = Converter::with_options(ConvertOptions {
            collapse_blank_lines: false,
        })
        .convert(html);
        assert!(kept.contains("\n\n\n"));
    }

    #[test]
    fn test_repeated_conversion_is_stable() {
        let once = convert("<p>Stable paragraph</p>");
        assert_eq!(convert(&once), once);
    }

    #[test]
    fn test_deeply_nested_input() {
        let mut html = String::new();
        for _ in 0..50 {
            html.push_str("<div><em>");
        }
        html.push('x');
        let out = convert(&html);
        assert!(out.contains('x'));
    }
}
