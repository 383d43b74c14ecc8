//! # annomark
//!
//! Convert annotation HTML fragments to Markdown.
//!
//! Reference managers store user comments as a constrained subset of HTML
//! (headings, emphasis, code, lists, blockquotes, links, math notation).
//! This crate parses such fragments into a node tree, renders the tree
//! depth-first to GitHub-flavored Markdown, and normalizes whitespace in a
//! final post-processing pass.
//!
//! Malformed markup is recovered with standard HTML error-recovery rules;
//! conversion never fails and performs no I/O.
//!
//! ## Example
//!
//! ```rust
//! let markdown = annomark::convert("<p>Hello <strong>world</strong></p>");
//! assert_eq!(markdown, "Hello **world**");
//! ```
//!
//! ## Example (custom options)
//!
//! ```rust
//! use annomark::{ConvertOptions, Converter};
//!
//! let converter = Converter::with_options(ConvertOptions {
//!     collapse_blank_lines: false,
//! });
//! let markdown = converter.convert("<h1>Title</h1>");
//! assert_eq!(markdown, "# Title");
//! ```

pub mod html;
pub mod node;
mod postprocess;
mod render;
mod service;

pub use html::parse_html;
pub use node::{Element, Node};
pub use service::{convert, ConvertOptions, Converter};
