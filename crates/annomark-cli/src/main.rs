//! Diagnostic CLI for the annomark converter.
//!
//! Not part of the sync pipeline; handy for eyeballing conversions and for
//! checking the converter on real annotation exports.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(name = "annomark")]
#[command(version, about = "Convert annotation HTML to Markdown", long_about = None)]
struct Cli {
    /// Run built-in self-checks over sample fragments
    #[arg(long, conflicts_with_all = ["convert", "convert_file"])]
    test: bool,

    /// Convert an HTML string and print the result
    #[arg(long, value_name = "HTML", conflicts_with = "convert_file")]
    convert: Option<String>,

    /// Convert an HTML file and write the result next to it as <file>.md
    #[arg(long, value_name = "PATH")]
    convert_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.test {
        return self_test();
    }
    if let Some(html) = cli.convert {
        println!("{}", annomark::convert(&html));
        return Ok(());
    }
    if let Some(path) = cli.convert_file {
        return convert_file(&path);
    }

    Cli::command().print_help()?;
    println!();
    Ok(())
}

fn convert_file(path: &Path) -> Result<()> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("file '{}' not found or unreadable", path.display()))?;
    let markdown = annomark::convert(&html);
    println!("{markdown}");

    let output_path = path.with_extension("md");
    fs::write(&output_path, &markdown)
        .with_context(|| format!("failed to write '{}'", output_path.display()))?;
    eprintln!("Markdown saved to: {}", output_path.display());
    Ok(())
}

fn self_test() -> Result<()> {
    let cases: &[(&str, &str)] = &[
        ("<p>Hello <strong>world</strong></p>", "Hello **world**"),
        ("<p>Use <code>print()</code> in Python</p>", "Use `print()` in Python"),
        (
            "<pre>def hello():\n    print(\"hi\")</pre>",
            "```\ndef hello():\n    print(\"hi\")\n```",
        ),
        (
            "<h1>Main Title</h1><p>Some text</p><h2>Sub Title</h2>",
            "# Main Title\n\nSome text\n\n## Sub Title",
        ),
        (
            "<ul><li>Apple</li><li>Banana</li><li>Orange</li></ul>",
            "- Apple\n- Banana\n- Orange",
        ),
        ("<p>HTML entities: &amp; &lt; &gt;</p>", "HTML entities: & < >"),
    ];

    let mut failures = 0;
    for (input, expected) in cases {
        let actual = annomark::convert(input);
        if actual == *expected {
            println!("ok   {input:?}");
        } else {
            failures += 1;
            println!("FAIL {input:?}");
            println!("  expected: {expected:?}");
            println!("  actual:   {actual:?}");
        }
    }

    if failures > 0 {
        bail!("{failures} self-check(s) failed");
    }
    println!("all self-checks passed");
    Ok(())
}
