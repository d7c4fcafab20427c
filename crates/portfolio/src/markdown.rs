// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Markdown rendering for free-text fields and detail files.
//!
//! Uses pulldown-cmark with the GFM extensions authors reach for in project
//! write-ups (tables, strikethrough, task lists). Raw HTML passes through
//! unchanged per CommonMark.

use pulldown_cmark::{Options, Parser, html::push_html};
use std::path::Path;

use crate::error::{Error, Result};

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES
}

/// Render markdown to an HTML fragment. Blank input renders to nothing.
pub fn render_markdown(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    let parser = Parser::new_ext(content, options());
    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, parser);
    html
}

/// Read a markdown file and render it.
///
/// A missing file is reported as `Ok(None)`; any other read failure is an
/// error the caller logs.
pub fn render_markdown_file(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(render_markdown(&text))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_bold() {
        let html = render_markdown("**bold**");
        assert!(html.contains("<strong>bold</strong>"), "got: {}", html);
        assert!(!html.contains("**"));
    }

    #[test]
    fn test_plain_text_is_a_paragraph() {
        assert_eq!(render_markdown("Just words."), "<p>Just words.</p>\n");
    }

    #[test]
    fn test_blank_renders_empty() {
        assert_eq!(render_markdown(""), "");
        assert_eq!(render_markdown("  \n "), "");
    }

    #[test]
    fn test_links_lists_and_tables() {
        let html = render_markdown(
            "See [docs](https://example.dev).\n\n- one\n- ~~two~~\n\n| a | b |\n|---|---|\n| 1 | 2 |\n",
        );
        assert!(html.contains(r#"<a href="https://example.dev">docs</a>"#));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<del>two</del>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_heading_renders() {
        let html = render_markdown("# Overview\n\nBody");
        assert!(html.contains("<h1>Overview</h1>"));
        assert!(html.contains("<p>Body</p>"));
    }

    #[test]
    fn test_render_markdown_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("detail.md");
        std::fs::write(&path, "## Notes\n\n*it works*").expect("write");

        let html = render_markdown_file(&path).expect("render").expect("present");
        assert!(html.contains("<em>it works</em>"));

        let missing = render_markdown_file(&dir.path().join("nope.md")).expect("render");
        assert!(missing.is_none());
    }
}
