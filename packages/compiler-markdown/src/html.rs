//! Display rendering. The exported document stays raw Markdown; HTML is only
//! produced for viewing.

use pulldown_cmark::{html, Event, Options, Parser};
use pulldown_cmark_escape::escape_html;
use serde::Serialize;

use crate::sections::split_sections;

/// A section's raw Markdown next to its rendered HTML
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub markdown: String,
    pub html: String,
}

/// Converts Markdown to an HTML fragment. Single newlines become `<br />`.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

pub fn render_sections_html(markdown: &str) -> Vec<RenderedSection> {
    split_sections(markdown)
        .into_iter()
        .map(|section| {
            let markdown = section.text();
            let html = render_html(&markdown);
            RenderedSection { markdown, html }
        })
        .collect()
}

/// Wraps rendered Markdown in a standalone HTML page
pub fn render_page(title: &str, markdown: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
        body {{ font-family: Georgia, serif; max-width: 800px; margin: 40px auto; padding: 0 20px; line-height: 1.6; }}
        code {{ background: #f4f4f4; padding: 2px 6px; border-radius: 3px; }}
        pre {{ background: #f4f4f4; padding: 12px; border-radius: 5px; overflow-x: auto; }}
        table {{ border-collapse: collapse; width: 100%; }}
        th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
    </style>
</head>
<body>
{}
</body>
</html>"#,
        escape_text(title),
        render_html(markdown)
    )
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    // Writing into a String cannot fail
    let _ = escape_html(&mut escaped, text);
    escaped
}
