//! Textual section splitting for copy mode.
//!
//! A section is a line starting with `#` plus every following line up to the
//! next such line. Splitting looks only at line prefixes, so it works on any
//! Markdown, not just exported outlines.

/// One copyable block of a Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Section<'a> {
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// The heading line, absent for content before the first heading
    pub fn heading(&self) -> Option<&'a str> {
        self.lines.first().copied().filter(|line| is_heading(line))
    }

    pub fn body(&self) -> &[&'a str] {
        if self.heading().is_some() {
            &self.lines[1..]
        } else {
            &self.lines
        }
    }

    /// Raw Markdown of the section, lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

fn is_heading(line: &str) -> bool {
    line.starts_with('#')
}

/// Split Markdown into sections.
///
/// Content before the first heading forms its own first section, and a
/// document without headings is a single section. Always returns at least
/// one section.
pub fn split_sections(markdown: &str) -> Vec<Section<'_>> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.split('\n') {
        if is_heading(line) {
            if !current.is_empty() {
                sections.push(Section { lines: current });
            }
            current = vec![line];
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        sections.push(Section { lines: current });
    }

    sections
}
