//! # Mindmap Markdown Compiler
//!
//! Serializes a numbered outline into heading-structured Markdown, splits
//! that Markdown back into copyable sections, and renders it to HTML for
//! display.
//!
//! ```text
//! # 1
//! Root text
//!
//! ## 1.1
//! Child text
//! ```

mod compiler;
mod html;
mod sections;


pub use compiler::{compile_to_markdown, export_markdown, export_mindmap};
pub use html::{render_html, render_page, render_sections_html, RenderedSection};
pub use sections::{split_sections, Section};
