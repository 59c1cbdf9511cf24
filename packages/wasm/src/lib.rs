use mindmap_compiler_markdown::{
    compile_to_markdown, render_html, render_sections_html, split_sections,
};
use mindmap_model::Mindmap;
use mindmap_outline::{derive_mindmap, DeriveOptions};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct ExportResult {
    markdown: String,
    outline: String,
}

#[wasm_bindgen]
impl ExportResult {
    #[wasm_bindgen(getter)]
    pub fn markdown(&self) -> String {
        self.markdown.clone()
    }

    /// Outline with root/truncation diagnostics, as JSON
    #[wasm_bindgen(getter)]
    pub fn outline(&self) -> String {
        self.outline.clone()
    }
}

fn parse_mindmap(json: &str) -> Result<Mindmap, JsValue> {
    Mindmap::from_json(json).map_err(|e| JsValue::from_str(&format!("Invalid mindmap: {}", e)))
}

fn options(max_depth: Option<usize>) -> DeriveOptions {
    max_depth
        .map(DeriveOptions::with_max_depth)
        .unwrap_or_default()
}

/// Export a mindmap document (JSON) to Markdown
#[wasm_bindgen(js_name = exportMarkdown)]
pub fn export_markdown_js(json: &str, max_depth: Option<usize>) -> Result<ExportResult, JsValue> {
    let map = parse_mindmap(json)?;
    let outline = derive_mindmap(&map, &options(max_depth));

    let markdown = compile_to_markdown(&outline);
    let outline = serde_json::to_string(&outline)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))?;

    Ok(ExportResult { markdown, outline })
}

/// Derive the numbered outline of a mindmap document and return it as JSON
#[wasm_bindgen(js_name = deriveOutline)]
pub fn derive_outline_js(json: &str, max_depth: Option<usize>) -> Result<String, JsValue> {
    let map = parse_mindmap(json)?;
    let outline = derive_mindmap(&map, &options(max_depth));

    serde_json::to_string(&outline)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Split Markdown into sections; returns a JSON array of raw section texts
#[wasm_bindgen(js_name = splitSections)]
pub fn split_sections_js(markdown: &str) -> String {
    let texts: Vec<String> = split_sections(markdown).iter().map(|s| s.text()).collect();
    serde_json::to_string(&texts).unwrap_or_else(|_| "[]".to_string())
}

/// Render Markdown to an HTML fragment for display
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html_js(markdown: &str) -> String {
    render_html(markdown)
}

/// Sections with raw Markdown and rendered HTML, as JSON, for copy mode
#[wasm_bindgen(js_name = renderSections)]
pub fn render_sections_js(markdown: &str) -> String {
    serde_json::to_string(&render_sections_html(markdown)).unwrap_or_else(|_| "[]".to_string())
}
