use mindmap_model::{Edge, Mindmap, Node};
use mindmap_outline::{derive_mindmap, derive_outline, DeriveOptions, Outline, OutlineEntry};

struct Context {
    buffer: String,
}

impl Context {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        self.add(text);
        self.add("\n");
    }

    /// Output with surrounding whitespace trimmed
    fn get_output(self) -> String {
        self.buffer.trim().to_string()
    }
}

/// Compile an outline to Markdown.
///
/// Each entry becomes `#`×depth, the numbering, the raw node text and a
/// blank line. Heading levels are not capped.
pub fn compile_to_markdown(outline: &Outline) -> String {
    let mut ctx = Context::new();

    for entry in outline {
        compile_entry(entry, &mut ctx);
    }

    ctx.get_output()
}

fn compile_entry(entry: &OutlineEntry, ctx: &mut Context) {
    let heading = "#".repeat(entry.depth());
    ctx.add_line(&format!("{} {}", heading, entry.numbering));
    ctx.add_line(&entry.text);
    ctx.add("\n");
}

/// Derive and compile in one step
pub fn export_markdown(nodes: &[Node], edges: &[Edge], options: &DeriveOptions) -> String {
    compile_to_markdown(&derive_outline(nodes, edges, options))
}

pub fn export_mindmap(map: &Mindmap, options: &DeriveOptions) -> String {
    compile_to_markdown(&derive_mindmap(map, options))
}
