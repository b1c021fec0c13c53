use listmark::{Config, DocumentStateStore, Payload, RenderingInstruction};

pub fn annotate(text: &str) -> Vec<RenderingInstruction> {
    annotate_with(text, None, &Config::default())
}

pub fn annotate_at(text: &str, cursor: usize) -> Vec<RenderingInstruction> {
    annotate_with(text, Some(cursor), &Config::default())
}

pub fn annotate_with(
    text: &str,
    cursor: Option<usize>,
    config: &Config,
) -> Vec<RenderingInstruction> {
    let mut store = DocumentStateStore::new();
    listmark::process(&mut store, "test.md", text, cursor, config)
}

/// Text as displayed once every replacement is applied.
pub fn render(text: &str, instructions: &[RenderingInstruction]) -> String {
    let mut out = String::new();
    let mut pos = 0;
    for instruction in instructions {
        let Payload::Replace(widget) = &instruction.payload else {
            continue;
        };
        if instruction.from < pos {
            continue;
        }
        out.push_str(&text[pos..instruction.from]);
        out.push_str(&widget.display_text());
        pos = instruction.to;
    }
    out.push_str(&text[pos..]);
    out
}

pub fn rendered(text: &str) -> String {
    render(text, &annotate(text))
}

pub fn rendered_at(text: &str, cursor: usize) -> String {
    render(text, &annotate_at(text, cursor))
}
