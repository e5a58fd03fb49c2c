use std::fmt::Write;

use crate::parsing::Document;

/// Renders `doc` as an indented tree: one header per line, one indented entry
/// per token.
///
/// ```text
/// code_block indent=1
///   text "main.rs"
/// ```
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    for line in &doc.lines {
        let _ = writeln!(out, "{} indent={}", line.kind, line.indent);
        for token in &line.children {
            let _ = writeln!(out, "  {} {:?}", token.kind, token.text);
        }
    }
    out
}
