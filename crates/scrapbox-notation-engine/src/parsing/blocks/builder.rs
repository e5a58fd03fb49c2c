use log::trace;

use crate::parsing::inline::{Grammar, parse_inline};

use super::{
    classify::{LineClass, Prefix},
    types::{LineKind, LineNode},
};

/// Builds one [`LineNode`] per classified line.
///
/// The assembler consumes the classifier's [`Prefix`] records and turns them
/// into the node's `indent` and `kind`; only the inline tokenizer contributes
/// children.
pub struct LineAssembler<'g> {
    grammar: &'g Grammar,
}

impl<'g> LineAssembler<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    pub fn assemble(&self, class: LineClass) -> LineNode {
        let children = parse_inline(self.grammar, class.content.start, class.content_text());
        trace!(
            "input {}..{}: {} tokens",
            class.line.start,
            class.line.end,
            children.len()
        );

        let LineClass { text, prefix, .. } = class;
        let mut indent = 0;
        let mut kind = LineKind::PlainText;
        for p in prefix {
            match p {
                Prefix::Indent(span) => indent = span.len(),
                Prefix::Marker { kind: k, .. } => kind = k,
            }
        }

        LineNode {
            kind,
            indent,
            children,
            source: text,
        }
    }
}
