use crate::parsing::source::{lines::LineRef, span::Span};

use super::{
    indent::scan_indent,
    kinds::{CodeBlock, QuotedText, TableBlock},
    types::LineKind,
};

/// Line prefix recorded by the scanner and classifier.
///
/// These are bookkeeping only: the assembler folds them into `LineNode`
/// attributes and they never become tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// The leading whitespace run (an empty span when the line has none).
    Indent(Span),
    /// The block marker following the indentation.
    Marker { kind: LineKind, span: Span },
}

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently without reference to surrounding
/// lines.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Byte span of this line in the whole input.
    pub line: Span,
    /// Line text with carriage returns removed. All spans below index into it.
    pub text: String,
    /// Indent first, then the block marker when there is one.
    pub prefix: Vec<Prefix>,
    /// Line-relative span of the content left for the inline tokenizer.
    pub content: Span,
}

impl LineClass {
    pub fn content_text(&self) -> &str {
        self.content.slice(&self.text).unwrap_or("")
    }
}

/// Classifies individual lines: indentation first, then the block marker.
pub struct NotationLineClassifier;

impl NotationLineClassifier {
    /// Classifies a line into a [`LineClass`].
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let text = lr.text.as_str();
        let (indent, rest) = scan_indent(text);
        let (kind, content) = classify_block(rest);
        let marker_len = rest.len() - content.len();

        let mut prefix = vec![Prefix::Indent(Span::new(0, indent))];
        if kind != LineKind::PlainText {
            prefix.push(Prefix::Marker {
                kind,
                span: Span::new(indent, indent + marker_len),
            });
        }

        LineClass {
            line: lr.span,
            text: lr.text.clone(),
            prefix,
            content: Span::new(indent + marker_len, text.len()),
        }
    }
}

/// Decides the block kind from the indentation-stripped remainder.
///
/// Markers are checked in a fixed order and the first match wins. Returns the
/// kind and the content after the marker; `PlainText` keeps the whole
/// remainder.
pub fn classify_block(remainder: &str) -> (LineKind, &str) {
    if let Some(rest) = QuotedText::strip_marker(remainder) {
        (LineKind::QuotedText, rest)
    } else if let Some(rest) = CodeBlock::strip_marker(remainder) {
        (LineKind::CodeBlock, rest)
    } else if let Some(rest) = TableBlock::strip_marker(remainder) {
        (LineKind::TableBlock, rest)
    } else {
        (LineKind::PlainText, remainder)
    }
}
