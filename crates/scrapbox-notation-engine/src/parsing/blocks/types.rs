use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parsing::inline::Token;

use super::kinds::{CodeBlock, QuotedText, TableBlock};

/// The block classification of a single line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// No block marker (default when nothing else matches).
    #[default]
    PlainText,
    /// `>` quote.
    QuotedText,
    /// `code:` directive.
    CodeBlock,
    /// `table:` directive.
    TableBlock,
}

impl LineKind {
    /// The literal marker that introduces this kind of line, after indentation.
    pub fn marker(self) -> &'static str {
        match self {
            LineKind::PlainText => "",
            LineKind::QuotedText => QuotedText::MARKER,
            LineKind::CodeBlock => CodeBlock::MARKER,
            LineKind::TableBlock => TableBlock::MARKER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::PlainText => "plain_text",
            LineKind::QuotedText => "quoted_text",
            LineKind::CodeBlock => "code_block",
            LineKind::TableBlock => "table_block",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed source line.
///
/// Indentation and the block marker are attributes of the node; they never
/// appear among `children`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineNode {
    /// Block classification of the line.
    pub kind: LineKind,
    /// Number of leading spaces/tabs (each counts as one).
    pub indent: usize,
    /// Inline tokens of the content, in reading order.
    pub children: Vec<Token>,
    /// The line text with carriage returns removed. Token spans index into it.
    pub source: String,
}

impl LineNode {
    /// Byte offset in `source` where the tokenized content begins.
    pub fn content_offset(&self) -> usize {
        self.indent + self.kind.marker().len()
    }

    /// The content after indentation and marker.
    pub fn content(&self) -> &str {
        self.source.get(self.content_offset()..).unwrap_or("")
    }

    /// The raw indentation characters.
    pub fn indent_text(&self) -> &str {
        self.source.get(..self.indent).unwrap_or("")
    }
}
