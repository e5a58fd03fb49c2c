//! # Parsing
//!
//! Turns notation text into a [`Document`]: one [`LineNode`] per input line,
//! each carrying its indentation, block kind and inline tokens.
//!
//! Lines are independent. A line is split off the input, scanned for
//! indentation, classified by its marker, and its remainder is tokenized with
//! an explicit [`Grammar`]. Parsing never fails; input no rule recognizes
//! ends up as `Text` tokens.

pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod source;

#[cfg(test)]
mod tests;

use std::fmt;

use log::{debug, log_enabled, trace};
use serde::{Deserialize, Serialize};

use blocks::{LineAssembler, LineNode, NotationLineClassifier};
use inline::{Grammar, Token};
use source::{LineRef, lines_with_spans};

/// The parse result: every input line, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub lines: Vec<LineNode>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All tokens of the document in reading order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.lines.iter().flat_map(|line| line.children.iter())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&snapshot::render(self))
    }
}

/// Parses `input` with the built-in grammar.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn parse(input: &[u8]) -> Document {
    parse_with(Grammar::shared(), input)
}

/// Parses already-decoded text with the built-in grammar.
pub fn parse_str(input: &str) -> Document {
    parse_text(Grammar::shared(), input)
}

/// Parses `input` with an explicit grammar.
pub fn parse_with(grammar: &Grammar, input: &[u8]) -> Document {
    parse_text(grammar, &String::from_utf8_lossy(input))
}

/// Parses a list of raw lines as delivered by the host service.
///
/// Equivalent to joining the lines with `\n` and parsing once, except that an
/// empty list gives an empty document. A line that itself contains `\n` is
/// split further.
pub fn parse_lines<I, S>(grammar: &Grammar, lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let assembler = LineAssembler::new(grammar);
    let mut out = Vec::new();
    for line in lines {
        for lr in lines_with_spans(line.as_ref()) {
            out.push(assemble_line(&assembler, &lr));
        }
    }
    finish(out)
}

/// Parses `input` with lines tokenized on the rayon thread pool.
///
/// The result is identical to [`parse_with`]; line order is preserved.
#[cfg(feature = "parallel")]
pub fn parse_parallel(grammar: &Grammar, input: &[u8]) -> Document {
    use rayon::prelude::*;

    let text = String::from_utf8_lossy(input);
    let assembler = LineAssembler::new(grammar);
    let refs: Vec<LineRef> = lines_with_spans(&text).collect();
    let lines = refs
        .par_iter()
        .map(|lr| assemble_line(&assembler, lr))
        .collect();
    finish(lines)
}

fn parse_text(grammar: &Grammar, text: &str) -> Document {
    let assembler = LineAssembler::new(grammar);
    let lines = lines_with_spans(text)
        .map(|lr| assemble_line(&assembler, &lr))
        .collect();
    finish(lines)
}

fn assemble_line(assembler: &LineAssembler<'_>, lr: &LineRef) -> LineNode {
    assembler.assemble(NotationLineClassifier.classify(lr))
}

fn finish(lines: Vec<LineNode>) -> Document {
    let doc = Document { lines };
    debug!(
        "parsed {} lines into {} tokens",
        doc.len(),
        doc.tokens().count()
    );
    if log_enabled!(log::Level::Trace) {
        trace!("document tree:\n{doc}");
    }
    doc
}
