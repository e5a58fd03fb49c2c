use serde::{Deserialize, Serialize};

use crate::{
    links::{LinkFilter, external_links_with},
    parsing::{Document, inline::Grammar, parse_lines},
};

/// A page as delivered by the host service: a title and its raw lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<PageLine>,
    /// Titles of the pages this one links to, as reported by the service.
    #[serde(default)]
    pub links: Vec<String>,
}

/// One raw line of a [`Page`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLine {
    pub text: String,
}

impl Page {
    /// The raw text of each line, in order.
    pub fn line_texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Parses the page body.
    pub fn document(&self, grammar: &Grammar) -> Document {
        parse_lines(grammar, self.line_texts())
    }

    pub fn external_links(&self, grammar: &Grammar, filter: &LinkFilter) -> Vec<String> {
        external_links_with(&self.document(grammar), filter)
    }
}
