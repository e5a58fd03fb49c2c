//! # External Links
//!
//! Collects the web addresses a parsed page points at: bare URLs and every
//! `http://` / `https://` run inside bracket links. Images are left out, as
//! are URLs that mention one of the filter's excluded extensions.

use serde::{Deserialize, Serialize};

use crate::parsing::{
    Document,
    inline::{Token, TokenKind, kinds::Url},
};

/// Which URLs [`external_links_with`] drops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkFilter {
    /// A URL containing any of these is skipped.
    pub excluded_extensions: Vec<String>,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            excluded_extensions: [".png", ".gif", ".jpg", ".jpeg", ".svg"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl LinkFilter {
    pub fn allows(&self, url: &str) -> bool {
        !self
            .excluded_extensions
            .iter()
            .any(|ext| !ext.is_empty() && url.contains(ext.as_str()))
    }
}

/// External links of `doc` with the default filter.
pub fn external_links(doc: &Document) -> Vec<String> {
    external_links_with(doc, &LinkFilter::default())
}

/// External links of `doc` in document order. Duplicates are kept.
pub fn external_links_with(doc: &Document, filter: &LinkFilter) -> Vec<String> {
    doc.tokens()
        .flat_map(urls_in)
        .filter(|url| filter.allows(url))
        .map(str::to_string)
        .collect()
}

fn urls_in(token: &Token) -> Vec<&str> {
    match token.kind {
        TokenKind::Url => vec![token.text.as_str()],
        TokenKind::Link => {
            let mut out = vec![];
            let mut rest = token.text.as_str();
            while let Some(at) = Url::find_scheme(rest) {
                let tail = &rest[at..];
                let end = tail
                    .find(|c: char| c.is_whitespace() || c == ']')
                    .unwrap_or(tail.len());
                out.push(&tail[..end]);
                rest = &tail[end..];
            }
            out
        }
        _ => vec![],
    }
}
