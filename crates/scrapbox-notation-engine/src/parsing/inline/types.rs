use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parsing::source::span::Span;

/// The kind of an inline token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Any bracketed form: internal, external, labeled, icon, styled, math.
    Link,
    /// A bare image URL.
    Image,
    /// A bare web URL.
    Url,
    /// `#tag` or `#[tag with spaces]`.
    Tag,
    /// `[[bold]]`, including `[[image]]`.
    BoldText,
    /// Residual text between structured tokens.
    Text,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Link => "link",
            TokenKind::Image => "image",
            TokenKind::Url => "url",
            TokenKind::Tag => "tag",
            TokenKind::BoldText => "bold",
            TokenKind::Text => "text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed inline token with its source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source text of the token, delimiters included.
    pub text: String,
    /// Byte span of the token within its line.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}
