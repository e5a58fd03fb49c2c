pub mod links;
pub mod models;
pub mod parsing;


// Re-export key types for easier usage
pub use links::{LinkFilter, external_links, external_links_with};
pub use models::{Page, PageLine};
#[cfg(feature = "parallel")]
pub use parsing::parse_parallel;
pub use parsing::{
    Document, parse, parse_lines, parse_str, parse_with,
    blocks::{LineKind, LineNode},
    inline::{Grammar, GrammarError, GrammarOptions, Token, TokenKind},
    source::Span,
};
