//! # Inline Parsing
//!
//! Ordered-choice tokenizing of a line's content remainder.
//!
//! ## Architecture
//!
//! Inline parsing runs after block classification, over the content that is
//! left once indentation and any block marker are stripped. It never sees a
//! line break.
//!
//! At each cursor position the [`Grammar`] is consulted rule by rule; the
//! first rule that matches produces a token and the cursor moves past it.
//! When nothing matches, a residual `Text` token runs up to the next position
//! where some rule does match.
//!
//! ## Modules
//!
//! - **`types`**: `Token`, `TokenKind`
//! - **`kinds`**: Inline delimiters (brackets, url schemes, hashtag)
//! - **`grammar`**: The ordered rule table and its options
//! - **`cursor`**: `Cursor` with line-relative position tracking
//! - **`parser`**: `parse_inline()` main loop
//!
//! ## Precedence
//!
//! Order beats length: `[https://a.com/x.png https://a.com]` is an
//! image-then-url link, never a labeled link, because rule 5 is tried first.

pub mod cursor;
pub mod grammar;
pub mod kinds;
pub mod parser;
pub mod types;

pub use grammar::{Boundary, Grammar, GrammarError, GrammarOptions, Rule};
pub use parser::parse_inline;
pub use types::{Token, TokenKind};
