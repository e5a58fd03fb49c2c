//! # Block Parsing
//!
//! Per-line block classification. No state is carried from one line to the
//! next, so any line can be parsed on its own.
//!
//! ## Parsing Phases
//!
//! 1. **Indentation** (`indent`): the leading run of spaces and tabs is measured
//! 2. **Line Classification** (`classify`): the marker after the indentation
//!    (`>`, `code:`, `table:`) decides the `LineKind`
//! 3. **Line Assembly** (`builder`): a `LineAssembler` folds the prefix into
//!    attributes and tokenizes the rest of the line into children
//!
//! ## Key Invariants
//!
//! - Indentation and markers are attributes, never tokens
//! - Marker precedence is fixed: quote, then code, then table, then plain
//! - Indentation plus marker plus the text of every child reproduces the line

pub mod builder;
pub mod classify;
pub mod indent;
pub mod kinds;
pub mod types;

pub use builder::LineAssembler;
pub use classify::{LineClass, NotationLineClassifier, Prefix, classify_block};
pub use indent::scan_indent;
pub use types::{LineKind, LineNode};
