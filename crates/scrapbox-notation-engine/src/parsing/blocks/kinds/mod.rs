//! # Block Kinds
//!
//! Block-specific types that own their line markers. The classifier asks these
//! types; it never hardcodes `>`, `code:` or `table:`.

pub mod code_block;
pub mod quoted_text;
pub mod table_block;

pub use code_block::CodeBlock;
pub use quoted_text::QuotedText;
pub use table_block::TableBlock;
