//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`render`**: Renders a `Document` as a stable, indented tree dump used by
//!   `insta` snapshots and by `Display for Document`
//! - **`invariants`**: Runtime checks for parser correctness (lossless lines,
//!   contiguous token spans, no prefix leaking into tokens)
//!
//! ## Testing Strategy
//!
//! Parsing behavior is pinned by snapshots of the tree dump rather than a
//! separate formal grammar. Every snapshot test also runs the invariant checks.

pub mod invariants;
pub mod render;

pub use invariants::check as invariants;
pub use render::render;
