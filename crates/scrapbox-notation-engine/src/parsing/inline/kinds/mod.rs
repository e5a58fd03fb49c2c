//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bracket`**: style characters, `.icon`
//! - **`Url`**: `http://` and `https://` schemes and the bytes that end a URL
//! - **`Hashtag`**: `#`
//!
//! ## Design Principle
//!
//! Delimiter constants live here. The grammar builds its patterns from them.

pub mod bracket;
pub mod hashtag;
pub mod url;

pub use bracket::Bracket;
pub use hashtag::Hashtag;
pub use url::Url;
