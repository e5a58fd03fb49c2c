/// Quoted text block type with owned marker constant.
///
/// All quote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct QuotedText;

impl QuotedText {
    /// The quote marker, directly after the indentation.
    pub const MARKER: &'static str = ">";

    /// Strips the quote marker, returning the remainder of the line.
    ///
    /// Only a single marker is consumed: `>>text` leaves `>text` as content.
    pub fn strip_marker(remainder: &str) -> Option<&str> {
        remainder.strip_prefix(Self::MARKER)
    }
}
