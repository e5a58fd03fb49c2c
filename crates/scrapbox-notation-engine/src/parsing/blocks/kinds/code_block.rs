/// `code:` directive. The rest of the line is the file name or language.
pub struct CodeBlock;

impl CodeBlock {
    pub const MARKER: &'static str = "code:";

    pub fn strip_marker(remainder: &str) -> Option<&str> {
        remainder.strip_prefix(Self::MARKER)
    }
}
