/// `table:` directive. The rest of the line is the table name.
pub struct TableBlock;

impl TableBlock {
    pub const MARKER: &'static str = "table:";

    pub fn strip_marker(remainder: &str) -> Option<&str> {
        remainder.strip_prefix(Self::MARKER)
    }
}
