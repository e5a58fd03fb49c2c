/// Characters that make up a line's indentation. Each counts as one level.
pub const INDENT_CHARS: [u8; 2] = [b' ', b'\t'];

/// Consumes the maximal leading run of spaces and tabs.
///
/// Returns `(indent, remainder)`. A line without leading whitespace has an
/// indent of 0. Never fails.
pub fn scan_indent(line: &str) -> (usize, &str) {
    let n = line
        .bytes()
        .take_while(|b| INDENT_CHARS.contains(b))
        .count();
    // every indent char is a single ASCII byte, so `n` is a char boundary
    (n, &line[n..])
}
