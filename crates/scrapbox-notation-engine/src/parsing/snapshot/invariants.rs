use crate::parsing::Document;

/// Validates parser output invariants.
///
/// Asserts that, for every line:
/// - Indentation, marker and the concatenated token texts reproduce `source`
/// - Token spans are non-empty, contiguous and start at the content offset
/// - Each token span slices `source` to exactly the token's text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for (n, line) in doc.lines.iter().enumerate() {
        let offset = line.content_offset();
        assert!(
            offset <= line.source.len(),
            "line {n}: content offset {offset} beyond source {:?}",
            line.source
        );
        assert!(
            line.indent_text().chars().all(|c| c == ' ' || c == '\t'),
            "line {n}: indent {} covers non-whitespace in {:?}",
            line.indent,
            line.source
        );
        assert_eq!(
            line.source.get(line.indent..offset),
            Some(line.kind.marker()),
            "line {n}: marker for {} missing in {:?}",
            line.kind,
            line.source
        );

        let mut pos = offset;
        for token in &line.children {
            assert!(
                !token.span.is_empty(),
                "line {n}: empty token {token:?}"
            );
            assert_eq!(
                token.span.start, pos,
                "line {n}: gap or overlap before {token:?}"
            );
            assert_eq!(
                token.span.slice(&line.source),
                Some(token.text.as_str()),
                "line {n}: span of {token:?} does not match its text"
            );
            pos = token.span.end;
        }
        assert_eq!(
            pos,
            line.source.len(),
            "line {n}: tokens stop short of the end of {:?}",
            line.source
        );
    }
}
