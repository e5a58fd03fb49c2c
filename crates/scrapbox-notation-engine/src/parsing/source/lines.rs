use super::span::Span;

/// A reference to a single line of the input with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    /// Byte span of this line in the input, excluding the `\n` terminator.
    pub span: Span,
    /// The line text with every `\r` removed.
    pub text: String,
}

impl LineRef {
    pub fn new(span: Span, raw: &str) -> Self {
        Self {
            span,
            text: strip_carriage_returns(raw),
        }
    }
}

/// Returns an iterator over the `\n`-delimited lines of `input`.
///
/// Follows `str::split` semantics: an empty input yields one empty line and a
/// trailing `\n` yields a trailing empty line.
pub fn lines_with_spans(input: &str) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    input.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        LineRef::new(Span::new(start, start + raw.len()), raw)
    })
}

fn strip_carriage_returns(raw: &str) -> String {
    if raw.contains('\r') {
        raw.replace('\r', "")
    } else {
        raw.to_string()
    }
}
