use log::trace;

use crate::parsing::source::span::Span;

use super::{
    cursor::Cursor,
    grammar::Grammar,
    types::{Token, TokenKind},
};

/// Tokenizes the content remainder of one line.
///
/// # Arguments
/// - `grammar`: the ordered rule table
/// - `base`: byte offset of `s` within its line (for line-relative spans)
/// - `s`: the content after indentation and block marker
///
/// # Returns
/// Tokens covering `s` exactly, in source order. Input no rule recognizes is
/// emitted as [`TokenKind::Text`]; an empty `s` yields no tokens. Each token
/// start is located with one search, so time stays linear in the line length.
pub fn parse_inline(grammar: &Grammar, base: usize, s: &str) -> Vec<Token> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];

    while !cur.eof() {
        let Some((at, rule, len)) = grammar.find_token(cur.rest()) else {
            let rest = cur.rest().len();
            push(&mut out, &mut cur, TokenKind::Text, rest);
            break;
        };
        if at > 0 {
            push(&mut out, &mut cur, TokenKind::Text, at);
        }
        trace!("rule {} matched at {}+{len}", rule.name(), cur.pos());
        push(&mut out, &mut cur, rule.kind(), len);
    }

    out
}

fn push(out: &mut Vec<Token>, cur: &mut Cursor<'_>, kind: TokenKind, len: usize) {
    let start = cur.pos();
    let text = cur.bump_n(len);
    out.push(Token::new(kind, text, Span::new(start, cur.pos())));
}
