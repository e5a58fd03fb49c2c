//! End-to-end tests for the parsing module.
//!
//! Table-driven with `rstest`: each case is one source string and what the
//! parser must make of it.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    Document,
    blocks::LineKind,
    inline::{Grammar, GrammarOptions, TokenKind},
    parse, parse_lines, parse_str, parse_with, snapshot,
};

fn parsed(source: &str) -> Document {
    crate::tests::init_logging();
    let doc = parse_str(source);
    snapshot::invariants(&doc);
    doc
}

#[rstest]
#[case::space(" ", 1)]
#[case::tab("\t", 1)]
#[case::mixed(" \t ", 3)]
#[case::tab_first("\t \t", 3)]
fn indent_level(#[case] source: &str, #[case] indent: usize) {
    let doc = parsed(source);
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.lines[0].kind, LineKind::PlainText);
    assert_eq!(doc.lines[0].indent, indent);
    assert!(doc.lines[0].children.is_empty());
}

#[rstest]
#[case::math("[$ 1+2 = 3]", TokenKind::Link)]
#[case::styled_url(
    "[_-/*/-_ https://avatars1.githubusercontent.com/u/1678258#.png]",
    TokenKind::Link
)]
#[case::styled_text("[_-/*/-_ github.com/ohtomi/scrapbox]", TokenKind::Link)]
#[case::project_link("[/foo/bar/baz]", TokenKind::Link)]
#[case::image_url_link(
    "[https://avatars1.githubusercontent.com/u/1678258#.png https://avatars1.githubusercontent.com/u/1678258]",
    TokenKind::Link
)]
#[case::url_image_link(
    "[https://avatars1.githubusercontent.com/u/1678258 https://avatars1.githubusercontent.com/u/1678258#.png]",
    TokenKind::Link
)]
#[case::labeled_link(
    "[avatar https://avatars1.githubusercontent.com/u/1678258]",
    TokenKind::Link
)]
#[case::url_labeled_link(
    "[https://avatars1.githubusercontent.com/u/1678258 avatar]",
    TokenKind::Link
)]
#[case::external_link("[https://avatars1.githubusercontent.com/u/1678258]", TokenKind::Link)]
#[case::icon("[ user.icon]", TokenKind::Link)]
#[case::internal_link("[github.com/ohtomi/scrapbox]", TokenKind::Link)]
#[case::image_png("http://avatars1.githubusercontent.com/u/1678258#.png", TokenKind::Image)]
#[case::image_gif("http://avatars1.githubusercontent.com/u/1678258#.gif", TokenKind::Image)]
#[case::image_jpg("https://avatars1.githubusercontent.com/u/1678258#.jpg", TokenKind::Image)]
#[case::image_jpeg("https://avatars1.githubusercontent.com/u/1678258#.jpeg", TokenKind::Image)]
#[case::image_host("https://gyazo.com/1678258/avatar", TokenKind::Image)]
#[case::url_http("http://avatars1.githubusercontent.com/u/1678258", TokenKind::Url)]
#[case::url_https("https://avatars1.githubusercontent.com/u/1678258", TokenKind::Url)]
#[case::bold_image(
    "[[http://avatars1.githubusercontent.com/u/1678258#.png]]",
    TokenKind::BoldText
)]
#[case::bold_text("[[github.com/ohtomi/scrapbox]]", TokenKind::BoldText)]
#[case::bold_with_tabs("[[ github.com\t/ohtomi/\tscrapbox ]]", TokenKind::BoldText)]
#[case::bracket_tag("#[github.com/ohtomi/scrapbox/]", TokenKind::Tag)]
#[case::bracket_tag_with_tabs("#[ github.com\t/ohtomi/\tscrapbox/ ]", TokenKind::Tag)]
#[case::tag("#github.com/ohtomi/scrapbox", TokenKind::Tag)]
#[case::text("x github.com\t/ohtomi/\tscrapbox/ x", TokenKind::Text)]
fn single_token_line(#[case] source: &str, #[case] kind: TokenKind) {
    let doc = parsed(source);
    assert_eq!(doc.len(), 1);
    let line = &doc.lines[0];
    assert_eq!(line.kind, LineKind::PlainText);
    assert_eq!(line.children.len(), 1, "children of {source:?}");
    assert_eq!(line.children[0].kind, kind);
    assert_eq!(line.children[0].text, source);
}

#[rstest]
#[case::quoted(
    ">https://avatars1.githubusercontent.com/u/1678258",
    LineKind::QuotedText,
    TokenKind::Url,
    "https://avatars1.githubusercontent.com/u/1678258"
)]
#[case::code("code:sample.js", LineKind::CodeBlock, TokenKind::Text, "sample.js")]
#[case::table("table:sample", LineKind::TableBlock, TokenKind::Text, "sample")]
fn directive_lines(
    #[case] body: &str,
    #[case] line_kind: LineKind,
    #[case] token_kind: TokenKind,
    #[case] content: &str,
    #[values("", "   ", "\t\t\t")] indent: &str,
) {
    let doc = parsed(&format!("{indent}{body}"));
    assert_eq!(doc.len(), 1);
    let line = &doc.lines[0];
    assert_eq!(line.kind, line_kind);
    assert_eq!(line.indent, indent.len());
    assert_eq!(line.children.len(), 1);
    assert_eq!(line.children[0].kind, token_kind);
    assert_eq!(line.children[0].text, content);
}

#[test]
fn quoted_lines_keep_their_own_indent() {
    let doc = parsed(
        ">https://avatars1.githubusercontent.com/u/1678258#1\n   >https://avatars1.githubusercontent.com/u/1678258#2\n\t\t\t>https://avatars1.githubusercontent.com/u/1678258#3",
    );
    let indents: Vec<_> = doc.lines.iter().map(|l| l.indent).collect();
    assert_eq!(indents, vec![0, 3, 3]);
    for (i, line) in doc.lines.iter().enumerate() {
        assert_eq!(line.kind, LineKind::QuotedText);
        assert_eq!(line.children.len(), 1);
        assert_eq!(line.children[0].kind, TokenKind::Url);
        assert_eq!(
            line.children[0].text,
            format!("https://avatars1.githubusercontent.com/u/1678258#{}", i + 1)
        );
    }
}

#[test]
fn empty_input_is_one_empty_line() {
    let doc = parsed("");
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.lines[0].kind, LineKind::PlainText);
    assert_eq!(doc.lines[0].indent, 0);
    assert!(doc.lines[0].children.is_empty());
}

#[test]
fn trailing_newline_adds_a_line() {
    assert_eq!(parsed("a\n").len(), 2);
    assert_eq!(parsed("a\nb").len(), 2);
}

#[test]
fn carriage_returns_are_dropped() {
    let doc = parsed("[a]\r\nb\r");
    assert_eq!(doc.lines[0].source, "[a]");
    assert_eq!(doc.lines[0].children[0].kind, TokenKind::Link);
    assert_eq!(doc.lines[1].source, "b");
}

#[test]
fn bare_markers_have_no_children() {
    let doc = parsed("code:\ntable:\n>");
    let kinds: Vec<_> = doc.lines.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![LineKind::CodeBlock, LineKind::TableBlock, LineKind::QuotedText]
    );
    assert!(doc.tokens().next().is_none());
}

#[test]
fn marker_only_counts_after_indentation() {
    let doc = parsed("x >y\nx code:y");
    assert!(doc.lines.iter().all(|l| l.kind == LineKind::PlainText));
}

#[test]
fn invalid_utf8_is_replaced() {
    let doc = parse(b"[a]\xff\xfe tail");
    snapshot::invariants(&doc);
    assert_eq!(doc.lines[0].children[0].text, "[a]");
    assert_eq!(doc.lines[0].children[1].text, "\u{FFFD}\u{FFFD} tail");
}

#[test]
fn unrecognized_input_degrades_to_text() {
    let doc = parsed("[unclosed and # then [[");
    assert!(doc.tokens().all(|t| t.kind == TokenKind::Text));
}

#[test]
fn lines_parse_like_joined_text() {
    let lines = ["title", " [link] #tag", "code:a.rs", ""];
    let joined = lines.join("\n");
    assert_eq!(parse_lines(Grammar::shared(), lines), parsed(&joined));
}

#[test]
fn empty_line_list_is_empty_document() {
    let doc = parse_lines(Grammar::shared(), Vec::<String>::new());
    assert!(doc.is_empty());
}

#[test]
fn grammar_options_change_image_detection() {
    let grammar = Grammar::new(&GrammarOptions {
        image_hosts: vec![],
        image_extensions: vec![".svg".to_string()],
    })
    .unwrap();
    let doc = parse_with(&grammar, b"https://a.com/x.svg https://gyazo.com/abc");
    let kinds: Vec<_> = doc.tokens().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Image, TokenKind::Text, TokenKind::Url]
    );
}

#[test]
fn display_dumps_the_tree() {
    let doc = parsed("  code:main.rs\n[[bold]] #tag");
    insta::assert_snapshot!(doc.to_string(), @r##"
    code_block indent=2
      text "main.rs"
    plain_text indent=0
      bold "[[bold]]"
      text " "
      tag "#tag"
    "##);
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_parse_matches_sequential() {
    let input = "a [b]\n  >c #d\ncode:e\n".repeat(50);
    assert_eq!(
        crate::parsing::parse_parallel(Grammar::shared(), input.as_bytes()),
        parse_with(Grammar::shared(), input.as_bytes())
    );
}
