//! Ordered inline grammar.
//!
//! The grammar is a table of rules tried top to bottom at the cursor; the
//! first rule that matches there wins, even when a later rule would match a
//! longer span. More specific bracket forms are therefore listed before the
//! general ones that would shadow them:
//!
//! 1. math `[$ ...]`
//! 2. styled url `[* https://...]`
//! 3. styled text `[* text]`
//! 4. project link `[/project/page]`
//! 5. image-then-url link `[image url]`
//! 6. url-then-image link `[url image]`
//! 7. labeled link `[text url]`
//! 8. url-labeled link `[url text]`
//! 9. external link `[url]`
//! 10. page icon `[/project/page.icon]`
//! 11. icon `[name.icon]`
//! 12. internal link `[text]`
//! 13. bare image url
//! 14. bare url
//! 15. bold image `[[image]]`
//! 16. bold text `[[text]]`
//! 17. hashtag `#[text]` / `#text`
//!
//! Anything else is residual text, handled by the tokenizer.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
    kinds::{Bracket, Hashtag, Url},
    types::TokenKind,
};

static DEFAULT_GRAMMAR: Lazy<Grammar> = Lazy::new(|| {
    Grammar::new(&GrammarOptions::default()).expect("built-in grammar patterns compile")
});

/// URL body inside brackets: stops at whitespace or the closing bracket.
const BRACKET_URL_CHAR: &str = r"[^ \t\n\]]";
/// Bare URL body: stops at whitespace.
const BARE_URL_CHAR: &str = r"[^ \t\n]";
const WS: &str = r"[ \t]+";

/// Tunable parts of the grammar: what counts as an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarOptions {
    /// URL prefixes whose links are always images, e.g. `https://gyazo.com/`.
    pub image_hosts: Vec<String>,
    /// URL suffixes that mark an image, e.g. `.png`.
    pub image_extensions: Vec<String>,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            image_hosts: vec!["https://gyazo.com/".to_string()],
            image_extensions: [".png", ".gif", ".jpg", ".jpeg"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: &'static str,
        source: regex::Error,
    },
}

/// What must follow a match for the rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Any continuation.
    Any,
    /// Whitespace or the end of the content.
    Whitespace,
}

/// One entry of the ordered grammar.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    kind: TokenKind,
    pattern: Regex,
    boundary: Boundary,
}

impl Rule {
    fn new(
        name: &'static str,
        kind: TokenKind,
        pattern: &str,
        boundary: Boundary,
    ) -> Result<Self, GrammarError> {
        let pattern = Regex::new(&format!("^(?:{pattern})"))
            .map_err(|source| GrammarError::InvalidPattern { rule: name, source })?;
        Ok(Self {
            name,
            kind,
            pattern,
            boundary,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Length in bytes of the match at the start of `rest`, if this rule
    /// applies there.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let m = self.pattern.find(rest)?;
        if m.start() != 0 || m.end() == 0 {
            return None;
        }
        if self.boundary == Boundary::Whitespace {
            let next = rest.as_bytes().get(m.end());
            if next.is_some_and(|b| !Url::TERMINATORS.contains(b)) {
                return None;
            }
        }
        Some(m.end())
    }
}

/// The immutable, ordered rule table used by the inline tokenizer.
///
/// Build one with [`Grammar::new`] or use [`Grammar::shared`]. A grammar holds
/// no per-parse state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Vec<Rule>,
    /// Unanchored alternation of every rule, for locating the next token.
    token_start: Regex,
}

impl Grammar {
    pub fn new(options: &GrammarOptions) -> Result<Self, GrammarError> {
        use Boundary::{Any, Whitespace};
        use TokenKind::{BoldText, Image, Link, Tag, Url as UrlKind};

        let scheme = Url::SCHEMES
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let bracket_url = format!("(?:{scheme}){BRACKET_URL_CHAR}+");
        let bare_url = format!("(?:{scheme}){BARE_URL_CHAR}+");
        let style = format!("[{}]+", regex::escape(Bracket::STYLE_CHARS));
        let icon = regex::escape(Bracket::ICON_SUFFIX);
        let hash = regex::escape(Hashtag::HASH);
        let bracket_image = image_pattern(options, &scheme, BRACKET_URL_CHAR);
        let bare_image = image_pattern(options, &scheme, BARE_URL_CHAR);

        let math = r"\[\$[ \t]+[^\n]*?\]".to_string();
        let styled_url = format!(r"\[{style}{WS}(?:{scheme}){BRACKET_URL_CHAR}*\]");
        let styled_text = format!(r"\[{style}{WS}[^\n]*?\]");
        let project_link = r"\[(?:/[^/ \t\n\]]+)+\]".to_string();
        let labeled_link = format!(r"\[[^\[\]\n]+?{WS}{bracket_url}\]");
        let url_labeled_link = format!(r"\[{bracket_url}{WS}[^\[\]\n]+\]");
        let external_link = format!(r"\[{bracket_url}\]");
        let page_icon = format!(r"\[(?:/[^/\n\]]+)+{icon}\]");
        let icon_link = format!(r"\[[^\[\]\n]+{icon}\]");
        let internal_link = r"\[[^\[\]\n]*\]".to_string();
        let bold_text = r"\[\[[^\n]*?\]\]".to_string();
        let tag = format!(r"{hash}(?:\[[^\[\]\n]+\]|[^ \t\n]+)");

        let mut table: Vec<(&'static str, TokenKind, String, Boundary)> = vec![
            ("math", Link, math, Any),
            ("styled_url", Link, styled_url, Any),
            ("styled_text", Link, styled_text, Any),
            ("project_link", Link, project_link, Any),
        ];
        if let Some(image) = &bracket_image {
            let image_url = format!(r"\[{image}{WS}{bracket_url}\]");
            let url_image = format!(r"\[{bracket_url}{WS}{image}\]");
            table.push(("image_url_link", Link, image_url, Any));
            table.push(("url_image_link", Link, url_image, Any));
        }
        table.extend([
            ("labeled_link", Link, labeled_link, Any),
            ("url_labeled_link", Link, url_labeled_link, Any),
            ("external_link", Link, external_link, Any),
            ("page_icon", Link, page_icon, Any),
            ("icon", Link, icon_link, Any),
            ("internal_link", Link, internal_link, Any),
        ]);
        if let Some(image) = &bare_image {
            table.push(("image", Image, image.clone(), Whitespace));
        }
        table.push(("url", UrlKind, bare_url, Any));
        if let Some(image) = &bracket_image {
            let bold_image = format!(r"\[\[{image}\]\]");
            table.push(("bold_image", BoldText, bold_image, Any));
        }
        table.extend([
            ("bold_text", BoldText, bold_text, Any),
            ("tag", Tag, tag, Any),
        ]);

        let alternation = table
            .iter()
            .map(|(_, _, pattern, _)| format!("(?:{pattern})"))
            .collect::<Vec<_>>()
            .join("|");
        let token_start = Regex::new(&alternation).map_err(|source| {
            GrammarError::InvalidPattern {
                rule: "token_start",
                source,
            }
        })?;

        let rules = table
            .into_iter()
            .map(|(name, kind, pattern, boundary)| Rule::new(name, kind, &pattern, boundary))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules, token_start })
    }

    /// The built-in grammar, compiled once per process.
    pub fn shared() -> &'static Grammar {
        &DEFAULT_GRAMMAR
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule (in priority order) that matches at the start of `rest`,
    /// with the match length.
    pub fn match_at(&self, rest: &str) -> Option<(&Rule, usize)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_len(rest).map(|len| (rule, len)))
    }

    /// Earliest token in `rest`: its byte offset, the rule that wins there and
    /// the match length.
    ///
    /// One unanchored search finds the next position where any rule could
    /// start; [`Grammar::match_at`] then decides the winner there. A position
    /// rejected only by a boundary check resumes the search one character on.
    pub fn find_token(&self, rest: &str) -> Option<(usize, &Rule, usize)> {
        let mut from = 0;
        while from < rest.len() {
            let at = self.token_start.find_at(rest, from)?.start();
            if let Some((rule, len)) = self.match_at(&rest[at..]) {
                return Some((at, rule, len));
            }
            from = at + rest[at..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::shared().clone()
    }
}

/// Alternation matching an image URL, or `None` when nothing is configured.
fn image_pattern(options: &GrammarOptions, scheme: &str, url_char: &str) -> Option<String> {
    let mut alts: Vec<String> = options
        .image_hosts
        .iter()
        .filter(|h| !h.is_empty())
        .map(|h| format!("{}{url_char}+", regex::escape(h)))
        .collect();

    let exts: Vec<String> = options
        .image_extensions
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| regex::escape(e))
        .collect();
    if !exts.is_empty() {
        alts.push(format!("(?:{scheme}){url_char}+(?:{})", exts.join("|")));
    }

    if alts.is_empty() {
        None
    } else {
        Some(format!("(?:{})", alts.join("|")))
    }
}
