/// Bracket forms: links, icons, styled text and the `[[bold]]` form.
pub struct Bracket;

impl Bracket {
    /// Characters that may precede a space to style the bracket body.
    pub const STYLE_CHARS: &'static str = "*/-_";
    /// Suffix of an icon reference `[name.icon]`.
    pub const ICON_SUFFIX: &'static str = ".icon";
}
