//! Block-class vocabulary and the classification tables.
//!
//! Two matching modes are in play and each call site relies on its own:
//!
//! - [`classify`] looks for a rule token *anywhere* in the raw class string
//!   (substring containment), first rule wins.
//! - [`has_block_token`] splits the class string on single spaces and asks
//!   whether any token is *exactly* a whitelisted block class. Walkers use it
//!   to tell a nested semantic block from presentation-only wrapper markup.

/// Semantic block categories, one per whitelisted class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockClass {
    Header,
    SubHeader,
    SubSubHeader,
    Text,
    Link,
    Bookmark,
    /// Inline span whose meaning comes from its `style`; see [`resolve_inline_style`].
    Styled,
    Quote,
    Callout,
    Code,
    Divider,
    BulletedList,
    NumberedList,
    Image,
    Table,
    ColumnList,
}

impl BlockClass {
    pub const fn token(self) -> &'static str {
        match self {
            BlockClass::Header => "notion-header-block",
            BlockClass::SubHeader => "notion-sub_header-block",
            BlockClass::SubSubHeader => "notion-sub_sub_header-block",
            BlockClass::Text => "notion-text-block",
            BlockClass::Link => "notion-link-token",
            BlockClass::Bookmark => "notion-bookmark-block",
            BlockClass::Styled => "notion-enable-hover",
            BlockClass::Quote => "notion-quote-block",
            BlockClass::Callout => "notion-callout-block",
            BlockClass::Code => "notion-code-block",
            BlockClass::Divider => "notion-divider-block",
            BlockClass::BulletedList => "notion-bulleted_list-block",
            BlockClass::NumberedList => "notion-numbered_list-block",
            BlockClass::Image => "notion-image-block",
            BlockClass::Table => "notion-table-block",
            BlockClass::ColumnList => "notion-column_list-block",
        }
    }
}

/// Classification rules in priority order.
pub const RULES: [BlockClass; 16] = [
    BlockClass::Header,
    BlockClass::SubHeader,
    BlockClass::SubSubHeader,
    BlockClass::Text,
    BlockClass::Link,
    BlockClass::Bookmark,
    BlockClass::Styled,
    BlockClass::Quote,
    BlockClass::Callout,
    BlockClass::Code,
    BlockClass::Divider,
    BlockClass::BulletedList,
    BlockClass::NumberedList,
    BlockClass::Image,
    BlockClass::Table,
    BlockClass::ColumnList,
];

/// The closed whitelist of block classes.
pub const BLOCK_CLASSES: [&str; 16] = [
    BlockClass::Header.token(),
    BlockClass::Link.token(),
    BlockClass::SubHeader.token(),
    BlockClass::SubSubHeader.token(),
    BlockClass::Text.token(),
    BlockClass::Styled.token(),
    BlockClass::Quote.token(),
    BlockClass::Callout.token(),
    BlockClass::Code.token(),
    BlockClass::Divider.token(),
    BlockClass::BulletedList.token(),
    BlockClass::NumberedList.token(),
    BlockClass::Image.token(),
    BlockClass::Table.token(),
    BlockClass::ColumnList.token(),
    BlockClass::Bookmark.token(),
];

/// Class of an element holding one run of inline text.
pub const TEXT_RUN: &str = "notranslate";
/// Class of the element wrapping code lines.
pub const LINE_NUMBERS: &str = "line-numbers";
/// Class of an emoji image inside a callout.
pub const CALLOUT_EMOJI: &str = "notion-emoji";
/// Class fragment marking one column of a column list.
pub const COLUMN_BLOCK: &str = "notion-column-block";
/// `role` value of a rendered emoji.
pub const EMOJI_ROLE: &str = "img";

/// First rule whose token occurs anywhere in `class`.
pub fn classify(class: &str) -> Option<BlockClass> {
    RULES.into_iter().find(|rule| class.contains(rule.token()))
}

/// Whether any space-separated token of `class` is a whitelisted block class.
pub fn has_block_token(class: &str) -> bool {
    class.split(' ').any(|token| BLOCK_CLASSES.contains(&token))
}

/// Whether any space-separated token of `class` equals `marker`.
pub fn has_token(class: &str, marker: &str) -> bool {
    class.split(' ').any(|token| token == marker)
}

/// What a [`BlockClass::Styled`] span turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    Bold,
    Italic,
    /// Decorated emoji: the span wraps a `role="img"` element.
    Emoji,
    InlineCode,
    /// No recognised styling; the first child's text passes through.
    Plain,
}

/// Decide a styled span's meaning from its `style` attribute.
///
/// Bold wins over the exact italic match, and the emoji check runs before
/// the background-colour check.
pub fn resolve_inline_style(style: &str, first_child_is_emoji: bool) -> InlineStyle {
    if style.contains("font-weight") {
        InlineStyle::Bold
    } else if style == "font-style:italic" {
        InlineStyle::Italic
    } else if first_child_is_emoji {
        InlineStyle::Emoji
    } else if style.contains("background-color") {
        InlineStyle::InlineCode
    } else {
        InlineStyle::Plain
    }
}
