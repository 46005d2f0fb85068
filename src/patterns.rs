//! Compiled regular expressions shared by every stage.
//!
//! `Patterns` is built once and then only read. The process-wide default is
//! created lazily by [`Patterns::global`]; callers that want their own
//! instance build one with [`Patterns::new`] and hand it to a
//! [`Context`](crate::context::Context).

use regex::{Regex, RegexBuilder};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile `{name}` pattern: {source}")]
    Compile {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// ASCII digits and Thai numeral glyphs.
const DIGIT: &str = "[0-9๐-๙]";

/// Separator between phone-number digit groups: `0-1234`, `0 1234`, `0.1234`.
const SEP: &str = r"\s*[.\-]?\s*";

const NUMBER: &str = r"[+\-]?(?:[0-9๐-๙]+,?)+(?:\.[0-9๐-๙]*)?";

/// Suffixes accepted for bare domains such as `google.com/search`.
/// Two-letter codes that double as common English words are left out so
/// `end.it` or `book.in` in run-on sentences stay text.
const LINK_TLDS: &[&str] = &[
    "com", "net", "org", "edu", "gov", "mil", "int", "info", "biz", "io", "co", "tv", "app",
    "dev", "xyz", "online", "site", "shop", "store", "blog", "news", "club", "top", "asia",
    "mobi", "name", "pro", "ai", "ly", "gl", "gg", "cc", "uk", "de", "fr", "jp", "cn", "kr",
    "th", "sg", "vn", "ph", "hk", "tw", "au", "nz", "ca", "ru", "br", "es", "nl", "se", "ch",
    "eu", "la", "kh", "mm",
];

const FILE_EXTENSIONS: &[&str] = &[
    "html", "htm", "shtm", "shtml", "cgi", "php", "php3", "asp", "aspx", "cfm", "cfml", "jsp",
    "png", "gif", "jpg", "java", "class", "webp", "mp3", "mp4", "mov", "pl", "do",
];

/// Pictograph with an optional presentation selector and skin tone.
const EMOJI_ATOM: &str = r"(?:\p{Extended_Pictographic}|\p{Emoji_Presentation})\x{FE0F}?[\x{1F3FB}-\x{1F3FF}]?";

/// Room for the large Unicode classes in the emoji grammar.
const EMOJI_SIZE_LIMIT: usize = 1 << 25;

pub struct Patterns {
    pub(crate) tag: Regex,
    pub(crate) link: Regex,
    pub(crate) filename: Regex,
    pub(crate) mention: Regex,
    pub(crate) email: Regex,
    pub(crate) phone: Regex,
    /// Group 1: `haha`, group 2: `ถถถ`, group 3: `555`.
    pub(crate) haha: Regex,
    pub(crate) number: Regex,
    pub(crate) hashtag: Regex,
    pub(crate) emoji: Regex,
    /// One disallowed character, or an apostrophe at either end or doubled.
    pub(crate) others: Regex,

    pub(crate) dup_space: Regex,
    pub(crate) dup_empty_line: Regex,
    pub(crate) space_after_newline: Regex,
    pub(crate) space_before_newline: Regex,

    /// Digit/non-digit, Thai/non-Thai, Latin/non-Latin transitions, in order.
    pub(crate) boundaries: [Regex; 6],

    pub(crate) date_shape: Regex,
    pub(crate) datetime_shape: Regex,
    pub(crate) number_full: Regex,
    pub(crate) latin_full: Regex,
    pub(crate) thai_full: Regex,
    /// One decimal digit (general category Nd) in any script.
    pub(crate) decimal_digit: Regex,
}

static GLOBAL: LazyLock<Arc<Patterns>> = LazyLock::new(|| {
    Arc::new(Patterns::new().expect("built-in patterns failed to compile – this is a bug"))
});

impl Patterns {
    /// Compile every pattern. Fails only if a built-in pattern is malformed.
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            tag: compile("tag", r"<[^>]+>")?,
            link: compile("link", &link_pattern())?,
            filename: compile(
                "filename",
                &format!(r"(?i)\w+\.(?:{})(?:\?\S*)?\b", FILE_EXTENSIONS.join("|")),
            )?,
            mention: compile("mention", r"@[^\s()\[\]{}<>]+")?,
            email: compile("email", r"\b[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}\b")?,
            phone: compile("phone", &phone_pattern())?,
            haha: compile("haha", r"(?i)(\b(?:ha\s*){2,})|(ถ{3,})|(5{3,})\b")?,
            number: compile("number", NUMBER)?,
            hashtag: compile("hashtag", r"#\S+")?,
            emoji: compile_large("emoji", &emoji_pattern())?,
            others: compile_large(
                "others",
                r"[^\x{0E00}-\x{0E7F}a-zA-Z!?' \p{Emoji}\p{Emoji_Component}]|^'|'$|''",
            )?,

            dup_space: compile("dup_space", r"[\t ]{2,}")?,
            dup_empty_line: compile("dup_empty_line", r"[\t ]*\n(?:[\t ]*\n)*")?,
            space_after_newline: compile("space_after_newline", r"\n[\t ]+")?,
            space_before_newline: compile("space_before_newline", r"[\t ]+\n")?,

            boundaries: [
                compile("digit_nondigit", r"([\d.,])(\D)")?,
                compile("nondigit_digit", r"(\D)([\d.,])")?,
                compile("thai_nonthai", r"([\x{0E00}-\x{0E4F}])([^\x{0E00}-\x{0E4F}\s])")?,
                compile("nonthai_thai", r"([^\x{0E00}-\x{0E4F}\s])([\x{0E00}-\x{0E4F}])")?,
                compile("latin_nonlatin", r"([a-zA-Z])([^a-zA-Z\s])")?,
                compile("nonlatin_latin", r"([^a-zA-Z\s])([a-zA-Z])")?,
            ],

            date_shape: compile("date_shape", r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$")?,
            datetime_shape: compile(
                "datetime_shape",
                r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$",
            )?,
            number_full: compile("number_full", &format!("^(?:{NUMBER})$"))?,
            latin_full: compile("latin_full", r"^[a-zA-Z0-9\s]+$")?,
            thai_full: compile("thai_full", r"^[\x{0E00}-\x{0E7F}0-9\s]+$")?,
            decimal_digit: compile("decimal_digit", r"^\p{Nd}$")?,
        })
    }

    /// The shared default instance.
    pub fn global() -> Arc<Patterns> {
        Arc::clone(&GLOBAL)
    }

    /// Matcher for one complete emoji sequence.
    pub fn emoji(&self) -> &Regex {
        &self.emoji
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Compile { name, source })
}

fn compile_large(name: &'static str, pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .size_limit(EMOJI_SIZE_LIMIT)
        .dfa_size_limit(EMOJI_SIZE_LIMIT)
        .build()
        .map_err(|source| PatternError::Compile { name, source })
}

fn link_pattern() -> String {
    // No leading `\b`: Thai letters count as word characters, and a scheme glued
    // to Thai text must still match. The stage guard rejects a mid-word start.
    let scheme = r"[a-z][a-z0-9+.\-]{2,}://\S*";
    let www = r"\bwww\d{0,3}\.\S+";
    let domain = format!(
        r"\b(?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+(?:{})\b(?::[0-9]+\b)?(?:[/?#]\S*)?",
        LINK_TLDS.join("|")
    );
    format!("(?i)(?:{scheme})|(?:{www})|(?:{domain})")
}

fn phone_pattern() -> String {
    let d = DIGIT;
    let s = SEP;
    let bodies = [
        // 0-1234-5678
        format!(r"\b[0๐]{s}{d}{{4}}{s}{d}{{4}}\b"),
        // 012-345-678
        format!(r"\b[0๐]{d}{{2}}{s}{d}{{3}}{s}{d}{{3,4}}\b"),
        // 0-123-456-789
        format!(r"\b[0๐]{s}{d}{{3}}{s}{d}{{3}}{s}{d}{{3,4}}\b"),
        // 01-2345-6789
        format!(r"\b[0๐]{d}{s}{d}{{4}}{s}{d}{{4}}\b"),
        // 0123456789
        format!(r"\b[0๐]{d}{{9}}\b"),
        // 1-800-123-4567
        format!(r"\b[01๐๑]{s}[8๘]{d}{{2}}{s}{d}{{3,4}}{s}{d}{{3,4}}\b"),
        // (01) 234 5678
        format!(r"\({d}{{2,3}}\){s}{d}{{3,4}}{s}{d}{{3,4}}\b"),
    ];
    let area = format!(r"(?:\+{d}{{2,3}}\s?|\({d}{{2,3}}\)\s?)?");
    // `x` must touch its digits so a quantity like `x 2` stays text.
    let ext = format!(r"(?:\s?(?:[xX]\.?|(?:Ext|EXT|ext|ต่อ|กด)\.?\s?){d}{{1,4}}\b)?");
    format!("{area}(?:{}){ext}", bodies.join("|"))
}

fn emoji_pattern() -> String {
    let keycap = r"[0-9#*]\x{FE0F}?\x{20E3}";
    let tag_sequence = r"\x{1F3F4}[\x{E0020}-\x{E007E}]+\x{E007F}";
    let flag = r"[\x{1F1E6}-\x{1F1FF}]{2}";
    let zwj_sequence = format!(r"{EMOJI_ATOM}(?:\x{{200D}}{EMOJI_ATOM})*");
    format!("{keycap}|{tag_sequence}|{flag}|{zwj_sequence}")
}
