//! Deterministic normalization of noisy Thai social-media text.
//!
//! [`preprocess`] runs the full classifier-input pipeline with the default
//! placeholders. The free functions below expose single passes; the
//! [`Preprocessor`] builder configures placeholders, patterns and extra
//! stages.
//!
//! ```
//! let out = thaiprep::preprocess("ดูที่ https://example.com นะ 55555").unwrap();
//! assert_eq!(out, "ดูที่ WSLINK นะ WSHAHA");
//! ```

pub mod classify;
pub mod context;
pub mod data;
pub mod patterns;
pub mod preprocessor;
pub mod process;
pub mod profile;
pub mod stage;
pub mod stopwords;
pub mod testing;
pub mod unicode;

pub use classify::{is_date_str, is_datetime_str, is_latin_str, is_number_str, is_thai_str};
pub use context::Context;
pub use patterns::{PatternError, Patterns};
pub use preprocessor::{Placeholders, PreprocessError, Preprocessor, PreprocessorBuilder};
pub use profile::{Profile, ProfileError};
pub use stage::{Stage, StageError};
pub use stopwords::remove_stopwords;

pub use stage::dup_chars::ReplaceDupChars;
pub use stage::dup_spaces::RemoveDupSpaces;
pub use stage::email::NormalizeEmail;
pub use stage::emoji::{NormalizeEmoji, RemoveEmoji, ReplaceDupEmojis};
pub use stage::filename::NormalizeFilename;
pub use stage::haha::NormalizeHaha;
pub use stage::hashtag::RemoveHashtags;
pub use stage::insert_spaces::InsertSpaces;
pub use stage::link::NormalizeLink;
pub use stage::lower_case::LowerCase;
pub use stage::mention::NormalizeMention;
pub use stage::number::NormalizeNumber;
pub use stage::phone::NormalizePhone;
pub use stage::remove_others_char::RemoveOthersChar;
pub use stage::remove_tag::RemoveTag;
pub use stage::replace_pairs::PairTable;
pub use stage::special_chars::NormalizeSpecialChars;
pub use stage::unescape_html::UnescapeHtml;

use std::{borrow::Cow, sync::LazyLock};

static DEFAULT: LazyLock<Preprocessor> = LazyLock::new(Preprocessor::default);

/// Run the whole pipeline with the default placeholders.
pub fn preprocess(text: &str) -> Result<Cow<'_, str>, PreprocessError> {
    DEFAULT.preprocess(text)
}

/// `fn name(text)` with the default token and `fn name_with(text, token)`.
macro_rules! entity_fns {
    ($($(#[$doc:meta])* $name:ident, $with:ident => $imp:path, $default:path;)*) => {$(
        $(#[$doc])*
        pub fn $name(text: &str) -> Cow<'_, str> {
            $imp(Cow::Borrowed(text), &Patterns::global(), $default)
        }

        pub fn $with<'a>(text: &'a str, placeholder: &str) -> Cow<'a, str> {
            $imp(Cow::Borrowed(text), &Patterns::global(), placeholder)
        }
    )*};
}

entity_fns! {
    /// URLs, `www.` addresses and bare domains with a known suffix.
    normalize_link, normalize_link_with => stage::link::normalize_link, data::REPLACE_LINK;
    /// `@handle`, unless glued to a preceding address character.
    normalize_at_mention, normalize_at_mention_with => stage::mention::normalize_at_mention, data::REPLACE_AT_MENTION;
    normalize_email, normalize_email_with => stage::email::normalize_email, data::REPLACE_EMAIL;
    /// Names ending in a web or media file extension.
    normalize_filename, normalize_filename_with => stage::filename::normalize_filename, data::REPLACE_FILENAME;
    /// Thai phone numbers in ASCII or Thai digits.
    normalize_phone, normalize_phone_with => stage::phone::normalize_phone, data::REPLACE_PHONE;
    /// `hahaha`, `ถถถ` and `555`.
    normalize_haha, normalize_haha_with => stage::haha::normalize_haha, data::REPLACE_HAHA;
    normalize_number, normalize_number_with => stage::number::normalize_number, data::REPLACE_NUMBER;
}

/// Shorter alias of [`normalize_number`].
pub fn normalize_num(text: &str) -> Cow<'_, str> {
    normalize_number(text)
}

/// Thai vowel order, Thai digits and punctuation, in that order.
pub fn normalize_text_pairs(text: &str) -> Cow<'_, str> {
    PairTable::NORMALIZE_TEXT.replace(Cow::Borrowed(text))
}

pub fn normalize_accented_chars(text: &str) -> Cow<'_, str> {
    PairTable::ACCENTED_CHARS.replace(Cow::Borrowed(text))
}

pub fn normalize_special_chars(text: &str) -> Cow<'_, str> {
    stage::special_chars::normalize_special_chars(Cow::Borrowed(text))
}

pub fn remove_tag(text: &str) -> Cow<'_, str> {
    stage::remove_tag::remove_tag(Cow::Borrowed(text), &Patterns::global())
}

pub fn remove_hashtags(text: &str) -> Cow<'_, str> {
    stage::hashtag::remove_hashtags(Cow::Borrowed(text), &Patterns::global())
}

pub fn remove_dup_spaces(text: &str) -> Cow<'_, str> {
    stage::dup_spaces::remove_dup_spaces(Cow::Borrowed(text), &Patterns::global())
}

pub fn insert_spaces(text: &str) -> Cow<'_, str> {
    stage::insert_spaces::insert_spaces(Cow::Borrowed(text), &Patterns::global())
}

pub fn remove_others_char(text: &str) -> Cow<'_, str> {
    stage::remove_others_char::remove_others_char(Cow::Borrowed(text), &Patterns::global())
}

pub fn remove_emoji(text: &str) -> Cow<'_, str> {
    stage::emoji::remove_emoji(Cow::Borrowed(text), &Patterns::global())
}

pub fn normalize_emoji(text: &str) -> Cow<'_, str> {
    stage::emoji::normalize_emoji(Cow::Borrowed(text), &Patterns::global())
}

pub fn replace_dup_emojis(text: &str) -> Cow<'_, str> {
    stage::emoji::replace_dup_emojis(Cow::Borrowed(text), &Patterns::global())
}

/// Collapses runs of 3+ identical characters, digits excepted.
pub fn replace_dup_chars(text: &str) -> Cow<'_, str> {
    ReplaceDupChars::REPLACE_DUP_CHARS.replace(Cow::Borrowed(text))
}

/// Collapses runs of 3+ identical characters, digits included.
pub fn replace_rep_after(text: &str) -> Cow<'_, str> {
    ReplaceDupChars::REPLACE_REP_AFTER.replace(Cow::Borrowed(text))
}
