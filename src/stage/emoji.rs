//! Emoji stages.
//!
//! All three share the sequence matcher in [`Patterns::emoji`]: a keycap, a
//! subdivision flag, a country flag, or a ZWJ chain of pictographs with
//! optional presentation selector and skin tone always counts as one emoji.

use crate::{
    context::Context,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex, trim_cow},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Every emoji sequence contains at least one non-ASCII scalar.
#[inline(always)]
fn may_contain_emoji(text: &str) -> bool {
    !text.is_ascii()
}

#[inline(always)]
fn has_outer_whitespace(text: &str) -> bool {
    text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace)
}

// ============================================================================
// NormalizeEmoji
// ============================================================================

/// Surrounds every emoji with one space on each side, then trims the text.
///
/// Not idempotent: a second pass pads again, leaving doubled spaces for
/// [`RemoveDupSpaces`](crate::stage::dup_spaces::RemoveDupSpaces) to fold.
pub struct NormalizeEmoji;

pub(crate) fn normalize_emoji<'a>(text: Cow<'a, str>, patterns: &Patterns) -> Cow<'a, str> {
    trim_cow(replace_regex(patterns.emoji(), text, " ${0} "))
}

impl Stage for NormalizeEmoji {
    fn name(&self) -> &'static str {
        "normalize_emoji"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(may_contain_emoji(text) || has_outer_whitespace(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(normalize_emoji(text, ctx.patterns()))
    }
}

impl StageTestConfig for NormalizeEmoji {
    fn samples() -> &'static [&'static str] {
        &["🌈อย่าฟอล เดี๋ยวจน🌻รีวิวในแท็ก", " ภาษาไทย ", "👍🏽ok", "ไม่มีอีโมจิ"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "🌈อย่าฟอล เดี๋ยวจน🌻รีวิวในแท็ก",
                "🌈 อย่าฟอล เดี๋ยวจน 🌻 รีวิวในแท็ก",
            ),
            ("👍🏽ok", "👍🏽 ok"),
            ("ไม่มีอีโมจิ", "ไม่มีอีโมจิ"),
        ]
    }

    fn idempotent() -> bool {
        false
    }
}

// ============================================================================
// RemoveEmoji
// ============================================================================

/// Deletes every emoji sequence.
pub struct RemoveEmoji;

pub(crate) fn remove_emoji<'a>(text: Cow<'a, str>, patterns: &Patterns) -> Cow<'a, str> {
    replace_regex(patterns.emoji(), text, "")
}

impl Stage for RemoveEmoji {
    fn name(&self) -> &'static str {
        "remove_emoji"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(may_contain_emoji(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(remove_emoji(text, ctx.patterns()))
    }
}

impl StageTestConfig for RemoveEmoji {
    fn samples() -> &'static [&'static str] {
        &["🌈อย่าฟอล เดี๋ยวจน🌻รีวิวในแท็ก", "🇹🇭 ไทย", "3️⃣ items"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("🌈อย่าฟอล เดี๋ยวจน🌻รีวิวในแท็ก", "อย่าฟอล เดี๋ยวจนรีวิวในแท็ก"),
            ("🇹🇭 ไทย", " ไทย"),
            ("3️⃣ items", " items"),
            ("👨\u{200D}👩\u{200D}👧x", "x"),
        ]
    }
}

// ============================================================================
// ReplaceDupEmojis
// ============================================================================

/// Collapses back-to-back repeats of the same emoji sequence to one.
///
/// The unit of repetition is the whole sequence, so `3️⃣3️⃣3️⃣` becomes `3️⃣`
/// while the digits in `111111` are untouched.
pub struct ReplaceDupEmojis;

pub(crate) fn replace_dup_emojis<'a>(text: Cow<'a, str>, patterns: &Patterns) -> Cow<'a, str> {
    let src = text.as_ref();
    let mut out: Option<String> = None;
    let mut last = 0;
    let mut prev: Option<regex::Match<'_>> = None;

    for m in patterns.emoji().find_iter(src) {
        if prev.is_some_and(|p| p.end() == m.start() && p.as_str() == m.as_str()) {
            let buf = out.get_or_insert_with(|| String::with_capacity(src.len()));
            buf.push_str(&src[last..m.start()]);
            last = m.end();
        }
        prev = Some(m);
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&src[last..]);
            Cow::Owned(buf)
        }
        None => text,
    }
}

impl Stage for ReplaceDupEmojis {
    fn name(&self) -> &'static str {
        "replace_dup_emojis"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(may_contain_emoji(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(replace_dup_emojis(text, ctx.patterns()))
    }
}

impl StageTestConfig for ReplaceDupEmojis {
    fn samples() -> &'static [&'static str] {
        &[
            "อ้ายอ้วน😣😣",
            "👧👧👧👧👧👧 111111 3️⃣3️⃣3️⃣3️⃣3️⃣3️⃣",
            "🤔 🤔 🤔",
            "😀😃😀",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("อ้ายอ้วน😣😣", "อ้ายอ้วน😣"),
            ("👧👧👧👧👧👧 111111 3️⃣3️⃣3️⃣3️⃣3️⃣3️⃣", "👧 111111 3️⃣"),
            ("🤔 🤔 🤔", "🤔 🤔 🤔"),
            ("😀😃😀", "😀😃😀"),
            ("👍🏽👍🏽👍🏻", "👍🏽👍🏻"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NormalizeEmoji);
        assert_stage_contract!(RemoveEmoji);
        assert_stage_contract!(ReplaceDupEmojis);
    }
}
