use crate::{
    context::Context,
    data::REPLACE_PHONE,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex},
    testing::stage_contract::StageTestConfig,
    unicode::has_digit,
};
use regex::NoExpand;
use std::borrow::Cow;

/// Replaces Thai phone numbers with a placeholder (default `" WSPHONE "`).
///
/// Covers an optional `+66` / `(02)` prefix, seven body shapes of 9 to 11
/// digits with optional `.`, `-` or space separators, and an optional
/// extension (`ext 12`, `ต่อ 12`, `กด 3`). ASCII and Thai numeral glyphs mix
/// freely, so `๐81-234-5678` is a phone number too.
pub struct NormalizePhone {
    placeholder: Cow<'static, str>,
}

impl Default for NormalizePhone {
    fn default() -> Self {
        Self::with_placeholder(REPLACE_PHONE)
    }
}

impl NormalizePhone {
    pub fn with_placeholder(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

pub(crate) fn normalize_phone<'a>(
    text: Cow<'a, str>,
    patterns: &Patterns,
    placeholder: &str,
) -> Cow<'a, str> {
    replace_regex(&patterns.phone, text, NoExpand(placeholder))
}

impl Stage for NormalizePhone {
    fn name(&self) -> &'static str {
        "normalize_phone"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(has_digit(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(normalize_phone(text, ctx.patterns(), &self.placeholder))
    }
}

impl StageTestConfig for NormalizePhone {
    fn samples() -> &'static [&'static str] {
        &[
            "0123456789",
            "โทร ๐๘๑-๒๓๔-๕๖๗๘ ได้เลย",
            "ราคา 350 บาท",
            "Hello World 123",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("0123456789", " WSPHONE "),
            ("โทร ๐๘๑-๒๓๔-๕๖๗๘ ได้เลย", "โทร  WSPHONE  ได้เลย"),
            ("call 081.234.5678 now", "call  WSPHONE  now"),
            ("ราคา 350 บาท", "ราคา 350 บาท"),
        ]
    }
}
