use crate::{
    context::Context,
    data::REPLACE_NUMBER,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex},
    testing::stage_contract::StageTestConfig,
    unicode::has_digit,
};
use regex::NoExpand;
use std::borrow::Cow;

/// Replaces numeric literals with a placeholder (default `" WSNUMBER "`).
///
/// Same grammar as [`is_number_str`](crate::classify::is_number_str): an
/// optional sign, comma-grouped ASCII or Thai digits, an optional fraction.
pub struct NormalizeNumber {
    placeholder: Cow<'static, str>,
}

impl Default for NormalizeNumber {
    fn default() -> Self {
        Self::with_placeholder(REPLACE_NUMBER)
    }
}

impl NormalizeNumber {
    pub fn with_placeholder(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

pub(crate) fn normalize_number<'a>(
    text: Cow<'a, str>,
    patterns: &Patterns,
    placeholder: &str,
) -> Cow<'a, str> {
    replace_regex(&patterns.number, text, NoExpand(placeholder))
}

impl Stage for NormalizeNumber {
    fn name(&self) -> &'static str {
        "normalize_number"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(has_digit(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(normalize_number(text, ctx.patterns(), &self.placeholder))
    }
}

impl StageTestConfig for NormalizeNumber {
    fn samples() -> &'static [&'static str] {
        &["hey123ไม่ได้", "04:00", "1,234.50 บาท", "-3", "๒๕๖๔"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hey123ไม่ได้", "hey WSNUMBER ไม่ได้"),
            ("04:00", " WSNUMBER : WSNUMBER "),
            ("1,234.50 บาท", " WSNUMBER  บาท"),
            ("-3", " WSNUMBER "),
            ("ปี ๒๕๖๔", "ปี  WSNUMBER "),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_sign_is_text() {
        let ctx = Context::default();
        let out = NormalizeNumber::default()
            .apply(Cow::Borrowed("a - b + c"), &ctx)
            .unwrap();
        assert!(matches!(out, Cow::Borrowed("a - b + c")));
    }
}
