use crate::{
    context::Context,
    data::REPLACE_EMAIL,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex},
    testing::stage_contract::StageTestConfig,
};
use memchr::memchr;
use regex::NoExpand;
use std::borrow::Cow;

/// Replaces `local@domain.tld` addresses with a placeholder (default `" WSEMAIL "`).
pub struct NormalizeEmail {
    placeholder: Cow<'static, str>,
}

impl Default for NormalizeEmail {
    fn default() -> Self {
        Self::with_placeholder(REPLACE_EMAIL)
    }
}

impl NormalizeEmail {
    pub fn with_placeholder(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

pub(crate) fn normalize_email<'a>(
    text: Cow<'a, str>,
    patterns: &Patterns,
    placeholder: &str,
) -> Cow<'a, str> {
    replace_regex(&patterns.email, text, NoExpand(placeholder))
}

impl Stage for NormalizeEmail {
    fn name(&self) -> &'static str {
        "normalize_email"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr(b'@', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(normalize_email(text, ctx.patterns(), &self.placeholder))
    }
}

impl StageTestConfig for NormalizeEmail {
    fn samples() -> &'static [&'static str] {
        &[
            "test_eiei_za@gmail.com",
            "ติดต่อ foo.bar+tag@mail.example.co.th ได้",
            "@lonely",
            "a@b",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("test_eiei_za@gmail.com", " WSEMAIL "),
            ("foo.b@gmail.com", " WSEMAIL "),
            (
                "ติดต่อ foo.bar+tag@mail.example.co.th ได้",
                "ติดต่อ  WSEMAIL  ได้",
            ),
            ("a@b", "a@b"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NormalizeEmail::default());
    }
}
