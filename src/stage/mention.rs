use crate::{
    context::Context,
    data::REPLACE_AT_MENTION,
    patterns::Patterns,
    stage::{Stage, StageError, char_before, replace_guarded},
    testing::stage_contract::StageTestConfig,
};
use memchr::memchr;
use std::borrow::Cow;

/// Replaces `@handle` with a placeholder (default `" WSNAME "`).
///
/// The handle runs up to whitespace or a bracket. An `@` glued to an ASCII
/// letter, digit, `_`, `-` or `.` is the middle of an email address and is
/// left alone; any other neighbour (Thai text, `:`, `(`) still counts, so
/// `twitter:@wisesight` and `(มี@ด้วย)` are both mentions.
pub struct NormalizeMention {
    placeholder: Cow<'static, str>,
}

impl Default for NormalizeMention {
    fn default() -> Self {
        Self::with_placeholder(REPLACE_AT_MENTION)
    }
}

impl NormalizeMention {
    pub fn with_placeholder(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

#[inline(always)]
fn is_address_glue(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

pub(crate) fn normalize_at_mention<'a>(
    text: Cow<'a, str>,
    patterns: &Patterns,
    placeholder: &str,
) -> Cow<'a, str> {
    replace_guarded(&patterns.mention, text, placeholder, |src, caps| {
        caps.get(0)
            .is_some_and(|m| !char_before(src, m.start()).is_some_and(is_address_glue))
    })
}

impl Stage for NormalizeMention {
    fn name(&self) -> &'static str {
        "normalize_at_mention"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr(b'@', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(normalize_at_mention(text, ctx.patterns(), &self.placeholder))
    }
}

impl StageTestConfig for NormalizeMention {
    fn samples() -> &'static [&'static str] {
        &[
            "@test1234",
            "twitter:@wisesight @123456 (มี@ด้วย)",
            "email: example@something.com",
            "cleaned: @#$%^@#$%^&",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("@test1234", " WSNAME "),
            (
                "twitter:@wisesight @123456 (มี@ด้วย)",
                "twitter: WSNAME   WSNAME  (มี WSNAME )",
            ),
            ("email: example@something.com", "email: example@something.com"),
            (
                "it has to be cleaned: @#$%^@#$%^&",
                "it has to be cleaned:  WSNAME ",
            ),
        ]
    }
}
