use crate::{
    context::Context,
    data::REPLACE_HAHA,
    patterns::Patterns,
    stage::{Stage, StageError, replace_guarded},
    testing::stage_contract::StageTestConfig,
    unicode::is_digit,
};
use memchr::memchr2;
use std::borrow::Cow;

/// Replaces laughter with a placeholder (default `" WSHAHA "`).
///
/// Three forms: `haha` repeated at least twice (any case, spaces allowed
/// between), `ถถถ` or longer, and `555` or longer. A run of fives that is
/// followed by one more character and then a digit (`5555 1234`) is read as
/// part of a number and kept.
pub struct NormalizeHaha {
    placeholder: Cow<'static, str>,
}

impl Default for NormalizeHaha {
    fn default() -> Self {
        Self::with_placeholder(REPLACE_HAHA)
    }
}

impl NormalizeHaha {
    pub fn with_placeholder(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

/// Nothing, a newline, or a non-digit two characters after `at`.
#[inline]
fn digit_does_not_follow(src: &str, at: usize) -> bool {
    let mut rest = src[at..].chars();
    match rest.next() {
        None | Some('\n') => true,
        Some(_) => !rest.next().is_some_and(is_digit),
    }
}

pub(crate) fn normalize_haha<'a>(
    text: Cow<'a, str>,
    patterns: &Patterns,
    placeholder: &str,
) -> Cow<'a, str> {
    replace_guarded(&patterns.haha, text, placeholder, |src, caps| match caps.get(3) {
        Some(fives) => digit_does_not_follow(src, fives.end()),
        None => true,
    })
}

impl Stage for NormalizeHaha {
    fn name(&self) -> &'static str {
        "normalize_haha"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr2(b'h', b'H', text.as_bytes()).is_some()
            || text.contains('ถ')
            || text.contains("555"))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(normalize_haha(text, ctx.patterns(), &self.placeholder))
    }
}

impl StageTestConfig for NormalizeHaha {
    fn samples() -> &'static [&'static str] {
        &[
            "555555",
            "ตลกมาก ถถถถถ",
            "HaHa ha lol",
            "โทร 5555 1234",
            "ราคา 5550 บาท",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("555555", " WSHAHA "),
            ("ตลกมาก ถถถถถ", "ตลกมาก  WSHAHA "),
            ("hahaha lol", " WSHAHA lol"),
            ("HaHa ha lol", " WSHAHA lol"),
            ("โทร 5555 1234", "โทร 5555 1234"),
            ("ราคา 5550 บาท", "ราคา 5550 บาท"),
            ("55", "55"),
        ]
    }
}
