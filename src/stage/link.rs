use crate::{
    context::Context,
    data::REPLACE_LINK,
    patterns::Patterns,
    stage::{Stage, StageError, char_before, replace_guarded},
    testing::stage_contract::StageTestConfig,
};
use memchr::memchr2;
use std::borrow::Cow;

/// Replaces URLs with a placeholder (default `" WSLINK "`).
///
/// Three shapes are recognised: anything with a `scheme://`, anything starting
/// with `www.`, and bare `host.tld/path` where the suffix is a known TLD. A
/// scheme may be glued to the preceding Thai word (`ดูคลิปhttps://...`). A
/// candidate right after `@`, `.` or an ASCII letter or digit is part of an
/// email or a longer run-on token and is skipped.
pub struct NormalizeLink {
    placeholder: Cow<'static, str>,
}

impl Default for NormalizeLink {
    fn default() -> Self {
        Self::with_placeholder(REPLACE_LINK)
    }
}

impl NormalizeLink {
    pub fn with_placeholder(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

pub(crate) fn normalize_link<'a>(
    text: Cow<'a, str>,
    patterns: &Patterns,
    placeholder: &str,
) -> Cow<'a, str> {
    replace_guarded(&patterns.link, text, placeholder, |src, caps| {
        caps.get(0).is_some_and(|m| {
            let before = char_before(src, m.start());
            !matches!(before, Some(c) if c == '@' || c == '.' || c.is_ascii_alphanumeric())
        })
    })
}

impl Stage for NormalizeLink {
    fn name(&self) -> &'static str {
        "normalize_link"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr2(b'.', b':', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(normalize_link(text, ctx.patterns(), &self.placeholder))
    }
}

impl StageTestConfig for NormalizeLink {
    fn samples() -> &'static [&'static str] {
        &[
            "http://www.youtube.com",
            "ดูที่ https://www.tmd.go.th/a.pdf นะ",
            "This is a book.This is a cat.",
            "foo.b@gmail.com",
            "google.com/search?q=hello",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("http://www.youtube.com", " WSLINK "),
            ("ดูที่ https://www.tmd.go.th/a.pdf นะ", "ดูที่  WSLINK  นะ"),
            ("www.example.org/x", " WSLINK "),
            ("google.com/search?q=hello", " WSLINK "),
            ("This is a book.This is a cat.", "This is a book.This is a cat."),
            ("foo.b@gmail.com", "foo.b@gmail.com"),
            ("ดูคลิปhttps://bit.ly/xyz", "ดูคลิป WSLINK "),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_domain_is_not_a_link() {
        let ctx = Context::default();
        for input in ["foo_foo@gmail.com", "me@example.co.th"] {
            let out = NormalizeLink::default()
                .apply(Cow::Borrowed(input), &ctx)
                .unwrap();
            assert_eq!(out, input);
        }
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let ctx = Context::default();
        let out = NormalizeLink::default()
            .apply(Cow::Borrowed("go HTTPS://Example.COM now"), &ctx)
            .unwrap();
        assert_eq!(out, "go  WSLINK  now");
    }

    #[test]
    fn scheme_glued_to_thai_word() {
        let ctx = Context::default();
        let stage = NormalizeLink::default();
        for (input, expected) in [
            ("ดูคลิปhttps://bit.ly/xyz", "ดูคลิป WSLINK "),
            ("อ่านต่อที่http://example.com/news", "อ่านต่อที่ WSLINK "),
            ("ลิงก์:https://t.co/abc", "ลิงก์: WSLINK "),
        ] {
            let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
            assert_eq!(out, expected, "{input}");
        }
    }

    #[test]
    fn port_must_end_at_word_boundary() {
        let ctx = Context::default();
        let stage = NormalizeLink::default();
        let out = stage
            .apply(Cow::Borrowed("api.example.com:8080/v1 ok"), &ctx)
            .unwrap();
        assert_eq!(out, " WSLINK  ok");

        let once = stage
            .apply(Cow::Borrowed("a.com:80x.com"), &ctx)
            .unwrap()
            .into_owned();
        let twice = stage.apply(Cow::Borrowed(once.as_str()), &ctx).unwrap();
        assert_eq!(once, twice);
    }
}
