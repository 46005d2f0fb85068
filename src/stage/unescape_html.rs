use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use memchr::memchr;
use std::borrow::Cow;

/// Decodes named and numeric HTML/XML character references (`&amp;`, `&#3585;`).
///
/// Runs before tag stripping, so an escaped `&lt;b&gt;` becomes a real tag
/// and is removed by [`RemoveTag`](crate::stage::remove_tag::RemoveTag).
pub struct UnescapeHtml;

/// Fast pre-scan: if no '&' appears, text has no entities
#[inline(always)]
fn contains_entities(text: &str) -> bool {
    memchr(b'&', text.as_bytes()).is_some()
}

impl Stage for UnescapeHtml {
    fn name(&self) -> &'static str {
        "unescape_html"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(contains_entities(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !contains_entities(&text) {
            return Ok(text);
        }
        let mut decoded = String::with_capacity(text.len());
        html_escape::decode_html_entities_to_string(&text, &mut decoded);
        if decoded == text.as_ref() {
            Ok(text)
        } else {
            Ok(Cow::Owned(decoded))
        }
    }
}

impl StageTestConfig for UnescapeHtml {
    fn samples() -> &'static [&'static str] {
        &["&amp;", "ประกาศ&nbsp;&nbsp;ออก", "a &lt; b", "fish & chips", "&#3585;&#x0E01;"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("&amp;", "&"),
            ("&lt;div&gt;", "<div>"),
            ("&#3585;", "ก"),
            ("ประกาศ&nbsp;ออก", "ประกาศ\u{00A0}ออก"),
        ]
    }

    /// `&amp;lt;` decodes to `&lt;`, which decodes again.
    fn idempotent() -> bool {
        false
    }
}
