use crate::{
    context::Context,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex},
    testing::stage_contract::StageTestConfig,
};
use memchr::memchr;
use std::borrow::Cow;

/// Removes every `<...>` span.
///
/// This is a pattern match, not an HTML parser: nesting, comments and
/// `<script>` bodies get no special treatment. Informal social text rarely
/// carries more than `<br />` and links, which this handles.
pub struct RemoveTag;

pub(crate) fn remove_tag<'a>(text: Cow<'a, str>, patterns: &Patterns) -> Cow<'a, str> {
    replace_regex(&patterns.tag, text, "")
}

impl Stage for RemoveTag {
    fn name(&self) -> &'static str {
        "remove_tag"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr(b'<', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(remove_tag(text, ctx.patterns()))
    }
}

impl StageTestConfig for RemoveTag {
    fn samples() -> &'static [&'static str] {
        &[
            "<div>Test HTML</div>",
            "เวลา 04:00 น.<br />\nต่อ",
            "a < b and c > d",
            "<unclosed",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("<div>Test HTML</div>", "Test HTML"),
            ("<img class=\"x\" src=\"a.png\" />ภาพ", "ภาพ"),
            ("<unclosed", "<unclosed"),
        ]
    }
}
