use crate::{
    context::Context,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex},
    testing::stage_contract::StageTestConfig,
};
use memchr::memchr;
use std::borrow::Cow;

/// Deletes `#tag` tokens, body being everything up to the next whitespace.
/// The surrounding spaces stay.
pub struct RemoveHashtags;

pub(crate) fn remove_hashtags<'a>(text: Cow<'a, str>, patterns: &Patterns) -> Cow<'a, str> {
    replace_regex(&patterns.hashtag, text, "")
}

impl Stage for RemoveHashtags {
    fn name(&self) -> &'static str {
        "remove_hashtags"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr(b'#', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(remove_hashtags(text, ctx.patterns()))
    }
}

impl StageTestConfig for RemoveHashtags {
    fn samples() -> &'static [&'static str] {
        &[
            "Saturday be like this #pinklover #purplehair #cafe",
            "#ทีมงาน สวัสดี",
            "ราคา 5#",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "Saturday be like this #pinklover #purplehair #isseymiyake #baobaoisseymiyake #baobaothailand #cafe",
                "Saturday be like this      ",
            ),
            ("#ทีมงาน สวัสดี", " สวัสดี"),
            ("tag#inline ok", "tag ok"),
        ]
    }
}
