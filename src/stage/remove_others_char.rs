use crate::{
    context::Context,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Replaces every character outside the allow-list with a space.
///
/// Kept: the Thai block, ASCII letters, `!`, `?`, space, apostrophe, and
/// anything carrying the Unicode `Emoji` or `Emoji_Component` property (which
/// includes digits, `#`, `*`, ZWJ, skin tones and regional indicators).
/// Apostrophes at either end of the text or doubled are replaced as well.
/// Newlines are not on the list.
pub struct RemoveOthersChar;

pub(crate) fn remove_others_char<'a>(text: Cow<'a, str>, patterns: &Patterns) -> Cow<'a, str> {
    replace_regex(&patterns.others, text, " ")
}

impl Stage for RemoveOthersChar {
    fn name(&self) -> &'static str {
        "remove_others_char"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.patterns().others.is_match(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(remove_others_char(text, ctx.patterns()))
    }
}

impl StageTestConfig for RemoveOthersChar {
    fn samples() -> &'static [&'static str] {
        &[
            "˚┉┉┉┉┉༝✧ คิดว่าน่าจะเหลือแค่ภาษาไทย กับ English",
            "hey & hello, world.",
            "'quoted'",
            "สวัสดี 🇹🇭 👍🏽!",
            "line\nbreak",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hey & hello, world.", "hey   hello  world "),
            ("'quoted'", " quoted "),
            ("it's", "it's"),
            ("สวัสดี 🇹🇭 👍🏽!", "สวัสดี 🇹🇭 👍🏽!"),
            ("line\nbreak", "line break"),
            ("ﾏﾝﾎﾞ", "    "),
        ]
    }
}
