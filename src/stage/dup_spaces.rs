use crate::{
    context::Context,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex, trim_cow},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Folds runs of spaces/tabs to one space and runs of blank lines to one
/// newline, strips spaces hugging a newline, then trims the whole text.
///
/// Line structure survives: `a\n\n\nb` becomes `a\nb`, not `a b`.
pub struct RemoveDupSpaces;

pub(crate) fn remove_dup_spaces<'a>(text: Cow<'a, str>, p: &Patterns) -> Cow<'a, str> {
    let text = replace_regex(&p.dup_space, text, " ");
    let text = replace_regex(&p.dup_empty_line, text, "\n");
    let text = replace_regex(&p.space_after_newline, text, "\n");
    let text = replace_regex(&p.space_before_newline, text, "\n");
    trim_cow(text)
}

impl Stage for RemoveDupSpaces {
    fn name(&self) -> &'static str {
        "remove_dup_spaces"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.contains(['\n', '\t'])
            || text.contains("  ")
            || text.starts_with(char::is_whitespace)
            || text.ends_with(char::is_whitespace))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(remove_dup_spaces(text, ctx.patterns()))
    }
}

impl StageTestConfig for RemoveDupSpaces {
    fn samples() -> &'static [&'static str] {
        &[
            "a\n\n\n\nb",
            "นอนได้แล้ว\n\n\n\n\nเดี๋ยวพรุ่งนี้เขาก็กลับมา",
            "  test  html   WSLINK  ",
            "one \n \t\n  two",
            " ภาษาไทย ",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("a\n\n\n\nb", "a\nb"),
            (
                "นอนได้แล้ว\n\n\n\n\nเดี๋ยวพรุ่งนี้เขาก็กลับมา",
                "นอนได้แล้ว\nเดี๋ยวพรุ่งนี้เขาก็กลับมา",
            ),
            ("  test  html   WSLINK  ", "test html WSLINK"),
            ("one \n \t\n  two", "one\ntwo"),
            ("\n\nx\n\n", "x"),
        ]
    }
}
