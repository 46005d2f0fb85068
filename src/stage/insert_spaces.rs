use crate::{
    context::Context,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Puts one space between neighbouring characters of different classes.
///
/// Six passes in fixed order: digit|non-digit, non-digit|digit, Thai|non-Thai,
/// non-Thai|Thai, Latin|non-Latin, non-Latin|Latin. `.` and `,` sit in the
/// digit class of the first two passes, so decimals get split as well.
pub struct InsertSpaces;

pub(crate) fn insert_spaces<'a>(text: Cow<'a, str>, patterns: &Patterns) -> Cow<'a, str> {
    patterns
        .boundaries
        .iter()
        .fold(text, |text, re| replace_regex(re, text, "${1} ${2}"))
}

impl Stage for InsertSpaces {
    fn name(&self) -> &'static str {
        "insert_spaces"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.patterns().boundaries.iter().any(|re| re.is_match(text)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(insert_spaces(text, ctx.patterns()))
    }
}

impl StageTestConfig for InsertSpaces {
    fn samples() -> &'static [&'static str] {
        &[
            "hey123ไม่ได้เป็นคนที่เกเรyoyo&แฮ่&&hello",
            "ภาษาไทย",
            "โทร0812345678",
            "5kg",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "hey123ไม่ได้เป็นคนที่เกเรyoyo&แฮ่&&hello",
                "hey 123 ไม่ได้เป็นคนที่เกเร yoyo & แฮ่ && hello",
            ),
            ("โทร0812345678", "โทร 0812345678"),
            ("5kg", "5 kg"),
            ("ภาษาไทย", "ภาษาไทย"),
        ]
    }

    /// Spaces next to `.` or `,` keep splitting on every pass.
    fn idempotent() -> bool {
        false
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(InsertSpaces);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_is_separated_from_thai() {
        let ctx = Context::default();
        let out = InsertSpaces.apply(Cow::Borrowed("ดี🤔"), &ctx).unwrap();
        assert_eq!(out, "ดี 🤔");
    }

    #[test]
    fn placeholders_stay_intact() {
        let ctx = Context::default();
        let input = "hey WSNUMBER ไม่ได้";
        let out = InsertSpaces.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
