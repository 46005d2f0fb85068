use crate::{
    context::Context,
    stage::{Stage, StageError, keep_if_unchanged},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Full Unicode lowercasing. Thai has no case and passes through untouched.
pub struct LowerCase;

#[inline(always)]
fn is_lower_fixed_point(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(text.bytes().any(|b| b.is_ascii_uppercase()));
        }
        Ok(!text.chars().all(is_lower_fixed_point))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let lowered = text.to_lowercase();
        Ok(keep_if_unchanged(text, lowered))
    }
}

impl StageTestConfig for LowerCase {
    fn samples() -> &'static [&'static str] {
        &["Test HTML", "NESCAFÉ", "ภาษาไทย MIXED", "ΣΊΣΥΦΟΣ"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[("Test HTML", "test html"), ("ภาษาไทย ABC", "ภาษาไทย abc")]
    }
}
