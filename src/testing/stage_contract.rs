use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " ภาษาไทย ", "TEST", ""]
    }

    /// Samples that should pass through unchanged (zero-copy test).
    ///
    /// Default: plain lowercase ASCII words, which no stage touches.
    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",   // Simple lowercase
            "world",   // Another simple word
            "abc def", // Simple phrase with space
            "",        // Empty string
        ]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Whether `apply(apply(x)) == apply(x)` must hold.
    fn idempotent() -> bool {
        true
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → clean input stays borrowed, same pointer
/// 2. `stage_is_idempotent` → applying twice yields same result as once (if declared)
/// 3. `needs_apply_is_sound` → `false` from `needs_apply` means `apply` changes nothing
/// 4. `handles_empty_string` → `""` maps to `""`
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
/// 6. `transforms_as_declared` → every `should_transform` pair holds
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_sound(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
        $crate::testing::stage_contract::transforms_as_declared(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

#[cfg(test)]
use crate::context::Context;
#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx).unwrap() {
        stage.apply(text, ctx).unwrap()
    } else {
        text
    }
}

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &pass_through in S::should_pass_through() {
        let original_ptr = pass_through as *const str;
        let text = stage.apply(Cow::Borrowed(pass_through), &ctx).unwrap();
        assert_eq!(text.as_ref(), pass_through);
        assert!(
            matches!(text, Cow::Borrowed(_)),
            "stage `{}` allocated on pass-through sample `{pass_through}`",
            stage.name()
        );
        assert_eq!(original_ptr, text.as_ref() as *const str);
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    if !S::idempotent() {
        return;
    }
    let ctx = Context::default();
    for &input in S::samples() {
        let once = run(stage, Cow::Borrowed(input), &ctx).into_owned();
        let twice = run(stage, Cow::Borrowed(once.as_str()), &ctx);
        assert_eq!(
            once,
            twice.as_ref(),
            "stage `{}` not idempotent on `{input}`",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn needs_apply_is_sound<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let must_not_touch = ["", "hello", "world", "abc def"];
    for &input in S::samples().iter().chain(must_not_touch.iter()) {
        let predicted = stage.needs_apply(input, &ctx).unwrap();
        // Owned input so stages that always rebuild are not penalised.
        let output = stage.apply(Cow::Owned(input.to_owned()), &ctx).unwrap();
        if !predicted {
            assert_eq!(
                output.as_ref(),
                input,
                "needs_apply() said no, but stage `{}` changed `{input}`",
                stage.name()
            );
        }
    }
}

#[cfg(test)]
pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    assert_eq!(run(stage, Cow::Borrowed(""), &ctx).as_ref(), "");
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for input in [
        "Hello 世界 русский ภาษาไทย العربية 🤔🤔 ﾏﾝﾎﾞ 𝙧𝙖𝙩",
        "@@@ ### 555 ถถถ www. http:// <<>> &amp;& \n\n\t",
        "\u{200D}\u{FE0F}\u{20E3}\u{E007F}",
    ] {
        let _ = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
    }
}

#[cfg(test)]
pub fn transforms_as_declared<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for &(input, expected) in S::should_transform() {
        let out = run(stage, Cow::Borrowed(input), &ctx);
        assert_eq!(out.as_ref(), expected, "stage `{}` on `{input}`", stage.name());
    }
}
