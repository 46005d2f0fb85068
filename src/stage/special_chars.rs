use crate::{
    context::Context,
    stage::{Stage, StageError, keep_if_unchanged},
    testing::stage_contract::StageTestConfig,
    unicode::{is_latin_combining_mark, is_thai},
};
use icu_normalizer::DecomposingNormalizerBorrowed;
use std::{borrow::Cow, sync::LazyLock};

static ICU4X_NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfkd);

/// Flattens stylised and accented Latin to plain ASCII.
///
/// Everything outside the Thai block goes through NFKD (`𝑇ℎ𝑒` → `The`,
/// `ﬁ` → `fi`) and the split-off Latin combining marks are dropped
/// (`é` → `e`). Thai runs are copied as they are, so `ำ` is not decomposed
/// into `ํา`.
pub struct NormalizeSpecialChars;

#[inline]
fn needs_flattening(text: &str) -> bool {
    !ICU4X_NFKD.is_normalized(text) || text.chars().any(is_latin_combining_mark)
}

pub(crate) fn normalize_special_chars(text: Cow<'_, str>) -> Cow<'_, str> {
    if !needs_flattening(&text) {
        return text;
    }
    let mut out = String::with_capacity(text.len());
    let mut rest: &str = &text;
    while let Some(first) = rest.chars().next() {
        let thai = is_thai(first);
        let split = rest.find(|c: char| is_thai(c) != thai).unwrap_or(rest.len());
        let (run, tail) = rest.split_at(split);
        if thai {
            out.push_str(run);
        } else {
            out.extend(
                ICU4X_NFKD
                    .normalize_iter(run.chars())
                    .filter(|&c| !is_latin_combining_mark(c)),
            );
        }
        rest = tail;
    }
    keep_if_unchanged(text, out)
}

impl Stage for NormalizeSpecialChars {
    fn name(&self) -> &'static str {
        "normalize_special_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(needs_flattening(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(normalize_special_chars(text))
    }
}

impl StageTestConfig for NormalizeSpecialChars {
    fn samples() -> &'static [&'static str] {
        &[
            "𝑇ℎ𝑒 𝑚𝑜𝑠𝑡 𝑖𝑚𝑝𝑜𝑟𝑡𝑎𝑛𝑡 𝑡ℎ𝑖𝑛𝑔 𝑖𝑠 𝑡𝑜 𝑒𝑛𝑗𝑜𝑦 น้าทุกคน",
            "Cześć NESCAFÉ",
            "ทำงาน",
            "ﬁle ½",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "𝑇ℎ𝑒 𝑚𝑜𝑠𝑡 𝑖𝑚𝑝𝑜𝑟𝑡𝑎𝑛𝑡 𝑡ℎ𝑖𝑛𝑔 𝑖𝑠 𝑡𝑜 𝑒𝑛𝑗𝑜𝑦 น้าทุกคน",
                "The most important thing is to enjoy น้าทุกคน",
            ),
            ("Cześć NESCAFÉ", "Czesc NESCAFE"),
            ("ทำงาน", "ทำงาน"),
            ("𝙧𝙖𝙩", "rat"),
            ("ﬁle", "file"),
        ]
    }
}
