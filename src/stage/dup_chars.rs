use crate::{
    context::Context,
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
    unicode::is_digit,
};
use std::borrow::Cow;

/// Shortest run that gets collapsed.
const MIN_RUN: usize = 3;

/// Collapses runs of three or more identical non-whitespace characters to one.
///
/// Two variants exist and they disagree on digits: [`REPLACE_DUP_CHARS`]
/// keeps numerals intact (`111111` stays), the legacy [`REPLACE_REP_AFTER`]
/// collapses them too (`111111` becomes `1`). Pick the one matching the data
/// a downstream model was trained on.
///
/// [`REPLACE_DUP_CHARS`]: ReplaceDupChars::REPLACE_DUP_CHARS
/// [`REPLACE_REP_AFTER`]: ReplaceDupChars::REPLACE_REP_AFTER
#[derive(Clone, Copy)]
pub struct ReplaceDupChars {
    collapse_digits: bool,
}

impl ReplaceDupChars {
    pub const REPLACE_DUP_CHARS: Self = Self {
        collapse_digits: false,
    };

    pub const REPLACE_REP_AFTER: Self = Self {
        collapse_digits: true,
    };

    #[inline(always)]
    fn collapses(&self, c: char) -> bool {
        !c.is_whitespace() && (self.collapse_digits || !is_digit(c))
    }

    /// Calls `f` once per run of identical characters.
    #[inline]
    fn for_each_run(text: &str, mut f: impl FnMut(char, usize)) {
        let mut chars = text.chars();
        let Some(mut current) = chars.next() else {
            return;
        };
        let mut len = 1;
        for c in chars {
            if c == current {
                len += 1;
            } else {
                f(current, len);
                current = c;
                len = 1;
            }
        }
        f(current, len);
    }

    fn has_collapsible_run(&self, text: &str) -> bool {
        let mut found = false;
        Self::for_each_run(text, |c, len| {
            found |= len >= MIN_RUN && self.collapses(c);
        });
        found
    }

    pub(crate) fn replace<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.has_collapsible_run(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        Self::for_each_run(&text, |c, len| {
            let keep = if len >= MIN_RUN && self.collapses(c) {
                1
            } else {
                len
            };
            out.extend(std::iter::repeat_n(c, keep));
        });
        Cow::Owned(out)
    }
}

impl Default for ReplaceDupChars {
    fn default() -> Self {
        Self::REPLACE_DUP_CHARS
    }
}

impl Stage for ReplaceDupChars {
    fn name(&self) -> &'static str {
        if self.collapse_digits {
            "replace_rep_after"
        } else {
            "replace_dup_chars"
        }
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(self.has_collapsible_run(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.replace(text))
    }
}

impl StageTestConfig for ReplaceDupChars {
    fn samples() -> &'static [&'static str] {
        &[
            "เพราะว่าเธออออออออและเขา ถ่านนนนนนนนไฟเก่ายังร้อนรอวันรื้อฟื้นนนนนนนนน",
            "ดีมากกก 111111",
            "aa   bb",
            "!!!???",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "เพราะว่าเธออออออออและเขา ถ่านนนนนนนนไฟเก่ายังร้อนรอวันรื้อฟื้นนนนนนนนน",
                "เพราะว่าเธอและเขา ถ่านไฟเก่ายังร้อนรอวันรื้อฟื้น",
            ),
            ("aa   bb", "aa   bb"),
            ("!!!???", "!?"),
        ]
    }
}
