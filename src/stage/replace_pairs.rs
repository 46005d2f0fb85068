use crate::{
    context::Context,
    data::{ACCENTED_PAIRS, COMBINED_NORMALIZE_PAIRS, ReplacePairs, replace_text},
    stage::{Stage, StageError},
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Ordered literal substitution over one or more pair tables.
///
/// Tables run in order and every pair inside a table runs in order, each as a
/// global replacement of all occurrences.
#[derive(Clone, Copy)]
pub struct PairTable {
    name: &'static str,
    tables: &'static [ReplacePairs],
}

impl PairTable {
    /// Thai vowel/tone fixes, Thai digits to ASCII, then punctuation to spaces.
    pub const NORMALIZE_TEXT: Self = Self::new("normalize_text_pairs", COMBINED_NORMALIZE_PAIRS);

    /// Accented Latin letters to their plain base letter.
    pub const ACCENTED_CHARS: Self = Self::new("normalize_accented_chars", &[ACCENTED_PAIRS]);

    pub const fn new(name: &'static str, tables: &'static [ReplacePairs]) -> Self {
        Self { name, tables }
    }

    pub(crate) fn replace<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        self.tables
            .iter()
            .fold(text, |text, &pairs| replace_text(text, pairs))
    }
}

impl Stage for PairTable {
    fn name(&self) -> &'static str {
        self.name
    }

    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(self
            .tables
            .iter()
            .flat_map(|pairs| pairs.iter())
            .any(|&(from, _)| text.contains(from)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(self.replace(text))
    }
}

/// Contract samples for [`PairTable::NORMALIZE_TEXT`].
impl StageTestConfig for PairTable {
    fn samples() -> &'static [&'static str] {
        &[
            "\u{0E40}\u{0E40}\u{0E4D}\u{0E32}ฤาฦา๑๒๓๔๕๖๗๘๙๐,.=!?",
            "hey123ไม่ได้เป็นคนที่เกเรyoyo&แฮ่&&hello",
            "line\r\nbreak\ttab",
            "ภาษาไทย",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (
                "\u{0E40}\u{0E40}\u{0E4D}\u{0E32}ฤาฦา๑๒๓๔๕๖๗๘๙๐,.=!?",
                "\u{0E41}\u{0E33}ฤๅฦๅ1234567890   !?",
            ),
            ("line\r\nbreak\ttab", "line  break  tab"),
            ("“quoted” (x)", " quoted   x "),
            ("zero\u{200B}width", "zerowidth"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(PairTable::NORMALIZE_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accented_chars() {
        let ctx = Context::default();
        let out = PairTable::ACCENTED_CHARS
            .apply(Cow::Borrowed("Cześć NESCAFÉ"), &ctx)
            .unwrap();
        assert_eq!(out, "Czesc NESCAFE");
    }

    #[test]
    fn stage_names_follow_table() {
        assert_eq!(PairTable::NORMALIZE_TEXT.name(), "normalize_text_pairs");
        assert_eq!(PairTable::ACCENTED_CHARS.name(), "normalize_accented_chars");
    }

    #[test]
    fn tone_mark_moves_before_sara_am() {
        let ctx = Context::default();
        let out = PairTable::NORMALIZE_TEXT
            .apply(Cow::Borrowed("น\u{0E33}\u{0E49}"), &ctx)
            .unwrap();
        assert_eq!(out, "น\u{0E49}\u{0E33}");
    }
}
