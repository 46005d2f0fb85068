use crate::{
    context::Context,
    data::REPLACE_FILENAME,
    patterns::Patterns,
    stage::{Stage, StageError, replace_regex},
    testing::stage_contract::StageTestConfig,
};
use memchr::memchr;
use regex::NoExpand;
use std::borrow::Cow;

/// Replaces `name.ext` tokens with a known web/media extension
/// (default `" WSFILENAME "`). A trailing query string goes with the match.
pub struct NormalizeFilename {
    placeholder: Cow<'static, str>,
}

impl Default for NormalizeFilename {
    fn default() -> Self {
        Self::with_placeholder(REPLACE_FILENAME)
    }
}

impl NormalizeFilename {
    pub fn with_placeholder(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }
}

pub(crate) fn normalize_filename<'a>(
    text: Cow<'a, str>,
    patterns: &Patterns,
    placeholder: &str,
) -> Cow<'a, str> {
    replace_regex(&patterns.filename, text, NoExpand(placeholder))
}

impl Stage for NormalizeFilename {
    fn name(&self) -> &'static str {
        "normalize_filename"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(memchr(b'.', text.as_bytes()).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(normalize_filename(text, ctx.patterns(), &self.placeholder))
    }
}

impl StageTestConfig for NormalizeFilename {
    fn samples() -> &'static [&'static str] {
        &[
            "index.html",
            "ดูรูป photo.JPG?w=200 สิ",
            "report.docx",
            "end of sentence. next",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("index.html", " WSFILENAME "),
            ("ดูรูป photo.JPG?w=200 สิ", "ดูรูป  WSFILENAME  สิ"),
            ("song.mp3 กับ clip.mp4", " WSFILENAME  กับ  WSFILENAME "),
            ("report.docx", "report.docx"),
            ("end of sentence. next", "end of sentence. next"),
        ]
    }
}
