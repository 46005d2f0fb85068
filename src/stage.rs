//! Core normalization stage abstraction.
//!
//! Every pass of the pipeline is a [`Stage`]: it takes the whole text as a
//! `Cow<str>` and returns the whole text. A stage that finds nothing to do
//! hands the input back unchanged, so a borrowed input stays borrowed and no
//! allocation happens on clean text.
//!
//! `needs_apply` is a cheap pre-scan. It may say `true` when `apply` ends up
//! changing nothing (a regex guard rejected every candidate), but it never
//! says `false` when `apply` would change the text.

pub mod dup_chars;
pub mod dup_spaces;
pub mod email;
pub mod emoji;
pub mod filename;
pub mod haha;
pub mod hashtag;
pub mod insert_spaces;
pub mod link;
pub mod lower_case;
pub mod mention;
pub mod number;
pub mod phone;
pub mod remove_others_char;
pub mod remove_tag;
pub mod replace_pairs;
pub mod special_chars;
pub mod unescape_html;

use crate::context::Context;
use regex::{Captures, Regex, Replacer};
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for logging and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check.  Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation.  Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

/// `Regex::replace_all` over a `Cow`, returning the input itself when nothing matched.
pub(crate) fn replace_regex<'a, R: Replacer>(
    re: &Regex,
    text: Cow<'a, str>,
    rep: R,
) -> Cow<'a, str> {
    let replaced = match re.replace_all(&text, rep) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    match replaced {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}

/// Replace every match of `re` that `accept` approves with `placeholder`.
///
/// Stands in for look-around assertions the `regex` crate does not support.
/// A rejected candidate does not consume its text: the scan resumes one
/// character after the candidate's start, which is what a failed look-behind
/// or look-ahead would do in a backtracking engine.
pub(crate) fn replace_guarded<'a>(
    re: &Regex,
    text: Cow<'a, str>,
    placeholder: &str,
    accept: impl Fn(&str, &Captures<'_>) -> bool,
) -> Cow<'a, str> {
    let src = text.as_ref();
    let mut out: Option<String> = None;
    let mut last = 0;
    let mut at = 0;

    while at <= src.len() {
        let Some(caps) = re.captures_at(src, at) else {
            break;
        };
        let Some(m) = caps.get(0) else {
            break;
        };
        if accept(src, &caps) {
            let buf = out.get_or_insert_with(|| String::with_capacity(src.len()));
            buf.push_str(&src[last..m.start()]);
            buf.push_str(placeholder);
            last = m.end();
            at = if m.is_empty() {
                next_boundary(src, m.end())
            } else {
                m.end()
            };
        } else {
            at = next_boundary(src, m.start());
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&src[last..]);
            Cow::Owned(buf)
        }
        None => text,
    }
}

/// Byte offset of the character after the one starting at `at`; past the end
/// when `at` is already at the end.
#[inline]
fn next_boundary(src: &str, at: usize) -> usize {
    src[at..]
        .chars()
        .next()
        .map_or(src.len() + 1, |c| at + c.len_utf8())
}

/// The character immediately before byte offset `at`.
#[inline]
pub(crate) fn char_before(src: &str, at: usize) -> Option<char> {
    src[..at].chars().next_back()
}

/// Keep the original `Cow` when a rebuilt string turned out identical.
#[inline]
pub(crate) fn keep_if_unchanged(text: Cow<'_, str>, out: String) -> Cow<'_, str> {
    if out == text.as_ref() {
        text
    } else {
        Cow::Owned(out)
    }
}

/// `str::trim` over a `Cow`; a borrowed input stays borrowed.
#[inline]
pub(crate) fn trim_cow(text: Cow<'_, str>) -> Cow<'_, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => {
            let trimmed = s.trim();
            if trimmed.len() == s.len() {
                Cow::Owned(s)
            } else {
                Cow::Owned(trimmed.to_owned())
            }
        }
    }
}
