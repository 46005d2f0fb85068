//! Character-class helpers shared by the stages.

use crate::patterns::Patterns;

/// Thai block, U+0E00..=U+0E7F.
#[inline(always)]
pub const fn is_thai(c: char) -> bool {
    matches!(c, '\u{0E00}'..='\u{0E7F}')
}

/// Thai numeral glyphs ๐..๙.
#[inline(always)]
pub const fn is_thai_digit(c: char) -> bool {
    matches!(c, '\u{0E50}'..='\u{0E59}')
}

/// Decimal digit (Nd) in any script; ASCII and Thai are checked first.
///
/// Superscripts and fractions such as `²` or `½` are numeric but not digits.
#[inline(always)]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
        || is_thai_digit(c)
        || (!c.is_ascii() && c.is_numeric() && is_other_decimal(c))
}

#[cold]
fn is_other_decimal(c: char) -> bool {
    let mut buf = [0u8; 4];
    Patterns::global()
        .decimal_digit
        .is_match(c.encode_utf8(&mut buf))
}

/// Any ASCII or Thai digit in `text`.
#[inline]
pub fn has_digit(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit()) || text.chars().any(is_thai_digit)
}

/// Combining Diacritical Marks block, U+0300..=U+036F.
///
/// These are what NFKD splits off accented Latin letters. Thai marks live in
/// the Thai block and are not matched.
#[inline(always)]
pub const fn is_latin_combining_mark(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}
