//! Static tables consumed by the pipeline.
//!
//! Pair tables are ordered: they are applied left to right with literal,
//! global substring replacement, so an entry may rely on the output of an
//! earlier one.

use phf::{Set, phf_set};
use std::borrow::Cow;

/// An ordered `(from, to)` literal substitution table.
pub type ReplacePairs = &'static [(&'static str, &'static str)];

// ── Placeholder tokens ──────────────────────────────────────────────────────
// Padded with spaces so a substituted token never glues onto its neighbours.

pub const REPLACE_LINK: &str = " WSLINK ";
pub const REPLACE_EMAIL: &str = " WSEMAIL ";
pub const REPLACE_AT_MENTION: &str = " WSNAME ";
pub const REPLACE_HAHA: &str = " WSHAHA ";
pub const REPLACE_NUMBER: &str = " WSNUMBER ";
pub const REPLACE_PHONE: &str = " WSPHONE ";
pub const REPLACE_FILENAME: &str = " WSFILENAME ";
/// Part of the placeholder vocabulary; no built-in stage emits it.
pub const REPLACE_DATE: &str = " WSDATE ";

/// Vowel and tone-mark sequences typed in a non-canonical order.
pub const THAI_NORMALIZE_PAIRS: ReplacePairs = &[
    ("\u{0E40}\u{0E40}", "\u{0E41}"), // เเ -> แ
    ("\u{0E4D}\u{0E48}\u{0E32}", "\u{0E48}\u{0E33}"), // ํ่า -> ่ำ
    ("\u{0E4D}\u{0E49}\u{0E32}", "\u{0E49}\u{0E33}"), // ํ้า -> ้ำ
    ("\u{0E4D}\u{0E4A}\u{0E32}", "\u{0E4A}\u{0E33}"), // ํ๊า -> ๊ำ
    ("\u{0E4D}\u{0E4B}\u{0E32}", "\u{0E4B}\u{0E33}"), // ํ๋า -> ๋ำ
    ("\u{0E4D}\u{0E32}", "\u{0E33}"),                 // ํา -> ำ
    ("\u{0E33}\u{0E48}", "\u{0E48}\u{0E33}"),         // ำ่ -> ่ำ
    ("\u{0E33}\u{0E49}", "\u{0E49}\u{0E33}"),         // ำ้ -> ้ำ
    ("\u{0E33}\u{0E4A}", "\u{0E4A}\u{0E33}"),         // ำ๊ -> ๊ำ
    ("\u{0E33}\u{0E4B}", "\u{0E4B}\u{0E33}"),         // ำ๋ -> ๋ำ
    ("\u{0E48}\u{0E48}", "\u{0E48}"),
    ("\u{0E49}\u{0E49}", "\u{0E49}"),
    ("\u{0E4A}\u{0E4A}", "\u{0E4A}"),
    ("\u{0E4B}\u{0E4B}", "\u{0E4B}"),
    ("\u{0E24}\u{0E32}", "\u{0E24}\u{0E45}"), // ฤา -> ฤๅ
    ("\u{0E26}\u{0E32}", "\u{0E26}\u{0E45}"), // ฦา -> ฦๅ
];

pub const THAI_TO_ARABIC_DIGIT_PAIRS: ReplacePairs = &[
    ("๐", "0"),
    ("๑", "1"),
    ("๒", "2"),
    ("๓", "3"),
    ("๔", "4"),
    ("๕", "5"),
    ("๖", "6"),
    ("๗", "7"),
    ("๘", "8"),
    ("๙", "9"),
];

/// Control characters, invisible characters and punctuation. `!` and `?`
/// survive.
///
/// Tabs and the alternative separators `&`, `/` and `|` open a two-space gap;
/// everything else becomes a single space. Later passes collapse the runs.
pub const TOKENIZE_PAIRS: ReplacePairs = &[
    ("\0", " "),
    ("\r", " "),
    ("\n", " "),
    ("\t", "  "),
    ("\u{00A0}", " "),
    ("\u{200B}", ""),
    ("\u{FEFF}", ""),
    ("\"", " "),
    ("#", " "),
    ("$", " "),
    ("%", " "),
    ("&", "  "),
    ("'", " "),
    ("(", " "),
    (")", " "),
    ("*", " "),
    ("+", " "),
    (",", " "),
    ("-", " "),
    (".", " "),
    ("/", "  "),
    (":", " "),
    (";", " "),
    ("<", " "),
    ("=", " "),
    (">", " "),
    ("@", " "),
    ("[", " "),
    ("\\", " "),
    ("]", " "),
    ("^", " "),
    ("_", " "),
    ("`", " "),
    ("{", " "),
    ("|", "  "),
    ("}", " "),
    ("~", " "),
    ("\u{201C}", " "), // “
    ("\u{201D}", " "), // ”
    ("\u{2018}", " "), // ‘
    ("\u{2019}", " "), // ’
    ("\u{2026}", " "), // …
    ("\u{00AB}", " "), // «
    ("\u{00BB}", " "), // »
];

/// Thai normalization, then digits, then tokenization. Order is load-bearing.
pub const COMBINED_NORMALIZE_PAIRS: &[ReplacePairs] =
    &[THAI_NORMALIZE_PAIRS, THAI_TO_ARABIC_DIGIT_PAIRS, TOKENIZE_PAIRS];

pub const ACCENTED_PAIRS: ReplacePairs = &[
    ("à", "a"),
    ("á", "a"),
    ("â", "a"),
    ("ã", "a"),
    ("ä", "a"),
    ("å", "a"),
    ("ā", "a"),
    ("ă", "a"),
    ("ą", "a"),
    ("À", "A"),
    ("Á", "A"),
    ("Â", "A"),
    ("Ã", "A"),
    ("Ä", "A"),
    ("Å", "A"),
    ("Ā", "A"),
    ("Ă", "A"),
    ("Ą", "A"),
    ("æ", "ae"),
    ("Æ", "AE"),
    ("ç", "c"),
    ("ć", "c"),
    ("ĉ", "c"),
    ("ċ", "c"),
    ("č", "c"),
    ("Ç", "C"),
    ("Ć", "C"),
    ("Ĉ", "C"),
    ("Ċ", "C"),
    ("Č", "C"),
    ("ď", "d"),
    ("đ", "d"),
    ("Ď", "D"),
    ("Đ", "D"),
    ("è", "e"),
    ("é", "e"),
    ("ê", "e"),
    ("ë", "e"),
    ("ē", "e"),
    ("ĕ", "e"),
    ("ė", "e"),
    ("ę", "e"),
    ("ě", "e"),
    ("È", "E"),
    ("É", "E"),
    ("Ê", "E"),
    ("Ë", "E"),
    ("Ē", "E"),
    ("Ĕ", "E"),
    ("Ė", "E"),
    ("Ę", "E"),
    ("Ě", "E"),
    ("ĝ", "g"),
    ("ğ", "g"),
    ("ġ", "g"),
    ("ģ", "g"),
    ("Ĝ", "G"),
    ("Ğ", "G"),
    ("Ġ", "G"),
    ("Ģ", "G"),
    ("ĥ", "h"),
    ("ħ", "h"),
    ("Ĥ", "H"),
    ("Ħ", "H"),
    ("ì", "i"),
    ("í", "i"),
    ("î", "i"),
    ("ï", "i"),
    ("ĩ", "i"),
    ("ī", "i"),
    ("ĭ", "i"),
    ("į", "i"),
    ("ı", "i"),
    ("Ì", "I"),
    ("Í", "I"),
    ("Î", "I"),
    ("Ï", "I"),
    ("Ĩ", "I"),
    ("Ī", "I"),
    ("Ĭ", "I"),
    ("Į", "I"),
    ("İ", "I"),
    ("ĵ", "j"),
    ("Ĵ", "J"),
    ("ķ", "k"),
    ("Ķ", "K"),
    ("ĺ", "l"),
    ("ļ", "l"),
    ("ľ", "l"),
    ("ŀ", "l"),
    ("ł", "l"),
    ("Ĺ", "L"),
    ("Ļ", "L"),
    ("Ľ", "L"),
    ("Ŀ", "L"),
    ("Ł", "L"),
    ("ñ", "n"),
    ("ń", "n"),
    ("ņ", "n"),
    ("ň", "n"),
    ("Ñ", "N"),
    ("Ń", "N"),
    ("Ņ", "N"),
    ("Ň", "N"),
    ("ò", "o"),
    ("ó", "o"),
    ("ô", "o"),
    ("õ", "o"),
    ("ö", "o"),
    ("ø", "o"),
    ("ō", "o"),
    ("ŏ", "o"),
    ("ő", "o"),
    ("Ò", "O"),
    ("Ó", "O"),
    ("Ô", "O"),
    ("Õ", "O"),
    ("Ö", "O"),
    ("Ø", "O"),
    ("Ō", "O"),
    ("Ŏ", "O"),
    ("Ő", "O"),
    ("œ", "oe"),
    ("Œ", "OE"),
    ("ŕ", "r"),
    ("ŗ", "r"),
    ("ř", "r"),
    ("Ŕ", "R"),
    ("Ŗ", "R"),
    ("Ř", "R"),
    ("ś", "s"),
    ("ŝ", "s"),
    ("ş", "s"),
    ("š", "s"),
    ("Ś", "S"),
    ("Ŝ", "S"),
    ("Ş", "S"),
    ("Š", "S"),
    ("ß", "ss"),
    ("ţ", "t"),
    ("ť", "t"),
    ("ŧ", "t"),
    ("Ţ", "T"),
    ("Ť", "T"),
    ("Ŧ", "T"),
    ("ù", "u"),
    ("ú", "u"),
    ("û", "u"),
    ("ü", "u"),
    ("ũ", "u"),
    ("ū", "u"),
    ("ŭ", "u"),
    ("ů", "u"),
    ("ű", "u"),
    ("ų", "u"),
    ("Ù", "U"),
    ("Ú", "U"),
    ("Û", "U"),
    ("Ü", "U"),
    ("Ũ", "U"),
    ("Ū", "U"),
    ("Ŭ", "U"),
    ("Ů", "U"),
    ("Ű", "U"),
    ("Ų", "U"),
    ("ŵ", "w"),
    ("Ŵ", "W"),
    ("ý", "y"),
    ("ÿ", "y"),
    ("ŷ", "y"),
    ("Ý", "Y"),
    ("Ÿ", "Y"),
    ("Ŷ", "Y"),
    ("ź", "z"),
    ("ż", "z"),
    ("ž", "z"),
    ("Ź", "Z"),
    ("Ż", "Z"),
    ("Ž", "Z"),
];

/// Common Thai function words.
pub static THAI_STOPWORDS: Set<&'static str> = phf_set! {
    "กล่าว", "กว่า", "กัน", "กับ", "การ", "ก็", "ก่อน", "ขณะ", "ขอ", "ของ",
    "ขึ้น", "คง", "ครับ", "ครั้ง", "ความ", "คะ", "ค่ะ", "คือ", "จน", "จนถึง",
    "จริง", "จะ", "จัด", "จาก", "จึง", "ช่วง", "ซึ่ง", "ดัง", "ด้วย", "ด้าน",
    "ตั้ง", "ตั้งแต่", "ตาม", "ต่อ", "ต่าง", "ต่างๆ", "ต้อง", "ถึง", "ถูก", "ถ้า",
    "ทั้ง", "ทั้งนี้", "ทาง", "ทำ", "ทำให้", "ที่", "ที่สุด", "ทุก", "นอกจาก", "นะ",
    "นัก", "นั้น", "นำ", "นี้", "น่า", "บาง", "ผล", "ผ่าน", "พบ", "พร้อม",
    "มา", "มาก", "มี", "ยัง", "รวม", "ระหว่าง", "รับ", "ราย", "ร่วม", "ลง",
    "วัน", "ว่า", "สำหรับ", "สุด", "ส่ง", "ส่วน", "หนึ่ง", "หรือ", "หลัง", "หลังจาก",
    "หลาย", "หาก", "อยาก", "อยู่", "อย่าง", "ออก", "อะไร", "อาจ", "อีก", "เขา",
    "เข้า", "เคย", "เฉพาะ", "เช่น", "เดียว", "เดียวกัน", "เนื่องจาก", "เปิด", "เป็น", "เป็นการ",
    "เพราะ", "เพื่อ", "เมื่อ", "เรา", "เริ่ม", "เลย", "เห็น", "เอง", "แต่", "แบบ",
    "แรก", "และ", "แล้ว", "แห่ง", "โดย", "ใน", "ให้", "ได้", "ไป", "ไม่",
    "ไว้", "ฉัน", "คุณ", "มัน", "เธอ", "พวก", "ซะ", "สิ", "เถอะ", "จ้ะ",
};

/// Applies every `(from, to)` pair in order as a global literal replacement.
///
/// Returns the input untouched when no pair occurs in it.
pub fn replace_text<'a>(text: Cow<'a, str>, pairs: ReplacePairs) -> Cow<'a, str> {
    let mut text = text;
    for &(from, to) in pairs {
        if text.contains(from) {
            text = Cow::Owned(text.replace(from, to));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_space_padded() {
        for token in [
            REPLACE_LINK,
            REPLACE_EMAIL,
            REPLACE_AT_MENTION,
            REPLACE_HAHA,
            REPLACE_NUMBER,
            REPLACE_PHONE,
            REPLACE_FILENAME,
            REPLACE_DATE,
        ] {
            assert!(token.starts_with(' ') && token.ends_with(' '), "{token:?}");
        }
    }

    #[test]
    fn replace_text_keeps_table_order() {
        // `ํา` becomes `ำ` first, then the reordering pair moves the tone mark.
        let out = replace_text(Cow::Borrowed("น\u{0E4D}\u{0E32}\u{0E49}"), THAI_NORMALIZE_PAIRS);
        assert_eq!(out, "น\u{0E49}\u{0E33}");
    }

    #[test]
    fn replace_text_zero_copy_when_absent() {
        let input = "nothing to replace";
        let out = replace_text(Cow::Borrowed(input), ACCENTED_PAIRS);
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn stopwords_contain_common_function_words() {
        assert!(THAI_STOPWORDS.contains("และ"));
        assert!(THAI_STOPWORDS.contains("ที่"));
        assert!(!THAI_STOPWORDS.contains("แมว"));
    }
}
