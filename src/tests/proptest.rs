mod prop_tests {
    use crate::{
        is_date_str, normalize_at_mention, normalize_email, normalize_link, normalize_number,
        normalize_phone, preprocess,
    };
    use chrono::NaiveDate;
    use proptest::prelude::*;

    /// Ten-digit mobile number, each digit independently ASCII or Thai.
    fn mixed_glyph_phone() -> impl Strategy<Value = (String, String)> {
        (
            prop::collection::vec((0u32..10, any::<bool>()), 9),
            any::<bool>(),
        )
            .prop_map(|(digits, thai_zero)| {
                let mut ascii = String::from("0");
                let mut mixed = String::from(if thai_zero { "๐" } else { "0" });
                for (d, thai) in digits {
                    let c = char::from_digit(d, 10).unwrap_or('0');
                    ascii.push(c);
                    mixed.push(if thai {
                        char::from_u32(0x0E50 + d).unwrap_or(c)
                    } else {
                        c
                    });
                }
                (ascii, mixed)
            })
    }

    proptest! {
        #[test]
        fn preprocess_never_panics(s in ".{0,300}") {
            let _ = preprocess(&s).unwrap();
        }

        #[test]
        fn preprocess_output_is_trimmed_single_spaced(s in ".{0,300}") {
            let out = preprocess(&s).unwrap();
            prop_assert_eq!(out.trim(), out.as_ref());
            prop_assert!(!out.contains("  "), "{:?}", out);
            prop_assert!(!out.contains('\n'), "{:?}", out);
        }

        #[test]
        fn clean_words_are_zero_copy(s in "[b-g]{1,8}( [b-g]{1,8}){0,6}") {
            let input = s.as_str();
            let out = preprocess(input).unwrap();
            prop_assert!(matches!(out, std::borrow::Cow::Borrowed(b) if b.as_ptr() == input.as_ptr()));
        }

        #[test]
        fn entity_normalizers_idempotent(s in "[a-z0-9@._:/ #ก-ฮ5-]{0,60}") {
            for f in [
                normalize_link,
                normalize_at_mention,
                normalize_email,
                normalize_number,
            ] {
                let once = f(&s).into_owned();
                let twice = f(&once);
                prop_assert_eq!(&once, twice.as_ref());
            }
        }

        #[test]
        fn mixed_glyph_phones_match_ascii((ascii, mixed) in mixed_glyph_phone()) {
            prop_assert_eq!(normalize_phone(&ascii), " WSPHONE ");
            prop_assert_eq!(normalize_phone(&mixed), normalize_phone(&ascii));
            let text = format!("โทร {mixed} นะ");
            prop_assert_eq!(preprocess(&text).unwrap(), "โทร WSPHONE นะ");
        }

        #[test]
        fn date_check_matches_calendar(y in 0u32..10000, m in 0u32..15, d in 0u32..35) {
            let s = format!("{y:04}-{m:02}-{d:02}");
            let valid = NaiveDate::from_ymd_opt(y as i32, m, d).is_some();
            prop_assert_eq!(is_date_str(&s), valid);
        }
    }
}
