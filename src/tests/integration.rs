#[cfg(test)]
mod integration_tests {

    use crate::{Placeholders, Preprocessor, ReplaceDupChars, preprocess, remove_stopwords};
    use std::borrow::Cow;

    const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

    fn complex_text() -> String {
        let unnorm =
            format!("\u{0E40}\u{0E40}\u{0E4D}\u{0E32}ฤาฦา๑๒๓๔๕๖๗๘๙๐,.=\0\r\n\t\u{00A0}{PUNCTUATION}");
        [
            "<div>Test HTML</div>",
            "http://www.youtube.com",
            "@test1234",
            "test_eiei_za@gmail.com",
            "&amp;",
            "0123456789",
            unnorm.as_str(),
            "hey123ไม่ได้เป็นคนที่เกเรyoyo&แฮ่&&hello",
            "555555",
            "🌈อย่าฟอล เดี๋ยวจน🌻รีวิวในแท็ก",
            "3",
            "˚┉┉┉┉┉༝✧ คิดว่าน่าจะเหลือแค่ภาษาไทย กับ ˢʰᵉ 𝙧𝙖𝙩𝙘𝙝𝙖𝙙𝙖𝙥𝙞𝙨𝙚𝙠 English และ  ﾏﾝﾎﾞﾏﾝﾎﾞ．．．ນະຄອນຫລ🤔🤔🤔🤔ວງ．ﺍﻟﻘﻔﺺ🤣",
        ]
        .join(" ")
    }

    #[test]
    fn simple_pipeline() {
        let out = preprocess(
            "<div>Test HTML</div> http://www.youtube.com @test1234 test_eiei_za@gmail.com &amp; 0123456789 3",
        )
        .unwrap();
        assert_eq!(out, "test html WSLINK WSNAME WSEMAIL WSPHONE WSNUMBER");
    }

    #[test]
    fn complex_pipeline() {
        let text = complex_text();
        let out = preprocess(&text).unwrap();
        assert_eq!(
            out,
            "test html WSLINK WSNAME WSEMAIL WSPHONE แำฤๅฦๅ WSNUMBER ! ? hey WSNUMBER \
             ไม่ได้เป็นคนที่เกเร yoyo แฮ่ hello WSHAHA 🌈 อย่าฟอล เดี๋ยวจน 🌻 รีวิวในแท็ก \
             WSNUMBER คิดว่าน่าจะเหลือแค่ภาษาไทย กับ english และ 🤔 🤔 🤔 🤔 🤣"
        );
    }

    #[test]
    fn forum_post_with_markup() {
        let text = "Updated ประกาศเตือนภัย&nbsp;&nbsp;ออกเมื่อพฤหัสที่ 3&nbsp;&nbsp;เวลา 04:00 น.<br />\n\
            <a href=\"https://www.tmd.go.th/programs//uploads/announces/2019-01-03_06014.pdf\" rel=\"nofollow\" target=\"_blank\" >\
            https://www.tmd.go.th/programs//uploads/announces/2019-01-03_06014.pdf</a><br />\n\
            <img class=\"img-in-post\" src=\"https://f.ptcdn.info/755/061/000/pkqdd02d0qwDpjgs6mFQ-o.png\" data-image=\"img:800x508\" /><br />\n\
            <br />\nUpdated การพยากรณ์เส้นทางพายุ&nbsp;&nbsp;ออกโดยกรมอุตุ ฯ&nbsp;&nbsp;เมื่อพฤหัสที่ 3&nbsp;&nbsp;เวลา 05:00 น. ครับ<br />\n\
            <img class=\"img-in-post\" src=\"https://f.ptcdn.info/755/061/000/pkqdfu1dt286fsVcGubK-o.png\" data-image=\"img:815x594\" />";
        let out = preprocess(text).unwrap();
        assert_eq!(
            out,
            "updated ประกาศเตือนภัย ออกเมื่อพฤหัสที่ WSNUMBER เวลา WSNUMBER WSNUMBER น WSLINK \
             updated การพยากรณ์เส้นทางพายุ ออกโดยกรมอุตุ ฯ เมื่อพฤหัสที่ WSNUMBER เวลา \
             WSNUMBER WSNUMBER น ครับ"
        );
    }

    #[test]
    fn empty_and_clean_input_stay_borrowed() {
        let out = preprocess("").unwrap();
        assert_eq!(out, "");

        let input = "สวัสดี ครับ";
        let out = preprocess(input).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn mention_is_not_read_as_link() {
        let out = preprocess("ขอบคุณ @shopee.th มากค่ะ").unwrap();
        assert_eq!(out, "ขอบคุณ WSNAME มากค่ะ");
    }

    #[test]
    fn link_glued_to_thai_word() {
        for (input, expected) in [
            ("ดูคลิปhttps://bit.ly/xyz", "ดูคลิป WSLINK"),
            ("อ่านต่อที่http://example.com/news", "อ่านต่อที่ WSLINK"),
        ] {
            let out = preprocess(input).unwrap();
            assert_eq!(out, expected);
            assert!(!out.contains("http"), "{out}");
        }
    }

    #[test]
    fn thai_phone_digits() {
        let out = preprocess("โทร ๐๘๑-๒๓๔-๕๖๗๘ ได้เลย").unwrap();
        assert_eq!(out, "โทร WSPHONE ได้เลย");
    }

    #[test]
    fn repeated_digits_are_not_laughter() {
        let out = preprocess("รหัส 5555 1234").unwrap();
        assert_eq!(out, "รหัส WSNUMBER WSNUMBER");
    }

    #[test]
    fn configured_preprocessor_with_extra_cleanup() {
        let p = Preprocessor::builder()
            .placeholders(Placeholders {
                haha: " lol ".into(),
                ..Placeholders::default()
            })
            .add_stage(ReplaceDupChars::REPLACE_DUP_CHARS)
            .build();
        let out = p.preprocess("ร้อนนนนนนน ฮ่าๆ hahaha").unwrap();
        assert_eq!(out, "ร้อน ฮ่าๆ lol");
    }

    #[test]
    fn tokens_then_stopwords() {
        let out = preprocess("ฉันชอบกิน และ ที่ บ้าน").unwrap();
        let tokens: Vec<&str> = out.split(' ').collect();
        assert_eq!(
            remove_stopwords(tokens, &[], true),
            ["ฉันชอบกิน", "บ้าน"]
        );
    }
}
