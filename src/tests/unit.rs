#[cfg(test)]
mod unit_tests {

    use crate::{
        insert_spaces, is_date_str, is_datetime_str, is_latin_str, is_number_str, is_thai_str,
        normalize_accented_chars, normalize_at_mention, normalize_at_mention_with,
        normalize_email, normalize_emoji, normalize_filename, normalize_haha, normalize_link,
        normalize_link_with, normalize_num, normalize_phone, normalize_special_chars,
        normalize_text_pairs, remove_dup_spaces, remove_emoji, remove_hashtags,
        remove_others_char, remove_tag, replace_dup_chars, replace_dup_emojis,
        replace_rep_after,
    };
    use std::borrow::Cow;

    const MIX_TEXT: &str = "hey123ไม่ได้เป็นคนที่เกเรyoyo&แฮ่&&hello";

    #[test]
    fn classifiers() {
        assert!(is_date_str("2020-02-02"));
        assert!(is_datetime_str("2020-02-02 15:14:13"));
        assert!(is_number_str("3"));
        assert!(is_latin_str("ABCD1234"));
        assert!(!is_latin_str(MIX_TEXT));
        assert!(is_thai_str("อยู่คนเดียวได้บ้างแล้ว"));
        assert!(!is_thai_str(MIX_TEXT));
    }

    #[test]
    fn text_pairs() {
        assert_eq!(
            normalize_text_pairs("\u{0E40}\u{0E40}\u{0E4D}\u{0E32}ฤาฦา๑๒๓๔๕๖๗๘๙๐,.=!?"),
            "\u{0E41}\u{0E33}ฤๅฦๅ1234567890   !?"
        );
        assert_eq!(normalize_text_pairs("a\r\nb\tc\0"), "a  b  c ");

        let unnorm = format!(
            "\u{0E40}\u{0E40}\u{0E4D}\u{0E32}ฤาฦา๑๒๓๔๕๖๗๘๙๐,.=\0\r\n\t\u{00A0}{}",
            "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~"
        );
        assert_eq!(
            normalize_text_pairs(&unnorm),
            "แำฤๅฦๅ1234567890         !                     ?            "
        );
    }

    #[test]
    fn links() {
        assert_eq!(normalize_link("http://www.youtube.com"), " WSLINK ");
        assert_eq!(normalize_link("google.com/search?q=hello"), " WSLINK ");
        for untouched in [
            "This is a book.This is a cat.",
            "foo.b@gmail.com",
            "foo_foo@gmail.com",
        ] {
            let out = normalize_link(untouched);
            assert!(matches!(out, Cow::Borrowed(_)), "{untouched}");
        }
        assert_eq!(normalize_link_with("see www.example.org", "<url>"), "see <url>");
    }

    #[test]
    fn filename() {
        assert_eq!(normalize_filename("logo.png"), " WSFILENAME ");
    }

    #[test]
    fn mentions() {
        assert_eq!(normalize_at_mention("@test1234"), " WSNAME ");
        assert_eq!(
            normalize_at_mention("twitter:@wisesight @123456 (มี@ด้วย)"),
            "twitter: WSNAME   WSNAME  (มี WSNAME )"
        );
        assert_eq!(
            normalize_at_mention("it has to be cleaned: @#$%^@#$%^&"),
            "it has to be cleaned:  WSNAME "
        );
        assert_eq!(
            normalize_at_mention("email: example@something.com"),
            "email: example@something.com"
        );
        assert_eq!(normalize_at_mention_with("@a", "@user"), "@user");
    }

    #[test]
    fn simple_entities() {
        assert_eq!(normalize_email("test_eiei_za@gmail.com"), " WSEMAIL ");
        assert_eq!(normalize_haha("555555"), " WSHAHA ");
        assert_eq!(normalize_num("3"), " WSNUMBER ");
        assert_eq!(normalize_num("1234"), " WSNUMBER ");
        assert_eq!(normalize_phone("0123456789"), " WSPHONE ");
    }

    #[test]
    fn special_and_accented() {
        assert_eq!(
            normalize_special_chars("𝑇ℎ𝑒 𝑚𝑜𝑠𝑡 𝑖𝑚𝑝𝑜𝑟𝑡𝑎𝑛𝑡 𝑡ℎ𝑖𝑛𝑔 𝑖𝑠 𝑡𝑜 𝑒𝑛𝑗𝑜𝑦 น้าทุกคน"),
            "The most important thing is to enjoy น้าทุกคน"
        );
        assert_eq!(normalize_accented_chars("Cześć NESCAFÉ"), "Czesc NESCAFE");
    }

    #[test]
    fn hashtags() {
        assert_eq!(
            remove_hashtags("ศูนย์ฉีดวัคซีน เปิด Walk in ทุกเข็ม #covid19 #covid_19 #covid-19"),
            "ศูนย์ฉีดวัคซีน เปิด Walk in ทุกเข็ม   "
        );
        assert_eq!(
            remove_hashtags("ฉลองครบรอบ #เซลใหญ่วันเกิด10ปี@Lazada พบทีเด็ด 3,300,000 บาท"),
            "ฉลองครบรอบ  พบทีเด็ด 3,300,000 บาท"
        );
        assert_eq!(
            remove_hashtags("ฉลองครบรอบ #%@&^%!%^%@^% พบทีเด็ด"),
            "ฉลองครบรอบ  พบทีเด็ด"
        );
        assert_eq!(remove_hashtags("สวัสดีปีกุน #สวัสดี5555"), "สวัสดีปีกุน ");
        assert_eq!(remove_hashtags("สวัสดีปีระกา #5555สวัสดี"), "สวัสดีปีระกา ");
    }

    #[test]
    fn tags_and_spaces() {
        assert_eq!(remove_tag("<div>Test HTML</div>"), "Test HTML");
        assert_eq!(
            remove_dup_spaces("นอนได้แล้ว\n\n\n\n\nเดี๋ยวพรุ่งนี้เขาก็กลับมา"),
            "นอนได้แล้ว\nเดี๋ยวพรุ่งนี้เขาก็กลับมา"
        );
        assert_eq!(remove_dup_spaces("a\n\n\n\nb"), "a\nb");
        assert_eq!(
            insert_spaces(MIX_TEXT),
            "hey 123 ไม่ได้เป็นคนที่เกเร yoyo & แฮ่ && hello"
        );
    }

    #[test]
    fn emoji() {
        let text = "🌈อย่าฟอล เดี๋ยวจน🌻รีวิวในแท็ก";
        assert_eq!(remove_emoji(text), "อย่าฟอล เดี๋ยวจนรีวิวในแท็ก");
        assert_eq!(normalize_emoji(text), "🌈 อย่าฟอล เดี๋ยวจน 🌻 รีวิวในแท็ก");
        assert_eq!(replace_dup_emojis("อ้ายอ้วน😣😣"), "อ้ายอ้วน😣");
        assert_eq!(
            replace_dup_emojis("👧👧👧👧👧👧 111111 3️⃣3️⃣3️⃣3️⃣3️⃣3️⃣"),
            "👧 111111 3️⃣"
        );
    }

    #[test]
    fn others_char() {
        let out = remove_others_char("˚┉┉┉┉┉༝✧ คิดว่า English 𝙧𝙖𝙩 ﾏﾝﾎﾞ．🤔🤔");
        assert_eq!(
            out.split_whitespace().collect::<Vec<_>>(),
            ["คิดว่า", "English", "🤔🤔"]
        );
    }

    #[test]
    fn dup_chars_generations_disagree_on_digits() {
        let text = "เพราะว่าเธออออออออและเขา ถ่านนนนนนนนไฟเก่ายังร้อนรอวันรื้อฟื้นนนนนนนนน";
        let expected = "เพราะว่าเธอและเขา ถ่านไฟเก่ายังร้อนรอวันรื้อฟื้น";
        assert_eq!(replace_dup_chars(text), expected);
        assert_eq!(replace_rep_after(text), expected);

        assert_eq!(replace_dup_chars("111111 ok"), "111111 ok");
        assert_eq!(replace_rep_after("111111 ok"), "1 ok");
        assert_eq!(replace_dup_chars("ดีจ้า"), "ดีจ้า");
    }
}
