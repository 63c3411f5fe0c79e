// Mon Oct 19 2026 - Alex

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^+0-9]").expect("valid phone pattern"));

/// Cleans a raw phone string down to ASCII digits with an optional leading `+`.
///
/// Every character other than `0-9` and `+` is dropped first; afterwards only
/// a `+` sitting at the very start of what remains survives.
pub fn normalize(raw: &str) -> String {
    let stripped = DISALLOWED.replace_all(raw, "");

    let mut normalized = String::with_capacity(stripped.len());
    for (i, ch) in stripped.chars().enumerate() {
        if ch == '+' && i != 0 {
            continue;
        }
        normalized.push(ch);
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_normalized(phone: &str) -> bool {
        phone
            .char_indices()
            .all(|(i, ch)| ch.is_ascii_digit() || (ch == '+' && i == 0))
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("+1-234-567"), "+1234567");
        assert_eq!(normalize("(050) 123 45 67"), "0501234567");
    }

    #[test]
    fn test_keeps_only_leading_plus() {
        assert_eq!(normalize("+38+050+1"), "+380501");
        assert_eq!(normalize("12+34"), "1234");
        assert_eq!(normalize("++1"), "+1");
    }

    #[test]
    fn test_plus_after_stripped_prefix_becomes_leading() {
        assert_eq!(normalize("tel:+44 20"), "+4420");
        assert_eq!(normalize("a+b+1"), "+1");
    }

    #[test]
    fn test_no_digits_yields_empty() {
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("+"), "+");
    }

    #[test]
    fn test_non_ascii_digits_are_removed() {
        assert_eq!(normalize("١٢٣45"), "45");
    }

    #[test]
    fn test_idempotent() {
        let samples = ["+1-234-567", "++--12+3", "phone: 555 0100", "", "+", "0+0+0", "x+y"];
        for raw in samples {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn test_output_is_normalized() {
        let samples = ["+1 (234) 567", "+++", "9+9+9", "  +  ", "٣+1", "+x1+"];
        for raw in samples {
            let phone = normalize(raw);
            assert!(is_normalized(&phone), "{:?} -> {:?}", raw, phone);
            assert!(phone.matches('+').count() <= 1);
        }
    }

    proptest! {
        #[test]
        fn proptest_normalize_is_idempotent(raw in any::<String>()) {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn proptest_normalize_output_alphabet(raw in any::<String>()) {
            let phone = normalize(&raw);
            prop_assert!(is_normalized(&phone), "{:?} -> {:?}", raw, phone);
        }

        #[test]
        fn proptest_normalize_keeps_every_ascii_digit(raw in "[0-9a-z+() -]{0,24}") {
            let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
            let phone = normalize(&raw);
            prop_assert_eq!(phone.trim_start_matches('+'), digits.as_str());
        }
    }
}
