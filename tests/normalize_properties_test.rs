use form_enhancer::core::normalize::{
    digits_only, format_numeric, is_name_char, lowercase_email, normalize_name,
};
use form_enhancer::FieldTable;
use proptest::prelude::*;

// 混合 ASCII、Latin-1 與其他字元
fn mixed_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[a-zA-Z0-9 &.,\\-\t\u{00C0}-\u{00FF}]{0,40}",
        "[ ]{0,5}[a-zçãéíõú]{1,10}[ ]{2,6}[A-Z]{1,10}[ ]{0,5}",
    ]
}

proptest! {
    #[test]
    fn test_name_output_uses_allowed_chars_only(s in mixed_text()) {
        let out = normalize_name(&s);
        prop_assert!(out.chars().all(is_name_char), "unexpected char in {:?}", out);
        prop_assert!(!out.contains("  "), "double space in {:?}", out);
    }

    #[test]
    fn test_name_normalization_is_idempotent(s in mixed_text()) {
        let once = normalize_name(&s);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn test_name_output_is_uppercase_stable(s in mixed_text()) {
        let out = normalize_name(&s);
        prop_assert_eq!(out.to_uppercase(), out);
    }

    #[test]
    fn test_email_is_lowercased_and_idempotent(s in any::<String>()) {
        let once = lowercase_email(&s);
        prop_assert_eq!(&once, &s.to_lowercase());
        prop_assert_eq!(lowercase_email(&once), once);
    }

    #[test]
    fn test_digits_only_keeps_ascii_digits(s in mixed_text(), cap in proptest::option::of(1usize..8)) {
        let out = digits_only(&s, cap);
        prop_assert!(out.chars().all(|c| c.is_ascii_digit()));
        if let Some(cap) = cap {
            prop_assert!(out.chars().count() <= cap);
        }
    }

    #[test]
    fn test_capped_fields_never_exceed_four_digits(s in "[0-9a-z\\- ]{0,30}") {
        let table = FieldTable::builtin();
        for id in ["agencia", "final"] {
            let out = table.apply(id, &s).unwrap();
            prop_assert!(out.len() <= 4);
            prop_assert!(out.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_numeric_has_at_most_one_separator(s in "[0-9.,a-z\\- ]{0,30}") {
        let out = format_numeric(&s);
        prop_assert!(out.chars().all(|c| c.is_ascii_digit() || c == '.'));
        prop_assert!(out.matches('.').count() <= 1);
        prop_assert_eq!(format_numeric(&out), out.clone());
    }
}

#[test]
fn test_numeric_examples() {
    assert_eq!(format_numeric("12,5"), "12.5");
    assert_eq!(format_numeric("1.2.3"), "1.23");
    assert_eq!(format_numeric("a1b2"), "12");
}
