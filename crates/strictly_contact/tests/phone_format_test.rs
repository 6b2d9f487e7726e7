//! Property tests for phone reformatting.

use proptest::prelude::*;

use strictly_contact::{ContactForm, FieldId, PhoneFormat};

proptest! {
    #[test]
    fn format_is_idempotent_for_digit_strings(digits in "[0-9]{0,20}") {
        let phone = PhoneFormat::default();
        let once = phone.format(&digits);
        prop_assert_eq!(phone.format(&once), once);
    }

    #[test]
    fn format_is_idempotent_for_arbitrary_input(raw in "\\PC{0,30}") {
        let phone = PhoneFormat::default();
        let once = phone.format(&raw);
        prop_assert_eq!(phone.format(&once), once);
    }

    #[test]
    fn format_never_exceeds_layout(raw in "[0-9 +()-]{0,40}") {
        let phone = PhoneFormat::default();
        let formatted = phone.format(&raw);
        let digits = formatted.chars().filter(char::is_ascii_digit).count();

        prop_assert!(formatted.starts_with("+370"));
        prop_assert!(digits <= 3 + 8);
        prop_assert!(!formatted.ends_with(' '));
        prop_assert!(!formatted.contains("  "));
    }

    #[test]
    fn form_input_stores_formatted_phone(raw in "[0-9]{1,12}") {
        let mut form = ContactForm::default();
        form.input(FieldId::Phone, &raw);
        let stored = form.raw(FieldId::Phone).to_string();
        prop_assert_eq!(stored.clone(), PhoneFormat::default().format(&raw));

        form.input(FieldId::Phone, &stored);
        prop_assert_eq!(form.raw(FieldId::Phone), stored.as_str());
    }
}

#[test]
fn test_backspace_walks_digits_down_to_prefix() {
    let mut form = ContactForm::default();
    form.input(FieldId::Phone, "861");
    assert_eq!(form.raw(FieldId::Phone), "+370 861");

    form.backspace(FieldId::Phone);
    assert_eq!(form.raw(FieldId::Phone), "+370 86");
    form.backspace(FieldId::Phone);
    form.backspace(FieldId::Phone);
    assert_eq!(form.raw(FieldId::Phone), "+370");
    form.backspace(FieldId::Phone);
    assert_eq!(form.raw(FieldId::Phone), "+370");
}
