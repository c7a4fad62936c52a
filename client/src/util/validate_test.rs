use super::*;

const STRONG: &str = "correct-Horse9";

// =============================================================
// Password complexity
// =============================================================

#[test]
fn strong_password_needs_all_four_rules() {
    assert!(is_strong_password(STRONG));
    assert!(is_strong_password("abcdefgh1!"));
}

#[test]
fn password_shorter_than_ten_is_rejected() {
    assert!(!is_strong_password("abcdefg1!"));
}

#[test]
fn password_without_letter_is_rejected() {
    assert!(!is_strong_password("1234567890!"));
}

#[test]
fn password_without_digit_is_rejected() {
    assert!(!is_strong_password("abcdefghij!"));
}

#[test]
fn password_without_symbol_is_rejected() {
    assert!(!is_strong_password("abcdefghij1"));
    assert!(!is_strong_password("abcdefghij1 ~"));
}

#[test]
fn every_listed_symbol_counts() {
    for symbol in PASSWORD_SYMBOLS.chars() {
        let candidate = format!("abcdefgh1{symbol}");
        assert!(is_strong_password(&candidate), "{candidate}");
    }
}

#[test]
fn non_ascii_letters_do_not_count_as_letters() {
    assert!(!is_strong_password("éééééééé1!"));
}

// =============================================================
// E-mail + URL shape
// =============================================================

#[test]
fn email_shape() {
    assert!(is_valid_email("ana@example.com"));
    assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    assert!(!is_valid_email("ana@example"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ana@@example.com"));
    assert!(!is_valid_email("ana@example..com"));
    assert!(!is_valid_email("ana @example.com"));
    assert!(!is_valid_email("ana.example.com"));
}

#[test]
fn url_shape() {
    assert!(is_valid_url("https://example.com/path?q=1"));
    assert!(is_valid_url("http://localhost:8080"));
    assert!(!is_valid_url("example.com"));
    assert!(!is_valid_url("ftp://example.com/file"));
    assert!(!is_valid_url("javascript:alert(1)"));
}

// =============================================================
// Forms
// =============================================================

#[test]
fn login_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login("  ana@example.com ", "pw"),
        Ok(LoginInput { email: "ana@example.com".to_owned(), password: "pw".to_owned() })
    );
    let errors = validate_login("", "").unwrap_err();
    assert_eq!(errors.get(Field::Email), Some("Please enter your email"));
    assert_eq!(errors.get(Field::Password), Some("Please enter your password"));
}

#[test]
fn register_accepts_matching_strong_passwords() {
    let input = validate_register("ana@example.com", STRONG, STRONG).unwrap();
    assert_eq!(input.password, STRONG);
}

#[test]
fn register_reports_first_failing_rule_per_field() {
    let errors = validate_register("nope", "short", "").unwrap_err();
    assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL_MESSAGE));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_RULE_MESSAGE));
    assert_eq!(errors.get(Field::Confirm), Some("Please confirm your password!"));
    assert_eq!(errors.get(Field::OldPassword), None);
}

#[test]
fn password_length_counts_characters_not_bytes() {
    // 10 characters, 13 bytes.
    assert!(is_strong_password("ééé1!abcde"));
    assert!(!is_strong_password("éé1!abcde"));
    assert!(is_strong_password("abc\n1!defg"));
}

#[test]
fn confirmation_must_match_exactly() {
    let errors = validate_register("ana@example.com", STRONG, "correct-Horse9 ").unwrap_err();
    assert_eq!(errors.get(Field::Confirm), Some(PASSWORDS_MISMATCH_MESSAGE));
    assert_eq!(errors.get(Field::Password), None);
}

#[test]
fn reset_requires_token() {
    let errors = validate_reset(None, STRONG, STRONG).unwrap_err();
    assert_eq!(errors.get(Field::Token), Some("This reset link is missing its token."));
    assert!(validate_reset(Some("  "), STRONG, STRONG).is_err());
    assert_eq!(
        validate_reset(Some("tok-1"), STRONG, STRONG),
        Ok(ResetInput { token: "tok-1".to_owned(), password: STRONG.to_owned() })
    );
}

#[test]
fn reset_rejects_weak_and_mismatched_passwords() {
    let errors = validate_reset(Some("tok"), "", "x").unwrap_err();
    assert_eq!(errors.get(Field::Password), Some("Please input your new password!"));
    assert_eq!(errors.get(Field::Confirm), Some(PASSWORDS_MISMATCH_MESSAGE));
}

#[test]
fn profile_without_password_change() {
    let input = validate_profile("ana@example.com", "", "", "").unwrap();
    assert_eq!(input.password_change, None);
}

#[test]
fn profile_password_change_needs_old_password_and_confirmation() {
    let errors = validate_profile("ana@example.com", "", STRONG, "").unwrap_err();
    assert_eq!(errors.get(Field::OldPassword), Some("Enter your current password to change it."));
    assert_eq!(errors.get(Field::Confirm), Some(PASSWORDS_MISMATCH_MESSAGE));

    let input = validate_profile("ana@example.com", "old-Pass1!", STRONG, STRONG).unwrap();
    assert_eq!(
        input.password_change,
        Some(PasswordChange { old_password: "old-Pass1!".to_owned(), new_password: STRONG.to_owned() })
    );
}

#[test]
fn profile_rejects_weak_new_password() {
    let errors = validate_profile("ana@example.com", "old", "weak", "weak").unwrap_err();
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_RULE_MESSAGE));
}

#[test]
fn profile_rejects_confirmation_without_new_password() {
    let errors = validate_profile("ana@example.com", "", "", STRONG).unwrap_err();
    assert_eq!(errors.get(Field::Confirm), Some(PASSWORDS_MISMATCH_MESSAGE));
}

#[test]
fn shorten_requires_http_url() {
    assert_eq!(validate_shorten(" https://example.com/a "), Ok("https://example.com/a".to_owned()));
    assert_eq!(validate_shorten("").unwrap_err().get(Field::Url), Some("Paste a URL to shorten"));
    assert_eq!(validate_shorten("not a url").unwrap_err().get(Field::Url), Some("Must be a valid URL"));
}
