use super::*;

fn field_error(schema: &Schema, name: &str, values: &FormValues) -> Option<&'static str> {
    schema.validate(values).err().and_then(|errors| errors.get(name))
}

fn valid_registration() -> FormValues {
    REGISTER
        .initial_values()
        .with("username", "alice")
        .with("email", "user@example.com")
        .with("password", "Password1!")
        .with("confirmPassword", "Password1!")
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_pattern_compiles() {
    assert!(EMAIL_RE.is_ok());
}

#[test]
fn email_accepts_plain_address() {
    assert!(is_email("user@example.com"));
    assert!(is_email("first.last-name@mail.example.org"));
}

#[test]
fn email_rejects_missing_at_or_domain() {
    for bad in ["userexample.com", "user@", "user@example", "@example.com", "user@.com", "user@example.c"] {
        assert!(!is_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn login_email_reports_format_error() {
    let values = LOGIN.initial_values().with("email", "not-an-email").with("password", "x");
    assert_eq!(field_error(&LOGIN, "email", &values), Some("Invalid email format"));
}

#[test]
fn required_message_wins_over_format_for_blank_email() {
    let values = LOGIN.initial_values().with("email", "   ");
    assert_eq!(field_error(&LOGIN, "email", &values), Some("Email is required"));
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_rejects_weak_value() {
    assert!(!is_strong_password("password"));
    assert!(!is_strong_password("Password1"));
    assert!(!is_strong_password("password1!"));
    assert!(!is_strong_password("Pass1!"));
}

#[test]
fn password_accepts_strong_value() {
    assert!(is_strong_password("Password1!"));
}

#[test]
fn password_length_counts_utf16_units() {
    // Each emoji is a surrogate pair: 3 + 3 * 2 = 9 units.
    assert!(is_strong_password("A1!\u{1F600}\u{1F600}\u{1F600}"));
    assert!(!is_strong_password("A1!\u{e9}\u{e9}\u{e9}\u{e9}"));
}

#[test]
fn password_rejects_line_terminators() {
    assert!(!is_strong_password("Password1!\n"));
    assert!(!is_strong_password("Password1!\u{2028}"));
    assert!(!is_strong_password("Pass\u{2029}word1!"));
}

#[test]
fn register_password_field_rejects_plain_word() {
    let values = valid_registration().with("password", "password").with("confirmPassword", "password");
    assert_eq!(
        field_error(&REGISTER, "password", &values),
        Some("Password must contain at least one uppercase letter, one special character, and one number")
    );
}

#[test]
fn confirm_password_must_match() {
    let values = valid_registration().with("confirmPassword", "Password2!");
    let errors = REGISTER.validate(&values).expect_err("mismatch");
    assert_eq!(errors.get("confirmPassword"), Some("Passwords must match"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn login_password_only_needs_a_value() {
    let values = LOGIN.initial_values().with("email", "user@example.com").with("password", "password");
    assert_eq!(LOGIN.validate(&values), Ok(()));
}

// =============================================================
// Username and whole-form validation
// =============================================================

#[test]
fn username_needs_four_characters() {
    let values = valid_registration().with("username", "bob");
    assert_eq!(field_error(&REGISTER, "username", &values), Some("Username must be at least 4 characters"));
}

#[test]
fn valid_registration_passes() {
    assert_eq!(REGISTER.validate(&valid_registration()), Ok(()));
}

#[test]
fn blank_registration_reports_every_field_as_required() {
    let errors = REGISTER.validate(&REGISTER.initial_values()).expect_err("blank");
    assert_eq!(errors.get("username"), Some("Username is required"));
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
    assert_eq!(errors.get("confirmPassword"), Some("Confirm Password is required"));
}

// =============================================================
// Wallet
// =============================================================

#[test]
fn wallet_fields_accept_numbers() {
    let values = WALLET
        .initial_values()
        .with("accountBalance", "1000")
        .with("savingsAmount", "250.50")
        .with("cashInHand", "0");
    assert_eq!(WALLET.validate(&values), Ok(()));
}

#[test]
fn wallet_fields_reject_non_numeric_input() {
    let values = WALLET
        .initial_values()
        .with("accountBalance", "lots")
        .with("savingsAmount", "1000")
        .with("cashInHand", "12 dollars");
    let errors = WALLET.validate(&values).expect_err("non-numeric");
    assert_eq!(errors.get("accountBalance"), Some("Account balance must be a number"));
    assert_eq!(errors.get("savingsAmount"), None);
    assert_eq!(errors.get("cashInHand"), Some("Cash in hand must be a number"));
}

// =============================================================
// Schema metadata
// =============================================================

#[test]
fn initial_values_cover_every_field() {
    let values = WALLET.initial_values();
    for field in WALLET.fields {
        assert_eq!(values.get(field.name), "");
    }
}

#[test]
fn unknown_field_has_no_message() {
    assert_eq!(field_error(&LOGIN, "username", &FormValues::new()), None);
}

#[test]
fn password_inputs_render_as_password_type() {
    let field = REGISTER.fields.iter().find(|f| f.name == "confirmPassword").expect("field");
    assert_eq!(field.input.html_type(), "password");
}
