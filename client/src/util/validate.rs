//! Client-side form validation.
//!
//! Each form validator returns the cleaned submission or every field error,
//! first failing rule per field, in field order. Rules only improve UX; the
//! backend re-validates everything.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Characters that satisfy the password symbol rule.
pub const PASSWORD_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

pub const PASSWORD_MIN_CHARS: usize = 10;

pub const PASSWORD_RULE_MESSAGE: &str = "At least 10 characters, letters, numbers, and one special character";
pub const PASSWORDS_MISMATCH_MESSAGE: &str = "Passwords do not match!";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email!";

/// Form inputs that can carry an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    Confirm,
    OldPassword,
    Token,
    Url,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Errors collected while validating one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    /// Record an error unless the field already has one.
    fn push(&mut self, field: Field, message: &'static str) {
        if self.get(field).is_none() {
            self.0.push(FieldError { field, message });
        }
    }

    fn check(&mut self, field: Field, ok: bool, message: &'static str) {
        if !ok {
            self.push(field, message);
        }
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// ≥10 characters with at least one ASCII letter, digit and symbol.
///
/// Length counts Unicode scalar values, newlines included.
pub fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_CHARS
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// `local@domain.tld` shape: no whitespace, one `@`, dotted domain without
/// empty labels.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Absolute `http`/`https` URL with a host.
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some_and(|h| !h.is_empty()))
        .unwrap_or(false)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// # Errors
///
/// Returns the field errors when a rule fails.
pub fn validate_login(email: &str, password: &str) -> Result<LoginInput, FormErrors> {
    let email = email.trim();
    let mut errors = FormErrors::default();
    errors.check(Field::Email, !email.is_empty(), "Please enter your email");
    errors.check(Field::Email, is_valid_email(email), INVALID_EMAIL_MESSAGE);
    errors.check(Field::Password, !password.is_empty(), "Please enter your password");
    errors.finish(|| LoginInput { email: email.to_owned(), password: password.to_owned() })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// # Errors
///
/// Returns the field errors when a rule fails.
pub fn validate_register(email: &str, password: &str, confirm: &str) -> Result<RegisterInput, FormErrors> {
    let email = email.trim();
    let mut errors = FormErrors::default();
    errors.check(Field::Email, !email.is_empty(), "Please input your email!");
    errors.check(Field::Email, is_valid_email(email), INVALID_EMAIL_MESSAGE);
    check_new_password(&mut errors, password, confirm, "Please input your password!");
    errors.finish(|| RegisterInput { email: email.to_owned(), password: password.to_owned() })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetInput {
    pub token: String,
    pub password: String,
}

/// `token` comes from the reset link's query string.
///
/// # Errors
///
/// Returns the field errors when a rule fails.
pub fn validate_reset(token: Option<&str>, password: &str, confirm: &str) -> Result<ResetInput, FormErrors> {
    let token = token.map(str::trim).unwrap_or_default();
    let mut errors = FormErrors::default();
    errors.check(Field::Token, !token.is_empty(), "This reset link is missing its token.");
    check_new_password(&mut errors, password, confirm, "Please input your new password!");
    errors.finish(|| ResetInput { token: token.to_owned(), password: password.to_owned() })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileInput {
    pub email: String,
    /// Present only when a new password was typed.
    pub password_change: Option<PasswordChange>,
}

/// The new password is optional; when given it must be strong, confirmed,
/// and accompanied by the current password.
///
/// # Errors
///
/// Returns the field errors when a rule fails.
pub fn validate_profile(
    email: &str,
    old_password: &str,
    new_password: &str,
    confirm: &str,
) -> Result<ProfileInput, FormErrors> {
    let email = email.trim();
    let mut errors = FormErrors::default();
    errors.check(Field::Email, !email.is_empty(), "Please input your email!");
    errors.check(Field::Email, is_valid_email(email), INVALID_EMAIL_MESSAGE);
    let changing = !new_password.is_empty();
    if changing {
        errors.check(Field::OldPassword, !old_password.is_empty(), "Enter your current password to change it.");
        errors.check(Field::Password, is_strong_password(new_password), PASSWORD_RULE_MESSAGE);
    }
    errors.check(Field::Confirm, new_password == confirm, PASSWORDS_MISMATCH_MESSAGE);
    errors.finish(|| ProfileInput {
        email: email.to_owned(),
        password_change: changing.then(|| PasswordChange {
            old_password: old_password.to_owned(),
            new_password: new_password.to_owned(),
        }),
    })
}

/// Returns the trimmed URL to shorten.
///
/// # Errors
///
/// Returns the field error when the URL is missing or not http(s).
pub fn validate_shorten(url: &str) -> Result<String, FormErrors> {
    let url = url.trim();
    let mut errors = FormErrors::default();
    errors.check(Field::Url, !url.is_empty(), "Paste a URL to shorten");
    errors.check(Field::Url, is_valid_url(url), "Must be a valid URL");
    errors.finish(|| url.to_owned())
}

fn check_new_password(errors: &mut FormErrors, password: &str, confirm: &str, required: &'static str) {
    errors.check(Field::Password, !password.is_empty(), required);
    errors.check(Field::Password, is_strong_password(password), PASSWORD_RULE_MESSAGE);
    errors.check(Field::Confirm, !confirm.is_empty(), "Please confirm your password!");
    errors.check(Field::Confirm, password == confirm, PASSWORDS_MISMATCH_MESSAGE);
}
