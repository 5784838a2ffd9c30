//! Input validation for the auth forms.
//!
//! All checks run before any network call; the returned message is shown
//! verbatim in an error toast. The account service reuses the same email
//! check so the two sides agree on what a well-formed address is.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::protocol::{FormFields, FormKind};

/// Minimum sign-up password length.
pub const MIN_PASSWORD_LEN: usize = 6;

// Deliberately loose: something@something.something, no whitespace.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Check an email address against the simple shared pattern.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate the fields of an auth form before submission.
///
/// Rules are checked in order: required fields, email shape, and for
/// sign-up a minimum password length.
pub fn validate_form(kind: FormKind, fields: &FormFields) -> Result<(), String> {
    let missing_fullname = kind == FormKind::SignUp
        && fields
            .fullname
            .as_deref()
            .map_or(true, |f| f.trim().is_empty());

    if missing_fullname || fields.email.trim().is_empty() || fields.password.is_empty() {
        return Err("Please fill in all required fields".to_string());
    }

    if !is_valid_email(fields.email.trim()) {
        return Err("Please enter a valid email address".to_string());
    }

    if kind == FormKind::SignUp && fields.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signin_fields(email: &str, password: &str) -> FormFields {
        FormFields {
            fullname: None,
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn signup_fields(fullname: &str, email: &str, password: &str) -> FormFields {
        FormFields {
            fullname: Some(fullname.to_string()),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("guest@example.com"));
        assert!(is_valid_email("a.b+c@mail.resort.co"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("no@dot"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaced name@example.com"));
    }

    #[test]
    fn test_required_fields() {
        let err = validate_form(FormKind::SignIn, &signin_fields("", "secret1")).unwrap_err();
        assert!(err.contains("fill in all required fields"));

        let err = validate_form(FormKind::SignIn, &signin_fields("guest@example.com", ""))
            .unwrap_err();
        assert!(err.contains("fill in all required fields"));

        // Sign-up additionally requires a fullname
        let err = validate_form(FormKind::SignUp, &signup_fields("", "guest@example.com", "secret1"))
            .unwrap_err();
        assert!(err.contains("fill in all required fields"));

        let mut fields = signin_fields("guest@example.com", "secret1");
        fields.fullname = None;
        assert!(validate_form(FormKind::SignIn, &fields).is_ok());
    }

    #[test]
    fn test_email_shape() {
        let err =
            validate_form(FormKind::SignIn, &signin_fields("not-an-email", "secret1")).unwrap_err();
        assert!(err.contains("valid email"));
    }

    #[test]
    fn test_signup_password_length() {
        let err = validate_form(
            FormKind::SignUp,
            &signup_fields("Ada Guest", "guest@example.com", "abc"),
        )
        .unwrap_err();
        assert!(err.contains("at least 6 characters"));

        // Sign-in has no length rule
        assert!(validate_form(FormKind::SignIn, &signin_fields("guest@example.com", "abc")).is_ok());

        assert!(validate_form(
            FormKind::SignUp,
            &signup_fields("Ada Guest", "guest@example.com", "abcdef"),
        )
        .is_ok());
    }
}
