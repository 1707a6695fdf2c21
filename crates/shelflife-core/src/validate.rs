//! Registration Form Validation
//!
//! Client-side predicate checks run before the signup request goes out.
//! They exist for responsiveness only; the server re-validates and its
//! error message wins when present.

use thiserror::Error;

/// One variant per distinct user-facing rejection message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Email must not be empty")]
    EmptyEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must contain a letter")]
    PasswordNeedsLetter,

    #[error("Password must contain a digit")]
    PasswordNeedsDigit,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Check signup input, stopping at the first failing rule.
pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), SignupError> {
    if username.trim().is_empty() {
        return Err(SignupError::EmptyUsername);
    }
    if email.trim().is_empty() {
        return Err(SignupError::EmptyEmail);
    }
    if password.chars().count() < 8 {
        return Err(SignupError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(SignupError::PasswordNeedsLetter);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(SignupError::PasswordNeedsDigit);
    }
    if password != confirm {
        return Err(SignupError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_signup_passes() {
        assert_eq!(
            validate_signup("alice", "alice@example.com", "abc12345", "abc12345"),
            Ok(())
        );
    }

    #[test]
    fn test_password_without_digit_rejected() {
        let err = validate_signup("alice", "a@example.com", "abcdefgh", "abcdefgh").unwrap_err();
        assert_eq!(err, SignupError::PasswordNeedsDigit);
        assert_eq!(err.to_string(), "Password must contain a digit");
    }

    #[test]
    fn test_password_without_letter_rejected() {
        let err = validate_signup("alice", "a@example.com", "12345678", "12345678").unwrap_err();
        assert_eq!(err, SignupError::PasswordNeedsLetter);
    }

    #[test]
    fn test_short_password_rejected_before_content_checks() {
        let err = validate_signup("alice", "a@example.com", "a1", "a1").unwrap_err();
        assert_eq!(err, SignupError::PasswordTooShort);
    }

    #[test]
    fn test_blank_username_rejected_first() {
        // Everything else is also wrong, but the username check runs first.
        let err = validate_signup("   ", "", "x", "y").unwrap_err();
        assert_eq!(err, SignupError::EmptyUsername);
    }

    #[test]
    fn test_blank_email_rejected() {
        let err = validate_signup("alice", "  ", "abc12345", "abc12345").unwrap_err();
        assert_eq!(err, SignupError::EmptyEmail);
    }

    #[test]
    fn test_mismatched_confirmation_rejected() {
        let err = validate_signup("alice", "a@example.com", "abc12345", "abc12346").unwrap_err();
        assert_eq!(err, SignupError::PasswordMismatch);
    }
}
