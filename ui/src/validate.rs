// Signup form validation, mirrored from the web front end's rules.

use std::sync::OnceLock;

use regex::Regex;

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Anything@anything.anything, with no whitespace or extra '@'.
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Minimum-length password policy.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
    ConfirmPassword,
}

/// One offending input plus the message the UI renders next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Checks every rule and reports all failures at once, so the UI can mark
    /// each offending input rather than stopping at the first.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.username.trim().chars().count() < MIN_USERNAME_CHARS {
            errors.push(FieldError::new(
                Field::Username,
                "Username must be at least 3 characters",
            ));
        }
        if !is_strong_password(&self.password) {
            errors.push(FieldError::new(
                Field::Password,
                "Password must be at least 6 characters",
            ));
        }
        if self.password != self.confirm_password {
            errors.push(FieldError::new(
                Field::ConfirmPassword,
                "Passwords do not match",
            ));
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("trader@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("traderexample.com"));
        assert!(!is_valid_email("trader@example"));
        assert!(!is_valid_email("trader @example.com"));
        assert!(!is_valid_email("trader@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(!is_strong_password("12345"));
        assert!(is_strong_password("123456"));
    }

    #[test]
    fn test_valid_signup_form() {
        let form = SignupForm {
            username: "trader".to_string(),
            password: "hunter2x".to_string(),
            confirm_password: "hunter2x".to_string(),
        };
        assert!(form.is_valid());
    }

    #[test]
    fn test_short_username_is_rejected_even_with_padding() {
        let form = SignupForm {
            username: "  ab  ".to_string(),
            password: "hunter2x".to_string(),
            confirm_password: "hunter2x".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::Username);
        assert_eq!(errors[0].message, "Username must be at least 3 characters");
    }

    #[test]
    fn test_all_failures_reported_together() {
        let form = SignupForm {
            username: "ab".to_string(),
            password: "short".to_string(),
            confirm_password: "different".to_string(),
        };
        let fields: Vec<_> = form.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::Username, Field::Password, Field::ConfirmPassword]
        );
    }

    #[test]
    fn test_mismatched_confirmation() {
        let form = SignupForm {
            username: "trader".to_string(),
            password: "hunter2x".to_string(),
            confirm_password: "hunter2y".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, Field::ConfirmPassword);
    }
}
