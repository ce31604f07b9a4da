//! Validation for public inquiries (quote requests and newsletter signups).

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length accepted for free-text inquiry fields (characters).
pub const MAX_FIELD_LENGTH: usize = 5_000;

/// Validate that `value` is non-blank and within [`MAX_FIELD_LENGTH`].
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > MAX_FIELD_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_FIELD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an e-mail address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Canonical form of a newsletter address: trimmed and lower-cased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
