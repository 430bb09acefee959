//! Input validation for admin-created records.
//!
//! Player identifiers and level/prize titles share the same rules: trimmed,
//! non-empty, and no longer than the column width.

use crate::error::CoreError;

/// Maximum length (in characters) of a player identifier or a title.
pub const MAX_NAME_LEN: usize = 100;

/// Validate a short text field and return its trimmed form.
///
/// `field` is used in the error message only.
pub fn validate_name(value: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters (got {len})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Like [`validate_name`] but for optional update fields.
pub fn validate_optional_name(
    value: Option<&str>,
    field: &str,
) -> Result<Option<String>, CoreError> {
    value.map(|v| validate_name(v, field)).transpose()
}
