//! Property-specific field validators.

use validator::ValidationError;

use crate::constants::ERR_NOT_CAPITALIZED;

/// Custom validator requiring names to start with an uppercase letter.
pub fn validate_capitalized(value: &str) -> Result<(), ValidationError> {
    match value.chars().next() {
        Some(first) if first.is_uppercase() => Ok(()),
        _ => {
            let mut error = ValidationError::new("not_capitalized");
            error.message = Some(ERR_NOT_CAPITALIZED.into());
            Err(error)
        }
    }
}
