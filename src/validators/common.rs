//! Common validation utilities and helpers.

use uuid::Uuid;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Errors of nested structs and list items (such as rooms) are flattened
/// into the same list of messages.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors = Vec::new();
    collect_messages(&e, &mut errors);
    ApiError::validation(errors)
}

fn collect_messages(e: &ValidationErrors, out: &mut Vec<String>) {
    for kind in e.errors().values() {
        match kind {
            ValidationErrorsKind::Field(errs) => out.extend(errs.iter().map(|err| {
                err.message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string())
            })),
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, out),
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    collect_messages(inner, out);
                }
            }
        }
    }
}

/// Parse a property id from a path segment.
///
/// A blank id is reported as a null id; anything that is not a UUID is
/// rejected as malformed. Returns the id in its canonical hyphenated form.
pub fn parse_property_id(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::null_id());
    }

    Uuid::parse_str(trimmed)
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| ApiError::invalid_property_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CODE_INVALID_PROPERTY_ID, CODE_NULL_ID, CODE_VALIDATION_FAILED};
    use crate::models::{CreatePropertyRequest, RoomRequest};
    use validator::Validate;

    #[test]
    fn test_blank_id_is_null() {
        assert_eq!(parse_property_id("").unwrap_err().code(), CODE_NULL_ID);
        assert_eq!(parse_property_id("   ").unwrap_err().code(), CODE_NULL_ID);
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let err = parse_property_id("not-a-uuid").unwrap_err();
        assert_eq!(err.code(), CODE_INVALID_PROPERTY_ID);
    }

    #[test]
    fn test_id_is_normalized() {
        let id = parse_property_id(" 3F2B8C1E-5D4A-4E7B-9A61-0C2D8E4F6A10 ").unwrap();
        assert_eq!(id, "3f2b8c1e-5d4a-4e7b-9a61-0c2d8e4f6a10");
    }

    #[test]
    fn test_nested_room_errors_are_flattened() {
        let req = CreatePropertyRequest {
            name: "casa".to_string(),
            district: "Moema".to_string(),
            rooms: vec![RoomRequest {
                name: "kitchen".to_string(),
                width: 30.0,
                length: 5.0,
            }],
        };

        match validation_errors_to_api_error(req.validate().unwrap_err()) {
            ApiError::ValidationError { code, errors } => {
                assert_eq!(code, CODE_VALIDATION_FAILED);
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| e == "Room width must be greater than 0 and at most 25 meters"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
