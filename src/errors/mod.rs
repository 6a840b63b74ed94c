use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::constants::{
    CODE_DATABASE_MANAGEMENT_FAILED, CODE_DATABASE_READ_FAILED, CODE_DATABASE_WRITE_FAILED,
    CODE_DB_ENTRY_ALREADY_EXISTS, CODE_INVALID_PROPERTY_ID, CODE_NEIGHBORHOOD_NOT_FOUND,
    CODE_NULL_ID, CODE_PROPERTY_NOT_FOUND, CODE_VALIDATION_FAILED, ERR_INVALID_PROPERTY_ID,
    ERR_NEIGHBORHOOD_NOT_FOUND, ERR_NULL_ID, ERR_PROPERTY_NOT_FOUND, ERR_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;

/// Failures raised by the persistence layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("database read failed: {0}")]
    Read(String),
    #[error("database write failed: {0}")]
    Write(String),
    #[error("database management failed: {0}")]
    Management(String),
    #[error("entry already exists: {0}")]
    AlreadyExists(String),
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl ApiError {
    pub fn bad_request(code: &str, message: &str) -> Self {
        ApiError::BadRequest {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found(code: &str, message: &str) -> Self {
        ApiError::NotFound {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    pub fn null_id() -> Self {
        Self::bad_request(CODE_NULL_ID, ERR_NULL_ID)
    }

    pub fn invalid_property_id() -> Self {
        Self::bad_request(CODE_INVALID_PROPERTY_ID, ERR_INVALID_PROPERTY_ID)
    }

    pub fn property_not_found() -> Self {
        Self::not_found(CODE_PROPERTY_NOT_FOUND, ERR_PROPERTY_NOT_FOUND)
    }

    pub fn neighborhood_not_found() -> Self {
        Self::not_found(CODE_NEIGHBORHOOD_NOT_FOUND, ERR_NEIGHBORHOOD_NOT_FOUND)
    }

    pub fn validation(errors: Vec<String>) -> Self {
        ApiError::ValidationError {
            code: CODE_VALIDATION_FAILED.to_string(),
            errors,
        }
    }

    /// Machine-readable code carried by every variant.
    pub fn code(&self) -> &str {
        match self {
            ApiError::BadRequest { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::Conflict { code, .. }
            | ApiError::InternalServerError { code, .. }
            | ApiError::ValidationError { code, .. } => code,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::Conflict { code, message } => {
                write!(f, "Conflict [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } | ApiError::ValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (message, errors) = match self {
            ApiError::BadRequest { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::InternalServerError { message, .. } => (message.clone(), None),
            ApiError::ValidationError { errors, .. } => {
                (ERR_VALIDATION_FAILED.to_string(), Some(errors.clone()))
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            code: self.code().to_string(),
            message,
            errors,
        })
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        let message = err.to_string();
        match err {
            RepositoryError::Read(_) => ApiError::InternalServerError {
                code: CODE_DATABASE_READ_FAILED.to_string(),
                message,
            },
            RepositoryError::Write(_) => ApiError::InternalServerError {
                code: CODE_DATABASE_WRITE_FAILED.to_string(),
                message,
            },
            RepositoryError::Management(_) => ApiError::InternalServerError {
                code: CODE_DATABASE_MANAGEMENT_FAILED.to_string(),
                message,
            },
            RepositoryError::AlreadyExists(_) => ApiError::Conflict {
                code: CODE_DB_ENTRY_ALREADY_EXISTS.to_string(),
                message,
            },
        }
    }
}
