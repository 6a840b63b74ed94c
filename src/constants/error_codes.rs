//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";

// Identifier errors
pub const CODE_NULL_ID: &str = "NULL_ID";
pub const CODE_INVALID_PROPERTY_ID: &str = "INVALID_PROPERTY_ID";

// Lookup errors
pub const CODE_PROPERTY_NOT_FOUND: &str = "PROPERTY_NOT_FOUND";
pub const CODE_NEIGHBORHOOD_NOT_FOUND: &str = "NEIGHBORHOOD_NOT_FOUND";

// Database errors
pub const CODE_DATABASE_READ_FAILED: &str = "DATABASE_READ_FAILED";
pub const CODE_DATABASE_WRITE_FAILED: &str = "DATABASE_WRITE_FAILED";
pub const CODE_DATABASE_MANAGEMENT_FAILED: &str = "DATABASE_MANAGEMENT_FAILED";
pub const CODE_DB_ENTRY_ALREADY_EXISTS: &str = "DB_ENTRY_ALREADY_EXISTS";

// Generic errors
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
