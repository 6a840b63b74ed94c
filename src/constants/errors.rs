//! Error message constants used throughout the application.

// Identifier errors
pub const ERR_NULL_ID: &str = "Property id is missing";
pub const ERR_INVALID_PROPERTY_ID: &str = "Invalid property ID format";

// Lookup errors
pub const ERR_PROPERTY_NOT_FOUND: &str = "Property not found";
pub const ERR_NEIGHBORHOOD_NOT_FOUND: &str = "No neighborhood registered for the property's district";

// Request errors
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
pub const ERR_INVALID_JSON_BODY: &str = "Request body is not valid JSON for this endpoint";

// Validation errors
pub const ERR_NOT_CAPITALIZED: &str = "Must start with an uppercase letter";

// Seeding errors
pub const ERR_SEED_FILE_UNREADABLE: &str = "Failed to read neighborhoods seed file";
pub const ERR_SEED_FILE_MALFORMED: &str = "Neighborhoods seed file is not a valid JSON array";
