//! Success message constants used throughout the application.

// Property messages
pub const MSG_PROPERTIES_LISTED: &str = "Properties retrieved";
pub const MSG_PROPERTY_FOUND: &str = "Property found";
pub const MSG_PROPERTY_CREATED: &str = "Property created successfully";
pub const MSG_PROPERTY_VALUE: &str = "Property value calculated";
pub const MSG_PROPERTY_AREA: &str = "Property area calculated";

// Neighborhood messages
pub const MSG_NEIGHBORHOODS_LISTED: &str = "Neighborhoods retrieved";
