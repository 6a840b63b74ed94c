//! MongoDB collection names.

pub const COLLECTION_PROPERTIES: &str = "properties";
pub const COLLECTION_NEIGHBORHOODS: &str = "neighborhoods";
