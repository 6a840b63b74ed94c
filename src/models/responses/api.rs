//! Generic API response models.

use serde::Serialize;
use utoipa::ToSchema;

use super::{
    NeighborhoodResponse, PropertyAreaResponse, PropertyCreatedResponse, PropertyPriceResponse,
    PropertyResponse,
};

/// Generic API response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[aliases(
    PropertyEnvelope = ApiResponse<PropertyResponse>,
    PropertyListEnvelope = ApiResponse<Vec<PropertyResponse>>,
    PropertyCreatedEnvelope = ApiResponse<PropertyCreatedResponse>,
    PropertyPriceEnvelope = ApiResponse<PropertyPriceResponse>,
    PropertyAreaEnvelope = ApiResponse<PropertyAreaResponse>,
    NeighborhoodListEnvelope = ApiResponse<Vec<NeighborhoodResponse>>
)]
pub struct ApiResponse<T: Serialize> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data,
        }
    }
}

/// Error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Whether the request was successful (always false for errors)
    #[schema(example = false)]
    pub success: bool,
    /// Machine-readable error code
    #[schema(example = "PROPERTY_NOT_FOUND")]
    pub code: String,
    /// Error message
    #[schema(example = "Property not found")]
    pub message: String,
    /// Detailed validation errors (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status
    #[schema(example = "OK")]
    pub status: String,
    /// Status message
    #[schema(example = "Server is running")]
    pub message: String,
}
