use utoipa::OpenApi;

use crate::models::{
    CreatePropertyRequest, ErrorResponse, HealthResponse, NeighborhoodListEnvelope,
    NeighborhoodResponse, PropertyAreaEnvelope, PropertyAreaResponse, PropertyCreatedEnvelope,
    PropertyCreatedResponse, PropertyEnvelope, PropertyListEnvelope, PropertyPriceEnvelope,
    PropertyPriceResponse, PropertyResponse, RoomRequest, RoomResponse,
};

/// OpenAPI documentation for the Property Valuation API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Property Valuation API",
        version = "0.1.0",
        description = "REST API for real-estate properties with area and price valuation based on district prices per square meter.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Properties", description = "Property registration, lookup and valuation"),
        (name = "Neighborhoods", description = "District price reference data")
    ),
    paths(
        crate::handlers::list_properties,
        crate::handlers::get_property,
        crate::handlers::create_property,
        crate::handlers::get_property_value,
        crate::handlers::get_property_area,
        crate::handlers::list_neighborhoods,
        crate::routes::health_check
    ),
    components(
        schemas(
            CreatePropertyRequest,
            RoomRequest,
            PropertyResponse,
            RoomResponse,
            PropertyCreatedResponse,
            PropertyPriceResponse,
            PropertyAreaResponse,
            NeighborhoodResponse,
            PropertyEnvelope,
            PropertyListEnvelope,
            PropertyCreatedEnvelope,
            PropertyPriceEnvelope,
            PropertyAreaEnvelope,
            NeighborhoodListEnvelope,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
