//! Property handlers: registration, lookup and valuation endpoints.

use actix_web::{http::header, web, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::constants::{
    MSG_PROPERTIES_LISTED, MSG_PROPERTY_AREA, MSG_PROPERTY_CREATED, MSG_PROPERTY_FOUND,
    MSG_PROPERTY_VALUE,
};
use crate::errors::ApiError;
use crate::models::{
    ApiResponse, CreatePropertyRequest, PropertyAreaResponse, PropertyCreatedResponse,
    PropertyPriceResponse, PropertyResponse,
};
use crate::services::PropertyService;
use crate::validators::validation_errors_to_api_error;

/// List all registered properties
#[utoipa::path(
    get,
    path = "/api/v1/property",
    tag = "Properties",
    responses(
        (status = 200, description = "List of properties", body = crate::models::PropertyListEnvelope),
        (status = 500, description = "Database failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_properties(
    property_service: web::Data<PropertyService>,
) -> Result<HttpResponse, ApiError> {
    let properties: Vec<PropertyResponse> = property_service
        .list_properties()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    debug!("Listing {} properties", properties.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PROPERTIES_LISTED, properties)))
}

/// Calculate the price of a property from its district's price per square meter
#[utoipa::path(
    get,
    path = "/api/v1/property/property-value/{id}",
    tag = "Properties",
    params(
        ("id" = String, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Calculated price", body = crate::models::PropertyPriceEnvelope),
        (status = 400, description = "Missing or malformed ID", body = crate::models::ErrorResponse),
        (status = 404, description = "Property or neighborhood not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_property_value(
    property_service: web::Data<PropertyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let property_id = path.into_inner();

    let property = property_service.calc_property_price(&property_id).await?;
    let response = PropertyPriceResponse {
        value: property.value.unwrap_or_default(),
        id: property.id,
        name: property.name,
        district: property.district,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PROPERTY_VALUE, response)))
}

/// Calculate the total surface of a property
#[utoipa::path(
    get,
    path = "/api/v1/property/property-area/{id}",
    tag = "Properties",
    params(
        ("id" = String, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Calculated area", body = crate::models::PropertyAreaEnvelope),
        (status = 400, description = "Missing or malformed ID", body = crate::models::ErrorResponse),
        (status = 404, description = "Property not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_property_area(
    property_service: web::Data<PropertyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let property_id = path.into_inner();

    let property = property_service.find_property(&property_id).await?;
    let area = property_service.calc_property_area(Some(&property));

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_PROPERTY_AREA,
        PropertyAreaResponse {
            id: property.id,
            name: property.name,
            area,
        },
    )))
}

/// Get a property by ID
#[utoipa::path(
    get,
    path = "/api/v1/property/{id}",
    tag = "Properties",
    params(
        ("id" = String, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property found", body = crate::models::PropertyEnvelope),
        (status = 400, description = "Missing or malformed ID", body = crate::models::ErrorResponse),
        (status = 404, description = "Property not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_property(
    property_service: web::Data<PropertyService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let property_id = path.into_inner();

    let property: PropertyResponse = property_service.find_property(&property_id).await?.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_PROPERTY_FOUND, property)))
}

/// Register a new property
#[utoipa::path(
    post,
    path = "/api/v1/property",
    tag = "Properties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Property registered", body = crate::models::PropertyCreatedEnvelope),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 409, description = "Property already exists", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_property(
    property_service: web::Data<PropertyService>,
    body: web::Json<CreatePropertyRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let property = property_service.create_property(body.into_inner()).await?;
    let location = format!("/api/v1/property/{}", property.id);

    info!("Created property {}", property.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ApiResponse::success(
            MSG_PROPERTY_CREATED,
            PropertyCreatedResponse::from(&property),
        )))
}
