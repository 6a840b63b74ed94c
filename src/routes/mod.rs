use actix_web::{error, web, HttpResponse};
use log::warn;
use utoipa::OpenApi;

use crate::constants::{CODE_BAD_REQUEST, ERR_INVALID_JSON_BODY};
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/v1/property")
                    // List all properties
                    .route("", web::get().to(handlers::list_properties))
                    .route("/", web::get().to(handlers::list_properties))
                    // Register a property
                    .route("", web::post().to(handlers::create_property))
                    // Derived values, before /{id}
                    .route(
                        "/property-value/{id}",
                        web::get().to(handlers::get_property_value),
                    )
                    .route(
                        "/property-area/{id}",
                        web::get().to(handlers::get_property_area),
                    )
                    // Get specific property by ID
                    .route("/{id}", web::get().to(handlers::get_property)),
            )
            .service(
                web::scope("/v1/neighborhood")
                    .route("", web::get().to(handlers::list_neighborhoods)),
            ),
    )
    .route("/api-docs/openapi.json", web::get().to(openapi_json));
}

/// Malformed JSON bodies are reported in the same shape as other API errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        let message = format!("{}: {}", ERR_INVALID_JSON_BODY, err);
        error::Error::from(ApiError::bad_request(CODE_BAD_REQUEST, &message))
    })
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
