//! Neighborhood reference data handlers.

use actix_web::{web, HttpResponse};

use crate::constants::MSG_NEIGHBORHOODS_LISTED;
use crate::errors::ApiError;
use crate::models::{ApiResponse, NeighborhoodResponse};
use crate::services::NeighborhoodService;

/// List district prices per square meter
#[utoipa::path(
    get,
    path = "/api/v1/neighborhood",
    tag = "Neighborhoods",
    responses(
        (status = 200, description = "List of neighborhoods", body = crate::models::NeighborhoodListEnvelope),
        (status = 500, description = "Database failure", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_neighborhoods(
    neighborhood_service: web::Data<NeighborhoodService>,
) -> Result<HttpResponse, ApiError> {
    let neighborhoods: Vec<NeighborhoodResponse> = neighborhood_service
        .list_neighborhoods()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_NEIGHBORHOODS_LISTED,
        neighborhoods,
    )))
}
