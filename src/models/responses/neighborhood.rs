//! Neighborhood response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Neighborhood;

/// Neighborhood reference price returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct NeighborhoodResponse {
    /// District name
    #[schema(example = "Moema")]
    pub district_name: String,
    /// Price per square meter in the district
    #[schema(example = 100.0)]
    pub price_per_square_meter: f64,
}

impl From<Neighborhood> for NeighborhoodResponse {
    fn from(neighborhood: Neighborhood) -> Self {
        Self {
            district_name: neighborhood.district_name,
            price_per_square_meter: neighborhood.price_per_square_meter,
        }
    }
}
