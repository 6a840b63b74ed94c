//! Property-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{round_to_cents, Property, Room};

fn to_chrono(dt: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(dt.timestamp_millis()).unwrap_or_default()
}

/// Room data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct RoomResponse {
    #[schema(example = "Kitchen")]
    pub name: String,
    #[schema(example = 4.5)]
    pub width: f64,
    #[schema(example = 6.0)]
    pub length: f64,
    /// Surface of the room in square meters
    #[schema(example = 27.0)]
    pub area: f64,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            area: round_to_cents(room.area()),
            name: room.name,
            width: room.width,
            length: room.length,
        }
    }
}

/// Property data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct PropertyResponse {
    /// Property's unique identifier
    #[schema(example = "3f2b8c1e-5d4a-4e7b-9a61-0c2d8e4f6a10")]
    pub id: String,
    #[schema(example = "Casa Verde")]
    pub name: String,
    #[schema(example = "Moema")]
    pub district: String,
    pub rooms: Vec<RoomResponse>,
    /// Last calculated price, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        Self {
            id: property.id,
            name: property.name,
            district: property.district,
            rooms: property.rooms.into_iter().map(Into::into).collect(),
            value: property.value,
            created_at: to_chrono(property.created_at),
            updated_at: to_chrono(property.updated_at),
        }
    }
}

/// Response for a successfully registered property
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct PropertyCreatedResponse {
    #[schema(example = "3f2b8c1e-5d4a-4e7b-9a61-0c2d8e4f6a10")]
    pub id: String,
    #[schema(example = "Casa Verde")]
    pub name: String,
}

impl From<&Property> for PropertyCreatedResponse {
    fn from(property: &Property) -> Self {
        Self {
            id: property.id.clone(),
            name: property.name.clone(),
        }
    }
}

/// Calculated price of a property
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct PropertyPriceResponse {
    pub id: String,
    #[schema(example = "Casa Verde")]
    pub name: String,
    #[schema(example = "Moema")]
    pub district: String,
    /// Price computed from the district's price per square meter
    #[schema(example = 19035.0)]
    pub value: f64,
}

/// Calculated surface of a property
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct PropertyAreaResponse {
    pub id: String,
    #[schema(example = "Casa Verde")]
    pub name: String,
    /// Total surface in square meters
    #[schema(example = 190.35)]
    pub area: f64,
}
