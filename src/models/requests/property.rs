//! Property-related request models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Room;
use crate::validators::validate_capitalized;

/// A room of the property being registered
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RoomRequest {
    /// Room name (max 30 characters, starting with an uppercase letter)
    #[validate(
        length(
            min = 1,
            max = 30,
            message = "Room name must be between 1 and 30 characters"
        ),
        custom(function = "validate_capitalized")
    )]
    #[schema(example = "Kitchen")]
    pub name: String,
    /// Room width in meters
    #[validate(range(
        exclusive_min = 0.0,
        max = 25.0,
        message = "Room width must be greater than 0 and at most 25 meters"
    ))]
    #[schema(example = 4.5)]
    pub width: f64,
    /// Room length in meters
    #[validate(range(
        exclusive_min = 0.0,
        max = 33.0,
        message = "Room length must be greater than 0 and at most 33 meters"
    ))]
    #[schema(example = 6.0)]
    pub length: f64,
}

impl From<RoomRequest> for Room {
    fn from(req: RoomRequest) -> Self {
        Self {
            name: req.name,
            width: req.width,
            length: req.length,
        }
    }
}

/// Request payload for registering a property
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePropertyRequest {
    /// Property name (max 30 characters, starting with an uppercase letter)
    #[validate(
        length(
            min = 1,
            max = 30,
            message = "Property name must be between 1 and 30 characters"
        ),
        custom(function = "validate_capitalized")
    )]
    #[schema(example = "Casa Verde")]
    pub name: String,
    /// District the property belongs to; must match a registered neighborhood to be priced
    #[validate(length(
        min = 1,
        max = 45,
        message = "District name must be between 1 and 45 characters"
    ))]
    #[schema(example = "Moema")]
    pub district: String,
    /// Rooms of the property
    #[validate(length(min = 1, message = "At least one room is required"), nested)]
    pub rooms: Vec<RoomRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreatePropertyRequest {
        CreatePropertyRequest {
            name: "Casa Verde".to_string(),
            district: "Moema".to_string(),
            rooms: vec![RoomRequest {
                name: "Kitchen".to_string(),
                width: 4.5,
                length: 6.0,
            }],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_lowercase_name_is_rejected() {
        let mut req = valid_request();
        req.name = "casa verde".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_long_district_is_rejected() {
        let mut req = valid_request();
        req.district = "D".repeat(46);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_rooms_are_rejected() {
        let mut req = valid_request();
        req.rooms.clear();

        let errors = req.validate().unwrap_err();
        assert!(errors.errors().contains_key("rooms"));
        assert_eq!(errors.errors().len(), 1);
    }

    #[test]
    fn test_oversized_room_is_rejected() {
        let mut req = valid_request();
        req.rooms[0].width = 25.5;
        assert!(req.validate().is_err());

        let mut req = valid_request();
        req.rooms[0].length = 0.0;
        assert!(req.validate().is_err());
    }
}
