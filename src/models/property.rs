use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// Round a monetary or surface value to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A rectangular room of a property, measured in meters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Room {
    pub name: String,
    pub width: f64,
    pub length: f64,
}

impl Room {
    pub fn area(&self) -> f64 {
        self.width * self.length
    }
}

/// Property document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Property {
    /// UUID v4 in its hyphenated string form.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub district: String,
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Price computed from the district's price per m², absent until first calculated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Property {
    /// Total surface of all rooms, rounded to centimeter precision.
    pub fn area(&self) -> f64 {
        round_to_cents(self.rooms.iter().map(Room::area).sum())
    }
}
