use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::round_to_cents;

/// Reference price of a district, stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Neighborhood {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub district_name: String,
    pub price_per_square_meter: f64,
}

impl Neighborhood {
    pub fn new(district_name: &str, price_per_square_meter: f64) -> Self {
        Self {
            id: None,
            district_name: district_name.to_string(),
            price_per_square_meter,
        }
    }

    /// Price of `area` square meters in this district.
    pub fn price_for(&self, area: f64) -> f64 {
        round_to_cents(self.price_per_square_meter * area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_for_area() {
        let neighborhood = Neighborhood::new("Centro", 100.0);
        assert_eq!(neighborhood.price_for(190.35), 19035.0);
        assert_eq!(neighborhood.price_for(0.0), 0.0);
    }

    #[test]
    fn test_seed_entries_deserialize_without_id() {
        let parsed: Vec<Neighborhood> = serde_json::from_str(
            r#"[{"district_name": "Moema", "price_per_square_meter": 12500.5}]"#,
        )
        .unwrap();

        assert_eq!(parsed, vec![Neighborhood::new("Moema", 12500.5)]);
    }
}
