//! Property service for registration, lookup, and area/price valuation.

use std::sync::Arc;

use log::{debug, info, warn};
use mongodb::bson::DateTime;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::{CreatePropertyRequest, Property};
use crate::repositories::{NeighborhoodRepository, PropertyRepository};
use crate::validators::parse_property_id;

pub struct PropertyService {
    property_repository: Arc<dyn PropertyRepository>,
    neighborhood_repository: Arc<dyn NeighborhoodRepository>,
}

impl PropertyService {
    pub fn new(
        property_repository: Arc<dyn PropertyRepository>,
        neighborhood_repository: Arc<dyn NeighborhoodRepository>,
    ) -> Self {
        Self {
            property_repository,
            neighborhood_repository,
        }
    }

    pub async fn list_properties(&self) -> Result<Vec<Property>, ApiError> {
        debug!("Listing properties");
        Ok(self.property_repository.find_all().await?)
    }

    pub async fn get_property_by_id(&self, id: &str) -> Result<Option<Property>, ApiError> {
        let property_id = parse_property_id(id)?;
        self.fetch(&property_id).await
    }

    /// Like [`Self::get_property_by_id`], but a missing property is an error.
    pub async fn find_property(&self, id: &str) -> Result<Property, ApiError> {
        let property_id = parse_property_id(id)?;
        self.fetch(&property_id).await?.ok_or_else(|| {
            warn!("Property not found with id: {}", property_id);
            ApiError::property_not_found()
        })
    }

    async fn fetch(&self, property_id: &str) -> Result<Option<Property>, ApiError> {
        debug!("Fetching property by ID: {}", property_id);
        Ok(self.property_repository.find_by_id(property_id).await?)
    }

    pub async fn create_property(&self, req: CreatePropertyRequest) -> Result<Property, ApiError> {
        let now = DateTime::now();
        let property = Property {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            district: req.district,
            rooms: req.rooms.into_iter().map(Into::into).collect(),
            value: None,
            created_at: now,
            updated_at: now,
        };

        self.property_repository.insert(&property).await?;

        info!(
            "Registered property {} in district {}",
            property.id, property.district
        );
        Ok(property)
    }

    /// Total room surface of `property`, or zero when there is none.
    pub fn calc_property_area(&self, property: Option<&Property>) -> f64 {
        property.map(Property::area).unwrap_or(0.0)
    }

    /// Price the property with its district's price per m² and store the result.
    pub async fn calc_property_price(&self, id: &str) -> Result<Property, ApiError> {
        let mut property = self.find_property(id).await?;

        let neighborhoods = self.neighborhood_repository.find_all().await?;
        let neighborhood = neighborhoods
            .into_iter()
            .find(|n| n.district_name == property.district)
            .ok_or_else(|| {
                warn!(
                    "No neighborhood registered for district {} of property {}",
                    property.district, property.id
                );
                ApiError::neighborhood_not_found()
            })?;

        let area = self.calc_property_area(Some(&property));
        let price = neighborhood.price_for(area);

        let matched = self
            .property_repository
            .update_value(&property.id, price)
            .await?;
        if matched == 0 {
            warn!("Property {} disappeared before its value was stored", property.id);
            return Err(ApiError::property_not_found());
        }

        info!(
            "Property {} valued at {} ({} m² at {} per m²)",
            property.id, price, area, neighborhood.price_per_square_meter
        );

        property.value = Some(price);
        Ok(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        CODE_DATABASE_READ_FAILED, CODE_INVALID_PROPERTY_ID, CODE_NEIGHBORHOOD_NOT_FOUND,
        CODE_NULL_ID, CODE_PROPERTY_NOT_FOUND,
    };
    use crate::errors::RepositoryError;
    use crate::models::{Neighborhood, Room, RoomRequest};
    use crate::repositories::{MockNeighborhoodRepository, MockPropertyRepository};

    const PROPERTY_ID: &str = "3f2b8c1e-5d4a-4e7b-9a61-0c2d8e4f6a10";

    fn sample_property() -> Property {
        let now = DateTime::now();
        Property {
            id: PROPERTY_ID.to_string(),
            name: "Casa Verde".to_string(),
            district: "Fake neighborhood".to_string(),
            rooms: vec![
                Room {
                    name: "Living".to_string(),
                    width: 10.5,
                    length: 9.0,
                },
                Room {
                    name: "Bedroom".to_string(),
                    width: 7.5,
                    length: 8.5,
                },
                Room {
                    name: "Kitchen".to_string(),
                    width: 6.0,
                    length: 5.35,
                },
            ],
            value: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(
        properties: MockPropertyRepository,
        neighborhoods: MockNeighborhoodRepository,
    ) -> PropertyService {
        PropertyService::new(Arc::new(properties), Arc::new(neighborhoods))
    }

    #[actix_web::test]
    async fn test_property_price_is_correct() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_property())));
        properties
            .expect_update_value()
            .withf(|id, value| id == PROPERTY_ID && *value == 19035.0)
            .times(1)
            .returning(|_, _| Ok(1));

        let mut neighborhoods = MockNeighborhoodRepository::new();
        neighborhoods.expect_find_all().returning(|| {
            Ok(vec![
                Neighborhood::new("Other neighborhood", 5000.0),
                Neighborhood::new("Fake neighborhood", 100.0),
            ])
        });

        let priced = service(properties, neighborhoods)
            .calc_property_price(PROPERTY_ID)
            .await
            .unwrap();

        assert_eq!(priced.value, Some(19035.0));
    }

    #[actix_web::test]
    async fn test_blank_id_is_rejected_as_null() {
        let svc = service(
            MockPropertyRepository::new(),
            MockNeighborhoodRepository::new(),
        );

        let err = svc.calc_property_price("").await.unwrap_err();
        assert_eq!(err.code(), CODE_NULL_ID);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_rejected() {
        let svc = service(
            MockPropertyRepository::new(),
            MockNeighborhoodRepository::new(),
        );

        let err = svc.calc_property_price("42").await.unwrap_err();
        assert_eq!(err.code(), CODE_INVALID_PROPERTY_ID);
    }

    #[actix_web::test]
    async fn test_price_of_missing_property_is_not_found() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_by_id().returning(|_| Ok(None));

        let err = service(properties, MockNeighborhoodRepository::new())
            .calc_property_price(PROPERTY_ID)
            .await
            .unwrap_err();

        assert_eq!(err.code(), CODE_PROPERTY_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_price_without_matching_neighborhood_is_not_found() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_property())));
        properties.expect_update_value().never();

        let mut neighborhoods = MockNeighborhoodRepository::new();
        neighborhoods
            .expect_find_all()
            .returning(|| Ok(vec![Neighborhood::new("fake neighborhood", 100.0)]));

        let err = service(properties, neighborhoods)
            .calc_property_price(PROPERTY_ID)
            .await
            .unwrap_err();

        assert_eq!(err.code(), CODE_NEIGHBORHOOD_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_price_propagates_read_failures() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::Read("connection reset".to_string())));

        let err = service(properties, MockNeighborhoodRepository::new())
            .calc_property_price(PROPERTY_ID)
            .await
            .unwrap_err();

        assert_eq!(err.code(), CODE_DATABASE_READ_FAILED);
    }

    #[actix_web::test]
    async fn test_property_removed_before_value_is_stored_is_not_found() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_property())));
        properties
            .expect_update_value()
            .times(1)
            .returning(|_, _| Ok(0));

        let mut neighborhoods = MockNeighborhoodRepository::new();
        neighborhoods
            .expect_find_all()
            .returning(|| Ok(vec![Neighborhood::new("Fake neighborhood", 100.0)]));

        let err = service(properties, neighborhoods)
            .calc_property_price(PROPERTY_ID)
            .await
            .unwrap_err();

        assert_eq!(err.code(), CODE_PROPERTY_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_lookup_uses_normalized_id() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .withf(|id| id == PROPERTY_ID)
            .times(1)
            .returning(|_| Ok(None));

        let err = service(properties, MockNeighborhoodRepository::new())
            .find_property(&format!("  {}  ", PROPERTY_ID.to_uppercase()))
            .await
            .unwrap_err();

        assert_eq!(err.code(), CODE_PROPERTY_NOT_FOUND);
    }

    #[test]
    fn test_property_area_is_correct() {
        let svc = service(
            MockPropertyRepository::new(),
            MockNeighborhoodRepository::new(),
        );

        assert_eq!(svc.calc_property_area(Some(&sample_property())), 190.35);
    }

    #[test]
    fn test_area_of_no_property_is_zero() {
        let svc = service(
            MockPropertyRepository::new(),
            MockNeighborhoodRepository::new(),
        );

        assert_eq!(svc.calc_property_area(None), 0.0);
    }

    #[actix_web::test]
    async fn test_created_property_receives_an_id() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_insert().times(1).returning(|_| Ok(()));

        let created = service(properties, MockNeighborhoodRepository::new())
            .create_property(CreatePropertyRequest {
                name: "Casa Verde".to_string(),
                district: "Moema".to_string(),
                rooms: vec![RoomRequest {
                    name: "Kitchen".to_string(),
                    width: 4.0,
                    length: 5.0,
                }],
            })
            .await
            .unwrap();

        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(created.rooms.len(), 1);
        assert_eq!(created.value, None);
    }

    #[actix_web::test]
    async fn test_duplicate_property_is_a_conflict() {
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_insert()
            .returning(|p| Err(RepositoryError::AlreadyExists(p.id.clone())));

        let err = service(properties, MockNeighborhoodRepository::new())
            .create_property(CreatePropertyRequest {
                name: "Casa Verde".to_string(),
                district: "Moema".to_string(),
                rooms: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Conflict { .. }));
    }

    #[actix_web::test]
    async fn test_missing_property_lookup_returns_none() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_by_id().returning(|_| Ok(None));

        let found = service(properties, MockNeighborhoodRepository::new())
            .get_property_by_id(PROPERTY_ID)
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[actix_web::test]
    async fn test_list_of_properties_can_be_empty() {
        let mut properties = MockPropertyRepository::new();
        properties.expect_find_all().returning(|| Ok(vec![]));

        let listed = service(properties, MockNeighborhoodRepository::new())
            .list_properties()
            .await
            .unwrap();

        assert!(listed.is_empty());
    }

    #[actix_web::test]
    async fn test_list_of_properties_is_passed_through() {
        let stored: Vec<Property> = (0..4)
            .map(|_| Property {
                id: Uuid::new_v4().to_string(),
                ..sample_property()
            })
            .collect();
        let expected = stored.clone();

        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_all()
            .returning(move || Ok(stored.clone()));

        let listed = service(properties, MockNeighborhoodRepository::new())
            .list_properties()
            .await
            .unwrap();

        assert_eq!(listed, expected);
    }
}
