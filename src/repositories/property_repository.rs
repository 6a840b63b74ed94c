//! Property repository for all MongoDB operations related to properties.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, DateTime};
use mongodb::{Collection, Database};

use crate::constants::COLLECTION_PROPERTIES;
use crate::errors::RepositoryError;
use crate::models::Property;
use crate::repositories::{is_duplicate_key, PropertyRepository};

/// MongoDB-backed [`PropertyRepository`].
pub struct MongoPropertyRepository {
    collection: Collection<Property>,
}

impl MongoPropertyRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_PROPERTIES),
        }
    }
}

#[async_trait]
impl PropertyRepository for MongoPropertyRepository {
    async fn find_all(&self) -> Result<Vec<Property>, RepositoryError> {
        debug!("Repository: Listing all properties");
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| RepositoryError::Read(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::Read(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, RepositoryError> {
        debug!("Repository: Finding property by ID: {}", id);
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| RepositoryError::Read(e.to_string()))
    }

    async fn insert(&self, property: &Property) -> Result<(), RepositoryError> {
        debug!("Repository: Inserting property: {}", property.id);
        self.collection.insert_one(property).await.map_err(|e| {
            if is_duplicate_key(&e) {
                RepositoryError::AlreadyExists(format!("property {}", property.id))
            } else {
                RepositoryError::Write(e.to_string())
            }
        })?;
        Ok(())
    }

    async fn update_value(&self, id: &str, value: f64) -> Result<u64, RepositoryError> {
        debug!("Repository: Storing value {} for property: {}", value, id);
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "value": value,
                        "updated_at": DateTime::now()
                    }
                },
            )
            .await
            .map_err(|e| RepositoryError::Write(e.to_string()))?;

        Ok(result.matched_count)
    }
}
