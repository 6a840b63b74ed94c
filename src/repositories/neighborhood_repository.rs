//! Neighborhood repository for the district price reference data.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_NEIGHBORHOODS;
use crate::errors::RepositoryError;
use crate::models::Neighborhood;
use crate::repositories::{is_duplicate_key, NeighborhoodRepository};

/// MongoDB-backed [`NeighborhoodRepository`].
pub struct MongoNeighborhoodRepository {
    collection: Collection<Neighborhood>,
}

impl MongoNeighborhoodRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_NEIGHBORHOODS),
        }
    }
}

#[async_trait]
impl NeighborhoodRepository for MongoNeighborhoodRepository {
    async fn find_all(&self) -> Result<Vec<Neighborhood>, RepositoryError> {
        debug!("Repository: Listing all neighborhoods");
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| RepositoryError::Read(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::Read(e.to_string()))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.collection
            .count_documents(doc! {})
            .await
            .map_err(|e| RepositoryError::Read(e.to_string()))
    }

    async fn insert_many(&self, neighborhoods: Vec<Neighborhood>) -> Result<(), RepositoryError> {
        debug!("Repository: Inserting {} neighborhoods", neighborhoods.len());
        self.collection
            .insert_many(neighborhoods)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    RepositoryError::AlreadyExists("neighborhood district".to_string())
                } else {
                    RepositoryError::Write(e.to_string())
                }
            })?;
        Ok(())
    }

    /// Unique index on `district_name`, so a property's district matches at most one price.
    async fn create_indexes(&self) -> Result<(), RepositoryError> {
        info!("Creating database indexes for neighborhoods collection...");

        let index = IndexModel::builder()
            .keys(doc! { "district_name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|e| RepositoryError::Management(e.to_string()))?;

        info!("Database indexes created successfully");
        Ok(())
    }
}
