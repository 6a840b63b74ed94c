//! Repository layer for database operations.
//!
//! Services depend on the traits defined here; the MongoDB implementations
//! live in their own modules so tests can substitute mocks.

pub mod neighborhood_repository;
pub mod property_repository;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::errors::RepositoryError;
use crate::models::{Neighborhood, Property};

pub use neighborhood_repository::MongoNeighborhoodRepository;
pub use property_repository::MongoPropertyRepository;

/// Data access for property documents.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Property>, RepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, RepositoryError>;

    async fn insert(&self, property: &Property) -> Result<(), RepositoryError>;

    /// Store a calculated price. Returns the number of matched documents.
    async fn update_value(&self, id: &str, value: f64) -> Result<u64, RepositoryError>;
}

/// Data access for neighborhood reference prices.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NeighborhoodRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Neighborhood>, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;

    async fn insert_many(&self, neighborhoods: Vec<Neighborhood>) -> Result<(), RepositoryError>;

    async fn create_indexes(&self) -> Result<(), RepositoryError>;
}

/// MongoDB reports unique index violations with error code 11000.
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        ErrorKind::InsertMany(insert_error) => insert_error
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == 11000)),
        _ => false,
    }
}
