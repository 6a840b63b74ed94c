//! Neighborhood reference data: listing and startup seeding.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{
    CODE_DATABASE_MANAGEMENT_FAILED, ERR_SEED_FILE_MALFORMED, ERR_SEED_FILE_UNREADABLE,
};
use crate::errors::ApiError;
use crate::models::Neighborhood;
use crate::repositories::NeighborhoodRepository;

pub struct NeighborhoodService {
    repository: Arc<dyn NeighborhoodRepository>,
}

impl NeighborhoodService {
    pub fn new(repository: Arc<dyn NeighborhoodRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_neighborhoods(&self) -> Result<Vec<Neighborhood>, ApiError> {
        debug!("Listing neighborhoods");
        Ok(self.repository.find_all().await?)
    }

    /// Load neighborhoods from a JSON array file into an empty collection.
    ///
    /// Returns the number of inserted neighborhoods; zero when the collection
    /// already holds data.
    pub async fn seed_from_file(&self, path: impl AsRef<Path>) -> Result<usize, ApiError> {
        let path = path.as_ref();

        let existing = self.repository.count().await?;
        if existing > 0 {
            info!(
                "Neighborhoods already loaded ({} entries), skipping seed",
                existing
            );
            return Ok(0);
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Cannot read seed file {}: {}", path.display(), e);
            seed_error(ERR_SEED_FILE_UNREADABLE, e)
        })?;

        self.seed_from_json(&contents).await
    }

    async fn seed_from_json(&self, contents: &str) -> Result<usize, ApiError> {
        let neighborhoods: Vec<Neighborhood> =
            serde_json::from_str(contents).map_err(|e| seed_error(ERR_SEED_FILE_MALFORMED, e))?;

        if neighborhoods.is_empty() {
            warn!("Neighborhoods seed file is empty");
            return Ok(0);
        }

        let mut districts = HashSet::with_capacity(neighborhoods.len());
        if let Some(repeated) = neighborhoods
            .iter()
            .find(|n| !districts.insert(n.district_name.as_str()))
        {
            warn!("Seed file repeats district {}", repeated.district_name);
            return Err(seed_error(
                ERR_SEED_FILE_MALFORMED,
                format!("district {} is listed more than once", repeated.district_name),
            ));
        }

        let inserted = neighborhoods.len();
        self.repository.insert_many(neighborhoods).await?;

        info!("Seeded {} neighborhoods", inserted);
        Ok(inserted)
    }
}

fn seed_error(message: &str, cause: impl std::fmt::Display) -> ApiError {
    ApiError::InternalServerError {
        code: CODE_DATABASE_MANAGEMENT_FAILED.to_string(),
        message: format!("{}: {}", message, cause),
    }
}
