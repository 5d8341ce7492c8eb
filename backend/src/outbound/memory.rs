//! In-memory catalogue adapter.
//!
//! Serves the reference catalogue when no database is configured and backs
//! the endpoint tests. Entries are held in insertion order; the lookup
//! service sorts them.

use async_trait::async_trait;

use crate::domain::ports::{JeepRepository, JeepRepositoryError};
use crate::domain::{BasePrice, Jeep, JeepModel};

/// Reference rows as `(model, trim, doors, wheel size, whole dollars)`.
const REFERENCE_ROWS: &[(JeepModel, &str, i32, i32, i64)] = &[
    (JeepModel::Wrangler, "Sport", 4, 17, 31_975),
    (JeepModel::Wrangler, "Sport", 2, 17, 28_475),
    (JeepModel::Wrangler, "Sport S", 2, 17, 31_725),
    (JeepModel::Wrangler, "Sport S", 4, 17, 35_225),
    (JeepModel::Wrangler, "Willys", 4, 17, 38_045),
    (JeepModel::Wrangler, "Sahara", 4, 18, 40_675),
    (JeepModel::Wrangler, "Rubicon", 4, 17, 43_375),
    (JeepModel::Wrangler, "Rubicon", 2, 17, 39_875),
    (JeepModel::Gladiator, "Sport", 4, 17, 35_040),
    (JeepModel::Gladiator, "Overland", 4, 18, 42_765),
    (JeepModel::Gladiator, "Rubicon", 4, 17, 45_190),
    (JeepModel::Wrangler4xe, "Sahara", 4, 18, 51_690),
    (JeepModel::GrandCherokee, "Laredo", 4, 18, 36_995),
    (JeepModel::GrandCherokee, "Limited", 4, 18, 43_990),
    (JeepModel::GrandCherokee4xe, "Trailhawk", 4, 18, 61_460),
    (JeepModel::Compass, "Sport", 4, 17, 24_185),
    (JeepModel::Cherokee, "Latitude", 4, 17, 27_790),
    (JeepModel::Renegade, "Sport", 4, 16, 22_215),
];

/// Catalogue held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJeepRepository {
    jeeps: Vec<Jeep>,
}

impl InMemoryJeepRepository {
    pub fn new(jeeps: Vec<Jeep>) -> Self {
        Self { jeeps }
    }

    /// Repository seeded with the reference catalogue.
    pub fn with_reference_catalogue() -> Self {
        Self::new(reference_catalogue())
    }
}

/// The reference catalogue, in the order it is stored.
fn reference_catalogue() -> Vec<Jeep> {
    REFERENCE_ROWS
        .iter()
        .map(|&(model, trim, doors, wheel_size, dollars)| {
            Jeep::new(model, trim, doors, wheel_size, BasePrice::from_parts(dollars, 0))
        })
        .collect()
}

#[async_trait]
impl JeepRepository for InMemoryJeepRepository {
    async fn find_jeeps(
        &self,
        model: JeepModel,
        trim: &str,
    ) -> Result<Vec<Jeep>, JeepRepositoryError> {
        Ok(self
            .jeeps
            .iter()
            .filter(|jeep| jeep.model_id() == model && jeep.trim_level() == trim)
            .cloned()
            .collect())
    }
}
