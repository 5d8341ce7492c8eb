//! PostgreSQL-backed catalogue read adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{JeepRepository, JeepRepositoryError};
use crate::domain::{BasePrice, Jeep, JeepModel};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::JeepRow;
use super::pool::DbPool;
use super::schema::jeeps;

/// Diesel-backed implementation of [`JeepRepository`].
#[derive(Clone)]
pub struct DieselJeepRepository {
    pool: DbPool,
}

impl DieselJeepRepository {
    /// Create a repository over `pool`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/jeep_sales")).await?;
    /// let repo = DieselJeepRepository::new(pool);
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load_rows(
        conn: &mut AsyncPgConnection,
        model: JeepModel,
        trim: &str,
    ) -> Result<Vec<JeepRow>, diesel::result::Error> {
        jeeps::table
            .filter(jeeps::model_id.eq(model.as_str()))
            .filter(jeeps::trim_level.eq(trim))
            .select(JeepRow::as_select())
            .load(conn)
            .await
    }
}

/// Rows carry the model as text; anything outside the enumeration is a
/// corrupt row rather than a miss.
fn row_to_jeep(row: JeepRow) -> Result<Jeep, JeepRepositoryError> {
    let model = row
        .model_id
        .parse::<JeepModel>()
        .map_err(|err| JeepRepositoryError::query(err.to_string()))?;
    Ok(Jeep::new(
        model,
        row.trim_level,
        row.num_doors,
        row.wheel_size,
        BasePrice::from_cents(row.base_price_cents),
    ))
}

#[async_trait]
impl JeepRepository for DieselJeepRepository {
    async fn find_jeeps(
        &self,
        model: JeepModel,
        trim: &str,
    ) -> Result<Vec<Jeep>, JeepRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = Self::load_rows(&mut conn, model, trim)
            .await
            .map_err(|err| map_diesel_error(err, "jeep lookup"))?;
        rows.into_iter().map(row_to_jeep).collect()
    }
}
