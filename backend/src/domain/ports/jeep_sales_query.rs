//! Driving port for catalogue lookups.
//!
//! The HTTP adapter depends on this trait rather than on the service so that
//! handlers can be exercised with doubles.

use async_trait::async_trait;

use crate::domain::{Error, Jeep, JeepQuery};

/// Domain use-case port for `GET /jeeps`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JeepSalesQuery: Send + Sync {
    /// Matching entries sorted by their total order. Empty when nothing
    /// matches; storage faults surface as [`crate::domain::ErrorCode::InternalError`].
    async fn fetch_jeeps(&self, query: &JeepQuery) -> Result<Vec<Jeep>, Error>;
}
