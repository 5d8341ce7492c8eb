//! Catalogue lookup service.
//!
//! Implements [`JeepSalesQuery`] over any [`JeepRepository`]: fetches the
//! matching entries, sorts them, and turns storage faults into internal
//! domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{JeepRepository, JeepRepositoryError, JeepSalesQuery};
use crate::domain::{Error, Jeep, JeepQuery};

/// Lookup service implementing the `GET /jeeps` use case.
pub struct JeepSalesService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for JeepSalesService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> JeepSalesService<R> {
    /// Create a service reading from `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: JeepRepositoryError) -> Error {
    match error {
        JeepRepositoryError::Connection { message } => {
            Error::internal(format!("jeep repository unavailable: {message}"))
        }
        JeepRepositoryError::Query { message } => {
            Error::internal(format!("jeep repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> JeepSalesQuery for JeepSalesService<R>
where
    R: JeepRepository + ?Sized,
{
    async fn fetch_jeeps(&self, query: &JeepQuery) -> Result<Vec<Jeep>, Error> {
        debug!(model = %query.model(), trim = query.trim(), "fetching jeeps");
        let mut jeeps = self
            .repository
            .find_jeeps(query.model(), query.trim())
            .await
            .map_err(map_repository_error)?;
        jeeps.sort();
        debug!(count = jeeps.len(), "jeeps fetched");
        Ok(jeeps)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::MockJeepRepository;
    use crate::domain::{BasePrice, ErrorCode, JeepModel};
    use rstest::{fixture, rstest};

    #[fixture]
    fn wrangler_sport() -> JeepQuery {
        JeepQuery::try_new(JeepModel::Wrangler, "Sport").expect("valid query")
    }

    fn sport(doors: i32, dollars: i64) -> Jeep {
        Jeep::new(
            JeepModel::Wrangler,
            "Sport",
            doors,
            17,
            BasePrice::from_parts(dollars, 0),
        )
    }

    fn service_returning(
        result: Result<Vec<Jeep>, JeepRepositoryError>,
    ) -> JeepSalesService<MockJeepRepository> {
        let mut repo = MockJeepRepository::new();
        repo.expect_find_jeeps()
            .withf(|model, trim| *model == JeepModel::Wrangler && trim == "Sport")
            .returning(move |_, _| result.clone());
        JeepSalesService::new(Arc::new(repo))
    }

    #[rstest]
    #[tokio::test]
    async fn sorts_repository_rows(wrangler_sport: JeepQuery) {
        let service = service_returning(Ok(vec![sport(4, 31_975), sport(2, 28_475)]));

        let jeeps = service.fetch_jeeps(&wrangler_sport).await.expect("lookup");

        assert_eq!(jeeps, vec![sport(2, 28_475), sport(4, 31_975)]);
    }

    #[rstest]
    #[tokio::test]
    async fn repeated_lookups_agree(wrangler_sport: JeepQuery) {
        let service = service_returning(Ok(vec![sport(4, 31_975), sport(2, 28_475)]));

        let first = service.fetch_jeeps(&wrangler_sport).await.expect("first");
        let second = service.fetch_jeeps(&wrangler_sport).await.expect("second");

        assert_eq!(first, second);
        assert!(first.is_sorted());
    }

    #[rstest]
    #[tokio::test]
    async fn empty_result_is_not_an_error(wrangler_sport: JeepQuery) {
        let service = service_returning(Ok(Vec::new()));

        let jeeps = service.fetch_jeeps(&wrangler_sport).await.expect("lookup");

        assert!(jeeps.is_empty());
    }

    #[rstest]
    #[case(JeepRepositoryError::connection("pool exhausted"), "pool exhausted")]
    #[case(JeepRepositoryError::query("Ouch!"), "Ouch!")]
    #[tokio::test]
    async fn storage_faults_become_internal_errors(
        wrangler_sport: JeepQuery,
        #[case] fault: JeepRepositoryError,
        #[case] detail: &str,
    ) {
        let service = service_returning(Err(fault));

        let error = service
            .fetch_jeeps(&wrangler_sport)
            .await
            .expect_err("fault propagates");

        assert_eq!(error.code(), ErrorCode::InternalError);
        assert!(error.message().contains(detail));
    }
}
