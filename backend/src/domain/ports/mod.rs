//! Domain ports for the hexagonal boundary.

mod jeep_repository;
mod jeep_sales_query;

#[cfg(test)]
pub use jeep_repository::MockJeepRepository;
pub use jeep_repository::{JeepRepository, JeepRepositoryError};
#[cfg(test)]
pub use jeep_sales_query::MockJeepSalesQuery;
pub use jeep_sales_query::JeepSalesQuery;
