//! Error mapping shared by the Diesel repositories.

use tracing::debug;

use crate::domain::ports::JeepRepositoryError;

use super::pool::PoolError;

/// Pool failures mean no connection was obtained.
pub fn map_pool_error(error: PoolError) -> JeepRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            JeepRepositoryError::connection(message)
        }
    }
}

/// Map a Diesel error raised while running `operation`.
///
/// Closed connections map to `Connection`; everything else is a `Query`
/// failure carrying Diesel's message.
pub fn map_diesel_error(error: diesel::result::Error, operation: &str) -> JeepRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    let message = error.to_string();
    debug!(%message, %operation, "diesel operation failed");
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            JeepRepositoryError::connection(message)
        }
        _ => JeepRepositoryError::query(message),
    }
}
