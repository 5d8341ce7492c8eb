//! Driven port for reading catalogue entries from storage.
//!
//! Adapters return matches in whatever order the store yields them; ordering
//! is the lookup service's job.

use async_trait::async_trait;

use crate::domain::{Jeep, JeepModel};

/// Errors raised when reading catalogue entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JeepRepositoryError {
    /// No connection to the store could be obtained.
    #[error("jeep repository connection failed: {message}")]
    Connection { message: String },
    /// The query failed during execution or row conversion.
    #[error("jeep repository query failed: {message}")]
    Query { message: String },
}

impl JeepRepositoryError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for catalogue reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JeepRepository: Send + Sync {
    /// Every entry whose model equals `model` and whose trim level equals
    /// `trim` exactly (case-sensitive). Zero matches is `Ok(vec![])`.
    async fn find_jeeps(
        &self,
        model: JeepModel,
        trim: &str,
    ) -> Result<Vec<Jeep>, JeepRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        JeepRepositoryError::connection("refused"),
        "jeep repository connection failed: refused"
    )]
    #[case(
        JeepRepositoryError::query("syntax error"),
        "jeep repository query failed: syntax error"
    )]
    fn errors_render_their_cause(#[case] error: JeepRepositoryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
