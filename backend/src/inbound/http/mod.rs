//! HTTP inbound adapter exposing the catalogue endpoints.

pub mod error;
pub mod health;
pub mod jeeps;
pub mod schemas;
pub mod state;

pub use error::{ApiResult, ErrorPayload, INTERNAL_ERROR_MESSAGE, RequestError};
