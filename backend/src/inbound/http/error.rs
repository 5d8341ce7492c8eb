//! HTTP error payloads for the jeep catalogue.
//!
//! Purpose: keep the domain error HTTP-agnostic while giving every failed
//! request the same JSON body: a message, the numeric status and its reason
//! phrase, the request path, and the moment the failure was shaped.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Message returned for every internal fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, RequestError>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON error body.
///
/// Field names are part of the wire contract, including the space in
/// `status code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorPayload {
    /// Human-readable description; validation messages are joined by `"; "`.
    #[schema(example = "model is not a recognized value")]
    pub message: String,
    #[serde(rename = "status code")]
    #[schema(example = 400)]
    pub status_code: u16,
    /// Request path as received.
    #[schema(example = "/jeeps")]
    pub uri: String,
    /// RFC 3339 UTC timestamp.
    #[schema(example = "2026-01-05T12:00:00.000Z")]
    pub timestamp: String,
    /// Reason phrase for `status code`.
    #[schema(example = "Bad Request")]
    pub reason: String,
}

impl ErrorPayload {
    /// Shape `error` for the client.
    ///
    /// Internal faults never expose their detail; the message is replaced by
    /// [`INTERNAL_ERROR_MESSAGE`].
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use jeep_sales::domain::Error;
    /// use jeep_sales::inbound::http::ErrorPayload;
    ///
    /// let at = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
    /// let payload = ErrorPayload::from_error(&Error::internal("Ouch!"), "/jeeps", at);
    /// assert_eq!(payload.status_code, 500);
    /// assert_eq!(payload.message, "Internal server error");
    /// ```
    pub fn from_error(error: &Error, uri: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        let status = status_for(error.code());
        let message = match error.code() {
            ErrorCode::InternalError => INTERNAL_ERROR_MESSAGE,
            _ => error.message(),
        };
        Self {
            message: message.to_owned(),
            status_code: status.as_u16(),
            uri: uri.into(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            reason: status.canonical_reason().unwrap_or_default().to_owned(),
        }
    }
}

/// A domain error bound to the request it failed.
///
/// Implements [`ResponseError`] so handlers can return it with `?`.
#[derive(Debug, Clone)]
pub struct RequestError {
    error: Error,
    uri: String,
    timestamp: DateTime<Utc>,
}

impl RequestError {
    pub fn new(error: Error, uri: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            error,
            uri: uri.into(),
            timestamp,
        }
    }

    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload::from_error(&self.error, self.uri.as_str(), self.timestamp)
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.uri, self.error)
    }
}

impl std::error::Error for RequestError {}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        status_for(self.error.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.error.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self.payload())
    }
}
