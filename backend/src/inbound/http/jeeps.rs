//! Catalogue read endpoint.
//!
//! ```text
//! GET /jeeps?model=WRANGLER&trim=Sport
//! ```
//!
//! Raw parameters are validated before any lookup. A rejected request never
//! reaches storage; an empty lookup is a 404 rather than an empty array.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use actix_web::{HttpRequest, HttpResponse, get, web};
use futures_util::FutureExt;
use serde::Deserialize;
use tracing::{debug, error};
use utoipa::IntoParams;

use crate::domain::{Error, ErrorCode, validate};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ErrorPayload, RequestError};
use crate::inbound::http::schemas::JeepSchema;
use crate::inbound::http::state::HttpState;

/// Message returned when a valid query matches nothing.
pub const NO_JEEPS_FOUND_MESSAGE: &str = "No jeeps found for the requested model and trim";

/// Raw query parameters. Both are optional here so that absence is reported
/// as a validation failure rather than a decode failure.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchJeepsParams {
    /// Model token, e.g. `WRANGLER` or `GRAND_CHEROKEE_4XE`.
    #[param(example = "WRANGLER")]
    pub model: Option<String>,
    /// Trim level: letters, digits and spaces, at most 30 characters.
    #[param(example = "Sport")]
    pub trim: Option<String>,
}

/// Find catalogue entries for a model and trim.
#[utoipa::path(
    get,
    path = "/jeeps",
    params(FetchJeepsParams),
    responses(
        (status = 200, description = "Matching jeeps, sorted", body = [JeepSchema]),
        (status = 400, description = "Invalid parameters", body = ErrorPayload),
        (status = 404, description = "No jeeps match", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    tags = ["jeeps"],
    operation_id = "fetchJeeps"
)]
#[get("/jeeps")]
pub async fn fetch_jeeps(
    request: HttpRequest,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let fail = |error: Error| RequestError::new(error, request.path(), state.clock.utc());

    let FetchJeepsParams { model, trim } =
        web::Query::<FetchJeepsParams>::from_query(request.query_string())
            .map_err(|err| fail(Error::invalid_request(format!("malformed query string: {err}"))))?
            .into_inner();
    debug!(?model, ?trim, "jeep lookup requested");

    let query = validate(model.as_deref(), trim.as_deref())
        .into_result()
        .map_err(|violations| fail(violations.into()))?;

    // A panicking store must still answer with a 500 payload.
    let lookup = AssertUnwindSafe(state.jeeps.fetch_jeeps(&query))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| {
            Err(Error::internal(format!(
                "jeep lookup panicked: {}",
                panic_message(panic.as_ref())
            )))
        });

    let jeeps = lookup.map_err(|err| {
        if err.code() == ErrorCode::InternalError {
            error!(
                error = %err,
                model = %query.model(),
                trim = query.trim(),
                "jeep lookup failed"
            );
        }
        fail(err)
    })?;

    if jeeps.is_empty() {
        return Err(fail(Error::not_found(NO_JEEPS_FOUND_MESSAGE)));
    }
    Ok(HttpResponse::Ok().json(jeeps))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
