//! OpenAPI documentation for the catalogue API.
//!
//! Registers the `/jeeps` and health paths plus the schema wrappers from
//! [`crate::inbound::http::schemas`]. Served by Swagger UI in debug builds
//! and printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::ErrorPayload;
use crate::inbound::http::schemas::{JeepModelSchema, JeepSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jeep sales API",
        description = "Read-only lookup of jeep configurations by model and trim."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::jeeps::fetch_jeeps,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(JeepSchema, JeepModelSchema, ErrorPayload)),
    tags(
        (name = "jeeps", description = "Catalogue lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
