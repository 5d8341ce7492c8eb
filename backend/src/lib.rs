//! Jeep catalogue lookup service.
//!
//! `domain` holds validation and the lookup use case, `inbound::http` the
//! actix-web adapter, and `outbound` the in-memory and PostgreSQL stores.

#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
