//! Domain primitives, validation and the catalogue lookup use case.
//!
//! Purpose: define strongly typed catalogue entries and query criteria, and
//! keep request validation and result ordering independent of any transport
//! or store.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with a stable category.
//! - Jeep / JeepModel / BasePrice: catalogue entries.
//! - validate / JeepQuery / ValidationOutcome / Violations: parameter checks.
//! - JeepSalesService: lookup service implementing `ports::JeepSalesQuery`.
//! - TraceId: per-request correlation identifier.

pub mod error;
pub mod jeep;
pub mod jeep_query;
pub mod jeep_sales_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::jeep::{BasePrice, Jeep, JeepModel, UnknownJeepModel};
pub use self::jeep_query::{
    JeepQuery, TRIM_MAX_LENGTH, ValidationOutcome, Violation, Violations, validate,
};
pub use self::jeep_sales_service::JeepSalesService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
