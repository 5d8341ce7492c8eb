//! Outbound adapters implementing the domain's storage port.
//!
//! - **memory**: the reference catalogue held in process
//! - **persistence**: PostgreSQL via Diesel
//!
//! Adapters translate between domain types and storage representations and
//! hold no business logic.

pub mod memory;
pub mod persistence;
