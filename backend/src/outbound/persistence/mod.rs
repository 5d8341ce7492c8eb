//! PostgreSQL persistence adapter using Diesel.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and the table definition stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use jeep_sales::outbound::persistence::{DbPool, DieselJeepRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/jeep_sales")).await?;
//! let repo = DieselJeepRepository::new(pool);
//! ```

mod diesel_helpers;
mod diesel_jeep_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_jeep_repository::DieselJeepRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
