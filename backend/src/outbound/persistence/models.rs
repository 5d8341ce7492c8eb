//! Diesel row structs. Internal to the persistence adapter.

use diesel::prelude::*;

use super::schema::jeeps;

/// Row read from `jeeps`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = jeeps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JeepRow {
    pub model_id: String,
    pub trim_level: String,
    pub num_doors: i32,
    pub wheel_size: i32,
    pub base_price_cents: i64,
}
