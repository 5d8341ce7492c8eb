//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`. The wrappers here mirror their
//! serialized shape so the OpenAPI document can describe them.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::JeepModel`].
#[derive(ToSchema)]
#[schema(as = crate::domain::JeepModel)]
pub enum JeepModelSchema {
    #[schema(rename = "WRANGLER")]
    Wrangler,
    #[schema(rename = "GLADIATOR")]
    Gladiator,
    #[schema(rename = "WRANGLER_4XE")]
    Wrangler4xe,
    #[schema(rename = "GRAND_CHEROKEE")]
    GrandCherokee,
    #[schema(rename = "GRAND_CHEROKEE_4XE")]
    GrandCherokee4xe,
    #[schema(rename = "COMPASS")]
    Compass,
    #[schema(rename = "CHEROKEE")]
    Cherokee,
    #[schema(rename = "RENEGADE")]
    Renegade,
}

/// OpenAPI schema for [`crate::domain::Jeep`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Jeep)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct JeepSchema {
    model_id: JeepModelSchema,
    #[schema(example = "Sport")]
    trim_level: String,
    #[schema(example = 2)]
    num_doors: i32,
    #[schema(example = 17)]
    wheel_size: i32,
    /// Price with two fraction digits.
    #[schema(value_type = f64, example = 28475.00)]
    base_price: String,
}
