//! Diesel table definitions; must match `migrations/`.

diesel::table! {
    /// Catalogue entries, one row per model, trim and configuration.
    jeeps (model_pk) {
        model_pk -> Int8,
        /// Model token such as `WRANGLER_4XE`.
        model_id -> Varchar,
        trim_level -> Varchar,
        num_doors -> Int4,
        wheel_size -> Int4,
        /// Base price in whole cents.
        base_price_cents -> Int8,
    }
}
