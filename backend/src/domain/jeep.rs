//! Jeep catalogue entries.
//!
//! A [`Jeep`] is one purchasable configuration: a model, a trim level, and
//! the physical and pricing attributes that go with them. Entries are
//! immutable once built and totally ordered by their fields in declaration
//! order, so sorting a result set is deterministic.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Closed set of vehicle models offered by the catalogue.
///
/// Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JeepModel {
    Wrangler,
    Gladiator,
    Wrangler4xe,
    GrandCherokee,
    GrandCherokee4xe,
    Compass,
    Cherokee,
    Renegade,
}

impl JeepModel {
    /// Every model in sort order.
    pub const ALL: [Self; 8] = [
        Self::Wrangler,
        Self::Gladiator,
        Self::Wrangler4xe,
        Self::GrandCherokee,
        Self::GrandCherokee4xe,
        Self::Compass,
        Self::Cherokee,
        Self::Renegade,
    ];

    /// Wire token for the model, e.g. `WRANGLER_4XE`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wrangler => "WRANGLER",
            Self::Gladiator => "GLADIATOR",
            Self::Wrangler4xe => "WRANGLER_4XE",
            Self::GrandCherokee => "GRAND_CHEROKEE",
            Self::GrandCherokee4xe => "GRAND_CHEROKEE_4XE",
            Self::Compass => "COMPASS",
            Self::Cherokee => "CHEROKEE",
            Self::Renegade => "RENEGADE",
        }
    }
}

impl fmt::Display for JeepModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a token names no known model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown jeep model: {token}")]
pub struct UnknownJeepModel {
    pub token: String,
}

impl FromStr for JeepModel {
    type Err = UnknownJeepModel;

    /// Tokens are matched exactly; `wrangler` is not `WRANGLER`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| UnknownJeepModel {
                token: s.to_owned(),
            })
    }
}

impl Serialize for JeepModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Base price held as whole cents.
///
/// Renders with exactly two fraction digits, both through `Display` and as a
/// JSON number (`31975.00`).
///
/// # Examples
/// ```
/// use jeep_sales::domain::BasePrice;
///
/// assert_eq!(BasePrice::from_cents(2_847_500).to_string(), "28475.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BasePrice(i64);

impl BasePrice {
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Whole dollars plus cents, e.g. `from_parts(31_975, 0)`.
    pub const fn from_parts(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BasePrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", magnitude / 100, magnitude % 100)
    }
}

impl Serialize for BasePrice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.to_string())
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        raw.serialize(serializer)
    }
}

/// One catalogue entry.
///
/// The derived ordering compares model, trim level, door count, wheel size and
/// base price in that order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Jeep {
    model_id: JeepModel,
    trim_level: String,
    num_doors: i32,
    wheel_size: i32,
    base_price: BasePrice,
}

impl Jeep {
    pub fn new(
        model_id: JeepModel,
        trim_level: impl Into<String>,
        num_doors: i32,
        wheel_size: i32,
        base_price: BasePrice,
    ) -> Self {
        Self {
            model_id,
            trim_level: trim_level.into(),
            num_doors,
            wheel_size,
            base_price,
        }
    }

    pub fn model_id(&self) -> JeepModel {
        self.model_id
    }

    pub fn trim_level(&self) -> &str {
        self.trim_level.as_str()
    }

    pub fn num_doors(&self) -> i32 {
        self.num_doors
    }

    pub fn wheel_size(&self) -> i32 {
        self.wheel_size
    }

    pub fn base_price(&self) -> BasePrice {
        self.base_price
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("WRANGLER", JeepModel::Wrangler)]
    #[case("WRANGLER_4XE", JeepModel::Wrangler4xe)]
    #[case("GRAND_CHEROKEE_4XE", JeepModel::GrandCherokee4xe)]
    fn parses_known_tokens(#[case] token: &str, #[case] expected: JeepModel) {
        assert_eq!(token.parse::<JeepModel>(), Ok(expected));
    }

    #[rstest]
    #[case("wrangler")]
    #[case("INVALID")]
    #[case("")]
    #[case(" WRANGLER")]
    fn rejects_unknown_tokens(#[case] token: &str) {
        assert!(token.parse::<JeepModel>().is_err());
    }

    #[rstest]
    fn tokens_round_trip_through_display() {
        for model in JeepModel::ALL {
            assert_eq!(model.to_string().parse::<JeepModel>(), Ok(model));
        }
    }

    #[rstest]
    fn model_order_follows_declaration() {
        let mut sorted = JeepModel::ALL;
        sorted.sort();
        assert_eq!(sorted, JeepModel::ALL);
    }

    #[rstest]
    #[case(2_847_500, "28475.00")]
    #[case(5, "0.05")]
    #[case(-150, "-1.50")]
    fn price_renders_two_fraction_digits(#[case] cents: i64, #[case] expected: &str) {
        assert_eq!(BasePrice::from_cents(cents).to_string(), expected);
    }

    #[rstest]
    fn ordering_compares_fields_in_sequence() {
        let four_door = Jeep::new(
            JeepModel::Wrangler,
            "Sport",
            4,
            17,
            BasePrice::from_parts(31_975, 0),
        );
        let two_door = Jeep::new(
            JeepModel::Wrangler,
            "Sport",
            2,
            17,
            BasePrice::from_parts(28_475, 0),
        );
        let gladiator =
            Jeep::new(JeepModel::Gladiator, "Sport", 2, 17, BasePrice::from_parts(1, 0));
        let mut jeeps = vec![gladiator.clone(), four_door.clone(), two_door.clone()];
        jeeps.sort();
        assert_eq!(jeeps, vec![two_door, four_door, gladiator]);
    }

    #[rstest]
    fn serializes_with_camel_case_keys_and_fixed_scale_price() {
        let jeep = Jeep::new(
            JeepModel::Wrangler4xe,
            "Sahara",
            4,
            18,
            BasePrice::from_parts(51_690, 0),
        );
        let encoded = serde_json::to_string(&jeep).expect("serialize jeep");
        assert_eq!(
            encoded,
            concat!(
                r#"{"modelId":"WRANGLER_4XE","trimLevel":"Sahara","numDoors":4,"#,
                r#""wheelSize":18,"basePrice":51690.00}"#
            )
        );
        let value: serde_json::Value = serde_json::from_str(&encoded).expect("valid json");
        assert_eq!(value["basePrice"], json!(51690.0));
    }
}
