//! Validation of raw `/jeeps` query parameters.
//!
//! [`validate`] inspects the caller-supplied model and trim and either yields
//! a [`JeepQuery`] or every rule that failed. Rules never short-circuit, so a
//! caller sending several bad values learns about all of them at once.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::{Error, JeepModel};

/// Longest trim label accepted, in characters.
pub const TRIM_MAX_LENGTH: usize = 30;

const VIOLATION_SEPARATOR: &str = "; ";

fn trim_pattern() -> &'static Regex {
    static TRIM_RE: OnceLock<Regex> = OnceLock::new();
    TRIM_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9 ]*$")
            .unwrap_or_else(|error| panic!("trim regex failed to compile: {error}"))
    })
}

/// A single failed validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    ModelMissing,
    ModelUnrecognized,
    TrimMissing,
    TrimEmpty,
    TrimTooLong { max: usize },
    TrimInvalidCharacters,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelMissing => write!(f, "model is required"),
            Self::ModelUnrecognized => write!(f, "model is not a recognized value"),
            Self::TrimMissing => write!(f, "trim is required"),
            Self::TrimEmpty => write!(f, "trim must not be empty"),
            Self::TrimTooLong { max } => write!(f, "trim must not exceed {max} characters"),
            Self::TrimInvalidCharacters => {
                write!(f, "trim must contain only letters, digits, and spaces")
            }
        }
    }
}

/// Non-empty, ordered list of violations.
///
/// `Display` joins the messages with `"; "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Returns `None` when `violations` is empty.
    #[cfg(test)]
    pub(crate) fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        (!violations.is_empty()).then_some(Self(violations))
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[Violation] {
        self.0.as_slice()
    }

    /// Messages in rule order.
    fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(VIOLATION_SEPARATOR))
    }
}

impl From<Violations> for Error {
    fn from(value: Violations) -> Self {
        Error::invalid_request(value.to_string())
    }
}

/// Validated lookup criteria.
///
/// Only [`validate`] builds one, so holders may assume both fields passed
/// every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JeepQuery {
    model: JeepModel,
    trim: String,
}

impl JeepQuery {
    /// Validate an already-typed model alongside a raw trim.
    #[cfg(test)]
    pub(crate) fn try_new(model: JeepModel, trim: impl Into<String>) -> Result<Self, Violations> {
        let trim = trim.into();
        match Violations::from_vec(trim_violations(Some(&trim))) {
            Some(violations) => Err(violations),
            None => Ok(Self { model, trim }),
        }
    }

    pub fn model(&self) -> JeepModel {
        self.model
    }

    pub fn trim(&self) -> &str {
        self.trim.as_str()
    }
}

/// Result of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid(JeepQuery),
    Rejected(Violations),
}

impl ValidationOutcome {
    pub fn into_result(self) -> Result<JeepQuery, Violations> {
        match self {
            Self::Valid(query) => Ok(query),
            Self::Rejected(violations) => Err(violations),
        }
    }
}

fn model_violation(model: Option<&str>) -> Result<JeepModel, Violation> {
    let token = model.ok_or(Violation::ModelMissing)?;
    token.parse().map_err(|_| Violation::ModelUnrecognized)
}

fn trim_violations(trim: Option<&str>) -> Vec<Violation> {
    let Some(trim) = trim else {
        return vec![Violation::TrimMissing];
    };
    let mut found = Vec::new();
    if trim.is_empty() {
        found.push(Violation::TrimEmpty);
    }
    if trim.chars().count() > TRIM_MAX_LENGTH {
        found.push(Violation::TrimTooLong {
            max: TRIM_MAX_LENGTH,
        });
    }
    if !trim_pattern().is_match(trim) {
        found.push(Violation::TrimInvalidCharacters);
    }
    found
}

/// Check raw `model` and `trim` parameters.
///
/// # Examples
/// ```
/// use jeep_sales::domain::{validate, JeepModel, ValidationOutcome};
///
/// let ValidationOutcome::Valid(query) = validate(Some("WRANGLER"), Some("Sport")) else {
///     panic!("expected a valid query");
/// };
/// assert_eq!(query.model(), JeepModel::Wrangler);
///
/// let ValidationOutcome::Rejected(violations) = validate(None, Some("")) else {
///     panic!("expected violations");
/// };
/// assert_eq!(violations.to_string(), "model is required; trim must not be empty");
/// ```
pub fn validate(model: Option<&str>, trim: Option<&str>) -> ValidationOutcome {
    let model = model_violation(model);
    let trim_found = trim_violations(trim);

    match (model, trim) {
        (Ok(model), Some(trim)) if trim_found.is_empty() => ValidationOutcome::Valid(JeepQuery {
            model,
            trim: trim.to_owned(),
        }),
        // Any other combination has recorded at least one violation.
        (model, _) => {
            let violations = model.err().into_iter().chain(trim_found).collect();
            ValidationOutcome::Rejected(Violations(violations))
        }
    }
}
