//! Numeric inputs that may arrive as JSON numbers or strings.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::MappingError;

/// 2^63, the first float past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A numeric field as received from API clients.
///
/// Clients send quantities and prices either as JSON numbers (`10`, `100.5`)
/// or as strings (`"10"`, `"100.5"`). Coercion happens when the order is
/// translated for a broker, not when it is deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// Integral JSON number.
    Int(i64),
    /// Fractional JSON number.
    Float(f64),
    /// String that should contain a number.
    Text(String),
}

impl NumericInput {
    /// Coerce to an integer.
    ///
    /// Fractional numbers truncate toward zero; values outside the `i64`
    /// range are rejected. Strings are trimmed and must contain a base-10
    /// integer; `"10.5"` is rejected.
    pub fn to_int(&self, field: &'static str) -> Result<i64, MappingError> {
        match self {
            Self::Int(value) => Ok(*value),
            Self::Float(value) => {
                let truncated = value.trunc();
                if truncated.is_finite() && (-I64_LIMIT..I64_LIMIT).contains(&truncated) {
                    Ok(truncated as i64)
                } else {
                    Err(MappingError::not_integer(field, value.to_string()))
                }
            }
            Self::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| MappingError::not_integer(field, text.as_str())),
        }
    }

    /// Coerce to a finite float.
    ///
    /// `"inf"`, `"NaN"` and friends are rejected: JSON has no encoding for them.
    pub fn to_float(&self, field: &'static str) -> Result<f64, MappingError> {
        let parsed = match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        };
        parsed
            .filter(|value| value.is_finite())
            .ok_or_else(|| MappingError::not_float(field, self.to_string()))
    }

    /// Whether the value counts as "provided" for lenient price handling.
    ///
    /// Empty strings and numeric zero are treated as not provided.
    #[must_use]
    pub fn is_provided(&self) -> bool {
        match self {
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0,
            Self::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
