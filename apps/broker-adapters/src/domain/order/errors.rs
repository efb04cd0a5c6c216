//! Order translation errors.

use thiserror::Error;

/// Errors that can occur while translating a canonical order for a broker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A numeric field could not be coerced to the type the broker expects.
    #[error("Type conversion error: cannot convert {field} value '{value}' to {target}")]
    TypeConversion {
        /// Canonical field name.
        field: &'static str,
        /// Raw input value.
        value: String,
        /// Target type name (`integer` or `float`).
        target: &'static str,
    },

    /// The symbol-resolution collaborator failed.
    #[error("Symbol lookup failed for {symbol} on {exchange}: {reason}")]
    SymbolLookup {
        /// Canonical symbol.
        symbol: String,
        /// Canonical exchange.
        exchange: String,
        /// Failure description from the resolver.
        reason: String,
    },
}

impl MappingError {
    /// Build a type-conversion error for an integer field.
    pub(crate) fn not_integer(field: &'static str, value: impl Into<String>) -> Self {
        Self::TypeConversion {
            field,
            value: value.into(),
            target: "integer",
        }
    }

    /// Build a type-conversion error for a float field.
    pub(crate) fn not_float(field: &'static str, value: impl Into<String>) -> Self {
        Self::TypeConversion {
            field,
            value: value.into(),
            target: "float",
        }
    }
}
