//! Trading margin/settlement mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product type (canonical `product`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Product {
    /// Cash and carry (delivery).
    Cnc,
    /// Normal margin (carry-forward derivatives).
    Nrml,
    /// Margin intraday square-off.
    Mis,
}

impl Product {
    /// Parse a canonical token. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "CNC" => Some(Self::Cnc),
            "NRML" => Some(Self::Nrml),
            "MIS" => Some(Self::Mis),
            _ => None,
        }
    }

    /// Canonical token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cnc => "CNC",
            Self::Nrml => "NRML",
            Self::Mis => "MIS",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_from_token() {
        assert_eq!(Product::from_token("CNC"), Some(Product::Cnc));
        assert_eq!(Product::from_token("NRML"), Some(Product::Nrml));
        assert_eq!(Product::from_token("MIS"), Some(Product::Mis));
        assert_eq!(Product::from_token("INTRADAY"), None);
    }

    #[test]
    fn product_serde() {
        let json = serde_json::to_string(&Product::Nrml).unwrap();
        assert_eq!(json, "\"NRML\"");

        let parsed: Product = serde_json::from_str("\"MIS\"").unwrap();
        assert_eq!(parsed, Product::Mis);
    }
}
