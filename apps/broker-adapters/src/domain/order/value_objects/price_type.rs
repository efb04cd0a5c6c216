//! Order pricing mode.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order pricing mode (canonical `pricetype`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceType {
    /// Execute at the best available price.
    #[serde(rename = "MARKET")]
    Market,
    /// Execute at the limit price or better.
    #[serde(rename = "LIMIT")]
    Limit,
    /// Stop-loss limit: becomes a limit order once the trigger is hit.
    #[serde(rename = "SL")]
    StopLoss,
    /// Stop-loss market: becomes a market order once the trigger is hit.
    #[serde(rename = "SL-M")]
    StopLossMarket,
}

impl PriceType {
    /// Parse a canonical token. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "MARKET" => Some(Self::Market),
            "LIMIT" => Some(Self::Limit),
            "SL" => Some(Self::StopLoss),
            "SL-M" => Some(Self::StopLossMarket),
            _ => None,
        }
    }

    /// Canonical token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
            Self::StopLoss => "SL",
            Self::StopLossMarket => "SL-M",
        }
    }
}

impl fmt::Display for PriceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
