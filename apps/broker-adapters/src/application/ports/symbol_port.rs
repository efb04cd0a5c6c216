//! Symbol Resolution Port (Driven Port)
//!
//! Translates a canonical (symbol, exchange) pair into the broker's own
//! instrument identifier, e.g. `SBIN` on `NSE` to `NSE:SBIN-EQ` for Fyers.

use std::sync::Arc;

use thiserror::Error;

/// Errors from symbol resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolLookupError {
    /// No broker symbol is known for the pair.
    #[error("no broker symbol for {symbol} on {exchange}")]
    NotFound {
        /// Canonical symbol.
        symbol: String,
        /// Canonical exchange.
        exchange: String,
    },

    /// The backing symbol store could not be queried.
    #[error("symbol store unavailable: {0}")]
    Unavailable(String),
}

/// Port for resolving canonical symbols to broker symbols.
///
/// Implementations must be safe to call from any number of threads; the
/// order mappers hold one and call it once per translated order.
pub trait SymbolResolver: Send + Sync {
    /// Resolve `symbol` on `exchange` to the broker's symbol.
    fn broker_symbol(&self, symbol: &str, exchange: &str) -> Result<String, SymbolLookupError>;
}

impl<T: SymbolResolver + ?Sized> SymbolResolver for Arc<T> {
    fn broker_symbol(&self, symbol: &str, exchange: &str) -> Result<String, SymbolLookupError> {
        (**self).broker_symbol(symbol, exchange)
    }
}

impl<T: SymbolResolver + ?Sized> SymbolResolver for Box<T> {
    fn broker_symbol(&self, symbol: &str, exchange: &str) -> Result<String, SymbolLookupError> {
        (**self).broker_symbol(symbol, exchange)
    }
}

impl<T: SymbolResolver + ?Sized> SymbolResolver for &T {
    fn broker_symbol(&self, symbol: &str, exchange: &str) -> Result<String, SymbolLookupError> {
        (**self).broker_symbol(symbol, exchange)
    }
}
