//! In-memory symbol resolvers.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::ports::{SymbolLookupError, SymbolResolver};

/// One row of a symbol map file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRow {
    /// Canonical symbol.
    pub symbol: String,
    /// Canonical exchange.
    pub exchange: String,
    /// Broker symbol.
    pub brsymbol: String,
}

/// Symbol resolver backed by a map loaded up front.
///
/// Suitable for tooling and tests. Not a replacement for the symbol database.
#[derive(Debug, Clone, Default)]
pub struct InMemorySymbolResolver {
    symbols: HashMap<(String, String), String>,
}

impl InMemorySymbolResolver {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping (builder style).
    #[must_use]
    pub fn with_symbol(
        mut self,
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        brsymbol: impl Into<String>,
    ) -> Self {
        self.insert(symbol, exchange, brsymbol);
        self
    }

    /// Add or replace a mapping.
    pub fn insert(
        &mut self,
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        brsymbol: impl Into<String>,
    ) {
        self.symbols
            .insert((symbol.into(), exchange.into()), brsymbol.into());
    }

    /// Load a JSON array of [`SymbolRow`]s.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, SymbolLookupError> {
        let rows: Vec<SymbolRow> = serde_json::from_reader(reader)
            .map_err(|e| SymbolLookupError::Unavailable(format!("invalid symbol map: {e}")))?;
        Ok(rows.into_iter().collect())
    }

    /// Load a JSON symbol map file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SymbolLookupError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            SymbolLookupError::Unavailable(format!("cannot open {}: {e}", path.display()))
        })?;
        let resolver = Self::from_json_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            symbols = resolver.len(),
            "Loaded symbol map"
        );
        Ok(resolver)
    }

    /// Number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the resolver has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl FromIterator<SymbolRow> for InMemorySymbolResolver {
    fn from_iter<I: IntoIterator<Item = SymbolRow>>(iter: I) -> Self {
        let symbols = iter
            .into_iter()
            .map(|row| ((row.symbol, row.exchange), row.brsymbol))
            .collect();
        Self { symbols }
    }
}

impl SymbolResolver for InMemorySymbolResolver {
    fn broker_symbol(&self, symbol: &str, exchange: &str) -> Result<String, SymbolLookupError> {
        self.symbols
            .get(&(symbol.to_string(), exchange.to_string()))
            .cloned()
            .ok_or_else(|| SymbolLookupError::NotFound {
                symbol: symbol.to_string(),
                exchange: exchange.to_string(),
            })
    }
}

/// Resolver that returns the canonical symbol unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughSymbolResolver;

impl SymbolResolver for PassthroughSymbolResolver {
    fn broker_symbol(&self, symbol: &str, _exchange: &str) -> Result<String, SymbolLookupError> {
        Ok(symbol.to_string())
    }
}
