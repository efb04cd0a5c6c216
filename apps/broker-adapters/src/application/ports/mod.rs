//! Application Ports (Driven)
//!
//! Interfaces for external systems the adapters depend on.

mod symbol_port;

pub use symbol_port::{SymbolLookupError, SymbolResolver};
