//! Symbol Resolution
//!
//! Implementations of `SymbolResolver`. The production symbol database lives
//! outside this crate; these cover tooling and tests.

mod in_memory;

pub use in_memory::{InMemorySymbolResolver, PassthroughSymbolResolver, SymbolRow};
