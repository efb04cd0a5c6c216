// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::needless_pass_by_value
    )
)]

//! Broker Adapters - Rust Core Library
//!
//! Translates the platform's canonical order requests into broker wire
//! formats and performs broker login token exchanges.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! - **Domain**: canonical order requests, lookup enumerations, numeric coercion
//! - **Application**: ports for external collaborators (`SymbolResolver`)
//! - **Infrastructure**: broker adapters
//!   - `broker::fyers`: order-field mapping for the Fyers order API
//!   - `broker::upstox`: authorization-code token exchange
//!   - `symbols`: in-memory symbol resolution
//! - **Config**: environment-driven broker credentials

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Canonical order model with no external dependencies.
pub mod domain;

/// Application layer - Port definitions.
pub mod application;

/// Infrastructure layer - Broker adapters and collaborator implementations.
pub mod infrastructure;

/// Configuration loading from the process environment.
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::ports::{SymbolLookupError, SymbolResolver};
pub use config::{BrokerSettings, ConfigError};
pub use domain::order::{
    Action, MappingError, ModifyOrderRequest, NumericInput, OrderRequest, PriceType, Product,
};
pub use infrastructure::broker::fyers::{
    FyersModifyOrderRequest, FyersOrderMapper, FyersOrderRequest, map_action, map_order_type,
    map_product_type, reverse_map_product_type, transform_modify_order_data,
};
pub use infrastructure::broker::upstox::{AuthError, UpstoxAuthClient, UpstoxConfig};
pub use infrastructure::symbols::{InMemorySymbolResolver, PassthroughSymbolResolver, SymbolRow};
