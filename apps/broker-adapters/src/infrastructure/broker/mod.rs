//! Broker Adapters
//!
//! One module per broker. Each module owns its wire types and the
//! translation to and from the canonical model.

pub mod fyers;
pub mod upstox;

pub use fyers::{FyersModifyOrderRequest, FyersOrderMapper, FyersOrderRequest};
pub use upstox::{AuthError, UpstoxAuthClient, UpstoxConfig};
