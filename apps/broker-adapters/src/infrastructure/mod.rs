//! Infrastructure Layer
//!
//! Adapters translating between the canonical model and external systems.
//!
//! - `broker`: broker API adapters (Fyers order mapping, Upstox login)
//! - `symbols`: symbol resolution implementations

pub mod broker;
pub mod symbols;
