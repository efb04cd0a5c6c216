//! Canonical Order Value Objects
//!
//! Closed enumerations for the canonical order tokens. Broker adapters match
//! on these exhaustively instead of looking raw strings up in tables.

mod action;
mod price_type;
mod product;

pub use action::Action;
pub use price_type::PriceType;
pub use product::Product;
