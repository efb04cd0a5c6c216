//! Canonical Order Context
//!
//! The order schema used internally before broker-specific translation.
//!
//! # Key Concepts
//!
//! - **Order Request**: a new order as submitted by strategies and clients
//! - **Modify Request**: a best-effort amendment to an existing order
//! - **Numeric Input**: numeric fields arrive as JSON strings or numbers and
//!   are coerced at translation time

pub mod errors;
pub mod numeric;
pub mod request;
pub mod value_objects;

pub use errors::MappingError;
pub use numeric::NumericInput;
pub use request::{ModifyOrderRequest, OrderRequest};
pub use value_objects::{Action, PriceType, Product};
