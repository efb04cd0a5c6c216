//! Fyers Broker Adapter
//!
//! Maps canonical order requests onto the Fyers order API:
//! - Strict translation for new orders (bad numerics are rejected)
//! - Best-effort translation for order modifications
//! - Lookup tables for order type, side and product type

mod api_types;
mod mapping;

pub use api_types::{FyersModifyOrderRequest, FyersOrderRequest};
pub use mapping::{
    FyersOrderMapper, map_action, map_order_type, map_product_type, reverse_map_product_type,
    transform_modify_order_data,
};
