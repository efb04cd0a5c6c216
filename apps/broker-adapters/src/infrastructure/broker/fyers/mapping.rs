//! Canonical order to Fyers order translation.

use crate::application::ports::SymbolResolver;
use crate::domain::order::{
    Action, MappingError, ModifyOrderRequest, NumericInput, OrderRequest, PriceType, Product,
};

use super::api_types::{
    DEFAULT_VALIDITY, FyersModifyOrderRequest, FyersOrderRequest, ORDER_TAG,
};

/// Fyers order type code for market orders; also the fallback code.
const MARKET_ORDER_TYPE: u8 = 2;

/// Fyers product code used when the canonical product is not recognized.
const DEFAULT_PRODUCT_TYPE: &str = "INTRADAY";

/// Translates canonical orders into Fyers order requests.
///
/// Holds the symbol resolver used to turn canonical symbols into Fyers
/// symbols. Stateless otherwise; every call returns a fresh request.
#[derive(Debug, Clone)]
pub struct FyersOrderMapper<R> {
    resolver: R,
}

impl<R: SymbolResolver> FyersOrderMapper<R> {
    /// Create a mapper backed by the given symbol resolver.
    pub const fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Translate a new order.
    ///
    /// Numeric fields that cannot be coerced reject the whole order, as does
    /// a failed symbol lookup. Absent optional numerics become 0.
    pub fn transform_data(&self, order: &OrderRequest) -> Result<FyersOrderRequest, MappingError> {
        let symbol = self
            .resolver
            .broker_symbol(&order.symbol, &order.exchange)
            .map_err(|e| MappingError::SymbolLookup {
                symbol: order.symbol.clone(),
                exchange: order.exchange.clone(),
                reason: e.to_string(),
            })?;

        let qty = order.quantity.to_int("quantity")?;
        let limit_price = strict_float(order.price.as_ref(), "price")?;
        let stop_price = strict_float(order.trigger_price.as_ref(), "trigger_price")?;
        let disclosed_qty = match &order.disclosed_quantity {
            Some(value) => value.to_int("disclosed_quantity")?,
            None => 0,
        };

        let request = FyersOrderRequest {
            symbol,
            qty,
            order_type: map_order_type(&order.pricetype),
            side: map_action(&order.action),
            product_type: map_product_type(&order.product),
            limit_price,
            stop_price,
            validity: DEFAULT_VALIDITY,
            disclosed_qty,
            offline_order: false,
            stop_loss: 0,
            take_profit: 0,
            order_tag: ORDER_TAG,
        };

        tracing::debug!(
            symbol = %request.symbol,
            qty = request.qty,
            order_type = request.order_type,
            side = ?request.side,
            product_type = request.product_type,
            "Mapped order for Fyers"
        );

        Ok(request)
    }

    /// Translate an order modification. See [`transform_modify_order_data`].
    pub fn transform_modify_order_data(&self, order: &ModifyOrderRequest) -> FyersModifyOrderRequest {
        transform_modify_order_data(order)
    }
}

/// Translate an order modification.
///
/// Never fails: numerics that cannot be coerced become 0 / 0.0, empty or
/// zero prices become 0.0, and missing `pricetype`/`action` are looked up as
/// the empty string.
pub fn transform_modify_order_data(order: &ModifyOrderRequest) -> FyersModifyOrderRequest {
    let qty = lenient_int(order.quantity.as_ref(), "quantity");
    let limit_price = lenient_float(order.price.as_ref(), "price");
    let stop_price = lenient_float(order.trigger_price.as_ref(), "trigger_price");

    FyersModifyOrderRequest {
        id: order.orderid.clone(),
        qty,
        order_type: map_order_type(order.pricetype.as_deref().unwrap_or("")),
        side: map_action(order.action.as_deref().unwrap_or("")),
        limit_price,
        stop_price,
    }
}

// ============================================================================
// Lookup Tables
// ============================================================================

/// Map a canonical price type to the Fyers order type code.
///
/// Total: unrecognized input maps to the market code (2).
pub fn map_order_type(pricetype: &str) -> u8 {
    PriceType::from_token(pricetype).map_or(MARKET_ORDER_TYPE, order_type_code)
}

/// Map a canonical action to the Fyers side.
///
/// Unrecognized input yields `None`; no default side is substituted, callers
/// must treat it as invalid.
pub fn map_action(action: &str) -> Option<i8> {
    Action::from_token(action).map(|a| a.sign())
}

/// Map a canonical product to the Fyers product type.
///
/// Total: unrecognized input maps to `INTRADAY`.
pub fn map_product_type(product: &str) -> &'static str {
    Product::from_token(product).map_or(DEFAULT_PRODUCT_TYPE, product_type_code)
}

/// Map a product code reported by Fyers back to the canonical product.
///
/// `exchange` is accepted for parity with other brokers whose product codes
/// differ per exchange; the Fyers table is the same for every exchange.
pub fn reverse_map_product_type(_exchange: &str, product: &str) -> Option<&'static str> {
    Product::from_token(product).map(|p| p.as_str())
}

const fn order_type_code(price_type: PriceType) -> u8 {
    match price_type {
        PriceType::Limit => 1,
        PriceType::Market => MARKET_ORDER_TYPE,
        PriceType::StopLossMarket => 3,
        PriceType::StopLoss => 4,
    }
}

const fn product_type_code(product: Product) -> &'static str {
    match product {
        Product::Cnc => "CNC",
        Product::Nrml => "MARGIN",
        Product::Mis => "INTRADAY",
    }
}

// ============================================================================
// Numeric Coercion
// ============================================================================

fn strict_float(value: Option<&NumericInput>, field: &'static str) -> Result<f64, MappingError> {
    value.map_or(Ok(0.0), |v| v.to_float(field))
}

fn lenient_int(value: Option<&NumericInput>, field: &'static str) -> i64 {
    let Some(value) = value else {
        return 0;
    };
    value.to_int(field).unwrap_or_else(|e| {
        tracing::warn!(field, error = %e, "Defaulting unparseable modify field to 0");
        0
    })
}

fn lenient_float(value: Option<&NumericInput>, field: &'static str) -> f64 {
    match value {
        Some(value) if value.is_provided() => value.to_float(field).unwrap_or_else(|e| {
            tracing::warn!(field, error = %e, "Defaulting unparseable modify field to 0.0");
            0.0
        }),
        _ => 0.0,
    }
}
