//! Fyers API request types.
//!
//! These types map directly to the Fyers order API body. Field names and
//! value types are part of the wire contract.

use serde::Serialize;

/// Order validity sent with every new order.
pub const DEFAULT_VALIDITY: &str = "DAY";

/// Tag attached to every order placed through the platform.
pub const ORDER_TAG: &str = "openalgo";

// ============================================================================
// Order Request Types
// ============================================================================

/// New-order request for the Fyers API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FyersOrderRequest {
    /// Broker symbol (e.g. `NSE:SBIN-EQ`).
    pub symbol: String,
    /// Quantity.
    pub qty: i64,
    /// Order type code (1 limit, 2 market, 3 stop-market, 4 stop-limit).
    #[serde(rename = "type")]
    pub order_type: u8,
    /// Side (+1 buy, -1 sell). `null` when the action was not recognized.
    pub side: Option<i8>,
    /// Product type (`CNC`, `MARGIN`, `INTRADAY`).
    pub product_type: &'static str,
    /// Limit price.
    pub limit_price: f64,
    /// Stop (trigger) price.
    pub stop_price: f64,
    /// Order validity.
    pub validity: &'static str,
    /// Disclosed quantity.
    pub disclosed_qty: i64,
    /// After-market order flag.
    pub offline_order: bool,
    /// Bracket stop-loss distance (unused, always 0).
    pub stop_loss: i64,
    /// Bracket take-profit distance (unused, always 0).
    pub take_profit: i64,
    /// Order tag.
    pub order_tag: &'static str,
}

/// Modify-order request for the Fyers API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FyersModifyOrderRequest {
    /// Broker order id.
    pub id: String,
    /// Quantity.
    pub qty: i64,
    /// Order type code.
    #[serde(rename = "type")]
    pub order_type: u8,
    /// Side (+1 buy, -1 sell). `null` when the action was missing or unknown.
    pub side: Option<i8>,
    /// Limit price.
    pub limit_price: f64,
    /// Stop (trigger) price.
    pub stop_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_request_wire_keys() {
        let request = FyersOrderRequest {
            symbol: "NSE:SBIN-EQ".to_string(),
            qty: 1,
            order_type: 2,
            side: Some(-1),
            product_type: "CNC",
            limit_price: 0.0,
            stop_price: 0.0,
            validity: DEFAULT_VALIDITY,
            disclosed_qty: 0,
            offline_order: false,
            stop_loss: 0,
            take_profit: 0,
            order_tag: ORDER_TAG,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "symbol": "NSE:SBIN-EQ",
                "qty": 1,
                "type": 2,
                "side": -1,
                "productType": "CNC",
                "limitPrice": 0.0,
                "stopPrice": 0.0,
                "validity": "DAY",
                "disclosedQty": 0,
                "offlineOrder": false,
                "stopLoss": 0,
                "takeProfit": 0,
                "orderTag": "openalgo"
            })
        );
    }

    #[test]
    fn modify_request_serializes_missing_side_as_null() {
        let request = FyersModifyOrderRequest {
            id: "808078094451".to_string(),
            qty: 0,
            order_type: 2,
            side: None,
            limit_price: 0.0,
            stop_price: 0.0,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "808078094451",
                "qty": 0,
                "type": 2,
                "side": null,
                "limitPrice": 0.0,
                "stopPrice": 0.0
            })
        );
    }
}
