//! Canonical order requests.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::numeric::NumericInput;

/// A new order in the platform's canonical schema.
///
/// Token fields (`pricetype`, `action`, `product`) are kept as raw strings:
/// unknown tokens are not a deserialization error, each broker adapter
/// decides how to map them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Canonical trading symbol (e.g. `SBIN`).
    pub symbol: String,
    /// Canonical exchange code (e.g. `NSE`).
    pub exchange: String,
    /// Order quantity.
    pub quantity: NumericInput,
    /// Limit price; absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<NumericInput>,
    /// Stop trigger price; absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<NumericInput>,
    /// Disclosed quantity; absent means 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclosed_quantity: Option<NumericInput>,
    /// Pricing mode token (`MARKET`, `LIMIT`, `SL`, `SL-M`).
    pub pricetype: String,
    /// Action token (`BUY`, `SELL`).
    pub action: String,
    /// Product token (`CNC`, `NRML`, `MIS`).
    pub product: String,
}

impl OrderRequest {
    /// Create a request with the required fields; optional numerics unset.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        exchange: impl Into<String>,
        quantity: impl Into<NumericInput>,
        pricetype: impl Into<String>,
        action: impl Into<String>,
        product: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            exchange: exchange.into(),
            quantity: quantity.into(),
            price: None,
            trigger_price: None,
            disclosed_quantity: None,
            pricetype: pricetype.into(),
            action: action.into(),
            product: product.into(),
        }
    }

    /// Set the limit price.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<NumericInput>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Set the stop trigger price.
    #[must_use]
    pub fn with_trigger_price(mut self, trigger_price: impl Into<NumericInput>) -> Self {
        self.trigger_price = Some(trigger_price.into());
        self
    }

    /// Set the disclosed quantity.
    #[must_use]
    pub fn with_disclosed_quantity(mut self, disclosed_quantity: impl Into<NumericInput>) -> Self {
        self.disclosed_quantity = Some(disclosed_quantity.into());
        self
    }
}

/// An amendment to an existing order in the platform's canonical schema.
///
/// Everything except `orderid` is optional. Values of the wrong JSON type
/// (arrays, objects, booleans, or numbers in token fields) are treated as
/// absent so that a modify request always deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifyOrderRequest {
    /// Broker order id being modified.
    #[serde(deserialize_with = "string_or_number")]
    pub orderid: String,
    /// New quantity.
    #[serde(default, deserialize_with = "lenient_numeric")]
    pub quantity: Option<NumericInput>,
    /// New limit price.
    #[serde(default, deserialize_with = "lenient_numeric")]
    pub price: Option<NumericInput>,
    /// New stop trigger price.
    #[serde(default, deserialize_with = "lenient_numeric")]
    pub trigger_price: Option<NumericInput>,
    /// New pricing mode token.
    #[serde(default, deserialize_with = "lenient_token")]
    pub pricetype: Option<String>,
    /// Action token.
    #[serde(default, deserialize_with = "lenient_token")]
    pub action: Option<String>,
}

impl ModifyOrderRequest {
    /// Create a modify request for the given broker order id.
    #[must_use]
    pub fn new(orderid: impl Into<String>) -> Self {
        Self {
            orderid: orderid.into(),
            ..Self::default()
        }
    }

    /// Set the new quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: impl Into<NumericInput>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Set the new limit price.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<NumericInput>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Set the new stop trigger price.
    #[must_use]
    pub fn with_trigger_price(mut self, trigger_price: impl Into<NumericInput>) -> Self {
        self.trigger_price = Some(trigger_price.into());
        self
    }

    /// Set the pricing mode token.
    #[must_use]
    pub fn with_pricetype(mut self, pricetype: impl Into<String>) -> Self {
        self.pricetype = Some(pricetype.into());
        self
    }

    /// Set the action token.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

fn lenient_numeric<'de, D>(deserializer: D) -> Result<Option<NumericInput>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(NumericInput::Text(s)),
        Value::Number(n) => n
            .as_i64()
            .map(NumericInput::Int)
            .or_else(|| n.as_f64().map(NumericInput::Float)),
        _ => None,
    })
}

fn lenient_token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_optional_fields_default_to_none() {
        let json = r#"{
            "symbol": "SBIN",
            "exchange": "NSE",
            "quantity": "10",
            "pricetype": "MARKET",
            "action": "BUY",
            "product": "MIS"
        }"#;
        let request: OrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.quantity, NumericInput::from("10"));
        assert!(request.price.is_none());
        assert!(request.trigger_price.is_none());
        assert!(request.disclosed_quantity.is_none());
    }

    #[test]
    fn order_request_requires_symbol() {
        let json = r#"{"exchange": "NSE", "quantity": 1, "pricetype": "MARKET", "action": "BUY", "product": "MIS"}"#;
        assert!(serde_json::from_str::<OrderRequest>(json).is_err());
    }

    #[test]
    fn order_request_builder() {
        let request = OrderRequest::new("SBIN", "NSE", 10, "LIMIT", "BUY", "CNC")
            .with_price(100.5)
            .with_trigger_price("0")
            .with_disclosed_quantity(0);
        assert_eq!(request.price, Some(NumericInput::Float(100.5)));
        assert_eq!(request.trigger_price, Some(NumericInput::from("0")));
        assert_eq!(request.disclosed_quantity, Some(NumericInput::Int(0)));
    }

    #[test]
    fn modify_request_tolerates_wrong_types() {
        let json = r#"{"orderid": 12345, "quantity": [1], "price": true, "trigger_price": null}"#;
        let request: ModifyOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.orderid, "12345");
        assert!(request.quantity.is_none());
        assert!(request.price.is_none());
        assert!(request.trigger_price.is_none());
        assert!(request.pricetype.is_none());
    }

    #[test]
    fn modify_request_ignores_non_string_tokens() {
        let request: ModifyOrderRequest =
            serde_json::from_value(serde_json::json!({"orderid": "1", "pricetype": 5, "action": 1}))
                .unwrap();
        assert!(request.pricetype.is_none());
        assert!(request.action.is_none());

        let request: ModifyOrderRequest = serde_json::from_value(
            serde_json::json!({"orderid": "1", "pricetype": "SL", "action": ["BUY"]}),
        )
        .unwrap();
        assert_eq!(request.pricetype.as_deref(), Some("SL"));
        assert!(request.action.is_none());
    }

    #[test]
    fn order_request_explicit_null_numerics_are_absent() {
        let json = r#"{
            "symbol": "SBIN",
            "exchange": "NSE",
            "quantity": 1,
            "price": null,
            "trigger_price": null,
            "disclosed_quantity": null,
            "pricetype": "MARKET",
            "action": "BUY",
            "product": "CNC"
        }"#;
        let request: OrderRequest = serde_json::from_str(json).unwrap();
        assert!(request.price.is_none());
        assert!(request.trigger_price.is_none());
        assert!(request.disclosed_quantity.is_none());
    }

    #[test]
    fn modify_request_requires_orderid() {
        assert!(serde_json::from_str::<ModifyOrderRequest>(r#"{"quantity": "1"}"#).is_err());
    }
}
