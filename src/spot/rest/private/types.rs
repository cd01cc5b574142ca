//! Types for private REST API endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::serde_helpers::{bool_or_string, parse_decimal, string_or_number};
use crate::types::{OrderKind, OrderState, Side};

/// Balance of one currency in the spot account.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    /// Currency code (e.g., "BTC").
    pub currency: String,
    /// Total balance.
    pub balance: String,
    /// Amount on hold in open orders.
    pub hold: String,
    /// Amount available for trading.
    pub available: String,
    /// Account id, when reported.
    pub id: Option<String>,
}

impl AccountInfo {
    /// Total balance as a decimal.
    pub fn balance_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.balance)
    }

    /// Held amount as a decimal.
    pub fn hold_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.hold)
    }

    /// Available amount as a decimal.
    pub fn available_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.available)
    }
}

/// An order record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderInfo {
    /// Client supplied order id.
    pub client_oid: String,
    /// Creation time.
    pub created_at: String,
    /// Filled amount in quote currency.
    pub filled_notional: String,
    /// Filled amount in base currency.
    pub filled_size: String,
    /// Funds (market orders).
    pub funds: String,
    /// Trading pair id.
    pub instrument_id: String,
    /// Amount in quote currency (market buys).
    pub notional: String,
    /// Order id.
    pub order_id: String,
    /// Execution flag (`0`-`3`).
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub order_type: String,
    /// Limit price.
    pub price: String,
    /// Average fill price.
    pub price_avg: String,
    /// Product id (same as the instrument id).
    pub product_id: String,
    /// Order side.
    pub side: String,
    /// Order size in base currency.
    pub size: String,
    /// Legacy status string.
    pub status: String,
    /// Order state code.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub state: String,
    /// Last update time.
    pub timestamp: String,
    /// Order type ("limit" or "market").
    #[serde(rename = "type")]
    pub kind: String,
}

impl OrderInfo {
    /// Parsed order state.
    pub fn order_state(&self) -> Option<OrderState> {
        self.state.parse().ok()
    }

    /// Parsed side.
    pub fn order_side(&self) -> Option<Side> {
        self.side.parse().ok()
    }

    /// Parsed order type.
    pub fn order_kind(&self) -> Option<OrderKind> {
        self.kind.parse().ok()
    }

    /// Limit price as a decimal.
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    /// Filled size as a decimal.
    pub fn filled_size_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.filled_size)
    }
}

/// An executed portion of an order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilledOrder {
    /// Fill time.
    pub created_at: String,
    /// Trade id.
    pub trade_id: String,
    /// Currency of this ledger leg.
    pub currency: String,
    /// Liquidity type ("T" taker, "M" maker).
    pub exec_type: String,
    /// Fee charged.
    pub fee: String,
    /// Trading pair id.
    pub instrument_id: String,
    /// Ledger id.
    pub ledger_id: String,
    /// Liquidity type.
    pub liquidity: String,
    /// Order id.
    pub order_id: String,
    /// Fill price.
    pub price: String,
    /// Product id (same as the instrument id).
    pub product_id: String,
    /// Side of this ledger leg.
    pub side: String,
    /// Fill size.
    pub size: String,
    /// Fill time.
    pub timestamp: String,
}

impl FilledOrder {
    /// Fee as a decimal.
    pub fn fee_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.fee)
    }
}

/// Maker and taker fee rates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TradeFee {
    /// Maker fee rate.
    pub maker: String,
    /// Taker fee rate.
    pub taker: String,
    /// Query time.
    pub timestamp: String,
    /// Fee tier, when reported.
    pub category: Option<String>,
    /// Trading pair, when the rate is pair specific.
    pub instrument_id: Option<String>,
}

/// Result of placing or canceling one order.
///
/// A `result` of `false` means the exchange rejected this order; the reason is
/// in `error_code`/`error_message`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderPostResponse {
    /// Client supplied order id.
    pub client_oid: String,
    /// Error message when rejected.
    pub error_message: String,
    /// Error code when rejected (`0` or empty on success).
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub error_code: String,
    /// Order id.
    pub order_id: String,
    /// Whether the exchange accepted the request.
    #[serde(deserialize_with = "bool_or_string::deserialize")]
    pub result: bool,
}

impl OrderPostResponse {
    /// The rejection reason, if the exchange rejected this order.
    pub fn api_error(&self) -> Option<ApiError> {
        if self.result {
            return None;
        }
        Some(ApiError::new(
            self.error_code.clone(),
            self.error_message.clone(),
        ))
    }
}

/// Per-instrument results of a batch order or batch cancel.
pub type BatchOrderResponse = HashMap<String, Vec<OrderPostResponse>>;

/// Orders to cancel on one trading pair, by order id or client oid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancelBatchRequest {
    /// Trading pair id.
    pub instrument_id: String,
    /// Order ids to cancel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_ids: Option<Vec<String>>,
    /// Client oids to cancel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_oids: Option<Vec<String>>,
}

impl CancelBatchRequest {
    /// Cancel orders by exchange order id.
    pub fn by_order_ids<I, S>(instrument_id: impl Into<String>, order_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            instrument_id: instrument_id.into(),
            order_ids: Some(order_ids.into_iter().map(Into::into).collect()),
            client_oids: None,
        }
    }

    /// Cancel orders by client oid.
    pub fn by_client_oids<I, S>(instrument_id: impl Into<String>, client_oids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            instrument_id: instrument_id.into(),
            order_ids: None,
            client_oids: Some(client_oids.into_iter().map(Into::into).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_info_decode() {
        let json = r#"{
            "client_oid": "oktspot79",
            "created_at": "2019-03-15T02:52:56.000Z",
            "filled_notional": "3.8886",
            "filled_size": "0.001",
            "funds": "",
            "instrument_id": "BTC-JPY",
            "notional": "",
            "order_id": "2482659399697408",
            "order_type": "0",
            "price": "3927.3",
            "price_avg": "3927.3",
            "product_id": "BTC-JPY",
            "side": "buy",
            "size": "0.001",
            "status": "filled",
            "state": "2",
            "timestamp": "2019-03-15T02:52:56.000Z",
            "type": "limit"
        }"#;
        let order: OrderInfo = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_state(), Some(OrderState::FullyFilled));
        assert_eq!(order.order_side(), Some(Side::Buy));
        assert_eq!(order.order_kind(), Some(OrderKind::Limit));
        assert_eq!(order.price_decimal().unwrap().to_string(), "3927.3");
        assert!(order.funds.is_empty());
    }

    #[test]
    fn test_order_info_numeric_state() {
        let order: OrderInfo = serde_json::from_str(r#"{"state": -1, "order_type": 3}"#).unwrap();
        assert_eq!(order.order_state(), Some(OrderState::Canceled));
        assert_eq!(order.order_type, "3");
    }

    #[test]
    fn test_order_post_response_rejection() {
        let json = r#"{"client_oid":"","error_code":"33017","error_message":"Insufficient balance","order_id":"-1","result":false}"#;
        let response: OrderPostResponse = serde_json::from_str(json).unwrap();
        let err = response.api_error().unwrap();
        assert!(err.is_insufficient_balance());

        let ok: OrderPostResponse =
            serde_json::from_str(r#"{"order_id":"1","result":true,"error_code":""}"#).unwrap();
        assert!(ok.api_error().is_none());
    }

    #[test]
    fn test_cancel_batch_request_serialization() {
        let request = CancelBatchRequest::by_client_oids("BTC-JPY", ["a", "b"]);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"instrument_id":"BTC-JPY","client_oids":["a","b"]}"#
        );
        let request = CancelBatchRequest::by_order_ids("BTC-JPY", vec!["1".to_string()]);
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"instrument_id":"BTC-JPY","order_ids":["1"]}"#
        );
    }

    #[test]
    fn test_account_decimals() {
        let account: AccountInfo = serde_json::from_str(
            r#"{"currency":"BTC","balance":"1.5","hold":"0.5","available":"1","id":""}"#,
        )
        .unwrap();
        assert_eq!(account.available_decimal().unwrap().to_string(), "1");
        assert_eq!(account.hold_decimal().unwrap().to_string(), "0.5");
    }
}
