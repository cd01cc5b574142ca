//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::types::serde_helpers::parse_decimal;

/// A tradable currency pair.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Instrument {
    /// Base currency (e.g., "BTC").
    pub base_currency: String,
    /// Trading pair id (e.g., "BTC-JPY").
    pub instrument_id: String,
    /// Minimum order size in base currency.
    pub min_size: String,
    /// Quote currency (e.g., "JPY").
    pub quote_currency: String,
    /// Order size increment.
    pub size_increment: String,
    /// Price tick size.
    pub tick_size: String,
}

impl Instrument {
    /// Minimum order size as a decimal.
    pub fn min_size_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.min_size)
    }

    /// Tick size as a decimal.
    pub fn tick_size_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.tick_size)
    }
}

/// Order book snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderBook {
    /// Ask levels, best first.
    pub asks: Vec<BookLevel>,
    /// Bid levels, best first.
    pub bids: Vec<BookLevel>,
    /// Snapshot time.
    pub timestamp: String,
}

impl OrderBook {
    /// Best (lowest) ask.
    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// Best (highest) bid.
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }
}

/// One price level, sent as `[price, size, num_orders]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Value>")]
pub struct BookLevel {
    /// Price of the level.
    pub price: String,
    /// Total size at the level.
    pub size: String,
    /// Number of orders at the level, when reported.
    pub num_orders: Option<String>,
}

impl BookLevel {
    /// Price as a decimal.
    pub fn price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.price)
    }

    /// Size as a decimal.
    pub fn size_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.size)
    }
}

impl TryFrom<Vec<Value>> for BookLevel {
    type Error = String;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        let mut fields = values.into_iter().map(scalar_to_string);
        match (fields.next(), fields.next()) {
            (Some(price), Some(size)) => Ok(Self {
                price,
                size,
                num_orders: fields.next(),
            }),
            _ => Err("book level needs at least price and size".to_string()),
        }
    }
}

/// Ticker for one trading pair.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Ticker {
    /// Best ask price.
    pub best_ask: String,
    /// Best bid price.
    pub best_bid: String,
    /// Trading pair id.
    pub instrument_id: String,
    /// Product id (same as the instrument id).
    pub product_id: String,
    /// Last traded price.
    pub last: String,
    /// Last traded quantity.
    pub last_qty: String,
    /// Best ask price.
    pub ask: String,
    /// Size at the best ask.
    pub best_ask_size: String,
    /// Best bid price.
    pub bid: String,
    /// Size at the best bid.
    pub best_bid_size: String,
    /// Price 24 hours ago.
    pub open_24h: String,
    /// Highest price in the last 24 hours.
    pub high_24h: String,
    /// Lowest price in the last 24 hours.
    pub low_24h: String,
    /// Base currency volume over 24 hours.
    pub base_volume_24h: String,
    /// Ticker time.
    pub timestamp: String,
    /// Quote currency volume over 24 hours.
    pub quote_volume_24h: String,
}

impl Ticker {
    /// Last traded price as a decimal.
    pub fn last_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.last)
    }

    /// Best bid as a decimal.
    pub fn best_bid_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.best_bid)
    }

    /// Best ask as a decimal.
    pub fn best_ask_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.best_ask)
    }

    /// Difference between best ask and best bid.
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask_decimal()? - self.best_bid_decimal()?)
    }
}

/// A public trade.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Trade {
    /// Trade time.
    pub time: String,
    /// Trade time.
    pub timestamp: String,
    /// Trade id.
    pub trade_id: String,
    /// Execution price.
    pub price: String,
    /// Execution size.
    pub size: String,
    /// Taker side.
    pub side: String,
}

/// One candle, sent as `[time, open, high, low, close, volume]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Value>")]
pub struct Candle {
    /// Start time of the candle.
    pub time: String,
    /// Open price.
    pub open: String,
    /// Highest price.
    pub high: String,
    /// Lowest price.
    pub low: String,
    /// Close price.
    pub close: String,
    /// Traded volume.
    pub volume: String,
}

impl Candle {
    /// Close price as a decimal.
    pub fn close_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.close)
    }
}

impl TryFrom<Vec<Value>> for Candle {
    type Error = String;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        let len = values.len();
        let fields: Vec<String> = values.into_iter().map(scalar_to_string).collect();
        match <[String; 6]>::try_from(fields) {
            Ok([time, open, high, low, close, volume]) => Ok(Self {
                time,
                open,
                high,
                low,
                close,
                volume,
            }),
            Err(_) => Err(format!("candle needs 6 fields, got {len}")),
        }
    }
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
