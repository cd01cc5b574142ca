//! Common domain types for the OKCoin spot API.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Wire value of the side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("unknown side: {other}")),
        }
    }
}

/// Order type, sent as the `type` parameter.
///
/// The type decides which of `price`, `size` and `notional` are forwarded:
/// limit orders carry price and size, market orders carry size (sell) or
/// notional (buy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Limit order - execute at specified price or better
    Limit,
    /// Market order - execute immediately at best available price
    Market,
}

impl OrderKind {
    /// Wire value of the order type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderKind::Limit => "limit",
            OrderKind::Market => "market",
        }
    }
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "limit" => Ok(OrderKind::Limit),
            "market" => Ok(OrderKind::Market),
            other => Err(format!("unknown order type: {other}")),
        }
    }
}

/// Execution flag, sent as the `order_type` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderTypeFlag {
    /// Normal order (default)
    #[default]
    Normal,
    /// Post only - will only make liquidity
    PostOnly,
    /// Fill or kill
    FillOrKill,
    /// Immediate or cancel
    ImmediateOrCancel,
}

impl OrderTypeFlag {
    /// Wire value of the flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderTypeFlag::Normal => "0",
            OrderTypeFlag::PostOnly => "1",
            OrderTypeFlag::FillOrKill => "2",
            OrderTypeFlag::ImmediateOrCancel => "3",
        }
    }
}

impl std::fmt::Display for OrderTypeFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order state filter and order record state.
///
/// `Incomplete` and `Complete` are query-only aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderState {
    /// Order failed
    Failed,
    /// Order was canceled
    Canceled,
    /// Order is open
    Open,
    /// Order has been partially filled
    PartiallyFilled,
    /// Order has been fully filled
    FullyFilled,
    /// Order is being submitted
    Submitting,
    /// Order is being canceled
    Canceling,
    /// Open or partially filled
    Incomplete,
    /// Canceled or fully filled
    Complete,
}

impl OrderState {
    /// Wire value of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Failed => "-2",
            OrderState::Canceled => "-1",
            OrderState::Open => "0",
            OrderState::PartiallyFilled => "1",
            OrderState::FullyFilled => "2",
            OrderState::Submitting => "3",
            OrderState::Canceling => "4",
            OrderState::Incomplete => "6",
            OrderState::Complete => "7",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let state = match s {
            "-2" => OrderState::Failed,
            "-1" => OrderState::Canceled,
            "0" => OrderState::Open,
            "1" => OrderState::PartiallyFilled,
            "2" => OrderState::FullyFilled,
            "3" => OrderState::Submitting,
            "4" => OrderState::Canceling,
            "6" => OrderState::Incomplete,
            "7" => OrderState::Complete,
            other => return Err(format!("unknown order state: {other}")),
        };
        Ok(state)
    }
}

/// Candle granularity in seconds, sent as the `granularity` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// 1 minute
    Min1,
    /// 3 minutes
    Min3,
    /// 5 minutes
    Min5,
    /// 15 minutes
    Min15,
    /// 30 minutes
    Min30,
    /// 1 hour
    Hour1,
    /// 2 hours
    Hour2,
    /// 4 hours
    Hour4,
    /// 6 hours
    Hour6,
    /// 12 hours
    Hour12,
    /// 1 day
    Day1,
    /// 1 week
    Week1,
}

impl Granularity {
    /// Granularity in seconds.
    pub fn as_secs(&self) -> u32 {
        match self {
            Granularity::Min1 => 60,
            Granularity::Min3 => 180,
            Granularity::Min5 => 300,
            Granularity::Min15 => 900,
            Granularity::Min30 => 1800,
            Granularity::Hour1 => 3600,
            Granularity::Hour2 => 7200,
            Granularity::Hour4 => 14400,
            Granularity::Hour6 => 21600,
            Granularity::Hour12 => 43200,
            Granularity::Day1 => 86400,
            Granularity::Week1 => 604800,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_secs())
    }
}
