//! OKCoin spot REST API endpoint constants.
//!
//! Paths containing `{...}` are templates; see [`crate::spot::rest::params::expand_path`].

/// Base URL for the OKCoin REST API.
pub const OKCOIN_BASE_URL: &str = "https://www.okcoin.com";

/// Base URL for the OKCoin Japan REST API.
pub const OKCOIN_JP_BASE_URL: &str = "https://www.okcoin.jp";

/// Public endpoints (no authentication required).
pub mod public {
    /// List trading pairs.
    pub const INSTRUMENTS: &str = "/api/spot/v3/instruments";
    /// Order book of one trading pair.
    pub const INSTRUMENT_BOOK: &str = "/api/spot/v3/instruments/{instrument_id}/book";
    /// Tickers of all trading pairs.
    pub const INSTRUMENTS_TICKER: &str = "/api/spot/v3/instruments/ticker";
    /// Ticker of one trading pair.
    pub const INSTRUMENT_TICKER: &str = "/api/spot/v3/instruments/{instrument_id}/ticker";
    /// Recent trades of one trading pair.
    pub const INSTRUMENT_TRADES: &str = "/api/spot/v3/instruments/{instrument_id}/trades";
    /// Candles of one trading pair.
    pub const INSTRUMENT_CANDLES: &str = "/api/spot/v3/instruments/{instrument_id}/candles";
}

/// Private endpoints (authentication required).
pub mod private {
    // Account endpoints
    /// List spot account balances.
    pub const ACCOUNTS: &str = "/api/spot/v3/accounts";
    /// Balance of one currency.
    pub const ACCOUNTS_CURRENCY: &str = "/api/spot/v3/accounts/{currency}";
    /// Trade fee rates.
    pub const TRADE_FEE: &str = "/api/spot/v3/trade_fee";

    // Order history endpoints
    /// Order list (GET) and order placement (POST).
    pub const ORDERS: &str = "/api/spot/v3/orders";
    /// Open orders.
    pub const ORDERS_PENDING: &str = "/api/spot/v3/orders_pending";
    /// One order by order id or client oid.
    pub const ORDERS_BY_ID: &str = "/api/spot/v3/orders/{order_client_id}";
    /// Transaction details.
    pub const FILLS: &str = "/api/spot/v3/fills";

    // Trading endpoints
    /// Place multiple orders.
    pub const BATCH_ORDERS: &str = "/api/spot/v3/batch_orders";
    /// Cancel one order by order id or client oid.
    pub const CANCEL_ORDERS_BY_ID: &str = "/api/spot/v3/cancel_orders/{order_client_id}";
    /// Cancel multiple orders.
    pub const CANCEL_BATCH_ORDERS: &str = "/api/spot/v3/cancel_batch_orders";
}

/// Documented rate limits per endpoint.
///
/// The exchange counts public endpoints per IP and private endpoints per user
/// ID; every limit here is expressed as `requests` per `per`.
pub mod limits {
    use std::time::Duration;

    /// A request budget over a fixed period.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EndpointLimit {
        /// Requests allowed per period.
        pub requests: u32,
        /// Length of the period.
        pub per: Duration,
    }

    impl EndpointLimit {
        /// Create a new limit.
        pub const fn new(requests: u32, per: Duration) -> Self {
            Self { requests, per }
        }
    }

    const TWO_SECONDS: Duration = Duration::from_secs(2);

    pub const ACCOUNTS: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const ACCOUNTS_CURRENCY: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const ORDERS: EndpointLimit = EndpointLimit::new(10, TWO_SECONDS);
    pub const ORDERS_PENDING: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const ORDERS_BY_ID: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const FILLS: EndpointLimit = EndpointLimit::new(10, TWO_SECONDS);
    pub const TRADE_FEE: EndpointLimit = EndpointLimit::new(1, Duration::from_secs(10));
    pub const INSTRUMENTS: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const INSTRUMENT_BOOK: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const INSTRUMENTS_TICKER: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const INSTRUMENT_TICKER: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const INSTRUMENT_TRADES: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const INSTRUMENT_CANDLES: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
    pub const PLACE_ORDER: EndpointLimit = EndpointLimit::new(100, TWO_SECONDS);
    pub const BATCH_ORDERS: EndpointLimit = EndpointLimit::new(50, TWO_SECONDS);
    pub const CANCEL_ORDER: EndpointLimit = EndpointLimit::new(100, TWO_SECONDS);
    pub const CANCEL_BATCH_ORDERS: EndpointLimit = EndpointLimit::new(20, TWO_SECONDS);
}
