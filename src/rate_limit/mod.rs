//! Client-side rate limiting for the OKCoin API.
//!
//! OKCoin limits each REST endpoint separately (for example 20 requests per 2
//! seconds for market data, 1 request per 10 seconds for the fee query) and
//! answers with error `30014` once a limit is exceeded. [`RateLimitedClient`]
//! wraps any [`OkcoinClient`](crate::spot::rest::OkcoinClient) and waits before
//! each call so the documented quotas are never exceeded.
//!
//! Rate limiting is opt-in: a plain [`SpotRestClient`](crate::spot::rest::SpotRestClient)
//! sends requests as soon as they are made.
//!
//! ## Example
//!
//! ```rust,ignore
//! use okcoin_api_client::spot::rest::{OkcoinClient, SpotRestClient};
//! use okcoin_api_client::rate_limit::{RateLimitedClient, RateLimitConfig};
//!
//! let client = RateLimitedClient::new(SpotRestClient::new(), RateLimitConfig::default());
//!
//! // Waits if the ticker quota is used up
//! let ticker = client.get_spot_instrument_ticker("BTC-JPY").await?;
//! ```

mod client;

pub use client::{Endpoint, RateLimitedClient};

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Whether to enable rate limiting.
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
