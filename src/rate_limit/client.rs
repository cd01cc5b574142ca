//! Rate-limited REST client wrapper.
//!
//! Provides a wrapper around any [`OkcoinClient`] implementation that waits for
//! the per-endpoint quota before forwarding each call.
//!
//! # Example
//!
//! ```rust,ignore
//! use okcoin_api_client::spot::rest::SpotRestClient;
//! use okcoin_api_client::rate_limit::{RateLimitedClient, RateLimitConfig};
//!
//! let client = SpotRestClient::new();
//! let rate_limited = RateLimitedClient::new(client, RateLimitConfig { enabled: true });
//!
//! let instruments = rate_limited.get_spot_instruments().await?;
//! ```

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::clock::Clock;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

use crate::error::OkcoinError;
use crate::rate_limit::RateLimitConfig;
use crate::spot::rest::endpoints::limits::{self, EndpointLimit};
use crate::spot::rest::private::{
    AccountInfo, BatchOrderResponse, CancelBatchRequest, FilledOrder, OrderInfo, OrderPostResponse,
    TradeFee,
};
use crate::spot::rest::public::{Candle, Instrument, OrderBook, Ticker, Trade};
use crate::spot::rest::{OkcoinClient, Params};
use crate::types::Side;

/// A rate limited spot REST operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /accounts`
    Accounts,
    /// `GET /accounts/{currency}`
    AccountsCurrency,
    /// `GET /orders`
    Orders,
    /// `GET /orders_pending`
    OrdersPending,
    /// `GET /orders/{id}`
    OrdersById,
    /// `GET /fills`
    Fills,
    /// `GET /trade_fee`
    TradeFee,
    /// `GET /instruments`
    Instruments,
    /// `GET /instruments/{id}/book`
    InstrumentBook,
    /// `GET /instruments/ticker`
    InstrumentsTicker,
    /// `GET /instruments/{id}/ticker`
    InstrumentTicker,
    /// `GET /instruments/{id}/trades`
    InstrumentTrades,
    /// `GET /instruments/{id}/candles`
    InstrumentCandles,
    /// `POST /orders`
    PlaceOrder,
    /// `POST /batch_orders`
    BatchOrders,
    /// `POST /cancel_orders/{id}`
    CancelOrder,
    /// `POST /cancel_batch_orders`
    CancelBatchOrders,
}

impl Endpoint {
    /// Every rate limited endpoint.
    pub const ALL: [Endpoint; 17] = [
        Endpoint::Accounts,
        Endpoint::AccountsCurrency,
        Endpoint::Orders,
        Endpoint::OrdersPending,
        Endpoint::OrdersById,
        Endpoint::Fills,
        Endpoint::TradeFee,
        Endpoint::Instruments,
        Endpoint::InstrumentBook,
        Endpoint::InstrumentsTicker,
        Endpoint::InstrumentTicker,
        Endpoint::InstrumentTrades,
        Endpoint::InstrumentCandles,
        Endpoint::PlaceOrder,
        Endpoint::BatchOrders,
        Endpoint::CancelOrder,
        Endpoint::CancelBatchOrders,
    ];

    /// The documented quota of this endpoint.
    pub fn limit(self) -> EndpointLimit {
        match self {
            Endpoint::Accounts => limits::ACCOUNTS,
            Endpoint::AccountsCurrency => limits::ACCOUNTS_CURRENCY,
            Endpoint::Orders => limits::ORDERS,
            Endpoint::OrdersPending => limits::ORDERS_PENDING,
            Endpoint::OrdersById => limits::ORDERS_BY_ID,
            Endpoint::Fills => limits::FILLS,
            Endpoint::TradeFee => limits::TRADE_FEE,
            Endpoint::Instruments => limits::INSTRUMENTS,
            Endpoint::InstrumentBook => limits::INSTRUMENT_BOOK,
            Endpoint::InstrumentsTicker => limits::INSTRUMENTS_TICKER,
            Endpoint::InstrumentTicker => limits::INSTRUMENT_TICKER,
            Endpoint::InstrumentTrades => limits::INSTRUMENT_TRADES,
            Endpoint::InstrumentCandles => limits::INSTRUMENT_CANDLES,
            Endpoint::PlaceOrder => limits::PLACE_ORDER,
            Endpoint::BatchOrders => limits::BATCH_ORDERS,
            Endpoint::CancelOrder => limits::CANCEL_ORDER,
            Endpoint::CancelBatchOrders => limits::CANCEL_BATCH_ORDERS,
        }
    }
}

/// Token bucket allowing `requests` calls at once, refilled evenly over `per`.
fn quota_for(limit: EndpointLimit) -> Option<Quota> {
    let burst = NonZeroU32::new(limit.requests)?;
    let quota = Quota::with_period(limit.per / limit.requests)?;
    Some(quota.allow_burst(burst))
}

/// A rate-limited wrapper around any [`OkcoinClient`] implementation.
///
/// Each endpoint has its own bucket sized from
/// [`limits`](crate::spot::rest::endpoints::limits). Clones share buckets.
pub struct RateLimitedClient<C> {
    inner: C,
    config: RateLimitConfig,
    limiters: Arc<HashMap<Endpoint, DefaultDirectRateLimiter>>,
}

impl<C> RateLimitedClient<C> {
    /// Create a new rate-limited client wrapper.
    pub fn new(inner: C, config: RateLimitConfig) -> Self {
        let limiters = Endpoint::ALL
            .into_iter()
            .filter_map(|endpoint| {
                quota_for(endpoint.limit()).map(|quota| (endpoint, RateLimiter::direct(quota)))
            })
            .collect();

        Self {
            inner,
            config,
            limiters: Arc::new(limiters),
        }
    }

    /// Get a reference to the inner client.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Get the current configuration.
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Enable or disable rate limiting.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Take a token for `endpoint`, or report how long until one is free.
    fn try_acquire(&self, endpoint: Endpoint) -> Result<(), Duration> {
        let Some(limiter) = self.limiters.get(&endpoint) else {
            return Ok(());
        };
        limiter
            .check()
            .map_err(|not_until| not_until.wait_time_from(limiter.clock().now()))
    }

    /// Wait until `endpoint` has quota left.
    async fn wait(&self, endpoint: Endpoint) {
        if !self.config.enabled {
            return;
        }

        while let Err(wait_time) = self.try_acquire(endpoint) {
            tracing::debug!(?endpoint, ?wait_time, "waiting for OKCoin rate limit");
            tokio::time::sleep(wait_time).await;
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for RateLimitedClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitedClient")
            .field("inner", &self.inner)
            .field("config", &self.config)
            .finish()
    }
}

impl<C: Clone> Clone for RateLimitedClient<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            config: self.config.clone(),
            limiters: self.limiters.clone(),
        }
    }
}

// OkcoinClient trait implementation.

impl<C: OkcoinClient> OkcoinClient for RateLimitedClient<C> {
    // ========== Public Endpoints ==========

    async fn get_spot_instruments(&self) -> Result<Vec<Instrument>, OkcoinError> {
        self.wait(Endpoint::Instruments).await;
        self.inner.get_spot_instruments().await
    }

    async fn get_spot_instrument_book(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<OrderBook, OkcoinError> {
        self.wait(Endpoint::InstrumentBook).await;
        self.inner
            .get_spot_instrument_book(instrument_id, options)
            .await
    }

    async fn get_spot_instruments_ticker(&self) -> Result<Vec<Ticker>, OkcoinError> {
        self.wait(Endpoint::InstrumentsTicker).await;
        self.inner.get_spot_instruments_ticker().await
    }

    async fn get_spot_instrument_ticker(&self, instrument_id: &str) -> Result<Ticker, OkcoinError> {
        self.wait(Endpoint::InstrumentTicker).await;
        self.inner.get_spot_instrument_ticker(instrument_id).await
    }

    async fn get_spot_instrument_trades(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<Trade>, OkcoinError> {
        self.wait(Endpoint::InstrumentTrades).await;
        self.inner
            .get_spot_instrument_trades(instrument_id, options)
            .await
    }

    async fn get_spot_instrument_candles(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<Candle>, OkcoinError> {
        self.wait(Endpoint::InstrumentCandles).await;
        self.inner
            .get_spot_instrument_candles(instrument_id, options)
            .await
    }

    // ========== Private Endpoints - Account ==========

    async fn get_spot_accounts(&self) -> Result<Vec<AccountInfo>, OkcoinError> {
        self.wait(Endpoint::Accounts).await;
        self.inner.get_spot_accounts().await
    }

    async fn get_spot_account(&self, currency: &str) -> Result<AccountInfo, OkcoinError> {
        self.wait(Endpoint::AccountsCurrency).await;
        self.inner.get_spot_account(currency).await
    }

    async fn get_spot_trade_fee(&self) -> Result<Vec<TradeFee>, OkcoinError> {
        self.wait(Endpoint::TradeFee).await;
        self.inner.get_spot_trade_fee().await
    }

    // ========== Private Endpoints - Orders ==========

    async fn get_spot_orders(
        &self,
        instrument_id: &str,
        state: &str,
        options: Option<&Params>,
    ) -> Result<Vec<OrderInfo>, OkcoinError> {
        self.wait(Endpoint::Orders).await;
        self.inner
            .get_spot_orders(instrument_id, state, options)
            .await
    }

    async fn get_spot_orders_pending(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<OrderInfo>, OkcoinError> {
        self.wait(Endpoint::OrdersPending).await;
        self.inner
            .get_spot_orders_pending(instrument_id, options)
            .await
    }

    async fn get_spot_order(
        &self,
        instrument_id: &str,
        order_or_client_id: &str,
    ) -> Result<OrderInfo, OkcoinError> {
        self.wait(Endpoint::OrdersById).await;
        self.inner
            .get_spot_order(instrument_id, order_or_client_id)
            .await
    }

    async fn get_spot_fills(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<FilledOrder>, OkcoinError> {
        self.wait(Endpoint::Fills).await;
        self.inner.get_spot_fills(instrument_id, options).await
    }

    // ========== Private Endpoints - Trading ==========

    async fn post_spot_order(
        &self,
        instrument_id: &str,
        side: Side,
        options: Option<&Params>,
    ) -> Result<OrderPostResponse, OkcoinError> {
        self.wait(Endpoint::PlaceOrder).await;
        self.inner
            .post_spot_order(instrument_id, side, options)
            .await
    }

    async fn post_spot_batch_orders(
        &self,
        orders: &[Params],
    ) -> Result<BatchOrderResponse, OkcoinError> {
        self.wait(Endpoint::BatchOrders).await;
        self.inner.post_spot_batch_orders(orders).await
    }

    async fn post_spot_cancel_order(
        &self,
        instrument_id: &str,
        order_or_client_id: &str,
    ) -> Result<OrderPostResponse, OkcoinError> {
        self.wait(Endpoint::CancelOrder).await;
        self.inner
            .post_spot_cancel_order(instrument_id, order_or_client_id)
            .await
    }

    async fn post_spot_cancel_batch_orders(
        &self,
        cancels: &[CancelBatchRequest],
    ) -> Result<BatchOrderResponse, OkcoinError> {
        self.wait(Endpoint::CancelBatchOrders).await;
        self.inner.post_spot_cancel_batch_orders(cancels).await
    }
}
