//! Trait definition for the OKCoin spot REST API client.
//!
//! [`OkcoinClient`] lists every spot REST operation so callers can be written
//! against either [`SpotRestClient`](super::SpotRestClient) or a wrapper such as
//! [`RateLimitedClient`](crate::rate_limit::RateLimitedClient).
//!
//! # Example
//!
//! ```rust,ignore
//! use okcoin_api_client::spot::rest::{OkcoinClient, SpotRestClient};
//!
//! async fn print_last<C: OkcoinClient>(client: &C) -> Result<(), okcoin_api_client::OkcoinError> {
//!     let ticker = client.get_spot_instrument_ticker("BTC-JPY").await?;
//!     println!("Last: {}", ticker.last);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::OkcoinError;
use crate::spot::rest::params::Params;
use crate::spot::rest::private::{
    AccountInfo, BatchOrderResponse, CancelBatchRequest, FilledOrder, OrderInfo, OrderPostResponse,
    TradeFee,
};
use crate::spot::rest::public::{Candle, Instrument, OrderBook, Ticker, Trade};
use crate::types::Side;

/// All OKCoin spot REST operations.
pub trait OkcoinClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// List all trading pairs.
    fn get_spot_instruments(
        &self,
    ) -> impl Future<Output = Result<Vec<Instrument>, OkcoinError>> + Send;

    /// Get the order book of a trading pair.
    fn get_spot_instrument_book(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> impl Future<Output = Result<OrderBook, OkcoinError>> + Send;

    /// Get the tickers of all trading pairs.
    fn get_spot_instruments_ticker(
        &self,
    ) -> impl Future<Output = Result<Vec<Ticker>, OkcoinError>> + Send;

    /// Get the ticker of one trading pair.
    fn get_spot_instrument_ticker(
        &self,
        instrument_id: &str,
    ) -> impl Future<Output = Result<Ticker, OkcoinError>> + Send;

    /// Get recent public trades of a trading pair.
    fn get_spot_instrument_trades(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> impl Future<Output = Result<Vec<Trade>, OkcoinError>> + Send;

    /// Get candles of a trading pair.
    fn get_spot_instrument_candles(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> impl Future<Output = Result<Vec<Candle>, OkcoinError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// List all spot account balances.
    fn get_spot_accounts(
        &self,
    ) -> impl Future<Output = Result<Vec<AccountInfo>, OkcoinError>> + Send;

    /// Get the balance of one currency.
    fn get_spot_account(
        &self,
        currency: &str,
    ) -> impl Future<Output = Result<AccountInfo, OkcoinError>> + Send;

    /// Get the account's fee rates.
    fn get_spot_trade_fee(&self)
    -> impl Future<Output = Result<Vec<TradeFee>, OkcoinError>> + Send;

    // ========== Private Endpoints - Orders ==========

    /// List orders of a trading pair in a given state.
    fn get_spot_orders(
        &self,
        instrument_id: &str,
        state: &str,
        options: Option<&Params>,
    ) -> impl Future<Output = Result<Vec<OrderInfo>, OkcoinError>> + Send;

    /// List open orders of a trading pair.
    fn get_spot_orders_pending(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> impl Future<Output = Result<Vec<OrderInfo>, OkcoinError>> + Send;

    /// Get one order by order id or client oid.
    fn get_spot_order(
        &self,
        instrument_id: &str,
        order_or_client_id: &str,
    ) -> impl Future<Output = Result<OrderInfo, OkcoinError>> + Send;

    /// List fills of a trading pair.
    fn get_spot_fills(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> impl Future<Output = Result<Vec<FilledOrder>, OkcoinError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Place an order.
    fn post_spot_order(
        &self,
        instrument_id: &str,
        side: Side,
        options: Option<&Params>,
    ) -> impl Future<Output = Result<OrderPostResponse, OkcoinError>> + Send;

    /// Place several orders at once.
    fn post_spot_batch_orders(
        &self,
        orders: &[Params],
    ) -> impl Future<Output = Result<BatchOrderResponse, OkcoinError>> + Send;

    /// Cancel an order by order id or client oid.
    fn post_spot_cancel_order(
        &self,
        instrument_id: &str,
        order_or_client_id: &str,
    ) -> impl Future<Output = Result<OrderPostResponse, OkcoinError>> + Send;

    /// Cancel several orders at once.
    fn post_spot_cancel_batch_orders(
        &self,
        cancels: &[CancelBatchRequest],
    ) -> impl Future<Output = Result<BatchOrderResponse, OkcoinError>> + Send;
}
