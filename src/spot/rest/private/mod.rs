//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.

mod types;

pub use types::*;

use crate::error::OkcoinError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::private;
use crate::spot::rest::params::{
    FILLS_KEYS, ORDER_LIST_KEYS, Params, apply_order_kind, expand_path, order_params, with_query,
};
use crate::types::Side;

impl SpotRestClient {
    /// List the balances of every currency in the spot account.
    ///
    /// Limit: 20 requests per 2 seconds.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use okcoin_api_client::spot::rest::SpotRestClient;
    /// use okcoin_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret", "passphrase"));
    ///     let client = SpotRestClient::builder().credentials(credentials).build();
    ///
    ///     for account in client.get_spot_accounts().await? {
    ///         println!("{}: {} available", account.currency, account.available);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_spot_accounts(&self) -> Result<Vec<AccountInfo>, OkcoinError> {
        self.private_get(private::ACCOUNTS).await
    }

    /// Get the balance of one currency.
    ///
    /// Limit: 20 requests per 2 seconds.
    pub async fn get_spot_account(&self, currency: &str) -> Result<AccountInfo, OkcoinError> {
        let path = expand_path(private::ACCOUNTS_CURRENCY, "currency", currency)?;
        self.private_get(&path).await
    }

    /// List orders of a trading pair in a given state.
    ///
    /// Limit: 10 requests per 2 seconds.
    ///
    /// # Arguments
    ///
    /// * `instrument_id` - Trading pair.
    /// * `state` - Order state code (see [`crate::types::OrderState`]).
    /// * `options` - Optional `before`, `after` and `limit` pagination keys.
    pub async fn get_spot_orders(
        &self,
        instrument_id: &str,
        state: &str,
        options: Option<&Params>,
    ) -> Result<Vec<OrderInfo>, OkcoinError> {
        let mut params = Params::new()
            .with("instrument_id", instrument_id)
            .with("state", state);
        params.merge_selected(options, ORDER_LIST_KEYS);
        self.private_get(&with_query(private::ORDERS, &params)?)
            .await
    }

    /// List open orders of a trading pair.
    ///
    /// Limit: 20 requests per 2 seconds.
    ///
    /// Every non-empty key of `options` is forwarded.
    pub async fn get_spot_orders_pending(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<OrderInfo>, OkcoinError> {
        let mut params = Params::new().with("instrument_id", instrument_id);
        if let Some(options) = options {
            params.merge(options);
        }
        self.private_get(&with_query(private::ORDERS_PENDING, &params)?)
            .await
    }

    /// Get one order by order id or client oid.
    ///
    /// Limit: 20 requests per 2 seconds.
    pub async fn get_spot_order(
        &self,
        instrument_id: &str,
        order_or_client_id: &str,
    ) -> Result<OrderInfo, OkcoinError> {
        let path = expand_path(private::ORDERS_BY_ID, "order_client_id", order_or_client_id)?;
        let params = Params::new().with("instrument_id", instrument_id);
        self.private_get(&with_query(&path, &params)?).await
    }

    /// List fills of a trading pair.
    ///
    /// Limit: 10 requests per 2 seconds.
    ///
    /// # Arguments
    ///
    /// * `instrument_id` - Trading pair.
    /// * `options` - Optional `order_id`, `before`, `after` and `limit`.
    pub async fn get_spot_fills(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<FilledOrder>, OkcoinError> {
        let mut params = Params::new().with("instrument_id", instrument_id);
        params.merge_selected(options, FILLS_KEYS);
        self.private_get(&with_query(private::FILLS, &params)?)
            .await
    }

    /// Get the account's maker and taker fee rates.
    ///
    /// Limit: 1 request per 10 seconds.
    pub async fn get_spot_trade_fee(&self) -> Result<Vec<TradeFee>, OkcoinError> {
        self.private_get(private::TRADE_FEE).await
    }

    /// Place an order.
    ///
    /// Limit: 100 requests per 2 seconds.
    ///
    /// The overlay supplies `type`, the amounts and any extra keys
    /// (`client_oid`, `order_type`). Limit orders forward `price` and `size`;
    /// market orders forward `size` and `notional`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use okcoin_api_client::spot::rest::{Params, SpotRestClient};
    /// use okcoin_api_client::types::{OrderKind, Side};
    ///
    /// # async fn place(client: &SpotRestClient) -> Result<(), okcoin_api_client::OkcoinError> {
    /// let order = Params::new()
    ///     .order_kind(OrderKind::Limit)
    ///     .price("3000000")
    ///     .size("0.001");
    /// let placed = client.post_spot_order("BTC-JPY", Side::Buy, Some(&order)).await?;
    /// if let Some(err) = placed.api_error() {
    ///     eprintln!("rejected: {err}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn post_spot_order(
        &self,
        instrument_id: &str,
        side: Side,
        options: Option<&Params>,
    ) -> Result<OrderPostResponse, OkcoinError> {
        let body = order_params(instrument_id, side, options);
        self.private_post(private::ORDERS, &body).await
    }

    /// Place several orders at once.
    ///
    /// Limit: 50 requests per 2 seconds.
    ///
    /// Each entry carries its own `instrument_id`, `side` and `type`, and
    /// goes through the same amount selection as [`Self::post_spot_order`].
    pub async fn post_spot_batch_orders(
        &self,
        orders: &[Params],
    ) -> Result<BatchOrderResponse, OkcoinError> {
        let body: Vec<Params> = orders.iter().cloned().map(apply_order_kind).collect();
        self.private_post(private::BATCH_ORDERS, &body).await
    }

    /// Cancel an order by order id or client oid.
    ///
    /// Limit: 100 requests per 2 seconds.
    pub async fn post_spot_cancel_order(
        &self,
        instrument_id: &str,
        order_or_client_id: &str,
    ) -> Result<OrderPostResponse, OkcoinError> {
        let path = expand_path(
            private::CANCEL_ORDERS_BY_ID,
            "order_client_id",
            order_or_client_id,
        )?;
        let body = Params::new().with("instrument_id", instrument_id);
        self.private_post(&path, &body).await
    }

    /// Cancel several orders at once.
    ///
    /// Limit: 20 requests per 2 seconds.
    pub async fn post_spot_cancel_batch_orders(
        &self,
        cancels: &[CancelBatchRequest],
    ) -> Result<BatchOrderResponse, OkcoinError> {
        self.private_post(private::CANCEL_BATCH_ORDERS, cancels)
            .await
    }
}
