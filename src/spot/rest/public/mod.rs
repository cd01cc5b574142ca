//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::OkcoinError;
use crate::spot::rest::SpotRestClient;
use crate::spot::rest::endpoints::public;
use crate::spot::rest::params::{
    BOOK_KEYS, CANDLES_KEYS, Params, TRADES_KEYS, expand_path, with_query,
};

impl SpotRestClient {
    /// List all trading pairs.
    ///
    /// Limit: 20 requests per 2 seconds.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use okcoin_api_client::spot::rest::SpotRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = SpotRestClient::new();
    ///     for instrument in client.get_spot_instruments().await? {
    ///         println!("{} tick {}", instrument.instrument_id, instrument.tick_size);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_spot_instruments(&self) -> Result<Vec<Instrument>, OkcoinError> {
        self.public_get(public::INSTRUMENTS).await
    }

    /// Get the order book of a trading pair.
    ///
    /// Limit: 20 requests per 2 seconds.
    ///
    /// # Arguments
    ///
    /// * `instrument_id` - Trading pair (e.g., "BTC-JPY").
    /// * `options` - Optional `size` (levels per side) and `depth` (price aggregation).
    pub async fn get_spot_instrument_book(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<OrderBook, OkcoinError> {
        let mut params = Params::new();
        params.merge_selected(options, BOOK_KEYS);
        let path = expand_path(public::INSTRUMENT_BOOK, "instrument_id", instrument_id)?;
        self.public_get(&with_query(&path, &params)?).await
    }

    /// Get the tickers of all trading pairs.
    ///
    /// Limit: 20 requests per 2 seconds.
    pub async fn get_spot_instruments_ticker(&self) -> Result<Vec<Ticker>, OkcoinError> {
        self.public_get(public::INSTRUMENTS_TICKER).await
    }

    /// Get the ticker of one trading pair.
    ///
    /// Limit: 20 requests per 2 seconds.
    pub async fn get_spot_instrument_ticker(
        &self,
        instrument_id: &str,
    ) -> Result<Ticker, OkcoinError> {
        let path = expand_path(public::INSTRUMENT_TICKER, "instrument_id", instrument_id)?;
        self.public_get(&path).await
    }

    /// Get recent public trades of a trading pair.
    ///
    /// Limit: 20 requests per 2 seconds.
    ///
    /// # Arguments
    ///
    /// * `instrument_id` - Trading pair.
    /// * `options` - Optional `limit`.
    pub async fn get_spot_instrument_trades(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<Trade>, OkcoinError> {
        let mut params = Params::new();
        params.merge_selected(options, TRADES_KEYS);
        let path = expand_path(public::INSTRUMENT_TRADES, "instrument_id", instrument_id)?;
        self.public_get(&with_query(&path, &params)?).await
    }

    /// Get candles of a trading pair.
    ///
    /// Limit: 20 requests per 2 seconds.
    ///
    /// # Arguments
    ///
    /// * `instrument_id` - Trading pair.
    /// * `options` - Optional `start`, `end` (ISO-8601) and `granularity` (seconds).
    pub async fn get_spot_instrument_candles(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<Candle>, OkcoinError> {
        let mut params = Params::new();
        params.merge_selected(options, CANDLES_KEYS);
        let path = expand_path(public::INSTRUMENT_CANDLES, "instrument_id", instrument_id)?;
        self.public_get(&with_query(&path, &params)?).await
    }
}
