//! # OKCoin Client
//!
//! An async Rust client library for the OKCoin spot v3 REST API.
//!
//! ## Features
//!
//! - Public market data: instruments, tickers, order books, trades, candles
//! - Private account and trading endpoints with HMAC-SHA256 request signing
//! - Optional client-side rate limiting per endpoint
//! - Decimal accessors with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use okcoin_api_client::spot::rest::SpotRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotRestClient::new();
//!     let ticker = client.get_spot_instrument_ticker("BTC-USD").await?;
//!     println!("BTC-USD last: {}", ticker.last);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rate_limit;
pub mod spot;
pub mod types;

// Re-export commonly used types at crate root
pub use error::OkcoinError;
pub use types::common::{OrderKind, OrderState, Side};

/// Result type alias using OkcoinError
pub type Result<T> = std::result::Result<T, OkcoinError>;
