//! OKCoin spot REST API client.
//!
//! Provides the public market-data and private account/trading endpoints of
//! the spot v3 API.
//!
//! # Trait-based API
//!
//! The [`OkcoinClient`] trait abstracts all REST operations, so the same code
//! can drive a plain [`SpotRestClient`] or a rate limited wrapper.
//!
//! ```rust,ignore
//! use okcoin_api_client::spot::rest::{OkcoinClient, SpotRestClient};
//!
//! async fn use_client<C: OkcoinClient>(client: &C) -> Result<(), okcoin_api_client::OkcoinError> {
//!     let instruments = client.get_spot_instruments().await?;
//!     println!("{} trading pairs", instruments.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
mod params;
pub mod private;
pub mod public;
mod traits;

pub use client::{SpotRestClient, SpotRestClientBuilder};
pub use endpoints::{OKCOIN_BASE_URL, OKCOIN_JP_BASE_URL};
pub use params::{Params, apply_order_kind, expand_path, order_params, with_query};
pub use traits::OkcoinClient;
