//! OKCoin spot trading API clients.
//!
//! - [`rest`] - REST API client for the spot v3 endpoints

pub mod rest;

pub use rest::SpotRestClient;
