//! Common types used across the OKCoin client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
