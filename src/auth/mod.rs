//! Authentication module for the OKCoin API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Request timestamps in the exchange's ISO-8601 format
//! - HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{
    API_KEY_VAR, Credentials, CredentialsProvider, EnvCredentials, PASSPHRASE_VAR, SECRET_KEY_VAR,
    StaticCredentials,
};
pub use signature::sign_request;
pub use timestamp::{FixedTimestamp, SystemTimestamp, TimestampProvider, format_timestamp};
