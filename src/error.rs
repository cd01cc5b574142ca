//! Error types for the OKCoin client library.

use serde::Deserialize;
use thiserror::Error;

use crate::types::serde_helpers::string_or_number;

/// The main error type for all OKCoin client operations.
#[derive(Error, Debug)]
pub enum OkcoinError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// OKCoin API returned an error
    #[error("OKCoin API error: {0}")]
    Api(ApiError),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Message reported by the exchange
        message: String,
    },

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The request could not be built from the given arguments
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: API key, secret key and passphrase required for private endpoints")]
    MissingCredentials,
}

impl OkcoinError {
    /// The exchange error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            OkcoinError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// OKCoin API error code and message.
///
/// These are errors returned by OKCoin itself in the response body, either as
/// `{"code": 30008, "message": "..."}` or `{"error_code": "33014", "error_message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The numeric error code as a string (e.g., "30008")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Both error body shapes the exchange uses; some responses carry both.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    code: String,
    #[serde(default)]
    message: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    error_code: String,
    #[serde(default)]
    error_message: String,
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Parse an API error from a response body.
    ///
    /// Returns `None` when the body is not an error object or carries code `0`.
    pub fn from_body(body: &str) -> Option<Self> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        let (code, message) = if !parsed.error_code.is_empty() && parsed.error_code != "0" {
            (parsed.error_code, parsed.error_message)
        } else {
            (parsed.code, parsed.message)
        };
        if code.is_empty() || code == "0" {
            return None;
        }
        Some(Self::new(code, message))
    }

    /// Parse a call-level error from a successful response body.
    ///
    /// Only the `code`/`message` shape is considered. A per-order
    /// `error_code` is part of the record and is left to the caller.
    pub fn from_status_body(body: &str) -> Option<Self> {
        if !body.trim_start().starts_with('{') {
            return None;
        }
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        if parsed.code.is_empty() || parsed.code == "0" {
            return None;
        }
        Some(Self::new(parsed.code, parsed.message))
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.code == error_codes::RATE_LIMIT_EXCEEDED
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_sign(&self) -> bool {
        self.code == error_codes::INVALID_SIGN
    }

    /// Check if this is an invalid API key error.
    pub fn is_invalid_key(&self) -> bool {
        self.code == error_codes::INVALID_API_KEY
    }

    /// Check if the request timestamp was rejected.
    pub fn is_timestamp_expired(&self) -> bool {
        self.code == error_codes::TIMESTAMP_EXPIRED || self.code == error_codes::INVALID_TIMESTAMP
    }

    /// Check if the referenced order does not exist.
    pub fn is_order_not_found(&self) -> bool {
        self.code == error_codes::ORDER_NOT_FOUND
    }

    /// Check if the account cannot cover the order.
    pub fn is_insufficient_balance(&self) -> bool {
        self.code == error_codes::INSUFFICIENT_BALANCE
    }
}

/// Known OKCoin v3 error codes for pattern matching.
pub mod error_codes {
    /// Authentication errors
    pub const EMPTY_API_KEY: &str = "30001";
    pub const EMPTY_SIGN: &str = "30002";
    pub const EMPTY_TIMESTAMP: &str = "30003";
    pub const EMPTY_PASSPHRASE: &str = "30004";
    pub const INVALID_TIMESTAMP: &str = "30005";
    pub const INVALID_API_KEY: &str = "30006";
    pub const TIMESTAMP_EXPIRED: &str = "30008";
    pub const INVALID_SIGN: &str = "30013";
    pub const RATE_LIMIT_EXCEEDED: &str = "30014";
    pub const INVALID_PASSPHRASE: &str = "30015";

    /// Parameter errors
    pub const INVALID_PARAMETER: &str = "30025";
    pub const INSTRUMENT_NOT_FOUND: &str = "30032";

    /// Spot trading errors
    pub const ORDER_NOT_FOUND: &str = "33014";
    pub const INSUFFICIENT_BALANCE: &str = "33017";
}
