//! Request timestamps for OKCoin API authentication.
//!
//! Every signed request carries an ISO-8601 UTC timestamp with millisecond
//! precision (`2020-03-28T12:21:41.274Z`) in the `OK-ACCESS-TIMESTAMP` header.
//! The same string is the first component of the signature prehash, and the
//! exchange rejects requests more than 30 seconds away from its own clock.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::OkcoinError;

const ISO_MILLIS: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

/// Trait for providing the timestamp of a signed request.
pub trait TimestampProvider: Send + Sync {
    /// The timestamp string to sign and send.
    fn timestamp(&self) -> Result<String, OkcoinError>;
}

/// Timestamp provider reading the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimestamp;

impl SystemTimestamp {
    /// Create a new system clock provider.
    pub fn new() -> Self {
        Self
    }
}

impl TimestampProvider for SystemTimestamp {
    fn timestamp(&self) -> Result<String, OkcoinError> {
        format_timestamp(OffsetDateTime::now_utc())
    }
}

/// Timestamp provider that always returns the same value.
///
/// Useful for reproducible signatures in tests.
#[derive(Debug, Clone)]
pub struct FixedTimestamp(String);

impl FixedTimestamp {
    /// Create a provider returning `timestamp` verbatim.
    pub fn new(timestamp: impl Into<String>) -> Self {
        Self(timestamp.into())
    }
}

impl TimestampProvider for FixedTimestamp {
    fn timestamp(&self) -> Result<String, OkcoinError> {
        Ok(self.0.clone())
    }
}

/// Format a UTC instant the way the exchange expects.
pub fn format_timestamp(at: OffsetDateTime) -> Result<String, OkcoinError> {
    at.to_offset(time::UtcOffset::UTC)
        .format(ISO_MILLIS)
        .map_err(|e| OkcoinError::Auth(format!("Failed to format timestamp: {e}")))
}
