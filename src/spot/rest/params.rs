//! Request parameter assembly.
//!
//! Every operation takes its required fields as positional arguments and an
//! optional [`Params`] overlay. Overlays are sparse: a key that is absent or
//! holds an empty string is never sent.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::error::OkcoinError;
use crate::types::{OrderKind, Side};

/// A string-keyed parameter set, sent as a query string or a flat JSON object.
///
/// Keys are kept sorted so query strings are deterministic.
///
/// # Example
///
/// ```rust
/// use okcoin_api_client::spot::rest::Params;
///
/// let params = Params::new().with("limit", "1").with("after", "");
/// let selected = params.select(&["limit", "after", "before"]);
/// assert_eq!(selected.get("limit"), Some("1"));
/// assert!(!selected.contains("after"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, returning the set.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Get a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check whether a parameter is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy only the listed keys that are present with a non-empty value.
    pub fn select(&self, keys: &[&str]) -> Params {
        keys.iter()
            .filter_map(|key| {
                self.get(key)
                    .filter(|value| !value.is_empty())
                    .map(|value| (key.to_string(), value.to_string()))
            })
            .collect()
    }

    /// Copy every non-empty parameter of `overlay` into this set, overwriting.
    pub fn merge(&mut self, overlay: &Params) {
        for (key, value) in overlay.iter() {
            if !value.is_empty() {
                self.insert(key, value);
            }
        }
    }

    /// Copy the listed keys of an optional overlay into this set.
    pub(crate) fn merge_selected(&mut self, overlay: Option<&Params>, keys: &[&str]) {
        if let Some(overlay) = overlay {
            self.merge(&overlay.select(keys));
        }
    }

    /// Set the order type parameter.
    pub fn order_kind(self, kind: OrderKind) -> Self {
        self.with("type", kind)
    }

    /// Set the limit price.
    pub fn price(self, price: impl ToString) -> Self {
        self.with("price", price)
    }

    /// Set the order size in base currency.
    pub fn size(self, size: impl ToString) -> Self {
        self.with("size", size)
    }

    /// Set the market buy amount in quote currency.
    pub fn notional(self, notional: impl ToString) -> Self {
        self.with("notional", notional)
    }

    /// Set the client supplied order id.
    pub fn client_oid(self, client_oid: impl ToString) -> Self {
        self.with("client_oid", client_oid)
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl From<BTreeMap<String, String>> for Params {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Keys forwarded by the order list endpoint.
pub(crate) const ORDER_LIST_KEYS: &[&str] = &["before", "after", "limit"];
/// Keys forwarded by the fills endpoint.
pub(crate) const FILLS_KEYS: &[&str] = &["order_id", "before", "after", "limit"];
/// Keys forwarded by the order book endpoint.
pub(crate) const BOOK_KEYS: &[&str] = &["size", "depth"];
/// Keys forwarded by the public trades endpoint.
pub(crate) const TRADES_KEYS: &[&str] = &["limit"];
/// Keys forwarded by the candles endpoint.
pub(crate) const CANDLES_KEYS: &[&str] = &["start", "end", "granularity"];

/// Assemble the body of a single order.
///
/// `side` and `instrument_id` are always set; every non-empty overlay key is
/// merged over them, then [`apply_order_kind`] trims the amount fields.
pub fn order_params(instrument_id: &str, side: Side, overlay: Option<&Params>) -> Params {
    let mut params = Params::new()
        .with("side", side)
        .with("instrument_id", instrument_id);
    if let Some(overlay) = overlay {
        params.merge(overlay);
    }
    apply_order_kind(params)
}

/// Keep the amount fields that match the order's `type`.
///
/// Limit orders carry `price` and `size`; market orders carry `size` and
/// `notional`. Orders of another or missing type keep all their fields.
/// Empty values are dropped in every case.
pub fn apply_order_kind(mut params: Params) -> Params {
    match params.get("type").and_then(|kind| kind.parse::<OrderKind>().ok()) {
        Some(OrderKind::Limit) => {
            params.remove("notional");
        }
        Some(OrderKind::Market) => {
            params.remove("price");
        }
        None => {}
    }
    params.0.retain(|_, value| !value.is_empty());
    params
}

/// Bytes left as-is inside a path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Substitute `{name}` in a path template with a percent-encoded path segment.
///
/// Empty, `.` and `..` values are rejected: URL normalization would drop or
/// collapse them and the request would reach a different endpoint.
///
/// # Example
///
/// ```rust
/// use okcoin_api_client::spot::rest::expand_path;
///
/// let path = expand_path("/api/spot/v3/instruments/{instrument_id}/book", "instrument_id", "BTC-JPY")?;
/// assert_eq!(path, "/api/spot/v3/instruments/BTC-JPY/book");
/// # Ok::<(), okcoin_api_client::OkcoinError>(())
/// ```
pub fn expand_path(template: &str, name: &str, value: &str) -> Result<String, OkcoinError> {
    if matches!(value, "" | "." | "..") {
        return Err(OkcoinError::InvalidRequest(format!(
            "`{name}` cannot be {value:?} in a request path"
        )));
    }
    let encoded = utf8_percent_encode(value, PATH_SEGMENT).to_string();
    Ok(template.replace(&format!("{{{name}}}"), &encoded))
}

/// Append `params` to `path` as a query string, if there are any.
pub fn with_query(path: &str, params: &Params) -> Result<String, OkcoinError> {
    if params.is_empty() {
        return Ok(path.to_string());
    }
    let query = serde_urlencoded::to_string(params)
        .map_err(|e| OkcoinError::InvalidRequest(format!("Failed to encode query: {e}")))?;
    Ok(format!("{path}?{query}"))
}
