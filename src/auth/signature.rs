//! HMAC-SHA256 signature generation for OKCoin API authentication.
//!
//! OKCoin v3 signed requests carry a signature computed as:
//! ```text
//! Base64(HMAC-SHA256(timestamp + METHOD + requestPath + body, secret_key))
//! ```
//!
//! `requestPath` includes the query string for GET requests, and `body` is the
//! exact JSON sent (empty for requests without a body). The result goes in the
//! `OK-ACCESS-SIGN` header.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::OkcoinError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a request for OKCoin's v3 API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret key
/// * `timestamp` - The `OK-ACCESS-TIMESTAMP` value for this request
/// * `method` - The HTTP method (e.g., "GET"); upper-cased before signing
/// * `request_path` - Path plus query string (e.g., "/api/spot/v3/orders?instrument_id=BTC-JPY")
/// * `body` - The JSON body, or an empty string
///
/// # Returns
///
/// Base64-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use okcoin_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "secret_key", "passphrase");
/// let signature = sign_request(
///     &credentials,
///     "2020-03-28T12:21:41.274Z",
///     "GET",
///     "/api/spot/v3/accounts",
///     "",
/// )?;
/// assert_eq!(signature.len(), 44);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    timestamp: &str,
    method: &str,
    request_path: &str,
    body: &str,
) -> Result<String, OkcoinError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| OkcoinError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(timestamp.as_bytes());
    hmac.update(method.to_ascii_uppercase().as_bytes());
    hmac.update(request_path.as_bytes());
    hmac.update(body.as_bytes());
    let hmac_result = hmac.finalize().into_bytes();

    Ok(BASE64.encode(hmac_result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("key", "my_secret", "phrase")
    }

    #[test]
    fn test_signature_generation() {
        let signature = sign_request(
            &credentials(),
            "2020-03-28T12:21:41.274Z",
            "GET",
            "/api/spot/v3/accounts",
            "",
        )
        .unwrap();

        assert!(BASE64.decode(&signature).is_ok());
        // HMAC-SHA256 produces 32 bytes, base64 encoded = 44 chars (with padding)
        assert_eq!(signature.len(), 44);
    }

    #[test]
    fn test_signature_matches_manual_prehash() {
        let timestamp = "2020-03-28T12:21:41.274Z";
        let body = r#"{"instrument_id":"BTC-JPY"}"#;
        let path = "/api/spot/v3/cancel_orders/123";

        let mut mac = HmacSha256::new_from_slice(b"my_secret").unwrap();
        mac.update(format!("{timestamp}POST{path}{body}").as_bytes());
        let expected = BASE64.encode(mac.finalize().into_bytes());

        let signature = sign_request(&credentials(), timestamp, "post", path, body).unwrap();
        assert_eq!(signature, expected);
    }

    #[test]
    fn test_signature_changes_with_timestamp() {
        let sig1 = sign_request(&credentials(), "2020-03-28T12:21:41.274Z", "GET", "/a", "").unwrap();
        let sig2 = sign_request(&credentials(), "2020-03-28T12:21:41.275Z", "GET", "/a", "").unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_query() {
        let ts = "2020-03-28T12:21:41.274Z";
        let sig1 = sign_request(&credentials(), ts, "GET", "/api/spot/v3/fills", "").unwrap();
        let sig2 = sign_request(
            &credentials(),
            ts,
            "GET",
            "/api/spot/v3/fills?instrument_id=BTC-JPY",
            "",
        )
        .unwrap();
        assert_ne!(sig1, sig2);
    }
}
