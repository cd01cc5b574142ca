//! OKCoin spot REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{Credentials, CredentialsProvider, SystemTimestamp, TimestampProvider, sign_request};
use crate::error::{ApiError, OkcoinError};
use crate::spot::rest::endpoints::OKCOIN_BASE_URL;
use crate::spot::rest::private::{
    AccountInfo, BatchOrderResponse, CancelBatchRequest, FilledOrder, OrderInfo, OrderPostResponse,
    TradeFee,
};
use crate::spot::rest::public::{Candle, Instrument, OrderBook, Ticker, Trade};
use crate::spot::rest::traits::OkcoinClient;
use crate::spot::rest::Params;
use crate::types::Side;

/// The OKCoin spot REST API client.
///
/// Every operation builds its path and parameters, then goes through the
/// shared [`SpotRestClient::request`] primitive which signs, sends and
/// decodes. Errors are returned as they occur; nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use okcoin_api_client::spot::rest::SpotRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = SpotRestClient::new();
///
///     let ticker = client.get_spot_instrument_ticker("BTC-USD").await?;
///     println!("Last: {}", ticker.last);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use okcoin_api_client::spot::rest::SpotRestClient;
/// use okcoin_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "secret_key", "passphrase"));
///     let client = SpotRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let accounts = client.get_spot_accounts().await?;
///     println!("Accounts: {:?}", accounts);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
}

impl SpotRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`SpotRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> SpotRestClientBuilder {
        SpotRestClientBuilder::new()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Send a request and decode the response.
    ///
    /// `path` may already carry a query string. The body, if any, is sent as
    /// JSON. The request is signed when credentials are configured.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, OkcoinError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let credentials = self.credentials.as_ref().map(|c| c.get_credentials());
        self.send(method, path, body, credentials).await
    }

    /// Make an unsigned GET request.
    pub(crate) async fn public_get<T>(&self, path: &str) -> Result<T, OkcoinError>
    where
        T: DeserializeOwned,
    {
        self.send::<T, ()>(Method::GET, path, None, None).await
    }

    /// Make a signed GET request.
    pub(crate) async fn private_get<T>(&self, path: &str) -> Result<T, OkcoinError>
    where
        T: DeserializeOwned,
    {
        self.require_credentials()?;
        self.request::<T, ()>(Method::GET, path, None).await
    }

    /// Make a signed POST request with a JSON body.
    pub(crate) async fn private_post<T, B>(&self, path: &str, body: &B) -> Result<T, OkcoinError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.require_credentials()?;
        self.request(Method::POST, path, Some(body)).await
    }

    fn require_credentials(&self) -> Result<&Credentials, OkcoinError> {
        self.credentials
            .as_ref()
            .map(|c| c.get_credentials())
            .ok_or(OkcoinError::MissingCredentials)
    }

    async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        credentials: Option<&Credentials>,
    ) -> Result<T, OkcoinError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        // Sign what goes on the wire, after URL normalization.
        let request_path = url[url::Position::BeforePath..].to_string();
        let body = match body {
            Some(body) => serde_json::to_string(body)?,
            None => String::new(),
        };

        tracing::debug!(%method, path = %request_path, signed = credentials.is_some(), "sending OKCoin request");

        let mut request = self
            .http_client
            .request(method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(creds) = credentials {
            let timestamp = self.timestamp_provider.timestamp()?;
            let signature = sign_request(creds, &timestamp, method.as_str(), &request_path, &body)?;
            request = request
                .header("OK-ACCESS-KEY", &creds.api_key)
                .header("OK-ACCESS-SIGN", signature)
                .header("OK-ACCESS-TIMESTAMP", timestamp)
                .header("OK-ACCESS-PASSPHRASE", creds.expose_passphrase());
        }

        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await?;
        self.parse_response(response).await
    }

    /// Parse a response from the OKCoin API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, OkcoinError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            // Call-level errors can arrive with a 2xx status and would
            // otherwise decode into an empty record.
            if let Some(api_error) = ApiError::from_status_body(&body) {
                return Err(api_error_to_error(api_error));
            }
            return serde_json::from_str(&body).map_err(|e| match ApiError::from_body(&body) {
                Some(api_error) => api_error_to_error(api_error),
                None => OkcoinError::InvalidResponse(format!(
                    "Failed to parse response: {}. Body: {}",
                    e, body
                )),
            });
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(%status, "OKCoin rate limit exceeded");
            return Err(OkcoinError::RateLimitExceeded { message: body });
        }

        match ApiError::from_body(&body) {
            Some(api_error) => Err(api_error_to_error(api_error)),
            None => Err(OkcoinError::InvalidResponse(format!("HTTP {}: {}", status, body))),
        }
    }
}

fn api_error_to_error(api_error: ApiError) -> OkcoinError {
    tracing::warn!(code = %api_error.code, message = %api_error.message, "OKCoin API error");
    if api_error.is_rate_limit() {
        OkcoinError::RateLimitExceeded {
            message: api_error.message,
        }
    } else {
        OkcoinError::Api(api_error)
    }
}

impl Default for SpotRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SpotRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`SpotRestClient`].
pub struct SpotRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl SpotRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: OKCOIN_BASE_URL.to_string(),
            credentials: None,
            timestamp_provider: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> SpotRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("okcoin-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("okcoin-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemTimestamp::new()));

        SpotRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            timestamp_provider,
        }
    }
}

impl Default for SpotRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// OkcoinClient trait implementation.

impl OkcoinClient for SpotRestClient {
    // ========== Public Endpoints ==========

    async fn get_spot_instruments(&self) -> Result<Vec<Instrument>, OkcoinError> {
        SpotRestClient::get_spot_instruments(self).await
    }

    async fn get_spot_instrument_book(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<OrderBook, OkcoinError> {
        SpotRestClient::get_spot_instrument_book(self, instrument_id, options).await
    }

    async fn get_spot_instruments_ticker(&self) -> Result<Vec<Ticker>, OkcoinError> {
        SpotRestClient::get_spot_instruments_ticker(self).await
    }

    async fn get_spot_instrument_ticker(&self, instrument_id: &str) -> Result<Ticker, OkcoinError> {
        SpotRestClient::get_spot_instrument_ticker(self, instrument_id).await
    }

    async fn get_spot_instrument_trades(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<Trade>, OkcoinError> {
        SpotRestClient::get_spot_instrument_trades(self, instrument_id, options).await
    }

    async fn get_spot_instrument_candles(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<Candle>, OkcoinError> {
        SpotRestClient::get_spot_instrument_candles(self, instrument_id, options).await
    }

    // ========== Private Endpoints - Account ==========

    async fn get_spot_accounts(&self) -> Result<Vec<AccountInfo>, OkcoinError> {
        SpotRestClient::get_spot_accounts(self).await
    }

    async fn get_spot_account(&self, currency: &str) -> Result<AccountInfo, OkcoinError> {
        SpotRestClient::get_spot_account(self, currency).await
    }

    async fn get_spot_trade_fee(&self) -> Result<Vec<TradeFee>, OkcoinError> {
        SpotRestClient::get_spot_trade_fee(self).await
    }

    // ========== Private Endpoints - Orders ==========

    async fn get_spot_orders(
        &self,
        instrument_id: &str,
        state: &str,
        options: Option<&Params>,
    ) -> Result<Vec<OrderInfo>, OkcoinError> {
        SpotRestClient::get_spot_orders(self, instrument_id, state, options).await
    }

    async fn get_spot_orders_pending(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<OrderInfo>, OkcoinError> {
        SpotRestClient::get_spot_orders_pending(self, instrument_id, options).await
    }

    async fn get_spot_order(
        &self,
        instrument_id: &str,
        order_or_client_id: &str,
    ) -> Result<OrderInfo, OkcoinError> {
        SpotRestClient::get_spot_order(self, instrument_id, order_or_client_id).await
    }

    async fn get_spot_fills(
        &self,
        instrument_id: &str,
        options: Option<&Params>,
    ) -> Result<Vec<FilledOrder>, OkcoinError> {
        SpotRestClient::get_spot_fills(self, instrument_id, options).await
    }

    // ========== Private Endpoints - Trading ==========

    async fn post_spot_order(
        &self,
        instrument_id: &str,
        side: Side,
        options: Option<&Params>,
    ) -> Result<OrderPostResponse, OkcoinError> {
        SpotRestClient::post_spot_order(self, instrument_id, side, options).await
    }

    async fn post_spot_batch_orders(
        &self,
        orders: &[Params],
    ) -> Result<BatchOrderResponse, OkcoinError> {
        SpotRestClient::post_spot_batch_orders(self, orders).await
    }

    async fn post_spot_cancel_order(
        &self,
        instrument_id: &str,
        order_or_client_id: &str,
    ) -> Result<OrderPostResponse, OkcoinError> {
        SpotRestClient::post_spot_cancel_order(self, instrument_id, order_or_client_id).await
    }

    async fn post_spot_cancel_batch_orders(
        &self,
        cancels: &[CancelBatchRequest],
    ) -> Result<BatchOrderResponse, OkcoinError> {
        SpotRestClient::post_spot_cancel_batch_orders(self, cancels).await
    }
}
