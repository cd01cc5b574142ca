use std::sync::Arc;

use reqwest::Method;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_exists, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use okcoin_api_client::auth::{Credentials, FixedTimestamp, StaticCredentials, sign_request};
use okcoin_api_client::error::OkcoinError;
use okcoin_api_client::spot::rest::private::CancelBatchRequest;
use okcoin_api_client::spot::rest::{Params, SpotRestClient, order_params};
use okcoin_api_client::types::{OrderKind, OrderState, Side};

const API_KEY: &str = "test_key";
const SECRET_KEY: &str = "test_secret";
const PASSPHRASE: &str = "test_passphrase";
const TIMESTAMP: &str = "2020-03-28T12:21:41.274Z";

fn build_client(server: &MockServer) -> SpotRestClient {
    let credentials = Arc::new(StaticCredentials::new(API_KEY, SECRET_KEY, PASSPHRASE));
    SpotRestClient::builder()
        .base_url(server.uri())
        .credentials(credentials)
        .timestamp_provider(Arc::new(FixedTimestamp::new(TIMESTAMP)))
        .build()
}

fn expected_sign(method: &str, request_path: &str, body: &str) -> String {
    let credentials = Credentials::new(API_KEY, SECRET_KEY, PASSPHRASE);
    sign_request(&credentials, TIMESTAMP, method, request_path, body).unwrap()
}

#[tokio::test]
async fn test_get_spot_accounts_sends_auth_headers() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {"currency": "BTC", "balance": "1.5", "hold": "0.5", "available": "1", "id": ""},
        {"currency": "JPY", "balance": "100000", "hold": "0", "available": "100000", "id": ""}
    ]);

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/accounts"))
        .and(header("OK-ACCESS-KEY", API_KEY))
        .and(header("OK-ACCESS-PASSPHRASE", PASSPHRASE))
        .and(header("OK-ACCESS-TIMESTAMP", TIMESTAMP))
        .and(header(
            "OK-ACCESS-SIGN",
            expected_sign("GET", "/api/spot/v3/accounts", "").as_str(),
        ))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let accounts = client.get_spot_accounts().await.unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].available_decimal().unwrap().to_string(), "1");
}

#[tokio::test]
async fn test_get_spot_account_by_currency() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/accounts/BTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "currency": "BTC",
            "balance": "2",
            "hold": "0",
            "available": "2"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let account = client.get_spot_account("BTC").await.unwrap();
    assert_eq!(account.currency, "BTC");
    assert!(account.id.is_none());
}

#[tokio::test]
async fn test_private_call_without_credentials_fails_locally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = SpotRestClient::builder().base_url(server.uri()).build();
    let err = client.get_spot_accounts().await.unwrap_err();
    assert!(matches!(err, OkcoinError::MissingCredentials));
}

#[tokio::test]
async fn test_get_spot_orders_signs_query_string() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "client_oid": "",
        "created_at": "2020-03-28T12:21:41.274Z",
        "filled_notional": "0",
        "filled_size": "0",
        "instrument_id": "BTC-JPY",
        "order_id": "4587913",
        "order_type": "0",
        "price": "3900000",
        "side": "buy",
        "size": "0.01",
        "state": "0",
        "timestamp": "2020-03-28T12:21:41.274Z",
        "type": "limit"
    }]);

    let request_path = "/api/spot/v3/orders?instrument_id=BTC-JPY&limit=2&state=0";
    Mock::given(method("GET"))
        .and(path("/api/spot/v3/orders"))
        .and(query_param("instrument_id", "BTC-JPY"))
        .and(query_param("state", "0"))
        .and(query_param("limit", "2"))
        .and(query_param_is_missing("after"))
        .and(header(
            "OK-ACCESS-SIGN",
            expected_sign("GET", request_path, "").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = Params::new()
        .with("limit", 2)
        .with("after", "")
        .with("order_id", "ignored");
    let orders = client
        .get_spot_orders("BTC-JPY", OrderState::Open.as_str(), Some(&options))
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_state(), Some(OrderState::Open));
    assert_eq!(orders[0].order_kind(), Some(OrderKind::Limit));
}

#[tokio::test]
async fn test_get_spot_orders_pending_forwards_all_options() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/orders_pending"))
        .and(query_param("instrument_id", "BTC-JPY"))
        .and(query_param("before", "100"))
        .and(query_param("custom", "x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = Params::new().with("before", "100").with("custom", "x");
    let orders = client
        .get_spot_orders_pending("BTC-JPY", Some(&options))
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_get_spot_order_by_client_oid() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/orders/myorder1"))
        .and(query_param("instrument_id", "BTC-JPY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "client_oid": "myorder1",
            "order_id": "4587913",
            "instrument_id": "BTC-JPY",
            "side": "sell",
            "state": 2,
            "type": "market"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client.get_spot_order("BTC-JPY", "myorder1").await.unwrap();
    assert_eq!(order.order_id, "4587913");
    assert_eq!(order.order_state(), Some(OrderState::FullyFilled));
    assert_eq!(order.order_side(), Some(Side::Sell));
}

#[tokio::test]
async fn test_get_spot_order_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/orders/999"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 33014,
            "message": "Order does not exist"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_spot_order("BTC-JPY", "999").await.unwrap_err();
    assert!(err.api_error().unwrap().is_order_not_found());
}

#[tokio::test]
async fn test_get_spot_fills() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/fills"))
        .and(query_param("instrument_id", "BTC-JPY"))
        .and(query_param("order_id", "4587913"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "created_at": "2020-03-28T12:21:41.274Z",
            "currency": "BTC",
            "exec_type": "T",
            "fee": "-0.0000004",
            "instrument_id": "BTC-JPY",
            "ledger_id": "1001",
            "order_id": "4587913",
            "price": "3900000",
            "side": "buy",
            "size": "0.01",
            "trade_id": "77"
        }])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = Params::new().with("order_id", "4587913");
    let fills = client
        .get_spot_fills("BTC-JPY", Some(&options))
        .await
        .unwrap();
    assert_eq!(fills.len(), 1);
    assert_eq!(fills[0].fee_decimal().unwrap().to_string(), "-0.0000004");
}

#[tokio::test]
async fn test_get_spot_trade_fee() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/trade_fee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "maker": "0.001",
            "taker": "0.0015",
            "timestamp": "2020-03-28T12:21:41.274Z"
        }])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let fees = client.get_spot_trade_fee().await.unwrap();
    assert_eq!(fees[0].taker, "0.0015");
    assert!(fees[0].category.is_none());
}

#[tokio::test]
async fn test_post_limit_order_drops_notional() {
    let server = MockServer::start().await;
    let options = Params::new()
        .order_kind(OrderKind::Limit)
        .price("3900000")
        .size("0.01")
        .notional("39000")
        .client_oid("");
    let body = order_params("BTC-JPY", Side::Buy, Some(&options));
    let body_text = serde_json::to_string(&body).unwrap();

    Mock::given(method("POST"))
        .and(path("/api/spot/v3/orders"))
        .and(body_json(serde_json::json!({
            "instrument_id": "BTC-JPY",
            "side": "buy",
            "type": "limit",
            "price": "3900000",
            "size": "0.01"
        })))
        .and(header(
            "OK-ACCESS-SIGN",
            expected_sign("POST", "/api/spot/v3/orders", &body_text).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "client_oid": "",
            "error_code": "",
            "error_message": "",
            "order_id": "4587913",
            "result": true
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let placed = client
        .post_spot_order("BTC-JPY", Side::Buy, Some(&options))
        .await
        .unwrap();
    assert!(placed.result);
    assert_eq!(placed.order_id, "4587913");
    assert!(placed.api_error().is_none());
}

#[tokio::test]
async fn test_post_market_order_drops_price() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spot/v3/orders"))
        .and(body_json(serde_json::json!({
            "instrument_id": "BTC-JPY",
            "side": "buy",
            "type": "market",
            "notional": "10000"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "client_oid": "",
            "error_code": "33017",
            "error_message": "Insufficient balance",
            "order_id": "-1",
            "result": false
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let options = Params::new()
        .order_kind(OrderKind::Market)
        .price("3900000")
        .notional("10000");
    let placed = client
        .post_spot_order("BTC-JPY", Side::Buy, Some(&options))
        .await
        .unwrap();
    assert!(!placed.result);
    assert!(placed.api_error().unwrap().is_insufficient_balance());
}

#[tokio::test]
async fn test_post_spot_batch_orders() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spot/v3/batch_orders"))
        .and(body_json(serde_json::json!([
            {
                "instrument_id": "BTC-JPY",
                "side": "buy",
                "type": "limit",
                "price": "3900000",
                "size": "0.01",
                "client_oid": "a1"
            },
            {
                "instrument_id": "ETH-JPY",
                "side": "sell",
                "type": "market",
                "size": "0.5"
            }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "btc_jpy": [{"client_oid": "a1", "order_id": "11", "result": true, "error_code": "", "error_message": ""}],
            "eth_jpy": [{"client_oid": "", "order_id": "12", "result": true, "error_code": "", "error_message": ""}]
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let orders = vec![
        Params::new()
            .with("instrument_id", "BTC-JPY")
            .with("side", Side::Buy)
            .order_kind(OrderKind::Limit)
            .price("3900000")
            .size("0.01")
            .notional("1")
            .client_oid("a1"),
        Params::new()
            .with("instrument_id", "ETH-JPY")
            .with("side", Side::Sell)
            .order_kind(OrderKind::Market)
            .price("250000")
            .size("0.5"),
    ];
    let placed = client.post_spot_batch_orders(&orders).await.unwrap();
    assert_eq!(placed.len(), 2);
    assert_eq!(placed["btc_jpy"][0].order_id, "11");
    assert!(placed["eth_jpy"][0].result);
}

#[tokio::test]
async fn test_post_spot_cancel_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spot/v3/cancel_orders/4587913"))
        .and(body_json(serde_json::json!({"instrument_id": "BTC-JPY"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "client_oid": "",
            "error_code": "",
            "error_message": "",
            "order_id": "4587913",
            "result": true
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let canceled = client
        .post_spot_cancel_order("BTC-JPY", "4587913")
        .await
        .unwrap();
    assert!(canceled.result);
}

#[tokio::test]
async fn test_post_spot_cancel_batch_orders() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spot/v3/cancel_batch_orders"))
        .and(body_string_contains(r#""order_ids":["11","12"]"#))
        .and(body_string_contains(r#""client_oids":["a1"]"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "btc_jpy": [
                {"client_oid": "", "order_id": "11", "result": true},
                {"client_oid": "", "order_id": "12", "result": "true"}
            ],
            "eth_jpy": [
                {"client_oid": "a1", "order_id": "", "result": false, "error_code": 33014, "error_message": "Order does not exist"}
            ]
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let cancels = [
        CancelBatchRequest::by_order_ids("BTC-JPY", ["11", "12"]),
        CancelBatchRequest::by_client_oids("ETH-JPY", ["a1"]),
    ];
    let canceled = client
        .post_spot_cancel_batch_orders(&cancels)
        .await
        .unwrap();
    assert!(canceled["btc_jpy"].iter().all(|entry| entry.result));
    let rejected = canceled["eth_jpy"][0].api_error().unwrap();
    assert!(rejected.is_order_not_found());
}

#[tokio::test]
async fn test_invalid_sign_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/accounts"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "code": 30013,
            "message": "Invalid Sign"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_spot_accounts().await.unwrap_err();
    match err {
        OkcoinError::Api(api) => assert!(api.is_invalid_sign()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_order_id_with_space_is_path_encoded_and_signed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/orders/my%20order"))
        .and(query_param("instrument_id", "BTC-JPY"))
        .and(header(
            "OK-ACCESS-SIGN",
            expected_sign(
                "GET",
                "/api/spot/v3/orders/my%20order?instrument_id=BTC-JPY",
                "",
            )
            .as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "client_oid": "my order",
            "order_id": "2510789768709120",
            "instrument_id": "BTC-JPY",
            "state": "0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let order = client.get_spot_order("BTC-JPY", "my order").await.unwrap();
    assert_eq!(order.client_oid, "my order");
}

#[tokio::test]
async fn test_dot_segment_order_id_fails_locally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_spot_order("BTC-JPY", "..").await.unwrap_err();
    assert!(matches!(err, OkcoinError::InvalidRequest(_)));
    let err = client
        .post_spot_cancel_order("BTC-JPY", ".")
        .await
        .unwrap_err();
    assert!(matches!(err, OkcoinError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_request_signs_when_credentials_are_configured() {
    let server = MockServer::start().await;
    let body = serde_json::json!({"instrument_id": "BTC-JPY"});

    Mock::given(method("POST"))
        .and(path("/api/spot/v3/cancel_orders/12345"))
        .and(header("OK-ACCESS-KEY", API_KEY))
        .and(header(
            "OK-ACCESS-SIGN",
            expected_sign(
                "POST",
                "/api/spot/v3/cancel_orders/12345",
                r#"{"instrument_id":"BTC-JPY"}"#,
            )
            .as_str(),
        ))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "order_id": "12345",
            "result": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let response: serde_json::Value = client
        .request(Method::POST, "/api/spot/v3/cancel_orders/12345", Some(&body))
        .await
        .unwrap();
    assert_eq!(response["order_id"], "12345");
}

#[tokio::test]
async fn test_request_without_credentials_is_unsigned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/spot/v3/instruments"))
        .and(header_exists("OK-ACCESS-SIGN"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/spot/v3/instruments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"instrument_id": "BTC-JPY"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = SpotRestClient::builder().base_url(server.uri()).build();
    let response: serde_json::Value = client
        .request::<_, ()>(Method::GET, "/api/spot/v3/instruments", None)
        .await
        .unwrap();
    assert_eq!(response[0]["instrument_id"], "BTC-JPY");
}
