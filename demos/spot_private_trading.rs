//! Example: Placing and canceling spot orders.
//!
//! Places a post-only limit order far from the market and cancels it again.
//! Set `OKCOIN_DEMO_PRICE` and `OKCOIN_DEMO_SIZE` to run it.
//!
//! Run with: cargo run --example spot_private_trading

use std::env;
use std::sync::Arc;

use okcoin_api_client::auth::EnvCredentials;
use okcoin_api_client::spot::rest::private::CancelBatchRequest;
use okcoin_api_client::spot::rest::{Params, SpotRestClient};
use okcoin_api_client::types::{OrderKind, OrderTypeFlag, Side};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set OKCOIN_API_KEY, OKCOIN_SECRET_KEY and OKCOIN_PASSPHRASE to run this example.");
            return Ok(());
        }
    };
    let (Ok(price), Ok(size)) = (env::var("OKCOIN_DEMO_PRICE"), env::var("OKCOIN_DEMO_SIZE")) else {
        println!("Set OKCOIN_DEMO_PRICE and OKCOIN_DEMO_SIZE to place a test order.");
        return Ok(());
    };

    let client = SpotRestClient::builder().credentials(credentials).build();
    let instrument_id = "BTC-USD";

    let order = Params::new()
        .order_kind(OrderKind::Limit)
        .price(&price)
        .size(&size)
        .client_oid("demo1")
        .with("order_type", OrderTypeFlag::PostOnly);
    let placed = client
        .post_spot_order(instrument_id, Side::Buy, Some(&order))
        .await?;
    if let Some(err) = placed.api_error() {
        println!("Order rejected: {err}");
        return Ok(());
    }
    println!("Placed order {}", placed.order_id);

    let status = client.get_spot_order(instrument_id, "demo1").await?;
    println!("State: {:?}", status.order_state());

    let canceled = client
        .post_spot_cancel_order(instrument_id, &placed.order_id)
        .await?;
    println!("Canceled: {}", canceled.result);

    // Batch variants take several orders per call.
    let batch = vec![
        Params::new()
            .with("instrument_id", instrument_id)
            .with("side", Side::Buy)
            .order_kind(OrderKind::Limit)
            .price(&price)
            .size(&size)
            .client_oid("demo2"),
    ];
    let placed = client.post_spot_batch_orders(&batch).await?;
    for (instrument, results) in &placed {
        for result in results {
            println!("{instrument}: {} accepted={}", result.order_id, result.result);
        }
    }

    let cancels = [CancelBatchRequest::by_client_oids(instrument_id, ["demo2"])];
    let canceled = client.post_spot_cancel_batch_orders(&cancels).await?;
    println!("Batch cancel: {canceled:?}");

    Ok(())
}
