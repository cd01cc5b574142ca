//! Example: Spot account and order queries.
//!
//! Reads credentials from `OKCOIN_API_KEY`, `OKCOIN_SECRET_KEY` and
//! `OKCOIN_PASSPHRASE` (a `.env` file works too).
//!
//! Run with: cargo run --example spot_private_account

use std::sync::Arc;

use okcoin_api_client::auth::EnvCredentials;
use okcoin_api_client::spot::rest::{Params, SpotRestClient};
use okcoin_api_client::types::OrderState;

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

    let client = SpotRestClient::builder().credentials(credentials).build();
    let instrument_id = "BTC-USD";

    println!("=== Balances ===");
    for account in client.get_spot_accounts().await? {
        println!(
            "{}: balance {}, available {}, hold {}",
            account.currency, account.balance, account.available, account.hold
        );
    }

    println!("\n=== Fee Rates ===");
    for fee in client.get_spot_trade_fee().await? {
        println!("maker {} taker {}", fee.maker, fee.taker);
    }

    println!("\n=== Open Orders ({instrument_id}) ===");
    let pending = client.get_spot_orders_pending(instrument_id, None).await?;
    for order in &pending {
        println!(
            "{} {} {} @ {} (filled {})",
            order.order_id, order.side, order.size, order.price, order.filled_size
        );
    }

    println!("\n=== Recently Filled Orders ===");
    let options = Params::new().with("limit", 5);
    let filled = client
        .get_spot_orders(instrument_id, OrderState::FullyFilled.as_str(), Some(&options))
        .await?;
    for order in &filled {
        println!("{} {} {} avg {}", order.order_id, order.side, order.filled_size, order.price_avg);
    }

    if let Some(order) = filled.first() {
        println!("\n=== Fills of {} ===", order.order_id);
        let options = Params::new().with("order_id", &order.order_id);
        for fill in client.get_spot_fills(instrument_id, Some(&options)).await? {
            println!("{} {} @ {} fee {}", fill.side, fill.size, fill.price, fill.fee);
        }
    }

    Ok(())
}
