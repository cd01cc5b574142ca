//! Example: Fetching public market data from OKCoin.
//!
//! Public endpoints need no credentials.
//!
//! Run with: cargo run --example public_data

use okcoin_api_client::spot::rest::{Params, SpotRestClient};
use okcoin_api_client::types::Granularity;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = SpotRestClient::new();
    let instrument_id = "BTC-USD";

    println!("=== Instruments ===");
    let instruments = client.get_spot_instruments().await?;
    for instrument in instruments.iter().take(5) {
        println!(
            "{}: min size {}, tick {}",
            instrument.instrument_id, instrument.min_size, instrument.tick_size
        );
    }

    println!("\n=== Ticker ({instrument_id}) ===");
    let ticker = client.get_spot_instrument_ticker(instrument_id).await?;
    println!("Last: {}", ticker.last);
    println!("Bid/Ask: {} / {}", ticker.best_bid, ticker.best_ask);
    if let Some(spread) = ticker.spread() {
        println!("Spread: {spread}");
    }

    println!("\n=== Order Book ({instrument_id}, 5 levels) ===");
    let book = client
        .get_spot_instrument_book(instrument_id, Some(&Params::new().with("size", 5)))
        .await?;
    for ask in book.asks.iter().rev() {
        println!("  ask {} @ {}", ask.size, ask.price);
    }
    for bid in &book.bids {
        println!("  bid {} @ {}", bid.size, bid.price);
    }

    println!("\n=== Recent Trades ===");
    let trades = client
        .get_spot_instrument_trades(instrument_id, Some(&Params::new().with("limit", 5)))
        .await?;
    for trade in trades {
        println!("  {} {} @ {} ({})", trade.side, trade.size, trade.price, trade.timestamp);
    }

    println!("\n=== Candles (1 hour) ===");
    let options = Params::new().with("granularity", Granularity::Hour1.as_secs());
    let candles = client
        .get_spot_instrument_candles(instrument_id, Some(&options))
        .await?;
    for candle in candles.iter().take(3) {
        println!(
            "  {} O: {} H: {} L: {} C: {} Vol: {}",
            candle.time, candle.open, candle.high, candle.low, candle.close, candle.volume
        );
    }

    println!("\nDone!");
    Ok(())
}
