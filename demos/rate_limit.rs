//! Example: Client-side rate limiting.
//!
//! Wraps a client so each endpoint stays within its documented quota, and
//! shows how exchange-side rate limit errors surface.
//!
//! Run with: cargo run --example rate_limit

use std::time::Instant;

use okcoin_api_client::OkcoinError;
use okcoin_api_client::rate_limit::{Endpoint, RateLimitConfig, RateLimitedClient};
use okcoin_api_client::spot::rest::{OkcoinClient, SpotRestClient};

async fn poll_ticker<C: OkcoinClient>(client: &C, times: usize) -> Result<(), OkcoinError> {
    for _ in 0..times {
        let ticker = client.get_spot_instrument_ticker("BTC-USD").await?;
        println!("last {}", ticker.last);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("okcoin_api_client=debug"))
        .init();

    let limit = Endpoint::InstrumentTicker.limit();
    println!(
        "Ticker quota: {} requests per {:?}",
        limit.requests, limit.per
    );

    let client = RateLimitedClient::new(SpotRestClient::new(), RateLimitConfig::default());

    let started = Instant::now();
    match poll_ticker(&client, limit.requests as usize + 2).await {
        Ok(()) => println!("Finished in {:?}", started.elapsed()),
        Err(OkcoinError::RateLimitExceeded { message }) => {
            println!("Exchange still rejected a request: {message}");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
