//! Example: Fetching public market data from Kuna.
//!
//! No credentials are needed for these endpoints.
//!
//! Run with: cargo run --example public_data

use kuna_api_client::rest::KunaRestClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=kuna_api_client=debug shows each request.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = KunaRestClient::new();

    println!("=== Server Time ===");
    let time = client.get_timestamp().await?;
    println!("Unix time: {} ({})", time.unixtime, time.datetime()?);

    println!("\n=== Ticker (btcuah) ===");
    let ticker = client.get_ticker("btcuah").await?;
    println!("  Buy: {}", ticker.buy());
    println!("  Sell: {}", ticker.sell());
    println!("  Last: {}", ticker.last());
    println!("  Low/High: {} / {}", ticker.low(), ticker.high());
    println!("  Volume: {}", ticker.vol());

    println!("\n=== All Tickers ===");
    for ticker in client.get_tickers().await?.iter().take(5) {
        println!("  {}: last {}", ticker.market, ticker.last());
    }

    println!("\n=== Order Book (btcuah) ===");
    let book = client.get_order_book("btcuah").await?;
    println!("  Asks: {:?}", book.asks.iter().take(3).collect::<Vec<_>>());
    println!("  Bids: {:?}", book.bids.iter().take(3).collect::<Vec<_>>());

    println!("\n=== Recent Trades (btcuah) ===");
    for trade in client.get_trades("btcuah").await?.iter().take(5) {
        println!(
            "  #{} {} @ {} ({})",
            trade.id, trade.volume, trade.price, trade.created_at
        );
    }

    Ok(())
}
