//! Example: Signed account endpoints.
//!
//! Requires KUNA_ACCESS_KEY and KUNA_SECRET_KEY (a `.env` file works too).
//!
//! Run with: cargo run --example private_account

use std::sync::Arc;

use kuna_api_client::auth::EnvCredentials;
use kuna_api_client::rest::KunaRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt::init();

    let Some(credentials) = EnvCredentials::try_from_env() else {
        eprintln!("Set KUNA_ACCESS_KEY and KUNA_SECRET_KEY to run this example.");
        return Ok(());
    };

    let client = KunaRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    println!("=== Balances ===");
    let me = client.get_user_info().await?;
    for account in &me.accounts {
        println!(
            "  {}: {} (locked {})",
            account.currency, account.balance, account.locked
        );
    }

    println!("\n=== Open Orders (btcuah) ===");
    for order in client.get_user_orders("btcuah").await? {
        println!(
            "  #{} {} {} @ {} ({} left, state {})",
            order.id, order.side, order.volume, order.price, order.remaining_volume, order.state
        );
    }

    println!("\n=== My Trades (btcuah) ===");
    for trade in client.get_user_trades("btcuah").await? {
        println!("  #{} {} {} @ {}", trade.id, trade.side, trade.volume, trade.price);
    }

    Ok(())
}
