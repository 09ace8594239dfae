use std::sync::Arc;

use kuna_api_client::auth::EnvCredentials;
use kuna_api_client::rest::KunaRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("KUNA_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = KunaRestClient::new();

    let time = client.get_timestamp().await?;
    assert!(time.unixtime > 0);

    let ticker = client.get_ticker("btcuah").await?;
    assert_eq!(ticker.market, "btcuah");

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_signed_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = KunaRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let info = client.get_user_info().await?;
    assert!(!info.accounts.is_empty());

    let _orders = client.get_user_orders("btcuah").await?;

    Ok(())
}
