//! Exercises the client against an in-memory transport to pin down the exact
//! bytes that go on the wire.

use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use rust_decimal::Decimal;

use kuna_api_client::auth::{FixedNonce, StaticCredentials, sign};
use kuna_api_client::error::KunaError;
use kuna_api_client::rest::{HttpResponse, HttpTransport, KunaClient, KunaRestClient};
use kuna_api_client::types::{Side, Verb};

const TONCE: u64 = 1465850766246;

struct RecordingTransport {
    calls: Mutex<Vec<(Verb, String)>>,
    response: HttpResponse,
}

impl RecordingTransport {
    fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: HttpResponse {
                status,
                body: body.to_string(),
            },
        })
    }

    fn calls(&self) -> Vec<(Verb, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl HttpTransport for RecordingTransport {
    fn send<'a>(&'a self, verb: Verb, url: &'a str) -> BoxFuture<'a, Result<HttpResponse, KunaError>> {
        self.calls.lock().unwrap().push((verb, url.to_string()));
        let response = self.response.clone();
        Box::pin(async move { Ok(response) })
    }
}

fn signed_client(transport: Arc<RecordingTransport>) -> KunaRestClient {
    KunaRestClient::builder()
        .base_url("https://kuna.io/api/v2")
        .credentials(Arc::new(StaticCredentials::new("test_access", "test_secret")))
        .nonce_provider(Arc::new(FixedNonce(TONCE)))
        .transport(transport)
        .build()
}

#[tokio::test]
async fn test_new_order_wire_format() {
    let transport = RecordingTransport::responding(201, r#"{"id": 1, "state": "wait"}"#);
    let client = signed_client(transport.clone());

    client
        .new_order(Side::Buy, Decimal::from(1), "btcuah", Decimal::from(100))
        .await
        .unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, Verb::Post);
    assert_eq!(
        calls[0].1,
        "https://kuna.io/api/v2/orders?access_key=test_access&market=btcuah&price=100&side=buy\
         &tonce=1465850766246&volume=1\
         &signature=1f9045fcc60caedcae22a6d01d32be8e62fea364ba754dde1df5d9bd5520243f"
    );
}

#[tokio::test]
async fn test_signature_covers_transmitted_query() {
    let transport = RecordingTransport::responding(200, "[]");
    let client = signed_client(transport.clone());

    client.get_user_trades("ethuah").await.unwrap();

    let (verb, url) = transport.calls().remove(0);
    let (unsigned, signature) = url.rsplit_once("&signature=").unwrap();
    assert_eq!(sign(verb, unsigned, "test_secret").unwrap(), signature);
    assert!(unsigned.ends_with("/api/v2/trades/my?access_key=test_access&market=ethuah&tonce=1465850766246"));
}

#[tokio::test]
async fn test_decimal_text_is_sent_verbatim() {
    let transport = RecordingTransport::responding(201, "{}");
    let client = signed_client(transport.clone());

    client
        .new_order(Side::Sell, "0.50".parse().unwrap(), "btcuah", "120000.1".parse().unwrap())
        .await
        .unwrap();

    let (_, url) = transport.calls().remove(0);
    assert!(url.contains("&price=120000.1&side=sell&"));
    assert!(url.contains("&volume=0.50&signature="));
}

#[tokio::test]
async fn test_public_calls_are_unsigned() {
    let transport = RecordingTransport::responding(200, r#"{"asks": [], "bids": []}"#);
    let client = signed_client(transport.clone());

    client.get_order_book("btcuah").await.unwrap();

    assert_eq!(
        transport.calls(),
        vec![(Verb::Get, "https://kuna.io/api/v2/depth?market=btcuah".to_string())]
    );
}

#[tokio::test]
async fn test_missing_credentials_sends_nothing() {
    let transport = RecordingTransport::responding(200, "{}");
    let client = KunaRestClient::builder()
        .transport(transport.clone())
        .build();

    for result in [
        client.cancel_order(5).await.map(|_| ()),
        client.get_user_info().await.map(|_| ()),
        client.get_user_orders("btcuah").await.map(|_| ()),
    ] {
        assert!(result.unwrap_err().is_configuration());
    }
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_garbage_order_maps_to_sentinels() {
    let transport = RecordingTransport::responding(200, r#"{"id": "x", "price": "n/a"}"#);
    let client = signed_client(transport);

    let order = client.cancel_order(9).await.unwrap();
    assert_eq!(order.id, 0);
    assert!(order.price.is_nan());
    assert_eq!(order.state, "");
}

#[tokio::test]
async fn test_client_through_trait() {
    async fn last_price<C: KunaClient>(client: &C) -> Result<f64, KunaError> {
        Ok(client.get_ticker("btcuah").await?.last())
    }

    let transport = RecordingTransport::responding(200, r#"{"at": 1, "ticker": {"last": "42.5"}}"#);
    let client = signed_client(transport.clone());

    assert_eq!(last_price(&client).await.unwrap(), 42.5);
    assert_eq!(transport.calls()[0].1, "https://kuna.io/api/v2/tickers/btcuah");
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let transport = RecordingTransport::responding(200, "[]");
    let client = signed_client(transport.clone());

    let handles: Vec<_> = ["btcuah", "ethuah", "xrpuah"]
        .into_iter()
        .map(|market| {
            let client = client.clone();
            tokio::spawn(async move { client.get_trades(market).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_empty());
    }
    assert_eq!(transport.calls().len(), 3);
}
