use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kuna_api_client::error::KunaError;
use kuna_api_client::rest::KunaRestClient;

fn build_public_client(server: &MockServer) -> KunaRestClient {
    KunaRestClient::builder()
        .base_url(format!("{}/api/v2", server.uri()))
        .build()
}

#[tokio::test]
async fn test_get_timestamp() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/timestamp"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1465850766"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let time = client.get_timestamp().await.unwrap();
    assert_eq!(time.unixtime, 1465850766);
}

#[tokio::test]
async fn test_get_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "at": 1465850766,
        "ticker": {
            "buy": "120000.0",
            "sell": "120100.0",
            "low": "118000.0",
            "high": "121000.0",
            "last": "120050.0",
            "vol": "12.5",
            "price": "1500000.0"
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/v2/tickers/btcuah"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let ticker = client.get_ticker("btcuah").await.unwrap();

    assert_eq!(ticker.market, "btcuah");
    assert_eq!(ticker.buy(), 120000.0);
    assert_eq!(ticker.sell(), 120100.0);
    assert_eq!(ticker.vol(), 12.5);
    assert_eq!(ticker.get("price"), Some(&serde_json::json!("1500000.0")));
}

#[tokio::test]
async fn test_get_tickers() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "btcuah": { "at": 1465850766, "ticker": { "buy": "1", "last": "1.5" } },
        "ethuah": { "at": 1465850766, "ticker": { "buy": "2", "last": "2.5" } }
    });

    Mock::given(method("GET"))
        .and(path("/api/v2/tickers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let tickers = client.get_tickers().await.unwrap();

    assert_eq!(tickers.len(), 2);
    let eth = tickers.iter().find(|t| t.market == "ethuah").unwrap();
    assert_eq!(eth.buy(), 2.0);
    assert_eq!(eth.last(), 2.5);
}

#[tokio::test]
async fn test_get_order_book() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "timestamp": 1465850766,
        "asks": [["120100.0", "0.5"], ["120200.0", "1.0"]],
        "bids": [["120000.0", "0.25"]]
    });

    Mock::given(method("GET"))
        .and(path("/api/v2/depth"))
        .and(query_param("market", "btcuah"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let book = client.get_order_book("btcuah").await.unwrap();

    assert_eq!(book.asks.len(), 2);
    assert_eq!(book.bids[0], serde_json::json!(["120000.0", "0.25"]));
    assert_eq!(book.extra["timestamp"], serde_json::json!(1465850766));
}

#[tokio::test]
async fn test_get_trades() {
    let server = MockServer::start().await;
    let response = serde_json::json!([
        {
            "id": 4567,
            "price": "120000.0",
            "volume": "0.01",
            "funds": "1200.0",
            "market": "btcuah",
            "created_at": "2018-01-01T10:00:00+02:00",
            "side": null
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/v2/trades"))
        .and(query_param("market", "btcuah"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let trades = client.get_trades("btcuah").await.unwrap();

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].id, 4567);
    assert_eq!(trades[0].price, 120000.0);
    assert_eq!(trades[0].funds, 1200.0);
    assert_eq!(trades[0].created_at, "2018-01-01T10:00:00+02:00");
    assert_eq!(trades[0].side, "");
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "error": { "code": 1001, "message": "market does not have a valid value" }
    });

    Mock::given(method("GET"))
        .and(path("/api/v2/trades"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_trades("xxxuah").await.unwrap_err();

    assert!(err.is_transport());
    match err {
        KunaError::Status { status, api, .. } => {
            assert_eq!(status, 400);
            assert_eq!(api.unwrap().code, 1001);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_without_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/timestamp"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_timestamp().await.unwrap_err();

    assert!(matches!(
        err,
        KunaError::Status { status: 502, ref body, api: None } if body == "Bad Gateway"
    ));
}

#[tokio::test]
async fn test_unparsable_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_tickers().await.unwrap_err();
    assert!(matches!(err, KunaError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_trades_not_an_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/trades"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"trades": []})))
        .mount(&server)
        .await;

    let client = build_public_client(&server);
    let err = client.get_trades("btcuah").await.unwrap_err();
    assert!(matches!(err, KunaError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_invalid_market_is_rejected_locally() {
    let server = MockServer::start().await;
    let client = build_public_client(&server);

    let err = client.get_ticker("btc/uah").await.unwrap_err();
    assert!(matches!(err, KunaError::MalformedInput(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
