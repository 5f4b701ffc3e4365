//! Binance klines client against a mock server

mod common;

use common::*;
use serde_json::{json, Value};
use whale_room::sources::{BinanceClient, CandleQuery, CandleSource};
use whale_room::types::CandleInterval;
use whale_room::{AnalysisError, AppError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn klines(closes: &[f64]) -> Value {
    Value::Array(
        candles_with_spread(closes, 0.001)
            .iter()
            .map(kline_json)
            .collect(),
    )
}

fn query(candles: i64) -> CandleQuery {
    CandleQuery {
        symbol: "BTCUSDT".to_string(),
        interval: CandleInterval::FourHours,
        start_ms: START_MS,
        end_ms: START_MS + candles * STEP_MS,
    }
}

#[tokio::test]
async fn test_fetch_single_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("interval", "4h"))
        .and(query_param("startTime", START_MS.to_string()))
        .and(query_param("limit", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(klines(&rising(60))))
        .expect(1)
        .mount(&server)
        .await;

    let client = BinanceClient::new(server.uri(), None);
    let series = client.fetch_series(&query(60)).await.unwrap();

    assert_eq!(series.len(), 60);
    assert_eq!(series.symbol(), "BTCUSDT");
    assert_eq!(series.interval(), CandleInterval::FourHours);
    assert_eq!(series.candles()[0].timestamp, START_MS);
    assert!((series.candles()[0].close - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_fetch_paginates_full_pages() {
    let server = MockServer::start().await;
    let closes = rising(1050);
    let all = candles_with_spread(&closes, 0.001);
    let second_start = all[999].timestamp + 1;

    let first_page: Vec<Value> = all[..1000].iter().map(kline_json).collect();
    let second_page: Vec<Value> = all[1000..].iter().map(kline_json).collect();

    Mock::given(method("GET"))
        .and(path("/klines"))
        .and(query_param("startTime", START_MS.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(first_page)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .and(query_param("startTime", second_start.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(second_page)))
        .expect(1)
        .mount(&server)
        .await;

    let client = BinanceClient::new(server.uri(), None);
    let series = client.fetch_series(&query(1100)).await.unwrap();

    assert_eq!(series.len(), 1050);
    assert_eq!(series.latest().timestamp, all[1049].timestamp);
}

#[tokio::test]
async fn test_fetch_sends_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .and(header("X-MBX-APIKEY", "secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(klines(&rising(5))))
        .expect(1)
        .mount(&server)
        .await;

    let client = BinanceClient::new(server.uri(), Some("secret-key".to_string()));
    let series = client.fetch_series(&query(5)).await.unwrap();
    assert_eq!(series.len(), 5);
}

#[tokio::test]
async fn test_fetch_error_status_is_source_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"code": -1121, "msg": "Invalid symbol."})),
        )
        .mount(&server)
        .await;

    let client = BinanceClient::new(server.uri(), None);
    let err = client.fetch_series(&query(10)).await.unwrap_err();

    match err {
        AppError::Source(message) => assert!(message.contains("400")),
        other => panic!("expected source error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_error_with_multibyte_body_is_source_error() {
    // A live subscriber makes tracing format the logged body.
    let _guard = tracing::subscriber::set_default(
        tracing_subscriber::fmt().with_test_writer().finish(),
    );

    let server = MockServer::start().await;
    let body = format!("a{}", "é".repeat(300));
    Mock::given(method("GET"))
        .and(path("/klines"))
        .respond_with(ResponseTemplate::new(503).set_body_string(body))
        .mount(&server)
        .await;

    let client = BinanceClient::new(server.uri(), None);
    let err = client.fetch_series(&query(10)).await.unwrap_err();

    match err {
        AppError::Source(message) => {
            assert!(message.contains("503"));
            assert!(message.contains(&format!("a{}", "é".repeat(199))));
            assert!(!message.contains(&"é".repeat(200)));
        }
        other => panic!("expected source error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_empty_response_is_invalid_series() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/klines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = BinanceClient::new(server.uri(), None);
    let err = client.fetch_series(&query(10)).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Analysis(AnalysisError::InvalidSeries { .. })
    ));
}

#[tokio::test]
async fn test_fetch_out_of_order_klines_rejected() {
    let server = MockServer::start().await;
    let mut rows: Vec<Value> = candles_with_spread(&rising(3), 0.001)
        .iter()
        .map(kline_json)
        .collect();
    rows.swap(0, 2);
    Mock::given(method("GET"))
        .and(path("/klines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(rows)))
        .mount(&server)
        .await;

    let client = BinanceClient::new(server.uri(), None);
    let err = client.fetch_series(&query(3)).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Analysis(AnalysisError::InvalidSeries { .. })
    ));
}
