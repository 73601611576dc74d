//! Integration tests against the live public REST API.
//!
//! These exercise the full client → HTTP → decode → validate path for
//! unauthenticated endpoints.
//!
//! Tests that hit the network are `#[ignore]`; the credential check fails
//! before any request is sent and runs everywhere.
//!
//! Run with:
//! ```bash
//! cargo test --test live_api -- --ignored
//! ```

use binance_spot_sdk::prelude::*;

fn public_client() -> BinanceClient {
    BinanceClient::builder()
        .build()
        .expect("client should build")
}

#[tokio::test]
#[ignore]
async fn ping_and_server_time() {
    let client = public_client();
    client.market().ping().await.expect("ping should succeed");

    let time = client.market().server_time().await.expect("time should decode");
    assert!(time.timestamp_millis() > 1_577_836_800_000);
}

#[tokio::test]
#[ignore]
async fn depth_has_both_sides() {
    let client = public_client();
    let book = client
        .orderbook()
        .depth("BTCUSDT", Some(5))
        .await
        .expect("depth should decode");

    assert!(!book.bids.is_empty());
    assert!(!book.asks.is_empty());
    assert!(book.spread().expect("both sides present") >= rust_decimal::Decimal::ZERO);
}

#[tokio::test]
#[ignore]
async fn klines_decode_and_validate() {
    let client = public_client();
    let candles = client
        .klines()
        .get("BTCUSDT", Interval::Hours1, None, None, Some(10))
        .await
        .expect("klines should decode");

    assert!(!candles.is_empty());
    for c in &candles {
        assert!(c.low <= c.high);
    }
}

#[tokio::test]
#[ignore]
async fn multi_symbol_mini_tickers() {
    let client = public_client();
    let tickers = client
        .tickers()
        .days_mini(Some(vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()]))
        .await
        .expect("tickers should decode");

    assert_eq!(tickers.len(), 2);
}

#[tokio::test]
async fn signed_endpoint_without_credentials_fails_locally() {
    let client = public_client();
    let err = client.account().info().await.expect_err("must fail without keys");
    assert!(matches!(
        err,
        SdkError::Http(HttpError::Auth(AuthError::MissingCredentials))
    ));
}
