//! Low-level HTTP client — `BinanceHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Each call is fire-once: no retries, no
//! backoff; failures surface to the caller directly.

use crate::auth::{self, Credentials};
use crate::domain::account::wire::{AccountResponse, SnapshotResponse};
use crate::domain::kline::wire::KlineRow;
use crate::domain::market::wire::{ExchangeInfoResponse, ServerTimeResponse};
use crate::domain::order::wire::{
    CancelReplaceResponse, OcoResponse, OrderCountUsageResponse, OrderDetailResponse,
    OrderResponse,
};
use crate::domain::orderbook::wire::DepthResponse;
use crate::domain::stream::wire::ListenKeyResponse;
use crate::domain::ticker::wire::{
    AvgPriceResponse, BookTickerResponse, MiniTicker24hrResponse, PriceTickerResponse,
    Ticker24hrResponse,
};
use crate::domain::trade::wire::{AggTradeResponse, MyTradeResponse, TradeResponse};
use crate::error::{AuthError, HttpError};
use crate::http::query::Params;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Authentication level an endpoint requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Security {
    /// Public market data — no key, no signature.
    None,
    /// API key header only (historical trades, user data streams).
    ApiKey,
    /// API key header + `timestamp` + HMAC `signature` parameters.
    Signed,
}

/// Low-level HTTP client for the Binance spot REST API.
pub struct BinanceHttp {
    base_url: String,
    client: Client,
    credentials: Option<Credentials>,
    recv_window: Option<u64>,
}

impl BinanceHttp {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        credentials: Option<Credentials>,
        recv_window: Option<u64>,
    ) -> Self {
        let builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            credentials,
            recv_window,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── General ──────────────────────────────────────────────────────────

    pub async fn ping(&self) -> Result<(), HttpError> {
        self.send_text(Method::GET, "/api/v3/ping", Params::new(), Security::None)
            .await
            .map(|_| ())
    }

    pub async fn server_time(&self) -> Result<ServerTimeResponse, HttpError> {
        self.get("/api/v3/time", Params::new(), Security::None).await
    }

    pub async fn exchange_info(
        &self,
        symbols: Option<Vec<String>>,
    ) -> Result<ExchangeInfoResponse, HttpError> {
        let params = Params::new().with_opt("symbols", symbols);
        self.get("/api/v3/exchangeInfo", params, Security::None).await
    }

    // ── Order book ───────────────────────────────────────────────────────

    pub async fn depth(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<DepthResponse, HttpError> {
        let params = Params::new().with("symbol", symbol).with_opt("limit", limit);
        self.get("/api/v3/depth", params, Security::None).await
    }

    // ── Trades ───────────────────────────────────────────────────────────

    pub async fn recent_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<Vec<TradeResponse>, HttpError> {
        let params = Params::new().with("symbol", symbol).with_opt("limit", limit);
        self.get("/api/v3/trades", params, Security::None).await
    }

    pub async fn historical_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
    ) -> Result<Vec<TradeResponse>, HttpError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("limit", limit)
            .with_opt("fromId", from_id);
        self.get("/api/v3/historicalTrades", params, Security::ApiKey)
            .await
    }

    pub async fn agg_trades(
        &self,
        symbol: &str,
        extra: Params,
    ) -> Result<Vec<AggTradeResponse>, HttpError> {
        let params = Params::new().with("symbol", symbol).merged(extra);
        self.get("/api/v3/aggTrades", params, Security::None).await
    }

    pub async fn my_trades(&self, params: Params) -> Result<Vec<MyTradeResponse>, HttpError> {
        self.get("/api/v3/myTrades", params, Security::Signed).await
    }

    // ── Klines ───────────────────────────────────────────────────────────

    pub async fn klines(
        &self,
        symbol: &str,
        interval: &str,
        extra: Params,
    ) -> Result<Vec<KlineRow>, HttpError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("interval", interval)
            .merged(extra);
        self.get("/api/v3/klines", params, Security::None).await
    }

    pub async fn avg_price(&self, symbol: &str) -> Result<AvgPriceResponse, HttpError> {
        let params = Params::new().with("symbol", symbol);
        self.get("/api/v3/avgPrice", params, Security::None).await
    }

    // ── Tickers ──────────────────────────────────────────────────────────

    pub async fn price_ticker(&self, symbol: &str) -> Result<PriceTickerResponse, HttpError> {
        let params = Params::new().with("symbol", symbol);
        self.get("/api/v3/ticker/price", params, Security::None).await
    }

    pub async fn price_tickers(
        &self,
        symbols: Option<Vec<String>>,
    ) -> Result<Vec<PriceTickerResponse>, HttpError> {
        let params = Params::new().with_opt("symbols", symbols);
        self.get("/api/v3/ticker/price", params, Security::None).await
    }

    pub async fn book_ticker(&self, symbol: &str) -> Result<BookTickerResponse, HttpError> {
        let params = Params::new().with("symbol", symbol);
        self.get("/api/v3/ticker/bookTicker", params, Security::None)
            .await
    }

    pub async fn book_tickers(
        &self,
        symbols: Option<Vec<String>>,
    ) -> Result<Vec<BookTickerResponse>, HttpError> {
        let params = Params::new().with_opt("symbols", symbols);
        self.get("/api/v3/ticker/bookTicker", params, Security::None)
            .await
    }

    pub async fn ticker_24hr(&self, symbol: &str) -> Result<Ticker24hrResponse, HttpError> {
        let params = Params::new().with("symbol", symbol).with("type", "FULL");
        self.get("/api/v3/ticker/24hr", params, Security::None).await
    }

    pub async fn ticker_24hr_mini(
        &self,
        symbol: &str,
    ) -> Result<MiniTicker24hrResponse, HttpError> {
        let params = Params::new().with("symbol", symbol).with("type", "MINI");
        self.get("/api/v3/ticker/24hr", params, Security::None).await
    }

    /// `type` is pushed before `symbols` so the encoded query reads
    /// `?type=FULL&symbols=[...]`, matching the documented call shape.
    pub async fn tickers_24hr(
        &self,
        symbols: Option<Vec<String>>,
    ) -> Result<Vec<Ticker24hrResponse>, HttpError> {
        let params = Params::new().with("type", "FULL").with_opt("symbols", symbols);
        self.get("/api/v3/ticker/24hr", params, Security::None).await
    }

    pub async fn tickers_24hr_mini(
        &self,
        symbols: Option<Vec<String>>,
    ) -> Result<Vec<MiniTicker24hrResponse>, HttpError> {
        let params = Params::new().with("type", "MINI").with_opt("symbols", symbols);
        self.get("/api/v3/ticker/24hr", params, Security::None).await
    }

    // ── Orders ───────────────────────────────────────────────────────────

    pub async fn place_order(&self, params: Params) -> Result<OrderResponse, HttpError> {
        self.post("/api/v3/order", params, Security::Signed).await
    }

    pub async fn test_order(&self, params: Params) -> Result<(), HttpError> {
        self.send_text(Method::POST, "/api/v3/order/test", params, Security::Signed)
            .await
            .map(|_| ())
    }

    pub async fn get_order(&self, params: Params) -> Result<OrderDetailResponse, HttpError> {
        self.get("/api/v3/order", params, Security::Signed).await
    }

    pub async fn cancel_order(&self, params: Params) -> Result<OrderResponse, HttpError> {
        self.delete("/api/v3/order", params, Security::Signed).await
    }

    /// Cancels every open order (including OCO legs) on a symbol. The response
    /// mixes plain order objects with order-list objects, so it stays generic.
    pub async fn cancel_open_orders(
        &self,
        symbol: &str,
    ) -> Result<serde_json::Value, HttpError> {
        let params = Params::new().with("symbol", symbol);
        self.delete("/api/v3/openOrders", params, Security::Signed)
            .await
    }

    pub async fn open_orders(
        &self,
        symbol: Option<&str>,
    ) -> Result<Vec<OrderDetailResponse>, HttpError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.get("/api/v3/openOrders", params, Security::Signed).await
    }

    pub async fn all_orders(
        &self,
        params: Params,
    ) -> Result<Vec<OrderDetailResponse>, HttpError> {
        self.get("/api/v3/allOrders", params, Security::Signed).await
    }

    pub async fn cancel_replace(
        &self,
        params: Params,
    ) -> Result<CancelReplaceResponse, HttpError> {
        self.post("/api/v3/order/cancelReplace", params, Security::Signed)
            .await
    }

    // ── OCO order lists ──────────────────────────────────────────────────

    pub async fn new_oco(&self, params: Params) -> Result<OcoResponse, HttpError> {
        self.post("/api/v3/order/oco", params, Security::Signed).await
    }

    pub async fn cancel_oco(&self, params: Params) -> Result<OcoResponse, HttpError> {
        self.delete("/api/v3/orderList", params, Security::Signed).await
    }

    pub async fn get_oco(&self, params: Params) -> Result<OcoResponse, HttpError> {
        self.get("/api/v3/orderList", params, Security::Signed).await
    }

    pub async fn open_ocos(&self) -> Result<Vec<OcoResponse>, HttpError> {
        self.get("/api/v3/openOrderList", params_none(), Security::Signed)
            .await
    }

    pub async fn all_ocos(&self, params: Params) -> Result<Vec<OcoResponse>, HttpError> {
        self.get("/api/v3/allOrderList", params, Security::Signed).await
    }

    pub async fn order_count_usage(&self) -> Result<Vec<OrderCountUsageResponse>, HttpError> {
        self.get("/api/v3/rateLimit/order", params_none(), Security::Signed)
            .await
    }

    // ── Account ──────────────────────────────────────────────────────────

    pub async fn account(&self) -> Result<AccountResponse, HttpError> {
        self.get("/api/v3/account", params_none(), Security::Signed).await
    }

    pub async fn account_snapshot(
        &self,
        snapshot_type: &str,
        extra: Params,
    ) -> Result<SnapshotResponse, HttpError> {
        let params = Params::new().with("type", snapshot_type).merged(extra);
        self.get("/sapi/v1/accountSnapshot", params, Security::Signed)
            .await
    }

    // ── User data stream ─────────────────────────────────────────────────

    pub async fn create_listen_key(&self) -> Result<ListenKeyResponse, HttpError> {
        self.post("/api/v3/userDataStream", params_none(), Security::ApiKey)
            .await
    }

    pub async fn keepalive_listen_key(&self, listen_key: &str) -> Result<(), HttpError> {
        let params = Params::new().with("listenKey", listen_key);
        self.send_text(Method::PUT, "/api/v3/userDataStream", params, Security::ApiKey)
            .await
            .map(|_| ())
    }

    pub async fn close_listen_key(&self, listen_key: &str) -> Result<(), HttpError> {
        let params = Params::new().with("listenKey", listen_key);
        self.send_text(
            Method::DELETE,
            "/api/v3/userDataStream",
            params,
            Security::ApiKey,
        )
        .await
        .map(|_| ())
    }

    // ── Generic shapes ───────────────────────────────────────────────────

    /// Issue a request and return the raw body text.
    pub async fn send_text(
        &self,
        method: Method,
        path: &str,
        params: Params,
        security: Security,
    ) -> Result<String, HttpError> {
        self.do_request(method, path, params, security).await
    }

    /// Issue a request and parse the body as a generic JSON tree.
    pub async fn send_value(
        &self,
        method: Method,
        path: &str,
        params: Params,
        security: Security,
    ) -> Result<serde_json::Value, HttpError> {
        let text = self.do_request(method, path, params, security).await?;
        Ok(serde_json::from_str(&text)?)
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        security: Security,
    ) -> Result<T, HttpError> {
        self.request_typed(Method::GET, path, params, security).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        security: Security,
    ) -> Result<T, HttpError> {
        self.request_typed(Method::POST, path, params, security).await
    }

    async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        security: Security,
    ) -> Result<T, HttpError> {
        self.request_typed(Method::DELETE, path, params, security).await
    }

    async fn request_typed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Params,
        security: Security,
    ) -> Result<T, HttpError> {
        let text = self.do_request(method, path, params, security).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Builds the query (signing it when required), issues the request once,
    /// and maps every non-2xx response to [`HttpError::Api`].
    async fn do_request(
        &self,
        method: Method,
        path: &str,
        params: Params,
        security: Security,
    ) -> Result<String, HttpError> {
        let query = self.build_query(params, security)?;
        let url = if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query)
        };

        tracing::debug!(%method, path, "sending request");

        let mut req = self.client.request(method, &url);
        if !matches!(security, Security::None) {
            let creds = self
                .credentials
                .as_ref()
                .ok_or(AuthError::MissingCredentials)?;
            req = req.header(API_KEY_HEADER, creds.api_key());
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;

        let status = resp.status();
        let body = resp.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let (code, message) = parse_error_body(&body);
        tracing::debug!(status = status.as_u16(), code, "request failed");
        Err(HttpError::Api {
            status: status.as_u16(),
            code,
            message: message.unwrap_or_else(|| body.clone()),
            body,
        })
    }

    fn build_query(&self, params: Params, security: Security) -> Result<String, HttpError> {
        let mut query = params.encode();
        if matches!(security, Security::Signed) {
            let creds = self
                .credentials
                .as_ref()
                .ok_or(AuthError::MissingCredentials)?;

            let mut tail = Params::new()
                .with_opt("recvWindow", self.recv_window)
                .with("timestamp", auth::timestamp_millis());
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(&tail.encode());

            // Signature covers the exact bytes before it and goes last.
            let signature = creds.sign(&query).map_err(HttpError::Auth)?;
            tail = Params::new().with("signature", signature);
            query.push('&');
            query.push_str(&tail.encode());
        }
        Ok(query)
    }
}

impl Clone for BinanceHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            credentials: self.credentials.clone(),
            recv_window: self.recv_window,
        }
    }
}

fn params_none() -> Params {
    Params::new()
}

/// Pulls `code`/`msg` out of a Binance error body, when it is one.
fn parse_error_body(body: &str) -> (Option<i64>, Option<String>) {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        code: Option<i64>,
        msg: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => (parsed.code, parsed.msg),
        Err(_) => (None, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body_binance_shape() {
        let (code, msg) = parse_error_body(r#"{"code":-1121,"msg":"Invalid symbol."}"#);
        assert_eq!(code, Some(-1121));
        assert_eq!(msg.as_deref(), Some("Invalid symbol."));
    }

    #[test]
    fn test_parse_error_body_non_json() {
        let (code, msg) = parse_error_body("<html>502 Bad Gateway</html>");
        assert_eq!(code, None);
        assert_eq!(msg, None);
    }

    #[test]
    fn test_build_query_unsigned_passthrough() {
        let http = BinanceHttp::new(
            "https://api.binance.com",
            std::time::Duration::from_secs(5),
            None,
            None,
        );
        let params = Params::new().with("symbol", "BTCUSDT").with("limit", 10u32);
        let query = http.build_query(params, Security::None).unwrap();
        assert_eq!(query, "symbol=BTCUSDT&limit=10");
    }

    #[test]
    fn test_build_query_signed_appends_signature_last() {
        let creds = crate::auth::Credentials::new("k", "s");
        let http = BinanceHttp::new(
            "https://api.binance.com",
            std::time::Duration::from_secs(5),
            Some(creds.clone()),
            Some(5000),
        );
        let params = Params::new().with("symbol", "LTCBTC");
        let query = http.build_query(params, Security::Signed).unwrap();

        // symbol, then recvWindow, then timestamp, then signature.
        assert!(query.starts_with("symbol=LTCBTC&recvWindow=5000&timestamp="));
        let (payload, signature) = query
            .rsplit_once("&signature=")
            .expect("signature present");
        assert_eq!(creds.sign(payload).unwrap(), signature);
    }

    #[test]
    fn test_build_query_signed_without_credentials_fails() {
        let http = BinanceHttp::new(
            "https://api.binance.com",
            std::time::Duration::from_secs(5),
            None,
            None,
        );
        let err = http.build_query(Params::new(), Security::Signed).unwrap_err();
        assert!(matches!(err, HttpError::Auth(_)));
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let http = BinanceHttp::new(
            "https://api.binance.com/",
            std::time::Duration::from_secs(5),
            None,
            None,
        );
        assert_eq!(http.base_url(), "https://api.binance.com");
    }
}
