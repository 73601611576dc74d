//! High-level client — `BinanceClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::auth::Credentials;
use crate::domain::account::client::Account;
use crate::domain::kline::client::Klines;
use crate::domain::market::client::Market;
use crate::domain::order::client::Orders;
use crate::domain::orderbook::client::Orderbook;
use crate::domain::stream::client::UserStream;
use crate::domain::ticker::client::Tickers;
use crate::domain::trade::client::Trades;
use crate::error::SdkError;
use crate::http::BinanceHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Account as AccountClient;
pub use crate::domain::kline::client::Klines as KlinesClient;
pub use crate::domain::market::client::Market as MarketClient;
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::orderbook::client::Orderbook as OrderbookClient;
pub use crate::domain::stream::client::UserStream as UserStreamClient;
pub use crate::domain::ticker::client::Tickers as TickersClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point for the spot REST SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.market()`, `client.orders()`, etc. Credentials are carried per
/// client instance, never in process-global state, so two clients with
/// different keys can coexist in one process.
pub struct BinanceClient {
    pub(crate) http: BinanceHttp,
}

impl BinanceClient {
    pub fn builder() -> BinanceClientBuilder {
        BinanceClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn market(&self) -> Market<'_> {
        Market { client: self }
    }

    pub fn orderbook(&self) -> Orderbook<'_> {
        Orderbook { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn klines(&self) -> Klines<'_> {
        Klines { client: self }
    }

    pub fn tickers(&self) -> Tickers<'_> {
        Tickers { client: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    pub fn user_stream(&self) -> UserStream<'_> {
        UserStream { client: self }
    }
}

impl Clone for BinanceClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct BinanceClientBuilder {
    base_url: String,
    timeout: Duration,
    recv_window: Option<u64>,
    credentials: Option<Credentials>,
}

impl Default for BinanceClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            recv_window: None,
            credentials: None,
        }
    }
}

impl BinanceClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Whole-request timeout, connect included. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `recvWindow` sent with every signed request, in milliseconds.
    /// The exchange rejects values above 60000.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.recv_window = Some(millis);
        self
    }

    /// Pre-set API credentials on construction. Without them, only public
    /// endpoints are usable.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn build(self) -> Result<BinanceClient, SdkError> {
        Ok(BinanceClient {
            http: BinanceHttp::new(
                &self.base_url,
                self.timeout,
                self.credentials,
                self.recv_window,
            ),
        })
    }
}
