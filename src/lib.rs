//! # Binance Spot SDK
//!
//! A typed Rust client for the Binance spot REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared types, domain models, validation
//! 2. **Auth** — API credentials and HMAC-SHA256 request signing
//! 3. **HTTP API** — `BinanceHttp`: one method per endpoint, wire types out
//! 4. **High-Level Client** — `BinanceClient` with nested sub-clients
//!    returning validated domain types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use binance_spot_sdk::prelude::*;
//!
//! let client = BinanceClient::builder()
//!     .credentials(Credentials::new("api_key", "secret_key"))
//!     .build()?;
//!
//! let book = client.orderbook().depth("BTCUSDT", Some(10)).await?;
//! let account = client.account().info().await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, client.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// API credentials and request signing.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client and query-parameter encoding.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `BinanceClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Side, TimeInForce};

    // Domain types — market data
    pub use crate::domain::kline::{Candlestick, Interval};
    pub use crate::domain::market::{ExchangeInfo, SymbolInfo};
    pub use crate::domain::orderbook::{BookLevel, OrderBook};
    pub use crate::domain::ticker::{BookTicker, MiniTicker24hr, PriceTicker, Ticker24hr};
    pub use crate::domain::trade::{AccountTrade, AggTrade, Trade};

    // Domain types — orders
    pub use crate::domain::order::{
        CancelReplace, CancelReplaceMode, Fill, MarketQuantity, NewOco, NewOrder, OcoOrderList,
        Order, OrderCountUsage, OrderKind, OrderLookup, OrderStatus, OrderType, StopTrigger,
    };
    pub use crate::domain::order::client::CancelReplaceResult;

    // Domain types — account
    pub use crate::domain::account::{
        AccountInformation, AccountSnapshot, Balance, SnapshotType,
    };

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, TESTNET_API_URL};

    // Auth
    pub use crate::auth::Credentials;

    // HTTP client + sub-clients
    pub use crate::client::{
        AccountClient, BinanceClient, BinanceClientBuilder, KlinesClient, MarketClient,
        OrderbookClient, OrdersClient, TickersClient, TradesClient, UserStreamClient,
    };
    pub use crate::http::{BinanceHttp, Params, Security};
}
