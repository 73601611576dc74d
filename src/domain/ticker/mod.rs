//! Ticker domain — price, book and 24hr rolling-window tickers.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest price for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTicker {
    pub symbol: String,
    pub price: Decimal,
}

/// Best bid/ask for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookTicker {
    pub symbol: String,
    pub bid_price: Decimal,
    pub bid_qty: Decimal,
    pub ask_price: Decimal,
    pub ask_qty: Decimal,
}

/// 24hr rolling-window statistics, FULL shape.
///
/// `price_change` and `price_change_percent` are deltas and may be negative;
/// every other numeric field is validated non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker24hr {
    pub symbol: String,
    pub price_change: Decimal,
    pub price_change_percent: Decimal,
    pub weighted_avg_price: Decimal,
    pub prev_close_price: Decimal,
    pub last_price: Decimal,
    pub last_qty: Decimal,
    pub bid_price: Decimal,
    pub bid_qty: Decimal,
    pub ask_price: Decimal,
    pub ask_qty: Decimal,
    pub open_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub volume: Decimal,
    pub quote_volume: Decimal,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub open_time: DateTime<Utc>,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub close_time: DateTime<Utc>,
    /// First trade id in the window; `-1` when there were no trades.
    pub first_id: i64,
    pub last_id: i64,
    pub count: u64,
}

/// 24hr rolling-window statistics, MINI shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniTicker24hr {
    pub symbol: String,
    pub open_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub last_price: Decimal,
    pub volume: Decimal,
    pub quote_volume: Decimal,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub open_time: DateTime<Utc>,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub close_time: DateTime<Utc>,
    pub first_id: i64,
    pub last_id: i64,
    pub count: u64,
}
