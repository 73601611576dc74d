//! Wire types for ticker responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /api/v3/ticker/price` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceTickerResponse {
    pub symbol: String,
    pub price: Decimal,
}

/// `GET /api/v3/ticker/bookTicker` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookTickerResponse {
    pub symbol: String,
    pub bid_price: Decimal,
    pub bid_qty: Decimal,
    pub ask_price: Decimal,
    pub ask_qty: Decimal,
}

/// `GET /api/v3/avgPrice` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvgPriceResponse {
    /// Averaging window in minutes.
    pub mins: u32,
    pub price: Decimal,
}

/// `GET /api/v3/ticker/24hr` response, `type=FULL`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24hrResponse {
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
    pub open_time: u64,
    pub close_time: u64,
    pub first_id: i64,
    pub last_id: i64,
    pub count: u64,
}

/// `GET /api/v3/ticker/24hr` response, `type=MINI`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MiniTicker24hrResponse {
    pub symbol: String,
    pub open_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub last_price: Decimal,
    pub volume: Decimal,
    pub quote_volume: Decimal,
    pub open_time: u64,
    pub close_time: u64,
    pub first_id: i64,
    pub last_id: i64,
    pub count: u64,
}
