//! Wire types for trade responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /api/v3/trades` / `GET /api/v3/historicalTrades` element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub id: u64,
    pub price: Decimal,
    pub qty: Decimal,
    pub quote_qty: Decimal,
    pub time: u64,
    pub is_buyer_maker: bool,
    #[serde(default)]
    pub is_best_match: bool,
}

/// `GET /api/v3/aggTrades` element. The exchange uses single-letter keys here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggTradeResponse {
    #[serde(rename = "a")]
    pub agg_trade_id: u64,
    #[serde(rename = "p")]
    pub price: Decimal,
    #[serde(rename = "q")]
    pub qty: Decimal,
    #[serde(rename = "f")]
    pub first_trade_id: u64,
    #[serde(rename = "l")]
    pub last_trade_id: u64,
    #[serde(rename = "T")]
    pub time: u64,
    #[serde(rename = "m")]
    pub is_buyer_maker: bool,
    #[serde(rename = "M", default)]
    pub is_best_match: bool,
}

/// `GET /api/v3/myTrades` element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MyTradeResponse {
    pub symbol: String,
    pub id: u64,
    pub order_id: i64,
    pub order_list_id: i64,
    pub price: Decimal,
    pub qty: Decimal,
    pub quote_qty: Decimal,
    pub commission: Decimal,
    pub commission_asset: String,
    pub time: u64,
    pub is_buyer: bool,
    pub is_maker: bool,
    #[serde(default)]
    pub is_best_match: bool,
}
