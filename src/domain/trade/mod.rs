//! Trade domain — public trade history and the account trade list.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A public trade from the symbol's trade history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: u64,
    pub price: Decimal,
    pub qty: Decimal,
    pub quote_qty: Decimal,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub time: DateTime<Utc>,
    pub is_buyer_maker: bool,
    pub is_best_match: bool,
}

/// An aggregate trade: one or more fills at the same price from the same
/// taker order, compacted by the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggTrade {
    pub id: u64,
    pub price: Decimal,
    pub qty: Decimal,
    pub first_trade_id: u64,
    pub last_trade_id: u64,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub time: DateTime<Utc>,
    pub is_buyer_maker: bool,
    pub is_best_match: bool,
}

/// A fill belonging to the authenticated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTrade {
    pub symbol: String,
    pub id: u64,
    pub order_id: i64,
    pub order_list_id: i64,
    pub price: Decimal,
    pub qty: Decimal,
    pub quote_qty: Decimal,
    pub commission: Decimal,
    pub commission_asset: String,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub time: DateTime<Utc>,
    pub is_buyer: bool,
    pub is_maker: bool,
    pub is_best_match: bool,
}
