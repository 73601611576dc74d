//! Order domain — spot orders, OCO order lists, cancel-and-replace.

pub mod client;
mod convert;
pub mod request;
pub mod wire;

use crate::shared::{Side, TimeInForce};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use request::{
    CancelReplace, CancelReplaceMode, MarketQuantity, NewOco, NewOrder, OrderKind, OrderLookup,
    StopTrigger,
};

// ─── OrderType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
    LimitMaker,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Limit => "LIMIT",
            OrderType::Market => "MARKET",
            OrderType::StopLoss => "STOP_LOSS",
            OrderType::StopLossLimit => "STOP_LOSS_LIMIT",
            OrderType::TakeProfit => "TAKE_PROFIT",
            OrderType::TakeProfitLimit => "TAKE_PROFIT_LIMIT",
            OrderType::LimitMaker => "LIMIT_MAKER",
        }
    }
}

// ─── OrderStatus ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Canceled,
    PendingCancel,
    Rejected,
    Expired,
    ExpiredInMatch,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A single fill reported with a FULL order response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub price: Decimal,
    pub qty: Decimal,
    pub commission: Decimal,
    pub commission_asset: String,
}

/// A validated order, covering both placement acks and status queries.
///
/// Fields the exchange only sends on one of the two shapes are optional;
/// decimal fields omitted by the exchange default to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub symbol: String,
    pub order_id: i64,
    pub order_list_id: i64,
    pub client_order_id: String,
    pub price: Decimal,
    pub orig_qty: Decimal,
    pub executed_qty: Decimal,
    pub cumulative_quote_qty: Decimal,
    pub status: Option<OrderStatus>,
    pub time_in_force: Option<TimeInForce>,
    pub order_type: Option<OrderType>,
    pub side: Option<Side>,
    pub stop_price: Decimal,
    pub iceberg_qty: Decimal,
    pub transact_time: Option<DateTime<Utc>>,
    pub time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
    pub is_working: Option<bool>,
    pub fills: Vec<Fill>,
}

// ─── OCO ─────────────────────────────────────────────────────────────────────

/// A reference to one leg of an OCO order list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcoOrderRef {
    pub symbol: String,
    pub order_id: i64,
    pub client_order_id: String,
}

/// A validated OCO ("one-cancels-the-other") order list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcoOrderList {
    pub order_list_id: i64,
    pub contingency_type: String,
    pub list_status_type: String,
    pub list_order_status: String,
    pub list_client_order_id: String,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub transaction_time: DateTime<Utc>,
    pub symbol: String,
    pub orders: Vec<OcoOrderRef>,
    pub order_reports: Vec<Order>,
}

// ─── Order-count usage ───────────────────────────────────────────────────────

/// Current order-count usage against one rate-limit bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCountUsage {
    pub rate_limit_type: String,
    pub interval: String,
    pub interval_num: u32,
    pub limit: u32,
    pub count: u32,
}
