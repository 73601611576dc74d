//! Wire types for order responses (REST).

use super::{OrderStatus, OrderType};
use crate::shared::{Side, TimeInForce};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fill inside a FULL order response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FillResponse {
    pub price: Decimal,
    pub qty: Decimal,
    pub commission: Decimal,
    pub commission_asset: String,
}

/// `POST /api/v3/order` ack and `DELETE /api/v3/order` response.
///
/// The exchange omits most fields on an ACK-type response, so everything past
/// the identifiers is optional. Note the `cummulativeQuoteQty` spelling: that
/// is the wire name, typo included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub symbol: String,
    pub order_id: i64,
    #[serde(default = "default_order_list_id")]
    pub order_list_id: i64,
    pub client_order_id: String,
    #[serde(default)]
    pub orig_client_order_id: Option<String>,
    #[serde(default)]
    pub transact_time: Option<u64>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub orig_qty: Option<Decimal>,
    #[serde(default)]
    pub executed_qty: Option<Decimal>,
    #[serde(default, rename = "cummulativeQuoteQty")]
    pub cumulative_quote_qty: Option<Decimal>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default, rename = "type")]
    pub order_type: Option<OrderType>,
    #[serde(default)]
    pub side: Option<Side>,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    #[serde(default)]
    pub iceberg_qty: Option<Decimal>,
    #[serde(default)]
    pub fills: Vec<FillResponse>,
}

/// `GET /api/v3/order`, `GET /api/v3/openOrders`, `GET /api/v3/allOrders`
/// element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub symbol: String,
    pub order_id: i64,
    #[serde(default = "default_order_list_id")]
    pub order_list_id: i64,
    pub client_order_id: String,
    pub price: Decimal,
    pub orig_qty: Decimal,
    pub executed_qty: Decimal,
    #[serde(rename = "cummulativeQuoteQty")]
    pub cumulative_quote_qty: Decimal,
    pub status: OrderStatus,
    pub time_in_force: TimeInForce,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: Side,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    #[serde(default)]
    pub iceberg_qty: Option<Decimal>,
    pub time: u64,
    pub update_time: u64,
    pub is_working: bool,
}

/// `POST /api/v3/order/cancelReplace` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelReplaceResponse {
    pub cancel_result: String,
    pub new_order_result: String,
    #[serde(default)]
    pub cancel_response: Option<OrderResponse>,
    #[serde(default)]
    pub new_order_response: Option<OrderResponse>,
}

/// One leg reference inside an OCO response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OcoOrderRefResponse {
    pub symbol: String,
    pub order_id: i64,
    pub client_order_id: String,
}

/// OCO order-list response, shared by create/cancel/query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OcoResponse {
    pub order_list_id: i64,
    pub contingency_type: String,
    pub list_status_type: String,
    pub list_order_status: String,
    pub list_client_order_id: String,
    pub transaction_time: u64,
    pub symbol: String,
    pub orders: Vec<OcoOrderRefResponse>,
    #[serde(default)]
    pub order_reports: Vec<OrderResponse>,
}

/// `GET /api/v3/rateLimit/order` element.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderCountUsageResponse {
    pub rate_limit_type: String,
    pub interval: String,
    pub interval_num: u32,
    pub limit: u32,
    pub count: u32,
}

fn default_order_list_id() -> i64 {
    -1
}
