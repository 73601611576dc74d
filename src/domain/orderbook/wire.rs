//! Wire types for order book responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single `[price, qty]` pair as Binance sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WireLevel(pub Decimal, pub Decimal);

/// `GET /api/v3/depth` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepthResponse {
    pub last_update_id: u64,
    pub bids: Vec<WireLevel>,
    pub asks: Vec<WireLevel>,
}
