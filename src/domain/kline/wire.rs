//! Wire types for kline responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One `GET /api/v3/klines` row. The exchange sends a positional array:
///
/// `[openTime, open, high, low, close, volume, closeTime, quoteVolume,
///   trades, takerBuyBaseVolume, takerBuyQuoteVolume, ignore]`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KlineRow(
    pub u64,
    pub Decimal,
    pub Decimal,
    pub Decimal,
    pub Decimal,
    pub Decimal,
    pub u64,
    pub Decimal,
    pub u64,
    pub Decimal,
    pub Decimal,
    pub String,
);
