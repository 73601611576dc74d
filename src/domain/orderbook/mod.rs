//! Order book domain — depth snapshots.

pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single price level. Side is implicit from which list it sits in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: Decimal,
    pub qty: Decimal,
}

/// A validated order book depth snapshot.
///
/// Bids are ordered best (highest) first, asks best (lowest) first, as served
/// by the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub last_update_id: u64,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<&BookLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&BookLevel> {
        self.asks.first()
    }

    /// Best-ask price minus best-bid price, when both sides have depth.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.price - bid.price),
            _ => None,
        }
    }
}
