//! Account domain — account information, balances, daily snapshots.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Balance ─────────────────────────────────────────────────────────────────

/// One asset's spot balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub asset: String,
    pub free: Decimal,
    pub locked: Decimal,
}

impl Balance {
    /// `free` rounded to `dp` decimal places, scale preserved (1.5 at 2 dp
    /// renders as `1.50`).
    pub fn free_rounded(&self, dp: u32) -> Decimal {
        round_to(self.free, dp)
    }

    /// `locked` rounded to `dp` decimal places, scale preserved.
    pub fn locked_rounded(&self, dp: u32) -> Decimal {
        round_to(self.locked, dp)
    }

    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}

fn round_to(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp(dp);
    rounded.rescale(dp);
    rounded
}

// ─── Account information ─────────────────────────────────────────────────────

/// `GET /api/v3/account` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInformation {
    /// Commission rates in basis points.
    pub maker_commission: u32,
    pub taker_commission: u32,
    pub buyer_commission: u32,
    pub seller_commission: u32,
    pub can_trade: bool,
    pub can_withdraw: bool,
    pub can_deposit: bool,
    pub brokered: bool,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub update_time: DateTime<Utc>,
    pub account_type: String,
    pub balances: Vec<Balance>,
    pub permissions: Vec<String>,
}

// ─── Account snapshot ────────────────────────────────────────────────────────

/// Which wallet a daily snapshot covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotType {
    Spot,
    Margin,
    Futures,
}

impl SnapshotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotType::Spot => "SPOT",
            SnapshotType::Margin => "MARGIN",
            SnapshotType::Futures => "FUTURES",
        }
    }
}

/// One daily snapshot row, discriminated by wallet type.
///
/// The exchange tags each row with a lowercase `type` string; decoding is a
/// discriminated parse into these variants, never a cast.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountSnapshot {
    Spot(SpotSnapshot),
    Margin(MarginSnapshot),
    Futures(FuturesSnapshot),
}

impl AccountSnapshot {
    pub fn update_time(&self) -> DateTime<Utc> {
        match self {
            AccountSnapshot::Spot(s) => s.update_time,
            AccountSnapshot::Margin(s) => s.update_time,
            AccountSnapshot::Futures(s) => s.update_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpotSnapshot {
    pub update_time: DateTime<Utc>,
    pub total_asset_of_btc: Decimal,
    pub balances: Vec<Balance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarginSnapshot {
    pub update_time: DateTime<Utc>,
    pub margin_level: Decimal,
    pub total_asset_of_btc: Decimal,
    pub total_liability_of_btc: Decimal,
    pub total_net_asset_of_btc: Decimal,
    pub user_assets: Vec<MarginAsset>,
}

/// A margin-wallet asset row. `net_asset` is free + interest - borrowed and
/// may be negative.
#[derive(Debug, Clone, PartialEq)]
pub struct MarginAsset {
    pub asset: String,
    pub borrowed: Decimal,
    pub free: Decimal,
    pub interest: Decimal,
    pub locked: Decimal,
    pub net_asset: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuturesSnapshot {
    pub update_time: DateTime<Utc>,
    pub assets: Vec<FuturesAsset>,
    pub positions: Vec<FuturesPosition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuturesAsset {
    pub asset: String,
    pub margin_balance: Decimal,
    pub wallet_balance: Decimal,
}

/// A futures position row. `position_amt` is signed (negative for shorts) and
/// `unrealized_profit` is a delta; neither is range-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct FuturesPosition {
    pub symbol: String,
    pub entry_price: Decimal,
    pub mark_price: Decimal,
    pub position_amt: Decimal,
    pub unrealized_profit: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_free_rounded_pads_scale() {
        let balance = Balance {
            asset: "BTC".to_string(),
            free: Decimal::from_str("1.5").unwrap(),
            locked: Decimal::from_str("0.5").unwrap(),
        };
        assert_eq!(balance.free_rounded(2).to_string(), "1.50");
        assert_eq!(balance.locked_rounded(2).to_string(), "0.50");
    }

    #[test]
    fn test_free_rounded_truncates() {
        let balance = Balance {
            asset: "BTC".to_string(),
            free: Decimal::from_str("1.005").unwrap(),
            locked: Decimal::ZERO,
        };
        // Banker's rounding at the midpoint.
        assert_eq!(balance.free_rounded(2).to_string(), "1.00");
    }

    #[test]
    fn test_total() {
        let balance = Balance {
            asset: "BTC".to_string(),
            free: Decimal::from_str("1.5").unwrap(),
            locked: Decimal::from_str("0.5").unwrap(),
        };
        assert_eq!(balance.total(), Decimal::from_str("2.0").unwrap());
    }
}
