//! Kline domain — candlesticks, average price, and the symbol forecast helper.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Interval ────────────────────────────────────────────────────────────────

/// Candlestick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1s")]
    Seconds1,
    #[serde(rename = "1m")]
    Minutes1,
    #[serde(rename = "3m")]
    Minutes3,
    #[serde(rename = "5m")]
    Minutes5,
    #[serde(rename = "15m")]
    Minutes15,
    #[serde(rename = "30m")]
    Minutes30,
    #[serde(rename = "1h")]
    Hours1,
    #[serde(rename = "2h")]
    Hours2,
    #[serde(rename = "4h")]
    Hours4,
    #[serde(rename = "6h")]
    Hours6,
    #[serde(rename = "8h")]
    Hours8,
    #[serde(rename = "12h")]
    Hours12,
    #[serde(rename = "1d")]
    Days1,
    #[serde(rename = "3d")]
    Days3,
    #[serde(rename = "1w")]
    Weeks1,
    #[serde(rename = "1M")]
    Months1,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Seconds1 => "1s",
            Interval::Minutes1 => "1m",
            Interval::Minutes3 => "3m",
            Interval::Minutes5 => "5m",
            Interval::Minutes15 => "15m",
            Interval::Minutes30 => "30m",
            Interval::Hours1 => "1h",
            Interval::Hours2 => "2h",
            Interval::Hours4 => "4h",
            Interval::Hours6 => "6h",
            Interval::Hours8 => "8h",
            Interval::Hours12 => "12h",
            Interval::Days1 => "1d",
            Interval::Days3 => "3d",
            Interval::Weeks1 => "1w",
            Interval::Months1 => "1M",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Candlestick ─────────────────────────────────────────────────────────────

/// A validated candlestick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candlestick {
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub open_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    #[serde(with = "crate::shared::serde_util::timestamp_ms")]
    pub close_time: DateTime<Utc>,
    pub quote_volume: Decimal,
    pub trades: u64,
    pub taker_buy_base_volume: Decimal,
    pub taker_buy_quote_volume: Decimal,
}

// ─── Forecast ────────────────────────────────────────────────────────────────

/// Mean percent offset of `highs` from `reference`, restricted to highs whose
/// offset magnitude stays within `tolerance` percent.
///
/// Returns `None` when `reference` is not positive or no high falls inside the
/// tolerance band.
pub fn trend_percent(highs: &[Decimal], reference: Decimal, tolerance: Decimal) -> Option<Decimal> {
    if reference <= Decimal::ZERO {
        return None;
    }

    let hundred = Decimal::ONE_HUNDRED;
    let mut sum = Decimal::ZERO;
    let mut count: i64 = 0;
    for high in highs {
        let offset = (high - reference) * hundred / reference;
        if offset.abs() <= tolerance {
            sum += offset;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    Some(sum / Decimal::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_trend_percent_mean_of_offsets() {
        // Highs at +10% and -10% of the reference average out to zero.
        let highs = vec![dec("110"), dec("90")];
        let trend = trend_percent(&highs, dec("100"), dec("50")).unwrap();
        assert_eq!(trend, Decimal::ZERO);
    }

    #[test]
    fn test_trend_percent_filters_by_tolerance() {
        // The +100% outlier falls outside a 20% band; only +10% remains.
        let highs = vec![dec("110"), dec("200")];
        let trend = trend_percent(&highs, dec("100"), dec("20")).unwrap();
        assert_eq!(trend, dec("10"));
    }

    #[test]
    fn test_trend_percent_empty_band() {
        let highs = vec![dec("200")];
        assert_eq!(trend_percent(&highs, dec("100"), dec("20")), None);
        assert_eq!(trend_percent(&[], dec("100"), dec("20")), None);
    }

    #[test]
    fn test_trend_percent_zero_reference() {
        assert_eq!(trend_percent(&[dec("1")], Decimal::ZERO, dec("20")), None);
    }

    #[test]
    fn test_interval_wire_names() {
        assert_eq!(Interval::Minutes1.as_str(), "1m");
        assert_eq!(Interval::Months1.as_str(), "1M");
        assert_eq!(serde_json::to_string(&Interval::Hours4).unwrap(), "\"4h\"");
    }
}
