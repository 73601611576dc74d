//! Conversion: KlineRow → Candlestick (TryFrom + validation).

use super::wire::KlineRow;
use super::Candlestick;
use crate::shared::serde_util::millis_to_datetime;
use crate::shared::{non_negative, ValidationError};

impl TryFrom<KlineRow> for Candlestick {
    type Error = ValidationError;

    fn try_from(row: KlineRow) -> Result<Self, Self::Error> {
        Ok(Candlestick {
            open_time: millis_to_datetime(row.0),
            open: non_negative("open", row.1)?,
            high: non_negative("high", row.2)?,
            low: non_negative("low", row.3)?,
            close: non_negative("close", row.4)?,
            volume: non_negative("volume", row.5)?,
            close_time: millis_to_datetime(row.6),
            quote_volume: non_negative("quoteVolume", row.7)?,
            trades: row.8,
            taker_buy_base_volume: non_negative("takerBuyBaseVolume", row.9)?,
            taker_buy_quote_volume: non_negative("takerBuyQuoteVolume", row.10)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_kline_row_positional_decode() {
        let json = r#"[
            1499040000000, "0.01634790", "0.80000000", "0.01575800",
            "0.01577100", "148976.11427815", 1499644799999, "2434.19055334",
            308, "1756.87402397", "28.46694368", "0"
        ]"#;
        let row: KlineRow = serde_json::from_str(json).unwrap();
        let candle: Candlestick = row.try_into().unwrap();

        assert_eq!(candle.open_time.timestamp_millis(), 1499040000000);
        assert_eq!(candle.open, Decimal::from_str("0.01634790").unwrap());
        assert_eq!(candle.high, Decimal::from_str("0.80000000").unwrap());
        assert_eq!(candle.low, Decimal::from_str("0.01575800").unwrap());
        assert_eq!(candle.close, Decimal::from_str("0.01577100").unwrap());
        assert_eq!(candle.trades, 308);
        assert_eq!(candle.close_time.timestamp_millis(), 1499644799999);
    }

    #[test]
    fn test_empty_kline_array_maps_to_empty_list() {
        let rows: Vec<KlineRow> = serde_json::from_str("[]").unwrap();
        let candles = rows
            .into_iter()
            .map(Candlestick::try_from)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert!(candles.is_empty());
    }

    #[test]
    fn test_negative_high_is_rejected() {
        let row = KlineRow(
            0,
            Decimal::ONE,
            Decimal::from_str("-1").unwrap(),
            Decimal::ONE,
            Decimal::ONE,
            Decimal::ZERO,
            0,
            Decimal::ZERO,
            0,
            Decimal::ZERO,
            Decimal::ZERO,
            "0".to_string(),
        );
        let err = Candlestick::try_from(row).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { field: "high", .. }));
    }
}
