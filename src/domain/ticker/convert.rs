//! Conversions: ticker wire types → ticker domain types.

use super::wire::{
    BookTickerResponse, MiniTicker24hrResponse, PriceTickerResponse, Ticker24hrResponse,
};
use super::{BookTicker, MiniTicker24hr, PriceTicker, Ticker24hr};
use crate::shared::serde_util::millis_to_datetime;
use crate::shared::{non_negative, ValidationError};

impl TryFrom<PriceTickerResponse> for PriceTicker {
    type Error = ValidationError;

    fn try_from(t: PriceTickerResponse) -> Result<Self, Self::Error> {
        Ok(PriceTicker {
            symbol: t.symbol,
            price: non_negative("price", t.price)?,
        })
    }
}

impl TryFrom<BookTickerResponse> for BookTicker {
    type Error = ValidationError;

    fn try_from(t: BookTickerResponse) -> Result<Self, Self::Error> {
        Ok(BookTicker {
            symbol: t.symbol,
            bid_price: non_negative("bidPrice", t.bid_price)?,
            bid_qty: non_negative("bidQty", t.bid_qty)?,
            ask_price: non_negative("askPrice", t.ask_price)?,
            ask_qty: non_negative("askQty", t.ask_qty)?,
        })
    }
}

impl TryFrom<Ticker24hrResponse> for Ticker24hr {
    type Error = ValidationError;

    fn try_from(t: Ticker24hrResponse) -> Result<Self, Self::Error> {
        Ok(Ticker24hr {
            symbol: t.symbol,
            // Deltas: legitimately negative on a down day.
            price_change: t.price_change,
            price_change_percent: t.price_change_percent,
            weighted_avg_price: non_negative("weightedAvgPrice", t.weighted_avg_price)?,
            prev_close_price: non_negative("prevClosePrice", t.prev_close_price)?,
            last_price: non_negative("lastPrice", t.last_price)?,
            last_qty: non_negative("lastQty", t.last_qty)?,
            bid_price: non_negative("bidPrice", t.bid_price)?,
            bid_qty: non_negative("bidQty", t.bid_qty)?,
            ask_price: non_negative("askPrice", t.ask_price)?,
            ask_qty: non_negative("askQty", t.ask_qty)?,
            open_price: non_negative("openPrice", t.open_price)?,
            high_price: non_negative("highPrice", t.high_price)?,
            low_price: non_negative("lowPrice", t.low_price)?,
            volume: non_negative("volume", t.volume)?,
            quote_volume: non_negative("quoteVolume", t.quote_volume)?,
            open_time: millis_to_datetime(t.open_time),
            close_time: millis_to_datetime(t.close_time),
            first_id: t.first_id,
            last_id: t.last_id,
            count: t.count,
        })
    }
}

impl TryFrom<MiniTicker24hrResponse> for MiniTicker24hr {
    type Error = ValidationError;

    fn try_from(t: MiniTicker24hrResponse) -> Result<Self, Self::Error> {
        Ok(MiniTicker24hr {
            symbol: t.symbol,
            open_price: non_negative("openPrice", t.open_price)?,
            high_price: non_negative("highPrice", t.high_price)?,
            low_price: non_negative("lowPrice", t.low_price)?,
            last_price: non_negative("lastPrice", t.last_price)?,
            volume: non_negative("volume", t.volume)?,
            quote_volume: non_negative("quoteVolume", t.quote_volume)?,
            open_time: millis_to_datetime(t.open_time),
            close_time: millis_to_datetime(t.close_time),
            first_id: t.first_id,
            last_id: t.last_id,
            count: t.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_price_ticker_round_trip() {
        let json = r#"{"symbol":"LTCBTC","price":"4.00000200"}"#;
        let wire: PriceTickerResponse = serde_json::from_str(json).unwrap();
        let ticker: PriceTicker = wire.try_into().unwrap();
        assert_eq!(ticker.symbol, "LTCBTC");
        assert_eq!(ticker.price, Decimal::from_str("4.00000200").unwrap());
    }

    #[test]
    fn test_full_ticker_allows_negative_change() {
        let json = r#"{
            "symbol": "BNBBTC",
            "priceChange": "-94.99999800",
            "priceChangePercent": "-95.960",
            "weightedAvgPrice": "0.29628482",
            "prevClosePrice": "0.10002000",
            "lastPrice": "4.00000200",
            "lastQty": "200.00000000",
            "bidPrice": "4.00000000",
            "bidQty": "100.00000000",
            "askPrice": "4.00000200",
            "askQty": "100.00000000",
            "openPrice": "99.00000000",
            "highPrice": "100.00000000",
            "lowPrice": "0.10000000",
            "volume": "8913.30000000",
            "quoteVolume": "15.30000000",
            "openTime": 1499783499040,
            "closeTime": 1499869899040,
            "firstId": 28385,
            "lastId": 28460,
            "count": 76
        }"#;
        let wire: Ticker24hrResponse = serde_json::from_str(json).unwrap();
        let ticker: Ticker24hr = wire.try_into().unwrap();

        assert!(ticker.price_change.is_sign_negative());
        assert_eq!(ticker.count, 76);
        assert_eq!(ticker.open_time.timestamp_millis(), 1499783499040);
    }

    #[test]
    fn test_negative_volume_is_rejected() {
        let json = r#"{
            "symbol": "BNBBTC",
            "openPrice": "1", "highPrice": "1", "lowPrice": "1",
            "lastPrice": "1", "volume": "-1", "quoteVolume": "1",
            "openTime": 0, "closeTime": 0,
            "firstId": -1, "lastId": -1, "count": 0
        }"#;
        let wire: MiniTicker24hrResponse = serde_json::from_str(json).unwrap();
        let err = MiniTicker24hr::try_from(wire).unwrap_err();
        assert!(matches!(err, ValidationError::Negative { field: "volume", .. }));
    }

    #[test]
    fn test_mini_ticker_no_trades_window() {
        let json = r#"{
            "symbol": "BNBBTC",
            "openPrice": "0", "highPrice": "0", "lowPrice": "0",
            "lastPrice": "0", "volume": "0", "quoteVolume": "0",
            "openTime": 0, "closeTime": 0,
            "firstId": -1, "lastId": -1, "count": 0
        }"#;
        let wire: MiniTicker24hrResponse = serde_json::from_str(json).unwrap();
        let ticker: MiniTicker24hr = wire.try_into().unwrap();
        assert_eq!(ticker.first_id, -1);
        assert_eq!(ticker.count, 0);
    }
}
