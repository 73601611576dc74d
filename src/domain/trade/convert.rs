//! Conversions: trade wire types → trade domain types.

use super::wire::{AggTradeResponse, MyTradeResponse, TradeResponse};
use super::{AccountTrade, AggTrade, Trade};
use crate::shared::serde_util::millis_to_datetime;
use crate::shared::{non_negative, ValidationError};

impl TryFrom<TradeResponse> for Trade {
    type Error = ValidationError;

    fn try_from(t: TradeResponse) -> Result<Self, Self::Error> {
        Ok(Trade {
            id: t.id,
            price: non_negative("price", t.price)?,
            qty: non_negative("qty", t.qty)?,
            quote_qty: non_negative("quoteQty", t.quote_qty)?,
            time: millis_to_datetime(t.time),
            is_buyer_maker: t.is_buyer_maker,
            is_best_match: t.is_best_match,
        })
    }
}

impl TryFrom<AggTradeResponse> for AggTrade {
    type Error = ValidationError;

    fn try_from(t: AggTradeResponse) -> Result<Self, Self::Error> {
        Ok(AggTrade {
            id: t.agg_trade_id,
            price: non_negative("price", t.price)?,
            qty: non_negative("qty", t.qty)?,
            first_trade_id: t.first_trade_id,
            last_trade_id: t.last_trade_id,
            time: millis_to_datetime(t.time),
            is_buyer_maker: t.is_buyer_maker,
            is_best_match: t.is_best_match,
        })
    }
}

impl TryFrom<MyTradeResponse> for AccountTrade {
    type Error = ValidationError;

    fn try_from(t: MyTradeResponse) -> Result<Self, Self::Error> {
        Ok(AccountTrade {
            symbol: t.symbol,
            id: t.id,
            order_id: t.order_id,
            order_list_id: t.order_list_id,
            price: non_negative("price", t.price)?,
            qty: non_negative("qty", t.qty)?,
            quote_qty: non_negative("quoteQty", t.quote_qty)?,
            commission: non_negative("commission", t.commission)?,
            commission_asset: t.commission_asset,
            time: millis_to_datetime(t.time),
            is_buyer: t.is_buyer,
            is_maker: t.is_maker,
            is_best_match: t.is_best_match,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_trade_response_conversion() {
        let json = r#"{
            "id": 28457,
            "price": "4.00000100",
            "qty": "12.00000000",
            "quoteQty": "48.000012",
            "time": 1499865549590,
            "isBuyerMaker": true,
            "isBestMatch": true
        }"#;
        let wire: TradeResponse = serde_json::from_str(json).unwrap();
        let trade: Trade = wire.try_into().unwrap();

        assert_eq!(trade.id, 28457);
        assert_eq!(trade.price, Decimal::from_str("4.00000100").unwrap());
        assert_eq!(trade.qty, Decimal::from_str("12.00000000").unwrap());
        assert_eq!(trade.time.timestamp_millis(), 1499865549590);
        assert!(trade.is_buyer_maker);
    }

    #[test]
    fn test_agg_trade_compact_keys() {
        let json = r#"{
            "a": 26129, "p": "0.01633102", "q": "4.70443515",
            "f": 27781, "l": 27781, "T": 1498793709153,
            "m": true, "M": true
        }"#;
        let wire: AggTradeResponse = serde_json::from_str(json).unwrap();
        let agg: AggTrade = wire.try_into().unwrap();

        assert_eq!(agg.id, 26129);
        assert_eq!(agg.first_trade_id, 27781);
        assert_eq!(agg.last_trade_id, 27781);
        assert_eq!(agg.price, Decimal::from_str("0.01633102").unwrap());
    }

    #[test]
    fn test_my_trade_conversion() {
        let json = r#"{
            "symbol": "BNBBTC",
            "id": 28457,
            "orderId": 100234,
            "orderListId": -1,
            "price": "4.00000100",
            "qty": "12.00000000",
            "quoteQty": "48.000012",
            "commission": "10.10000000",
            "commissionAsset": "BNB",
            "time": 1499865549590,
            "isBuyer": true,
            "isMaker": false,
            "isBestMatch": true
        }"#;
        let wire: MyTradeResponse = serde_json::from_str(json).unwrap();
        let trade: AccountTrade = wire.try_into().unwrap();

        assert_eq!(trade.order_id, 100234);
        assert_eq!(trade.order_list_id, -1);
        assert_eq!(trade.commission_asset, "BNB");
        assert!(trade.is_buyer);
        assert!(!trade.is_maker);
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let wire = TradeResponse {
            id: 1,
            price: Decimal::from_str("-4.0").unwrap(),
            qty: Decimal::ONE,
            quote_qty: Decimal::ONE,
            time: 0,
            is_buyer_maker: false,
            is_best_match: false,
        };
        assert!(Trade::try_from(wire).is_err());
    }
}
