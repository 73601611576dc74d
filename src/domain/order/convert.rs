//! Conversions: order wire types → order domain types.

use super::wire::{FillResponse, OcoOrderRefResponse, OcoResponse, OrderDetailResponse, OrderResponse};
use super::{Fill, OcoOrderList, OcoOrderRef, Order};
use crate::shared::serde_util::millis_to_datetime;
use crate::shared::{non_negative, ValidationError};
use rust_decimal::Decimal;

fn non_negative_opt(
    field: &'static str,
    value: Option<Decimal>,
) -> Result<Decimal, ValidationError> {
    // Omitted optional decimals default to zero.
    non_negative(field, value.unwrap_or_default())
}

impl TryFrom<FillResponse> for Fill {
    type Error = ValidationError;

    fn try_from(f: FillResponse) -> Result<Self, Self::Error> {
        Ok(Fill {
            price: non_negative("price", f.price)?,
            qty: non_negative("qty", f.qty)?,
            commission: non_negative("commission", f.commission)?,
            commission_asset: f.commission_asset,
        })
    }
}

impl TryFrom<OrderResponse> for Order {
    type Error = ValidationError;

    fn try_from(o: OrderResponse) -> Result<Self, Self::Error> {
        Ok(Order {
            symbol: o.symbol,
            order_id: o.order_id,
            order_list_id: o.order_list_id,
            client_order_id: o.client_order_id,
            price: non_negative_opt("price", o.price)?,
            orig_qty: non_negative_opt("origQty", o.orig_qty)?,
            executed_qty: non_negative_opt("executedQty", o.executed_qty)?,
            cumulative_quote_qty: non_negative_opt(
                "cummulativeQuoteQty",
                o.cumulative_quote_qty,
            )?,
            status: o.status,
            time_in_force: o.time_in_force,
            order_type: o.order_type,
            side: o.side,
            stop_price: non_negative_opt("stopPrice", o.stop_price)?,
            iceberg_qty: non_negative_opt("icebergQty", o.iceberg_qty)?,
            transact_time: o.transact_time.map(millis_to_datetime),
            time: None,
            update_time: None,
            is_working: None,
            fills: o
                .fills
                .into_iter()
                .map(Fill::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl TryFrom<OrderDetailResponse> for Order {
    type Error = ValidationError;

    fn try_from(o: OrderDetailResponse) -> Result<Self, Self::Error> {
        Ok(Order {
            symbol: o.symbol,
            order_id: o.order_id,
            order_list_id: o.order_list_id,
            client_order_id: o.client_order_id,
            price: non_negative("price", o.price)?,
            orig_qty: non_negative("origQty", o.orig_qty)?,
            executed_qty: non_negative("executedQty", o.executed_qty)?,
            cumulative_quote_qty: non_negative("cummulativeQuoteQty", o.cumulative_quote_qty)?,
            status: Some(o.status),
            time_in_force: Some(o.time_in_force),
            order_type: Some(o.order_type),
            side: Some(o.side),
            stop_price: non_negative_opt("stopPrice", o.stop_price)?,
            iceberg_qty: non_negative_opt("icebergQty", o.iceberg_qty)?,
            transact_time: None,
            time: Some(millis_to_datetime(o.time)),
            update_time: Some(millis_to_datetime(o.update_time)),
            is_working: Some(o.is_working),
            fills: Vec::new(),
        })
    }
}

impl From<OcoOrderRefResponse> for OcoOrderRef {
    fn from(r: OcoOrderRefResponse) -> Self {
        OcoOrderRef {
            symbol: r.symbol,
            order_id: r.order_id,
            client_order_id: r.client_order_id,
        }
    }
}

impl TryFrom<OcoResponse> for OcoOrderList {
    type Error = ValidationError;

    fn try_from(o: OcoResponse) -> Result<Self, Self::Error> {
        Ok(OcoOrderList {
            order_list_id: o.order_list_id,
            contingency_type: o.contingency_type,
            list_status_type: o.list_status_type,
            list_order_status: o.list_order_status,
            list_client_order_id: o.list_client_order_id,
            transaction_time: millis_to_datetime(o.transaction_time),
            symbol: o.symbol,
            orders: o.orders.into_iter().map(OcoOrderRef::from).collect(),
            order_reports: o
                .order_reports
                .into_iter()
                .map(Order::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{OrderStatus, OrderType};
    use crate::shared::Side;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_order_ack_conversion() {
        let json = r#"{
            "symbol": "BTCUSDT",
            "orderId": 28,
            "orderListId": -1,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1507725176595,
            "price": "0.00000000",
            "origQty": "10.00000000",
            "executedQty": "10.00000000",
            "cummulativeQuoteQty": "10.00000000",
            "status": "FILLED",
            "timeInForce": "GTC",
            "type": "MARKET",
            "side": "SELL",
            "fills": [
                {"price": "4000.00000000", "qty": "1.00000000",
                 "commission": "4.00000000", "commissionAsset": "USDT"},
                {"price": "3999.00000000", "qty": "5.00000000",
                 "commission": "19.99500000", "commissionAsset": "USDT"}
            ]
        }"#;
        let wire: OrderResponse = serde_json::from_str(json).unwrap();
        let order: Order = wire.try_into().unwrap();

        assert_eq!(order.order_id, 28);
        assert_eq!(order.status, Some(OrderStatus::Filled));
        assert_eq!(order.order_type, Some(OrderType::Market));
        assert_eq!(order.side, Some(Side::Sell));
        assert_eq!(order.fills.len(), 2);
        assert_eq!(order.fills[0].price, dec("4000.00000000"));
        assert_eq!(order.transact_time.unwrap().timestamp_millis(), 1507725176595);
        // Absent optional decimals default to zero.
        assert_eq!(order.stop_price, Decimal::ZERO);
        assert_eq!(order.iceberg_qty, Decimal::ZERO);
    }

    #[test]
    fn test_minimal_ack_conversion() {
        // ACK response type: identifiers only.
        let json = r#"{
            "symbol": "BTCUSDT",
            "orderId": 28,
            "orderListId": -1,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1507725176595
        }"#;
        let wire: OrderResponse = serde_json::from_str(json).unwrap();
        let order: Order = wire.try_into().unwrap();

        assert_eq!(order.price, Decimal::ZERO);
        assert_eq!(order.status, None);
        assert!(order.fills.is_empty());
    }

    #[test]
    fn test_order_detail_conversion() {
        let json = r#"{
            "symbol": "LTCBTC",
            "orderId": 1,
            "orderListId": -1,
            "clientOrderId": "myOrder1",
            "price": "0.1",
            "origQty": "1.0",
            "executedQty": "0.0",
            "cummulativeQuoteQty": "0.0",
            "status": "NEW",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "BUY",
            "stopPrice": "0.0",
            "icebergQty": "0.0",
            "time": 1499827319559,
            "updateTime": 1499827319559,
            "isWorking": true
        }"#;
        let wire: OrderDetailResponse = serde_json::from_str(json).unwrap();
        let order: Order = wire.try_into().unwrap();

        assert_eq!(order.status, Some(OrderStatus::New));
        assert_eq!(order.is_working, Some(true));
        assert_eq!(order.time.unwrap().timestamp_millis(), 1499827319559);
    }

    #[test]
    fn test_negative_executed_qty_is_rejected() {
        let json = r#"{
            "symbol": "BTCUSDT",
            "orderId": 28,
            "clientOrderId": "x",
            "executedQty": "-1.0"
        }"#;
        let wire: OrderResponse = serde_json::from_str(json).unwrap();
        assert!(Order::try_from(wire).is_err());
    }

    #[test]
    fn test_oco_conversion() {
        let json = r#"{
            "orderListId": 28,
            "contingencyType": "OCO",
            "listStatusType": "EXEC_STARTED",
            "listOrderStatus": "EXECUTING",
            "listClientOrderId": "h2USkA5YQpaXHPIrkd96xE",
            "transactionTime": 1565245656253,
            "symbol": "LTCBTC",
            "orders": [
                {"symbol": "LTCBTC", "orderId": 2, "clientOrderId": "pO9ufTiFGg3nw2fOdgeOXa"},
                {"symbol": "LTCBTC", "orderId": 3, "clientOrderId": "TXOvglzXuaubXAaENpaRCB"}
            ]
        }"#;
        let wire: OcoResponse = serde_json::from_str(json).unwrap();
        let oco: OcoOrderList = wire.try_into().unwrap();

        assert_eq!(oco.order_list_id, 28);
        assert_eq!(oco.orders.len(), 2);
        assert_eq!(oco.orders[1].order_id, 3);
        assert!(oco.order_reports.is_empty());
        assert_eq!(oco.transaction_time.timestamp_millis(), 1565245656253);
    }
}
