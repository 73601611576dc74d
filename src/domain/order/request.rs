//! Outbound order construction.
//!
//! One builder covers every spot order type. Each [`OrderKind`] variant carries
//! exactly the fields that order type requires, and the stop trigger is itself
//! a variant (stop price vs trailing delta), so the parameter-name
//! combinatorics live in one `params()` function instead of a method per
//! field combination.

use super::OrderType;
use crate::http::Params;
use crate::shared::{Side, TimeInForce};
use rust_decimal::Decimal;

/// Quantity for a MARKET order: denominated in the base or the quote asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarketQuantity {
    /// `quantity` — amount of the base asset.
    Base(Decimal),
    /// `quoteOrderQty` — spend/receive this much of the quote asset.
    Quote(Decimal),
}

/// Trigger condition for stop-loss / take-profit orders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopTrigger {
    /// `stopPrice` — absolute trigger price.
    StopPrice(Decimal),
    /// `trailingDelta` — trigger in basis points relative to the market.
    TrailingDelta(u64),
}

impl StopTrigger {
    fn apply(&self, params: &mut Params) {
        match self {
            StopTrigger::StopPrice(price) => params.push("stopPrice", *price),
            StopTrigger::TrailingDelta(bips) => params.push("trailingDelta", *bips),
        }
    }
}

/// The order type and its type-specific fields.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderKind {
    Limit {
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    },
    Market {
        quantity: MarketQuantity,
    },
    StopLoss {
        quantity: Decimal,
        trigger: StopTrigger,
    },
    StopLossLimit {
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
        trigger: StopTrigger,
    },
    TakeProfit {
        quantity: Decimal,
        trigger: StopTrigger,
    },
    TakeProfitLimit {
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
        trigger: StopTrigger,
    },
    LimitMaker {
        quantity: Decimal,
        price: Decimal,
    },
}

impl OrderKind {
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderKind::Limit { .. } => OrderType::Limit,
            OrderKind::Market { .. } => OrderType::Market,
            OrderKind::StopLoss { .. } => OrderType::StopLoss,
            OrderKind::StopLossLimit { .. } => OrderType::StopLossLimit,
            OrderKind::TakeProfit { .. } => OrderType::TakeProfit,
            OrderKind::TakeProfitLimit { .. } => OrderType::TakeProfitLimit,
            OrderKind::LimitMaker { .. } => OrderType::LimitMaker,
        }
    }

    fn apply(&self, params: &mut Params) {
        match self {
            OrderKind::Limit {
                quantity,
                price,
                time_in_force,
            } => {
                params.push("timeInForce", time_in_force.as_str());
                params.push("quantity", *quantity);
                params.push("price", *price);
            }
            OrderKind::Market { quantity } => match quantity {
                MarketQuantity::Base(qty) => params.push("quantity", *qty),
                MarketQuantity::Quote(qty) => params.push("quoteOrderQty", *qty),
            },
            OrderKind::StopLoss { quantity, trigger }
            | OrderKind::TakeProfit { quantity, trigger } => {
                params.push("quantity", *quantity);
                trigger.apply(params);
            }
            OrderKind::StopLossLimit {
                quantity,
                price,
                time_in_force,
                trigger,
            }
            | OrderKind::TakeProfitLimit {
                quantity,
                price,
                time_in_force,
                trigger,
            } => {
                params.push("timeInForce", time_in_force.as_str());
                params.push("quantity", *quantity);
                params.push("price", *price);
                trigger.apply(params);
            }
            OrderKind::LimitMaker { quantity, price } => {
                params.push("quantity", *quantity);
                params.push("price", *price);
            }
        }
    }
}

/// A new spot order, ready to encode for `POST /api/v3/order`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub symbol: String,
    pub side: Side,
    pub kind: OrderKind,
    pub new_client_order_id: Option<String>,
    pub iceberg_qty: Option<Decimal>,
}

impl NewOrder {
    pub fn new(symbol: impl Into<String>, side: Side, kind: OrderKind) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            kind,
            new_client_order_id: None,
            iceberg_qty: None,
        }
    }

    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(id.into());
        self
    }

    pub fn with_iceberg_qty(mut self, qty: Decimal) -> Self {
        self.iceberg_qty = Some(qty);
        self
    }

    /// Encode for the wire. A FULL response type is always requested so the
    /// ack carries the fills.
    pub fn params(&self) -> Params {
        let mut params = Params::new()
            .with("symbol", self.symbol.as_str())
            .with("side", self.side.as_str())
            .with("type", self.kind.order_type().as_str());
        self.kind.apply(&mut params);
        params
            .with_opt("icebergQty", self.iceberg_qty)
            .with_opt("newClientOrderId", self.new_client_order_id.clone())
            .with("newOrderRespType", "FULL")
    }
}

/// How to identify an existing order on query/cancel.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderLookup {
    OrderId(i64),
    ClientOrderId(String),
}

impl OrderLookup {
    pub(crate) fn apply(&self, params: &mut Params) {
        match self {
            OrderLookup::OrderId(id) => params.push("orderId", *id),
            OrderLookup::ClientOrderId(id) => params.push("origClientOrderId", id.as_str()),
        }
    }
}

/// Behavior when the cancel half of a cancel-and-replace fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReplaceMode {
    /// Do not place the new order if the cancel fails.
    StopOnFailure,
    /// Attempt the new order even when the cancel fails.
    AllowFailure,
}

impl CancelReplaceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancelReplaceMode::StopOnFailure => "STOP_ON_FAILURE",
            CancelReplaceMode::AllowFailure => "ALLOW_FAILURE",
        }
    }
}

/// Atomically cancel an existing order and place a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelReplace {
    pub cancel: OrderLookup,
    pub order: NewOrder,
    pub mode: CancelReplaceMode,
}

impl CancelReplace {
    pub fn params(&self) -> Params {
        let mut params = self.order.params().with("cancelReplaceMode", self.mode.as_str());
        match &self.cancel {
            OrderLookup::OrderId(id) => params.push("cancelOrderId", *id),
            OrderLookup::ClientOrderId(id) => {
                params.push("cancelOrigClientOrderId", id.as_str())
            }
        }
        params
    }
}

/// A new OCO order list: a limit-maker leg paired with a stop leg.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOco {
    pub symbol: String,
    pub side: Side,
    pub quantity: Decimal,
    /// Price of the limit-maker leg.
    pub price: Decimal,
    pub stop_price: Decimal,
    /// When set, the stop leg becomes STOP_LOSS_LIMIT at this price.
    pub stop_limit_price: Option<Decimal>,
    pub stop_limit_time_in_force: Option<TimeInForce>,
    pub list_client_order_id: Option<String>,
}

impl NewOco {
    pub fn params(&self) -> Params {
        Params::new()
            .with("symbol", self.symbol.as_str())
            .with("side", self.side.as_str())
            .with("quantity", self.quantity)
            .with("price", self.price)
            .with("stopPrice", self.stop_price)
            .with_opt("stopLimitPrice", self.stop_limit_price)
            .with_opt(
                "stopLimitTimeInForce",
                self.stop_limit_time_in_force.map(|t| t.as_str()),
            )
            .with_opt("listClientOrderId", self.list_client_order_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_limit_order_params() {
        let order = NewOrder::new(
            "LTCBTC",
            Side::Buy,
            OrderKind::Limit {
                quantity: dec("1"),
                price: dec("0.1"),
                time_in_force: TimeInForce::Gtc,
            },
        );
        assert_eq!(
            order.params().encode(),
            "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&newOrderRespType=FULL"
        );
    }

    #[test]
    fn test_market_quote_quantity() {
        let order = NewOrder::new(
            "BTCUSDT",
            Side::Sell,
            OrderKind::Market {
                quantity: MarketQuantity::Quote(dec("100")),
            },
        );
        let encoded = order.params().encode();
        assert!(encoded.contains("type=MARKET&quoteOrderQty=100"));
        assert!(!encoded.contains("quantity="));
    }

    #[test]
    fn test_stop_loss_stop_price_vs_trailing_delta() {
        let stop = NewOrder::new(
            "BTCUSDT",
            Side::Sell,
            OrderKind::StopLoss {
                quantity: dec("0.5"),
                trigger: StopTrigger::StopPrice(dec("40000")),
            },
        );
        assert!(stop.params().encode().contains("stopPrice=40000"));

        let trailing = NewOrder::new(
            "BTCUSDT",
            Side::Sell,
            OrderKind::StopLoss {
                quantity: dec("0.5"),
                trigger: StopTrigger::TrailingDelta(250),
            },
        );
        let encoded = trailing.params().encode();
        assert!(encoded.contains("trailingDelta=250"));
        assert!(!encoded.contains("stopPrice"));
    }

    #[test]
    fn test_optional_fields_appended() {
        let order = NewOrder::new(
            "BTCUSDT",
            Side::Buy,
            OrderKind::LimitMaker {
                quantity: dec("1"),
                price: dec("30000"),
            },
        )
        .with_iceberg_qty(dec("0.1"))
        .with_client_order_id("my-id-1");
        let encoded = order.params().encode();
        assert!(encoded.contains("type=LIMIT_MAKER"));
        assert!(encoded.contains("icebergQty=0.1"));
        assert!(encoded.contains("newClientOrderId=my-id-1"));
    }

    #[test]
    fn test_cancel_replace_params() {
        let cr = CancelReplace {
            cancel: OrderLookup::OrderId(12),
            order: NewOrder::new(
                "BTCUSDT",
                Side::Sell,
                OrderKind::Limit {
                    quantity: dec("1"),
                    price: dec("30000"),
                    time_in_force: TimeInForce::Gtc,
                },
            ),
            mode: CancelReplaceMode::StopOnFailure,
        };
        let encoded = cr.params().encode();
        assert!(encoded.contains("cancelReplaceMode=STOP_ON_FAILURE"));
        assert!(encoded.contains("cancelOrderId=12"));
    }

    #[test]
    fn test_oco_params() {
        let oco = NewOco {
            symbol: "BTCUSDT".to_string(),
            side: Side::Sell,
            quantity: dec("1"),
            price: dec("32000"),
            stop_price: dec("29000"),
            stop_limit_price: Some(dec("28900")),
            stop_limit_time_in_force: Some(TimeInForce::Gtc),
            list_client_order_id: None,
        };
        assert_eq!(
            oco.params().encode(),
            "symbol=BTCUSDT&side=SELL&quantity=1&price=32000&stopPrice=29000&stopLimitPrice=28900&stopLimitTimeInForce=GTC"
        );
    }
}
