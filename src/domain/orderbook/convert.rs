//! Conversion: DepthResponse → OrderBook (TryFrom + validation).

use super::wire;
use super::{BookLevel, OrderBook};
use crate::shared::{non_negative, ValidationError};

impl TryFrom<wire::WireLevel> for BookLevel {
    type Error = ValidationError;

    fn try_from(level: wire::WireLevel) -> Result<Self, Self::Error> {
        Ok(BookLevel {
            price: non_negative("price", level.0)?,
            qty: non_negative("qty", level.1)?,
        })
    }
}

impl TryFrom<wire::DepthResponse> for OrderBook {
    type Error = ValidationError;

    fn try_from(source: wire::DepthResponse) -> Result<Self, Self::Error> {
        let bids = source
            .bids
            .into_iter()
            .map(BookLevel::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let asks = source
            .asks
            .into_iter()
            .map(BookLevel::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OrderBook {
            last_update_id: source.last_update_id,
            bids,
            asks,
        })
    }
}
