//! Trades sub-client — public trade history and account trade list.

use crate::client::BinanceClient;
use crate::domain::trade::{AccountTrade, AggTrade, Trade};
use crate::error::SdkError;
use crate::http::Params;
use crate::shared::ValidationError;

pub struct Trades<'a> {
    pub(crate) client: &'a BinanceClient,
}

impl<'a> Trades<'a> {
    /// Most recent public trades for a symbol.
    pub async fn recent(&self, symbol: &str, limit: Option<u32>) -> Result<Vec<Trade>, SdkError> {
        let resp = self.client.http.recent_trades(symbol, limit).await?;
        collect(resp)
    }

    /// Older public trades. Requires an API key.
    pub async fn historical(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
    ) -> Result<Vec<Trade>, SdkError> {
        let resp = self
            .client
            .http
            .historical_trades(symbol, limit, from_id)
            .await?;
        collect(resp)
    }

    /// Aggregate trades within an optional id/time window.
    pub async fn aggregate(
        &self,
        symbol: &str,
        from_id: Option<u64>,
        start_time: Option<u64>,
        end_time: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Vec<AggTrade>, SdkError> {
        let extra = Params::new()
            .with_opt("fromId", from_id)
            .with_opt("startTime", start_time)
            .with_opt("endTime", end_time)
            .with_opt("limit", limit);
        let resp = self.client.http.agg_trades(symbol, extra).await?;
        collect(resp)
    }

    /// Fills belonging to the authenticated account (signed).
    pub async fn mine(
        &self,
        symbol: &str,
        order_id: Option<i64>,
        from_id: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Vec<AccountTrade>, SdkError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("orderId", order_id)
            .with_opt("fromId", from_id)
            .with_opt("limit", limit);
        let resp = self.client.http.my_trades(params).await?;
        collect(resp)
    }
}

fn collect<W, D>(rows: Vec<W>) -> Result<Vec<D>, SdkError>
where
    D: TryFrom<W, Error = ValidationError>,
{
    rows.into_iter()
        .map(|row| D::try_from(row).map_err(|e| SdkError::Validation(e.to_string())))
        .collect()
}
