//! Klines sub-client — candlestick queries and the symbol forecast.

use crate::client::BinanceClient;
use crate::domain::kline::{trend_percent, Candlestick, Interval};
use crate::error::SdkError;
use crate::http::Params;
use crate::shared::ValidationError;
use rust_decimal::Decimal;

pub struct Klines<'a> {
    pub(crate) client: &'a BinanceClient,
}

impl<'a> Klines<'a> {
    /// Candlesticks for a symbol, newest last. An empty response maps to an
    /// empty list.
    pub async fn get(
        &self,
        symbol: &str,
        interval: Interval,
        start_time: Option<u64>,
        end_time: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Vec<Candlestick>, SdkError> {
        let extra = Params::new()
            .with_opt("startTime", start_time)
            .with_opt("endTime", end_time)
            .with_opt("limit", limit);
        let rows = self
            .client
            .http
            .klines(symbol, interval.as_str(), extra)
            .await?;
        rows.into_iter()
            .map(|row| {
                Candlestick::try_from(row)
                    .map_err(|e: ValidationError| SdkError::Validation(e.to_string()))
            })
            .collect()
    }

    /// Current average price for a symbol.
    pub async fn avg_price(&self, symbol: &str) -> Result<Decimal, SdkError> {
        let resp = self.client.http.avg_price(symbol).await?;
        Ok(resp.price)
    }

    /// Single-scalar price forecast: the current average price projected by the
    /// mean percent offset of the last `candles` highs, ignoring highs more
    /// than `tolerance` percent away from the average.
    pub async fn forecast(
        &self,
        symbol: &str,
        interval: Interval,
        candles: u32,
        tolerance: Decimal,
    ) -> Result<Decimal, SdkError> {
        let history = self.get(symbol, interval, None, None, Some(candles)).await?;
        let avg = self.avg_price(symbol).await?;

        let highs: Vec<Decimal> = history.iter().map(|c| c.high).collect();
        let trend = trend_percent(&highs, avg, tolerance).ok_or_else(|| {
            SdkError::Other(format!(
                "no candlestick highs for {} within {}% of the average price",
                symbol, tolerance
            ))
        })?;

        Ok(avg + avg * trend / Decimal::ONE_HUNDRED)
    }
}
