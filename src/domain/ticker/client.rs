//! Tickers sub-client — price, book and 24hr ticker queries.

use crate::client::BinanceClient;
use crate::domain::ticker::{BookTicker, MiniTicker24hr, PriceTicker, Ticker24hr};
use crate::error::SdkError;
use crate::shared::ValidationError;

pub struct Tickers<'a> {
    pub(crate) client: &'a BinanceClient,
}

impl<'a> Tickers<'a> {
    /// Latest price for one symbol.
    pub async fn price(&self, symbol: &str) -> Result<PriceTicker, SdkError> {
        convert(self.client.http.price_ticker(symbol).await?)
    }

    /// Latest prices for a list of symbols, or for every symbol when `None`.
    pub async fn prices(
        &self,
        symbols: Option<Vec<String>>,
    ) -> Result<Vec<PriceTicker>, SdkError> {
        collect(self.client.http.price_tickers(symbols).await?)
    }

    /// Best bid/ask for one symbol.
    pub async fn book(&self, symbol: &str) -> Result<BookTicker, SdkError> {
        convert(self.client.http.book_ticker(symbol).await?)
    }

    /// Best bid/ask for a list of symbols, or for every symbol when `None`.
    pub async fn books(
        &self,
        symbols: Option<Vec<String>>,
    ) -> Result<Vec<BookTicker>, SdkError> {
        collect(self.client.http.book_tickers(symbols).await?)
    }

    /// 24hr statistics (FULL) for one symbol.
    pub async fn day(&self, symbol: &str) -> Result<Ticker24hr, SdkError> {
        convert(self.client.http.ticker_24hr(symbol).await?)
    }

    /// 24hr statistics (MINI) for one symbol.
    pub async fn day_mini(&self, symbol: &str) -> Result<MiniTicker24hr, SdkError> {
        convert(self.client.http.ticker_24hr_mini(symbol).await?)
    }

    /// 24hr statistics (FULL) for a symbol list, or all symbols when `None`.
    pub async fn days(
        &self,
        symbols: Option<Vec<String>>,
    ) -> Result<Vec<Ticker24hr>, SdkError> {
        collect(self.client.http.tickers_24hr(symbols).await?)
    }

    /// 24hr statistics (MINI) for a symbol list, or all symbols when `None`.
    pub async fn days_mini(
        &self,
        symbols: Option<Vec<String>>,
    ) -> Result<Vec<MiniTicker24hr>, SdkError> {
        collect(self.client.http.tickers_24hr_mini(symbols).await?)
    }
}

fn convert<W, D>(row: W) -> Result<D, SdkError>
where
    D: TryFrom<W, Error = ValidationError>,
{
    D::try_from(row).map_err(|e| SdkError::Validation(e.to_string()))
}

fn collect<W, D>(rows: Vec<W>) -> Result<Vec<D>, SdkError>
where
    D: TryFrom<W, Error = ValidationError>,
{
    rows.into_iter().map(convert).collect()
}
