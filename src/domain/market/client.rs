//! Market sub-client — connectivity, server time, exchange info.

use crate::client::BinanceClient;
use crate::domain::market::ExchangeInfo;
use crate::error::SdkError;
use crate::shared::serde_util::millis_to_datetime;
use chrono::{DateTime, Utc};

pub struct Market<'a> {
    pub(crate) client: &'a BinanceClient,
}

impl<'a> Market<'a> {
    /// Test connectivity to the REST API.
    pub async fn ping(&self) -> Result<(), SdkError> {
        Ok(self.client.http.ping().await?)
    }

    /// Current exchange server time.
    pub async fn server_time(&self) -> Result<DateTime<Utc>, SdkError> {
        let resp = self.client.http.server_time().await?;
        Ok(millis_to_datetime(resp.server_time))
    }

    /// Exchange trading rules and symbol metadata, for all symbols.
    pub async fn exchange_info(&self) -> Result<ExchangeInfo, SdkError> {
        Ok(self.client.http.exchange_info(None).await?)
    }

    /// Exchange info restricted to the given symbols.
    pub async fn exchange_info_for(
        &self,
        symbols: Vec<String>,
    ) -> Result<ExchangeInfo, SdkError> {
        Ok(self.client.http.exchange_info(Some(symbols)).await?)
    }
}
