//! Account sub-client.

use super::{AccountInformation, AccountSnapshot, SnapshotType};
use crate::client::BinanceClient;
use crate::error::SdkError;
use crate::http::Params;

pub struct Account<'a> {
    pub(crate) client: &'a BinanceClient,
}

impl<'a> Account<'a> {
    /// Current account information: commissions, permissions and balances.
    pub async fn info(&self) -> Result<AccountInformation, SdkError> {
        let resp = self.client.http.account().await?;
        AccountInformation::try_from(resp).map_err(|e| SdkError::Validation(e.to_string()))
    }

    /// Daily account snapshots for one wallet type, newest last.
    ///
    /// `limit` is clamped by the exchange to 5..=30 (default 7); the window
    /// reaches back at most one month.
    pub async fn snapshot(
        &self,
        snapshot_type: SnapshotType,
        start_time: Option<u64>,
        end_time: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Vec<AccountSnapshot>, SdkError> {
        let extra = Params::new()
            .with_opt("startTime", start_time)
            .with_opt("endTime", end_time)
            .with_opt("limit", limit);
        let resp = self
            .client
            .http
            .account_snapshot(snapshot_type.as_str(), extra)
            .await?;
        resp.snapshot_vos
            .into_iter()
            .map(|vo| {
                AccountSnapshot::try_from(vo).map_err(|e| SdkError::Validation(e.to_string()))
            })
            .collect()
    }
}
