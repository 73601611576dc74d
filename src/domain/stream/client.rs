//! User data stream sub-client.
//!
//! A listen key expires 60 minutes after its last keepalive; callers are
//! expected to ping [`UserStream::keepalive`] roughly every 30 minutes.

use crate::client::BinanceClient;
use crate::error::SdkError;

pub struct UserStream<'a> {
    pub(crate) client: &'a BinanceClient,
}

impl<'a> UserStream<'a> {
    /// Open a user data stream and return its listen key.
    pub async fn start(&self) -> Result<String, SdkError> {
        let resp = self.client.http.create_listen_key().await?;
        Ok(resp.listen_key)
    }

    /// Extend a listen key's validity by another 60 minutes.
    pub async fn keepalive(&self, listen_key: &str) -> Result<(), SdkError> {
        Ok(self.client.http.keepalive_listen_key(listen_key).await?)
    }

    /// Close a user data stream.
    pub async fn close(&self, listen_key: &str) -> Result<(), SdkError> {
        Ok(self.client.http.close_listen_key(listen_key).await?)
    }
}
