//! Order book sub-client — depth queries.

use crate::client::BinanceClient;
use crate::domain::orderbook::OrderBook;
use crate::error::SdkError;

pub struct Orderbook<'a> {
    pub(crate) client: &'a BinanceClient,
}

impl<'a> Orderbook<'a> {
    /// Depth snapshot for a symbol. `limit` defaults to 100 on the exchange
    /// side; valid values go up to 5000.
    pub async fn depth(&self, symbol: &str, limit: Option<u32>) -> Result<OrderBook, SdkError> {
        let resp = self.client.http.depth(symbol, limit).await?;
        resp.try_into()
            .map_err(|e: crate::shared::ValidationError| SdkError::Validation(e.to_string()))
    }
}
