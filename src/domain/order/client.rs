//! Orders sub-client — place, query, cancel, OCO, cancel-and-replace.

use crate::client::BinanceClient;
use crate::domain::order::wire::CancelReplaceResponse;
use crate::domain::order::{
    CancelReplace, NewOco, NewOrder, OcoOrderList, Order, OrderCountUsage, OrderLookup,
};
use crate::error::SdkError;
use crate::http::Params;
use crate::shared::ValidationError;

pub struct Orders<'a> {
    pub(crate) client: &'a BinanceClient,
}

/// Outcome of a cancel-and-replace call.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelReplaceResult {
    pub cancel_result: String,
    pub new_order_result: String,
    pub canceled: Option<Order>,
    pub placed: Option<Order>,
}

impl<'a> Orders<'a> {
    /// Place a new spot order.
    pub async fn place(&self, order: &NewOrder) -> Result<Order, SdkError> {
        let resp = self.client.http.place_order(order.params()).await?;
        convert(resp)
    }

    /// Validate a new order against the matching engine without placing it.
    pub async fn test(&self, order: &NewOrder) -> Result<(), SdkError> {
        Ok(self.client.http.test_order(order.params()).await?)
    }

    /// Query a single order's status.
    pub async fn get(&self, symbol: &str, lookup: &OrderLookup) -> Result<Order, SdkError> {
        let mut params = Params::new().with("symbol", symbol);
        lookup.apply(&mut params);
        let resp = self.client.http.get_order(params).await?;
        convert(resp)
    }

    /// Cancel a single order.
    pub async fn cancel(&self, symbol: &str, lookup: &OrderLookup) -> Result<Order, SdkError> {
        let mut params = Params::new().with("symbol", symbol);
        lookup.apply(&mut params);
        let resp = self.client.http.cancel_order(params).await?;
        convert(resp)
    }

    /// Cancel every open order on a symbol, including OCO legs. The exchange
    /// mixes order and order-list objects in this response, so it is returned
    /// as a generic JSON tree.
    pub async fn cancel_all(&self, symbol: &str) -> Result<serde_json::Value, SdkError> {
        Ok(self.client.http.cancel_open_orders(symbol).await?)
    }

    /// Current open orders, optionally restricted to one symbol.
    pub async fn open(&self, symbol: Option<&str>) -> Result<Vec<Order>, SdkError> {
        let resp = self.client.http.open_orders(symbol).await?;
        resp.into_iter().map(convert).collect()
    }

    /// Order history for a symbol.
    pub async fn all(
        &self,
        symbol: &str,
        order_id: Option<i64>,
        start_time: Option<u64>,
        end_time: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Vec<Order>, SdkError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with_opt("orderId", order_id)
            .with_opt("startTime", start_time)
            .with_opt("endTime", end_time)
            .with_opt("limit", limit);
        let resp = self.client.http.all_orders(params).await?;
        resp.into_iter().map(convert).collect()
    }

    /// Atomically cancel an order and place a replacement.
    pub async fn cancel_replace(
        &self,
        request: &CancelReplace,
    ) -> Result<CancelReplaceResult, SdkError> {
        let resp = self.client.http.cancel_replace(request.params()).await?;
        convert_cancel_replace(resp)
    }

    // ── OCO ──────────────────────────────────────────────────────────────

    /// Place a new OCO order list.
    pub async fn place_oco(&self, oco: &NewOco) -> Result<OcoOrderList, SdkError> {
        let resp = self.client.http.new_oco(oco.params()).await?;
        convert(resp)
    }

    /// Cancel an entire OCO order list by its list id.
    pub async fn cancel_oco(
        &self,
        symbol: &str,
        order_list_id: i64,
    ) -> Result<OcoOrderList, SdkError> {
        let params = Params::new()
            .with("symbol", symbol)
            .with("orderListId", order_list_id);
        let resp = self.client.http.cancel_oco(params).await?;
        convert(resp)
    }

    /// Query a specific OCO order list.
    pub async fn get_oco(&self, order_list_id: i64) -> Result<OcoOrderList, SdkError> {
        let params = Params::new().with("orderListId", order_list_id);
        let resp = self.client.http.get_oco(params).await?;
        convert(resp)
    }

    /// Currently executing OCO order lists.
    pub async fn open_ocos(&self) -> Result<Vec<OcoOrderList>, SdkError> {
        let resp = self.client.http.open_ocos().await?;
        resp.into_iter().map(convert).collect()
    }

    /// OCO order-list history.
    pub async fn all_ocos(
        &self,
        from_id: Option<i64>,
        start_time: Option<u64>,
        end_time: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Vec<OcoOrderList>, SdkError> {
        let params = Params::new()
            .with_opt("fromId", from_id)
            .with_opt("startTime", start_time)
            .with_opt("endTime", end_time)
            .with_opt("limit", limit);
        let resp = self.client.http.all_ocos(params).await?;
        resp.into_iter().map(convert).collect()
    }

    /// Current order-count usage against each order rate limit.
    pub async fn count_usage(&self) -> Result<Vec<OrderCountUsage>, SdkError> {
        let resp = self.client.http.order_count_usage().await?;
        Ok(resp
            .into_iter()
            .map(|r| OrderCountUsage {
                rate_limit_type: r.rate_limit_type,
                interval: r.interval,
                interval_num: r.interval_num,
                limit: r.limit,
                count: r.count,
            })
            .collect())
    }
}

fn convert<W, D>(row: W) -> Result<D, SdkError>
where
    D: TryFrom<W, Error = ValidationError>,
{
    D::try_from(row).map_err(|e| SdkError::Validation(e.to_string()))
}

fn convert_cancel_replace(resp: CancelReplaceResponse) -> Result<CancelReplaceResult, SdkError> {
    Ok(CancelReplaceResult {
        cancel_result: resp.cancel_result,
        new_order_result: resp.new_order_result,
        canceled: resp.cancel_response.map(convert).transpose()?,
        placed: resp.new_order_response.map(convert).transpose()?,
    })
}
