//! Wire types for account responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One balance row inside `GET /api/v3/account`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub asset: String,
    pub free: Decimal,
    pub locked: Decimal,
}

/// `GET /api/v3/account` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub maker_commission: u32,
    pub taker_commission: u32,
    pub buyer_commission: u32,
    pub seller_commission: u32,
    pub can_trade: bool,
    pub can_withdraw: bool,
    pub can_deposit: bool,
    #[serde(default)]
    pub brokered: bool,
    pub update_time: u64,
    #[serde(default)]
    pub account_type: String,
    pub balances: Vec<BalanceResponse>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// `GET /sapi/v1/accountSnapshot` envelope. `code` is 200 on success even
/// though the HTTP status already said so.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub code: i64,
    pub msg: String,
    pub snapshot_vos: Vec<SnapshotVoResponse>,
}

/// One snapshot row. The `type` field discriminates the payload shape, so
/// this decodes as a tagged union rather than one struct of optionals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SnapshotVoResponse {
    Spot {
        #[serde(rename = "updateTime")]
        update_time: u64,
        data: SpotSnapshotData,
    },
    Margin {
        #[serde(rename = "updateTime")]
        update_time: u64,
        data: MarginSnapshotData,
    },
    Futures {
        #[serde(rename = "updateTime")]
        update_time: u64,
        data: FuturesSnapshotData,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpotSnapshotData {
    pub total_asset_of_btc: Decimal,
    pub balances: Vec<BalanceResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarginSnapshotData {
    pub margin_level: Decimal,
    pub total_asset_of_btc: Decimal,
    pub total_liability_of_btc: Decimal,
    pub total_net_asset_of_btc: Decimal,
    pub user_assets: Vec<MarginAssetResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarginAssetResponse {
    pub asset: String,
    pub borrowed: Decimal,
    pub free: Decimal,
    pub interest: Decimal,
    pub locked: Decimal,
    pub net_asset: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuturesSnapshotData {
    pub assets: Vec<FuturesAssetResponse>,
    #[serde(default)]
    pub position: Vec<FuturesPositionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuturesAssetResponse {
    pub asset: String,
    pub margin_balance: Decimal,
    pub wallet_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuturesPositionResponse {
    pub symbol: String,
    pub entry_price: Decimal,
    pub mark_price: Decimal,
    pub position_amt: Decimal,
    pub un_realized_profit: Decimal,
}
