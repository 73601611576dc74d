//! Conversions: account wire types → account domain types.

use super::wire::{
    AccountResponse, BalanceResponse, FuturesAssetResponse, FuturesPositionResponse,
    FuturesSnapshotData, MarginAssetResponse, MarginSnapshotData, SnapshotVoResponse,
    SpotSnapshotData,
};
use super::{
    AccountInformation, AccountSnapshot, Balance, FuturesAsset, FuturesPosition, FuturesSnapshot,
    MarginAsset, MarginSnapshot, SpotSnapshot,
};
use crate::shared::serde_util::millis_to_datetime;
use crate::shared::{non_negative, ValidationError};

impl TryFrom<BalanceResponse> for Balance {
    type Error = ValidationError;

    fn try_from(b: BalanceResponse) -> Result<Self, Self::Error> {
        Ok(Balance {
            asset: b.asset,
            free: non_negative("free", b.free)?,
            locked: non_negative("locked", b.locked)?,
        })
    }
}

impl TryFrom<AccountResponse> for AccountInformation {
    type Error = ValidationError;

    fn try_from(a: AccountResponse) -> Result<Self, Self::Error> {
        Ok(AccountInformation {
            maker_commission: a.maker_commission,
            taker_commission: a.taker_commission,
            buyer_commission: a.buyer_commission,
            seller_commission: a.seller_commission,
            can_trade: a.can_trade,
            can_withdraw: a.can_withdraw,
            can_deposit: a.can_deposit,
            brokered: a.brokered,
            update_time: millis_to_datetime(a.update_time),
            account_type: a.account_type,
            balances: a
                .balances
                .into_iter()
                .map(Balance::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            permissions: a.permissions,
        })
    }
}

impl TryFrom<MarginAssetResponse> for MarginAsset {
    type Error = ValidationError;

    fn try_from(m: MarginAssetResponse) -> Result<Self, Self::Error> {
        Ok(MarginAsset {
            asset: m.asset,
            borrowed: non_negative("borrowed", m.borrowed)?,
            free: non_negative("free", m.free)?,
            interest: non_negative("interest", m.interest)?,
            locked: non_negative("locked", m.locked)?,
            // net_asset goes negative when liabilities exceed holdings.
            net_asset: m.net_asset,
        })
    }
}

impl TryFrom<FuturesAssetResponse> for FuturesAsset {
    type Error = ValidationError;

    fn try_from(f: FuturesAssetResponse) -> Result<Self, Self::Error> {
        Ok(FuturesAsset {
            asset: f.asset,
            margin_balance: non_negative("marginBalance", f.margin_balance)?,
            wallet_balance: non_negative("walletBalance", f.wallet_balance)?,
        })
    }
}

impl TryFrom<FuturesPositionResponse> for FuturesPosition {
    type Error = ValidationError;

    fn try_from(p: FuturesPositionResponse) -> Result<Self, Self::Error> {
        Ok(FuturesPosition {
            symbol: p.symbol,
            entry_price: non_negative("entryPrice", p.entry_price)?,
            mark_price: non_negative("markPrice", p.mark_price)?,
            // Shorts carry a negative position amount, and unrealized profit
            // is a signed delta.
            position_amt: p.position_amt,
            unrealized_profit: p.un_realized_profit,
        })
    }
}

impl TryFrom<SnapshotVoResponse> for AccountSnapshot {
    type Error = ValidationError;

    fn try_from(vo: SnapshotVoResponse) -> Result<Self, Self::Error> {
        match vo {
            SnapshotVoResponse::Spot { update_time, data } => {
                Ok(AccountSnapshot::Spot(spot_snapshot(update_time, data)?))
            }
            SnapshotVoResponse::Margin { update_time, data } => {
                Ok(AccountSnapshot::Margin(margin_snapshot(update_time, data)?))
            }
            SnapshotVoResponse::Futures { update_time, data } => {
                Ok(AccountSnapshot::Futures(futures_snapshot(
                    update_time,
                    data,
                )?))
            }
        }
    }
}

fn spot_snapshot(
    update_time: u64,
    data: SpotSnapshotData,
) -> Result<SpotSnapshot, ValidationError> {
    Ok(SpotSnapshot {
        update_time: millis_to_datetime(update_time),
        total_asset_of_btc: non_negative("totalAssetOfBtc", data.total_asset_of_btc)?,
        balances: data
            .balances
            .into_iter()
            .map(Balance::try_from)
            .collect::<Result<Vec<_>, _>>()?,
    })
}

fn margin_snapshot(
    update_time: u64,
    data: MarginSnapshotData,
) -> Result<MarginSnapshot, ValidationError> {
    Ok(MarginSnapshot {
        update_time: millis_to_datetime(update_time),
        margin_level: non_negative("marginLevel", data.margin_level)?,
        total_asset_of_btc: non_negative("totalAssetOfBtc", data.total_asset_of_btc)?,
        total_liability_of_btc: non_negative("totalLiabilityOfBtc", data.total_liability_of_btc)?,
        // Net asset can dip below zero on an underwater margin account.
        total_net_asset_of_btc: data.total_net_asset_of_btc,
        user_assets: data
            .user_assets
            .into_iter()
            .map(MarginAsset::try_from)
            .collect::<Result<Vec<_>, _>>()?,
    })
}

fn futures_snapshot(
    update_time: u64,
    data: FuturesSnapshotData,
) -> Result<FuturesSnapshot, ValidationError> {
    Ok(FuturesSnapshot {
        update_time: millis_to_datetime(update_time),
        assets: data
            .assets
            .into_iter()
            .map(FuturesAsset::try_from)
            .collect::<Result<Vec<_>, _>>()?,
        positions: data
            .position
            .into_iter()
            .map(FuturesPosition::try_from)
            .collect::<Result<Vec<_>, _>>()?,
    })
}
