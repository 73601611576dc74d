//! Domain verticals: typed request/response models per endpoint family.
//!
//! Each module follows the same layout: domain types in `mod.rs`, serde wire
//! types in `wire.rs`, fallible wire-to-domain conversion in `convert.rs`,
//! and a borrowing sub-client in `client.rs`.

pub mod account;
pub mod kline;
pub mod market;
pub mod order;
pub mod orderbook;
pub mod stream;
pub mod ticker;
pub mod trade;
