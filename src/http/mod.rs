//! HTTP client layer — `BinanceHttp` with per-endpoint signing levels.

pub mod client;
pub mod query;

pub use client::{BinanceHttp, Security};
pub use query::{ParamValue, Params};
