//! Market domain — connectivity checks and exchange metadata.
//!
//! Exchange info is served back as wire types directly: it is descriptive
//! metadata with no numeric trading fields to validate.

pub mod client;
pub mod wire;

pub use wire::{ExchangeInfoResponse as ExchangeInfo, SymbolInfoResponse as SymbolInfo};
