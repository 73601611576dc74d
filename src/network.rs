//! Network URL constants for the Binance spot REST API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.binance.com";

/// Alternative production hosts. All serve the same API as [`DEFAULT_API_URL`]
/// with independent rate-limit buckets.
pub const API_URL_1: &str = "https://api1.binance.com";
pub const API_URL_2: &str = "https://api2.binance.com";
pub const API_URL_3: &str = "https://api3.binance.com";
pub const API_URL_4: &str = "https://api4.binance.com";

/// Spot testnet base URL.
pub const TESTNET_API_URL: &str = "https://testnet.binance.vision";
