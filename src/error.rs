//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
///
/// Every non-2xx response surfaces as [`HttpError::Api`]; no call path returns
/// an error body as a success. The raw body is retained for inspection.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("API error {status} (code {code:?}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Binance error code (e.g. `-1121` for an unknown symbol), when the
        /// body carried one.
        code: Option<i64>,
        /// Binance error message, or the raw body when it was not JSON.
        message: String,
        /// Full response body as received.
        body: String,
    },

    #[error("Timeout")]
    Timeout,

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Endpoint requires credentials but none were configured")]
    MissingCredentials,

    #[error("Signing failed: {0}")]
    Signature(String),
}
