//! Authentication — API credentials and HMAC request signing.
//!
//! ## Security Model
//!
//! - Credentials are an explicit value passed to the client builder; there is no
//!   process-wide credential cache, and a client never reuses another client's
//!   keys implicitly.
//! - The API key travels in the `X-MBX-APIKEY` header on every endpoint that
//!   requires authentication.
//! - Signed (`USER_DATA` / `TRADE`) endpoints additionally carry a `timestamp`
//!   parameter and a `signature` parameter: the lowercase-hex HMAC-SHA256 of the
//!   full query string, keyed by the secret. The signature is always the final
//!   parameter, computed over everything before it.
//! - The secret key is never exposed via a public accessor and is redacted from
//!   `Debug` output.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// API key + secret for signed endpoints.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    secret_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Hex-encoded HMAC-SHA256 of `query` under the secret key.
    ///
    /// `query` must be the exact string sent on the wire, excluding the
    /// `signature` parameter itself.
    pub fn sign(&self, query: &str) -> Result<String, AuthError> {
        let mut mac = HmacSha256::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| AuthError::Signature(e.to_string()))?;
        mac.update(query.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Current time as epoch milliseconds, for the `timestamp` parameter.
pub fn timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
