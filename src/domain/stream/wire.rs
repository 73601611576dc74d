//! Wire types for user data stream responses (REST).

use serde::{Deserialize, Serialize};

/// `POST /api/v3/userDataStream` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListenKeyResponse {
    pub listen_key: String,
}
