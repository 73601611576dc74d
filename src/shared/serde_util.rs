//! Custom serde helpers for Binance wire formats.

/// (De)serializes a Unix-millis `u64` as `DateTime<Utc>`.
///
/// Binance sends every timestamp (`time`, `updateTime`, `transactTime`, kline
/// open/close times) as epoch milliseconds, not ISO 8601 strings.
pub mod timestamp_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp_millis(millis as i64)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp_millis())
    }
}

/// Converts an epoch-millis value into `DateTime<Utc>` outside of serde,
/// falling back to the epoch for out-of-range input.
pub fn millis_to_datetime(millis: u64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp_millis(millis as i64).unwrap_or_default()
}
