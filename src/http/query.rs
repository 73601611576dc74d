//! Query-string parameter bag.
//!
//! Endpoints document which optional keys they recognize, but the bag itself
//! accepts any key and encodes it verbatim: the exchange's parameter list
//! evolves faster than any client, so unknown keys fail remotely rather than
//! locally. Insertion order is preserved in the encoded string, which matters
//! for signing (the signature covers the exact byte sequence sent).

use rust_decimal::Decimal;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Decimal(Decimal),
    /// Encodes as `[v1,v2,...]` — comma-joined, bracket-wrapped, unquoted.
    /// Binance's `symbols` parameter uses this shape.
    List(Vec<String>),
}

impl ParamValue {
    fn encode(&self) -> String {
        match self {
            ParamValue::Str(s) => urlencoding::encode(s).into_owned(),
            ParamValue::Int(v) => v.to_string(),
            ParamValue::UInt(v) => v.to_string(),
            ParamValue::Float(v) => v.to_string(),
            ParamValue::Bool(v) => v.to_string(),
            ParamValue::Decimal(v) => v.to_string(),
            ParamValue::List(items) => format!("[{}]", items.join(",")),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::UInt(v as u64)
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        ParamValue::UInt(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<Decimal> for ParamValue {
    fn from(v: Decimal) -> Self {
        ParamValue::Decimal(v)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        ParamValue::List(v)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(v: &[&str]) -> Self {
        ParamValue::List(v.iter().map(|s| s.to_string()).collect())
    }
}

/// An ordered bag of query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a parameter only when `value` is `Some` (builder style).
    pub fn with_opt(
        mut self,
        key: impl Into<String>,
        value: Option<impl Into<ParamValue>>,
    ) -> Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Append a parameter in place.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Append every entry of `other` after this bag's entries (builder style).
    pub fn merged(mut self, other: Params) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Encode as `key=value&key=value`, in insertion order, without a leading `?`.
    pub fn encode(&self) -> String {
        let mut query = String::new();
        for (idx, (key, value)) in self.entries.iter().enumerate() {
            if idx > 0 {
                query.push('&');
            }
            query.push_str(key);
            query.push('=');
            query.push_str(&value.encode());
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_encode_preserves_insertion_order() {
        let params = Params::new()
            .with("symbol", "LTCBTC")
            .with("side", "BUY")
            .with("quantity", 1u32)
            .with("price", Decimal::from_str("0.1").unwrap());
        assert_eq!(params.encode(), "symbol=LTCBTC&side=BUY&quantity=1&price=0.1");
    }

    #[test]
    fn test_list_encoding_has_no_trailing_separator() {
        let params = Params::new().with(
            "symbols",
            vec!["BTCUSDT".to_string(), "ETHUSDT".to_string(), "BNBBTC".to_string()],
        );
        assert_eq!(params.encode(), "symbols=[BTCUSDT,ETHUSDT,BNBBTC]");
    }

    #[test]
    fn test_single_element_list() {
        let params = Params::new().with("symbols", vec!["BTCUSDT".to_string()]);
        assert_eq!(params.encode(), "symbols=[BTCUSDT]");
    }

    #[test]
    fn test_type_precedes_symbols() {
        // Mirrors the 24hr-ticker call site: `type` is pushed before `symbols`.
        let params = Params::new()
            .with("type", "MINI")
            .with("symbols", vec!["BTCUSDT".to_string(), "ETHUSDT".to_string()]);
        assert_eq!(params.encode(), "type=MINI&symbols=[BTCUSDT,ETHUSDT]");
    }

    #[test]
    fn test_string_values_are_url_encoded() {
        let params = Params::new().with("newClientOrderId", "my order/1");
        assert_eq!(params.encode(), "newClientOrderId=my%20order%2F1");
    }

    #[test]
    fn test_with_opt_skips_none() {
        let params = Params::new()
            .with("symbol", "BTCUSDT")
            .with_opt("limit", None::<u32>)
            .with_opt("fromId", Some(42u64));
        assert_eq!(params.encode(), "symbol=BTCUSDT&fromId=42");
    }

    #[test]
    fn test_unknown_keys_encode_verbatim() {
        let params = Params::new().with("someFutureParam", "x");
        assert_eq!(params.encode(), "someFutureParam=x");
    }

    #[test]
    fn test_empty_bag() {
        assert_eq!(Params::new().encode(), "");
        assert!(Params::new().is_empty());
    }
}
