use {
    serde::{Deserialize, Deserializer},
    serde_json::Value,
};

/// One row of market data for a single coin, as served by the tickers endpoint.
///
/// Only the four displayed fields are kept. Prices and supplies stay textual:
/// the table shows them verbatim and never does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticker {
    pub name: String,
    pub symbol: String,
    #[serde(deserialize_with = "text_or_number")]
    pub price_usd: String,
    #[serde(deserialize_with = "text_or_number")]
    pub tsupply: String,
}

impl Ticker {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        price_usd: impl Into<String>,
        tsupply: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            price_usd: price_usd.into(),
            tsupply: tsupply.into(),
        }
    }
}

/// Wire envelope: `{"data": [...], "info": {...}}`. `info` is ignored.
#[derive(Debug, Deserialize)]
pub struct TickersResponse {
    pub data: Vec<Ticker>,
}

// The API mostly sends decimals as strings, but some coins come back with bare numbers.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {}",
            other
        ))),
    }
}
