//! Provider-native option chain rows
//!
//! Raw rows keep every field optional. Numeric fields deserialize leniently:
//! a JSON number or a numeric string is accepted, anything else becomes
//! missing and is handled by the normalizer's mandatory-field pass.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One row of a raw option chain as delivered by the data provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContractRow {
    /// Exchange contract symbol
    #[serde(rename = "contractSymbol", default)]
    pub contract_symbol: Option<String>,
    /// Strike price
    #[serde(default, deserialize_with = "lenient_f64")]
    pub strike: Option<f64>,
    /// Last traded price
    #[serde(rename = "lastPrice", default, deserialize_with = "lenient_f64")]
    pub last_price: Option<f64>,
    /// Bid price
    #[serde(default, deserialize_with = "lenient_f64")]
    pub bid: Option<f64>,
    /// Ask price
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ask: Option<f64>,
    /// Traded volume
    #[serde(default, deserialize_with = "lenient_f64")]
    pub volume: Option<f64>,
    /// Open interest
    #[serde(rename = "openInterest", default, deserialize_with = "lenient_f64")]
    pub open_interest: Option<f64>,
    /// Market-quoted implied volatility
    #[serde(
        rename = "impliedVolatility",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub implied_volatility: Option<f64>,
    /// Derived days to expiry
    #[serde(default, deserialize_with = "lenient_f64")]
    pub dte: Option<f64>,
    /// Expiration date (YYYY-MM-DD)
    #[serde(rename = "expirationDate", default, deserialize_with = "lenient_date")]
    pub expiration: Option<NaiveDate>,
}

/// Accept a number or a numeric string; everything else is missing
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}

/// Accept an ISO date string; everything else is missing
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    })
}
