//! Contract and underlying definitions
//!
//! A `ContractQuote` is one validated option contract with its market data,
//! produced by chain normalization and never mutated afterwards. A
//! `MarketSnapshot` is the underlying quote it belongs to.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Is a contract of this type in the money at given spot?
    pub fn is_itm(&self, spot: f64, strike: f64) -> bool {
        match self {
            OptionType::Call => spot > strike,
            OptionType::Put => spot < strike,
        }
    }

    /// Out-of-the-money test for the short-premium strategies: a put is a
    /// candidate only below spot, a call only above it.
    pub fn is_otm_strike(&self, spot: f64, strike: f64) -> bool {
        match self {
            OptionType::Call => strike > spot,
            OptionType::Put => strike < spot,
        }
    }
}

/// Snapshot of the underlying at fetch time
///
/// Produced by the external data collaborator; consumed read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Underlying symbol (e.g., "AAPL")
    pub symbol: String,
    /// Current spot price (strictly positive)
    pub spot: f64,
    /// Annualized historical volatility; 30% default when unavailable
    pub historical_volatility: f64,
    /// Company name, if known
    pub name: Option<String>,
    /// Sector classification, if known
    pub sector: Option<String>,
    /// Timestamp when fetched
    pub timestamp: DateTime<Utc>,
}

impl MarketSnapshot {
    /// Default historical volatility when the provider has none
    pub const DEFAULT_HISTORICAL_VOL: f64 = 0.30;

    /// Create a snapshot, rejecting non-positive spot at the boundary
    pub fn new(symbol: impl Into<String>, spot: f64) -> EngineResult<Self> {
        if spot <= 0.0 || !spot.is_finite() {
            return Err(EngineError::invalid_input(format!(
                "Non-positive spot price: {}",
                spot
            )));
        }

        Ok(Self {
            symbol: symbol.into(),
            spot,
            historical_volatility: Self::DEFAULT_HISTORICAL_VOL,
            name: None,
            sector: None,
            timestamp: Utc::now(),
        })
    }

    /// Set historical volatility, keeping the default if the value is unusable
    pub fn with_historical_volatility(mut self, vol: Option<f64>) -> Self {
        if let Some(v) = vol {
            if v.is_finite() && v > 0.0 {
                self.historical_volatility = v;
            }
        }
        self
    }

    pub fn with_sector(mut self, name: Option<String>, sector: Option<String>) -> Self {
        self.name = name;
        self.sector = sector;
        self
    }
}

/// One validated option contract with market data
///
/// Invariants established by the normalizer: strike > 0, price > 0, dte has
/// been checked non-negative, implied_vol is sanitized (≤ 5.0, backfilled
/// when missing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractQuote {
    /// Exchange contract symbol, if provided
    pub contract_symbol: Option<String>,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Option price (last traded)
    pub price: f64,
    /// Bid price
    pub bid: Option<f64>,
    /// Ask price
    pub ask: Option<f64>,
    /// Traded volume (placeholder 100 when the provider omits the column)
    pub volume: u64,
    /// Open interest
    pub open_interest: Option<u64>,
    /// Market-quoted implied volatility, sanitized
    pub implied_vol: f64,
    /// Calendar days to expiry
    pub dte: u32,
    /// Expiration date, if provided
    pub expiration: Option<NaiveDate>,
}

impl ContractQuote {
    /// Time to expiry in years (365-day convention)
    pub fn time_to_expiry(&self) -> f64 {
        f64::from(self.dte) / 365.0
    }

    /// Mid price from bid/ask, when both are present
    pub fn mid(&self) -> Option<f64> {
        match (self.bid, self.ask) {
            (Some(b), Some(a)) => Some((b + a) / 2.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_otm_strike() {
        assert!(OptionType::Put.is_otm_strike(150.0, 145.0));
        assert!(!OptionType::Put.is_otm_strike(150.0, 155.0));
        assert!(OptionType::Call.is_otm_strike(150.0, 155.0));
        assert!(!OptionType::Call.is_otm_strike(150.0, 145.0));
    }

    #[test]
    fn test_snapshot_rejects_bad_spot() {
        assert!(MarketSnapshot::new("AAPL", 150.0).is_ok());
        assert!(MarketSnapshot::new("AAPL", 0.0).is_err());
        assert!(MarketSnapshot::new("AAPL", -5.0).is_err());
        assert!(MarketSnapshot::new("AAPL", f64::NAN).is_err());
    }

    #[test]
    fn test_snapshot_vol_fallback() {
        let snap = MarketSnapshot::new("AAPL", 150.0)
            .unwrap()
            .with_historical_volatility(None);
        assert_eq!(
            snap.historical_volatility,
            MarketSnapshot::DEFAULT_HISTORICAL_VOL
        );

        let snap = snap.with_historical_volatility(Some(0.45));
        assert_eq!(snap.historical_volatility, 0.45);

        let snap = snap.with_historical_volatility(Some(f64::NAN));
        assert_eq!(snap.historical_volatility, 0.45);
    }
}
