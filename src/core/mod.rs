//! Core data types for the options income screener
//!
//! Defines fundamental types:
//! - OptionType / ContractQuote: a validated option contract with market data
//! - MarketSnapshot: underlying price data
//! - AnalyticsResult: per-contract metric bundle
//! - ScreeningCriteria: filter thresholds

pub mod analytics;
pub mod contract;
pub mod criteria;
pub mod error;

pub use analytics::*;
pub use contract::*;
pub use criteria::*;
pub use error::*;
