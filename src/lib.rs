//! # Wheel Screener - Options Income Analytics Engine
//!
//! A library for screening exchange-listed equity options for two premium-income
//! strategies: cash-secured put selling and covered-call selling.
//!
//! ## Overview
//!
//! Each contract in a raw option chain is cleaned, priced with the Black-Scholes
//! model, calibrated to its market price, and scored with risk/return metrics.
//! A multi-criteria screening pipeline then ranks the survivors by annualized
//! yield.
//!
//! ## Key Components
//!
//! - **Pricing Kernel**: Closed-form Black-Scholes price and Greeks
//! - **IV Solver**: Newton-Raphson with bisection fallback
//! - **Risk & Return Metrics**: Assignment probability, annualized yield,
//!   breakeven, bounded max profit/loss
//! - **Contract Normalizer**: Typed cleaning of raw provider chains
//! - **Screening Pipeline**: Conjunctive filters with deterministic ranking
//!
//! ## Usage
//!
//! ```rust
//! use wheel_screener::prelude::*;
//!
//! let analyzer = OptionsAnalyzer::new(0.05).unwrap();
//! let snapshot = MarketSnapshot::new("AAPL", 150.0).unwrap();
//!
//! let quote = ContractQuote {
//!     contract_symbol: None,
//!     option_type: OptionType::Put,
//!     strike: 145.0,
//!     price: 2.85,
//!     bid: Some(2.80),
//!     ask: Some(2.90),
//!     volume: 120,
//!     open_interest: Some(500),
//!     implied_vol: 0.30,
//!     dte: 36,
//!     expiration: None,
//! };
//!
//! let results = analyzer.analyze_chain(&[quote], snapshot.spot, Strategy::CashSecuredPut);
//! let ranked = screen(&results, &ScreeningCriteria::default());
//! assert!(ranked.len() <= results.len());
//! ```
//!
//! ## What This Engine Does NOT Do
//!
//! - Fetch market data (a normalized snapshot and raw chain are inputs)
//! - Route or execute orders
//! - Track positions across analysis cycles
//! - Price American early exercise (European approximation)
//! - Model volatility surfaces beyond single-point IV solves

pub mod chain;
pub mod core;
pub mod engine;
pub mod metrics;
pub mod models;
pub mod report;
pub mod screen;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        AnalyticsResult, AnalyzedContract, ContractQuote, EngineError, EngineResult, Greeks,
        MarketSnapshot, OptionType, ScreeningCriteria,
    };

    // Chain normalization
    pub use crate::chain::{normalize, RawContractRow};

    // Pricing and calibration
    pub use crate::models::{
        bs_greeks, bs_price, implied_volatility, implied_volatility_or_default, norm_cdf,
        norm_pdf, DEFAULT_IMPLIED_VOL,
    };

    // Metrics
    pub use crate::metrics::{
        annualized_return, assignment_probability, breakeven_price, covered_call_yield,
        profit_profile, CoveredCallYield, ProfitProfile,
    };

    // Screening
    pub use crate::screen::{screen, summarize, ScreenSummary};

    // Engine facade
    pub use crate::engine::{OptionsAnalyzer, Strategy};
}

// Re-export main types at crate root
pub use crate::core::{EngineError, EngineResult};
pub use crate::engine::{OptionsAnalyzer, Strategy};
