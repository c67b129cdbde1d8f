//! Pricing models
//!
//! - Black-Scholes: closed-form European pricing and Greeks
//! - Implied volatility: Newton-Raphson solver with bisection fallback

pub mod black_scholes;
pub mod implied_vol;

pub use black_scholes::{d1, d2, greeks as bs_greeks, norm_cdf, norm_pdf, price as bs_price};
pub use implied_vol::{
    implied_volatility, implied_volatility_or_default, DEFAULT_IMPLIED_VOL, VOL_LOWER_BOUND,
    VOL_UPPER_BOUND,
};
