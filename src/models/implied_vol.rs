//! Implied volatility solver
//!
//! Inverts the pricing kernel: given an observed market price, find the
//! volatility that reproduces it. Newton-Raphson with vega as the derivative,
//! falling back to bisection over the full [0.01, 5.0] domain when the Newton
//! step stalls or leaves the bounds.
//!
//! Calibration is an auxiliary diagnostic: the `_or_default` wrapper degrades
//! to a 30% default so a single bad quote never stalls a screening cycle.

use crate::core::{EngineError, EngineResult, OptionType};

use super::black_scholes::{d1, norm_pdf, price};

/// Volatility returned when calibration fails
pub const DEFAULT_IMPLIED_VOL: f64 = 0.30;

/// Lower bound of the solve domain (1% annualized)
pub const VOL_LOWER_BOUND: f64 = 0.01;

/// Upper bound of the solve domain (500% annualized, covers distressed quotes)
pub const VOL_UPPER_BOUND: f64 = 5.0;

/// Implied volatility via Newton-Raphson with bisection fallback
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    option_type: OptionType,
) -> EngineResult<f64> {
    // Sanity checks
    if market_price <= 0.0 {
        return Err(EngineError::numerical("Non-positive option price"));
    }
    if time <= 0.0 {
        return Err(EngineError::numerical("Non-positive time to expiry"));
    }
    if spot <= 0.0 || strike <= 0.0 {
        return Err(EngineError::numerical("Non-positive spot or strike"));
    }

    // Check intrinsic value bounds
    let intrinsic = option_type.intrinsic(spot, strike);
    let df = (-rate * time).exp();
    if market_price < intrinsic * df * 0.99 {
        return Err(EngineError::numerical("Price below intrinsic value"));
    }

    // Initial guess using Brenner-Subrahmanyam approximation
    let atm_approx = market_price / (0.4 * spot * time.sqrt());
    let mut vol = atm_approx.clamp(VOL_LOWER_BOUND, 3.0);

    let max_iter = 100;
    let tol = 1e-8;

    for _ in 0..max_iter {
        let bs_price = price(spot, strike, time, rate, vol, option_type);
        let diff = bs_price - market_price;

        if diff.abs() < tol {
            return Ok(vol.clamp(VOL_LOWER_BOUND, VOL_UPPER_BOUND));
        }

        // Unscaled vega for the Newton step
        let d1 = d1(spot, strike, time, rate, vol);
        let vega = spot * norm_pdf(d1) * time.sqrt();

        if vega.abs() < 1e-12 {
            break; // Vega too small, switch to bisection
        }

        let new_vol = vol - diff / vega;

        if new_vol <= 0.0 || new_vol > VOL_UPPER_BOUND {
            break; // Out of bounds, switch to bisection
        }

        vol = new_vol;
    }

    bisection_iv(market_price, spot, strike, time, rate, option_type)
}

/// Implied volatility with the engine's failure policy: any solver error or
/// non-convergence yields the 30% default instead of propagating.
pub fn implied_volatility_or_default(
    market_price: f64,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    option_type: OptionType,
) -> f64 {
    match implied_volatility(market_price, spot, strike, time, rate, option_type) {
        Ok(iv) => iv,
        Err(e) => {
            tracing::debug!("IV solve failed ({}), using default", e);
            DEFAULT_IMPLIED_VOL
        }
    }
}

/// Bisection method for IV (slower but robust)
fn bisection_iv(
    market_price: f64,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    option_type: OptionType,
) -> EngineResult<f64> {
    let mut low = VOL_LOWER_BOUND;
    let mut high = VOL_UPPER_BOUND;
    let tol = 1e-8;
    let max_iter = 100;

    for _ in 0..max_iter {
        let mid = (low + high) / 2.0;
        let bs_price = price(spot, strike, time, rate, mid, option_type);
        let diff = bs_price - market_price;

        if diff.abs() < tol {
            return Ok(mid);
        }

        if diff > 0.0 {
            high = mid;
        } else {
            low = mid;
        }

        if (high - low) < tol {
            return Ok(mid);
        }
    }

    Err(EngineError::numerical("IV solver did not converge"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_atm() {
        let spot = 100.0;
        let strike = 100.0;
        let time = 0.5;
        let rate = 0.05;

        for vol in [0.05, 0.15, 0.30, 0.80, 1.50, 2.00] {
            let market = price(spot, strike, time, rate, vol, OptionType::Call);
            let iv =
                implied_volatility(market, spot, strike, time, rate, OptionType::Call).unwrap();
            assert!((iv - vol).abs() < 0.005, "vol {} recovered as {}", vol, iv);
        }
    }

    #[test]
    fn test_round_trip_otm_put() {
        let spot = 100.0;
        let strike = 90.0;
        let time = 0.25;
        let rate = 0.05;
        let vol = 0.30;

        let market = price(spot, strike, time, rate, vol, OptionType::Put);
        let iv = implied_volatility(market, spot, strike, time, rate, OptionType::Put).unwrap();
        assert!((iv - vol).abs() < 0.005);
    }

    #[test]
    fn test_rejects_degenerate_inputs() {
        assert!(implied_volatility(0.0, 100.0, 100.0, 0.5, 0.05, OptionType::Put).is_err());
        assert!(implied_volatility(5.0, 100.0, 100.0, 0.0, 0.05, OptionType::Put).is_err());
        assert!(implied_volatility(5.0, -1.0, 100.0, 0.5, 0.05, OptionType::Put).is_err());
        // Price below intrinsic
        assert!(implied_volatility(1.0, 80.0, 100.0, 0.5, 0.0, OptionType::Put).is_err());
    }

    #[test]
    fn test_default_on_failure() {
        let iv = implied_volatility_or_default(0.0, 100.0, 100.0, 0.5, 0.05, OptionType::Put);
        assert_eq!(iv, DEFAULT_IMPLIED_VOL);

        let iv = implied_volatility_or_default(1.0, 80.0, 100.0, 0.5, 0.0, OptionType::Put);
        assert_eq!(iv, DEFAULT_IMPLIED_VOL);
    }

    #[test]
    fn test_result_within_domain() {
        let market = price(100.0, 100.0, 0.5, 0.05, 0.25, OptionType::Call);
        let iv = implied_volatility(market, 100.0, 100.0, 0.5, 0.05, OptionType::Call).unwrap();
        assert!((VOL_LOWER_BOUND..=VOL_UPPER_BOUND).contains(&iv));
    }
}
