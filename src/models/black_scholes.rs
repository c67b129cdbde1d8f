//! Black-Scholes pricing kernel
//!
//! Provides:
//! - European option pricing (five canonical inputs: S, K, T, r, sigma)
//! - Greeks computation (delta, gamma, per-day theta, per-1%-vol vega)
//!
//! Edge policy: T ≤ 0 bypasses the closed form entirely and returns intrinsic
//! value (the time-value terms are undefined at expiry). Greeks at T ≤ 0
//! return their discrete limiting values. Prices are floored at 0 to remove
//! floating-point negative noise.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{Greeks, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    d1(spot, strike, time, rate, vol) - vol * time.sqrt()
}

/// Black-Scholes European option price
pub fn price(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> f64 {
    if time <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }

    if vol <= 0.0 {
        // Zero vol: deterministic outcome, discounted intrinsic on the forward
        let df = (-rate * time).exp();
        return match option_type {
            OptionType::Call => (spot - strike * df).max(0.0),
            OptionType::Put => (strike * df - spot).max(0.0),
        };
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(spot, strike, time, rate, vol);
    let df = (-rate * time).exp();

    let price = match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    };

    price.max(0.0)
}

/// Black-Scholes Greeks
pub fn greeks(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> Greeks {
    if time <= 0.0 || vol <= 0.0 {
        // At expiry or zero vol: discrete limiting values
        let delta = match option_type {
            OptionType::Call => {
                if spot > strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if spot < strike {
                    -1.0
                } else {
                    0.0
                }
            }
        };
        return Greeks::new(delta, 0.0, 0.0, 0.0);
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(spot, strike, time, rate, vol);
    let df = (-rate * time).exp();
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);

    // Delta
    let delta = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    };

    // Gamma (same for call and put)
    let gamma = pdf_d1 / (spot * vol * sqrt_t);

    // Theta (per calendar day); the rate-carry term flips sign between types
    let term1 = -spot * pdf_d1 * vol / (2.0 * sqrt_t);
    let theta = match option_type {
        OptionType::Call => term1 - rate * strike * df * norm_cdf(d2),
        OptionType::Put => term1 + rate * strike * df * norm_cdf(-d2),
    };
    let theta_per_day = theta / 365.0;

    // Vega (same for call and put, per 1% vol move)
    let vega = spot * pdf_d1 * sqrt_t / 100.0;

    Greeks::new(delta, gamma, theta_per_day, vega)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-10);
        assert!((norm_cdf(1.96) - 0.975).abs() < 0.001);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 0.001);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S - K*e^(-rT)
        for (spot, strike, time, vol) in [
            (100.0, 100.0, 1.0, 0.20),
            (150.0, 145.0, 0.1, 0.30),
            (50.0, 80.0, 0.5, 0.60),
        ] {
            let rate = 0.05;
            let call = price(spot, strike, time, rate, vol, OptionType::Call);
            let put = price(spot, strike, time, rate, vol, OptionType::Put);
            let parity = call - put - (spot - strike * (-rate * time).exp());
            assert!(parity.abs() < 1e-8, "parity violated: {}", parity);
        }
    }

    #[test]
    fn test_price_converges_to_intrinsic() {
        // T -> 0
        let p = price(90.0, 100.0, 1e-9, 0.05, 0.30, OptionType::Put);
        assert!((p - 10.0).abs() < 0.01);

        // T = 0 exactly: intrinsic, no kernel evaluation
        assert_eq!(price(90.0, 100.0, 0.0, 0.05, 0.30, OptionType::Put), 10.0);
        assert_eq!(price(110.0, 100.0, 0.0, 0.05, 0.30, OptionType::Call), 10.0);
        assert_eq!(price(110.0, 100.0, 0.0, 0.05, 0.30, OptionType::Put), 0.0);

        // sigma -> 0 with spot far from strike: discounted intrinsic
        let p = price(150.0, 100.0, 0.5, 0.05, 0.0, OptionType::Call);
        let expected = 150.0 - 100.0 * (-0.05_f64 * 0.5).exp();
        assert!((p - expected).abs() < 1e-10);
    }

    #[test]
    fn test_price_nonnegative() {
        let p = price(100.0, 300.0, 0.01, 0.05, 0.05, OptionType::Call);
        assert!(p >= 0.0);
    }

    #[test]
    fn test_delta_bounds() {
        for strike in [50.0, 90.0, 100.0, 110.0, 200.0] {
            for time in [0.01, 0.25, 1.0, 3.0] {
                let gc = greeks(100.0, strike, time, 0.05, 0.35, OptionType::Call);
                let gp = greeks(100.0, strike, time, 0.05, 0.35, OptionType::Put);
                assert!((0.0..=1.0).contains(&gc.delta));
                assert!((-1.0..=0.0).contains(&gp.delta));
            }
        }
    }

    #[test]
    fn test_greeks_atm_call() {
        let g = greeks(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call);

        // ATM call delta around 0.5-0.7
        assert!(g.delta > 0.5 && g.delta < 0.7);
        assert!(g.gamma > 0.0);
        // Time decay
        assert!(g.theta < 0.0);
        assert!(g.vega > 0.0);
    }

    #[test]
    fn test_greeks_at_expiry() {
        let g = greeks(110.0, 100.0, 0.0, 0.05, 0.30, OptionType::Call);
        assert_eq!(g.delta, 1.0);
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.theta, 0.0);
        assert_eq!(g.vega, 0.0);

        let g = greeks(90.0, 100.0, 0.0, 0.05, 0.30, OptionType::Put);
        assert_eq!(g.delta, -1.0);
    }

    #[test]
    fn test_cash_secured_put_scenario() {
        // S=150, K=145, T=0.1, r=0.05, sigma=0.30
        let p = price(150.0, 145.0, 0.1, 0.05, 0.30, OptionType::Put);
        assert!((p - 3.167).abs() < 0.02, "put price {}", p);

        let g = greeks(150.0, 145.0, 0.1, 0.05, 0.30, OptionType::Put);
        assert!((g.delta - (-0.3236)).abs() < 0.005, "put delta {}", g.delta);
    }
}
