//! Risk and return metrics for short-premium positions
//!
//! Operates on one contract plus its calibrated volatility. All functions are
//! pure; degenerate inputs degrade to the documented boundary value (zero
//! yield, indicator probability) instead of raising.

use serde::{Deserialize, Serialize};

use crate::core::OptionType;
use crate::models::black_scholes::{d2, norm_cdf};

/// Probability the option finishes in the money under the risk-neutral
/// lognormal model: Φ(-d2) for puts, Φ(d2) for calls.
///
/// At T ≤ 0 collapses to the deterministic indicator of whether spot is
/// already past the strike.
pub fn assignment_probability(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> f64 {
    if time <= 0.0 {
        return match option_type {
            OptionType::Put => {
                if spot <= strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Call => {
                if spot >= strike {
                    1.0
                } else {
                    0.0
                }
            }
        };
    }

    let d2 = d2(spot, strike, time, rate, vol);
    match option_type {
        OptionType::Put => norm_cdf(-d2),
        OptionType::Call => norm_cdf(d2),
    }
}

/// Annualized cash-secured-put yield: (premium / strike) * (365 / dte).
///
/// A zero or expired-dated yield is meaningless, not an error: returns 0
/// when dte is 0 or the premium is non-positive.
pub fn annualized_return(option_price: f64, strike: f64, dte: u32) -> f64 {
    if dte == 0 || option_price <= 0.0 || strike <= 0.0 {
        return 0.0;
    }
    (option_price / strike) * (365.0 / f64::from(dte))
}

/// Scenario payoffs and expected yield for a covered call, relative to the
/// holder's cost basis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoveredCallYield {
    /// Profit if assigned: premium + (strike - cost basis)
    pub assigned_profit: f64,
    /// Profit if not assigned: the premium
    pub unassigned_profit: f64,
    /// Probability-weighted expected profit
    pub expected_profit: f64,
    /// Annualized expected return on cost basis
    pub annualized_return: f64,
}

/// Covered-call expected yield.
///
/// Only meaningful for out-of-the-money calls (strike above spot); the
/// caller's strategy filter enforces that, not this function.
pub fn covered_call_yield(
    option_price: f64,
    strike: f64,
    cost_basis: f64,
    dte: u32,
    assignment_prob: f64,
) -> CoveredCallYield {
    let assigned_profit = option_price + (strike - cost_basis);
    let unassigned_profit = option_price;
    let expected_profit =
        assignment_prob * assigned_profit + (1.0 - assignment_prob) * unassigned_profit;

    let annualized = if dte == 0 || cost_basis <= 0.0 {
        0.0
    } else {
        (expected_profit / cost_basis) * (365.0 / f64::from(dte))
    };

    CoveredCallYield {
        assigned_profit,
        unassigned_profit,
        expected_profit,
        annualized_return: annualized,
    }
}

/// Breakeven price for the short position: strike - premium for puts,
/// strike + premium for calls.
pub fn breakeven_price(strike: f64, option_price: f64, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Put => strike - option_price,
        OptionType::Call => strike + option_price,
    }
}

/// Bounded profit/loss profile for the short option leg
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProfitProfile {
    /// Maximum profit: the premium received
    pub max_profit: f64,
    /// Maximum loss: strike - premium for cash-secured puts (the stock floor
    /// is zero); +inf for the call leg measured alone
    pub max_loss: f64,
    /// max_profit / max_loss; +inf when max_loss is 0 (risk-free premium)
    pub risk_reward_ratio: f64,
}

/// Profit/loss bounds and risk/reward for a short option.
///
/// Covered-call max loss here measures the option leg alone; the stock side
/// is already captured by the holder's cost basis outside this engine.
pub fn profit_profile(option_price: f64, strike: f64, option_type: OptionType) -> ProfitProfile {
    let max_profit = option_price;
    let max_loss = match option_type {
        OptionType::Put => strike - option_price,
        OptionType::Call => f64::INFINITY,
    };

    let risk_reward_ratio = if max_loss > 0.0 {
        max_profit / max_loss
    } else {
        f64::INFINITY
    };

    ProfitProfile {
        max_profit,
        max_loss,
        risk_reward_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_probability_scenario() {
        // S=150, K=145, T=0.1, r=0.05, sigma=0.30
        let prob = assignment_probability(150.0, 145.0, 0.1, 0.05, 0.30, OptionType::Put);
        assert!((prob - 0.3584).abs() < 0.005, "prob {}", prob);
    }

    #[test]
    fn test_assignment_probability_indicator_at_expiry() {
        assert_eq!(
            assignment_probability(140.0, 145.0, 0.0, 0.05, 0.30, OptionType::Put),
            1.0
        );
        assert_eq!(
            assignment_probability(150.0, 145.0, 0.0, 0.05, 0.30, OptionType::Put),
            0.0
        );
        assert_eq!(
            assignment_probability(150.0, 145.0, 0.0, 0.05, 0.30, OptionType::Call),
            1.0
        );
    }

    #[test]
    fn test_assignment_probability_monotone_in_strike() {
        // For a put, higher strike = deeper ITM = more likely assigned
        let mut last = 0.0;
        for strike in [130.0, 140.0, 150.0, 160.0] {
            let p = assignment_probability(150.0, strike, 0.1, 0.05, 0.30, OptionType::Put);
            assert!(p > last, "strike {} prob {} not > {}", strike, p, last);
            last = p;
        }
    }

    #[test]
    fn test_assignment_probability_decays_with_time() {
        // OTM put (spot above strike): probability falls as expiry approaches
        let mut last = 1.0;
        for time in [0.5, 0.25, 0.1, 0.02, 0.001] {
            let p = assignment_probability(150.0, 140.0, time, 0.05, 0.30, OptionType::Put);
            assert!(p < last, "time {} prob {} not < {}", time, p, last);
            last = p;
        }
    }

    #[test]
    fn test_annualized_return() {
        // $2 premium on a $100 strike over 30 days
        let r = annualized_return(2.0, 100.0, 30);
        assert!((r - 0.02 * (365.0 / 30.0)).abs() < 1e-12);

        assert_eq!(annualized_return(2.0, 100.0, 0), 0.0);
        assert_eq!(annualized_return(0.0, 100.0, 30), 0.0);
        assert_eq!(annualized_return(-1.0, 100.0, 30), 0.0);
    }

    #[test]
    fn test_covered_call_yield() {
        // Premium 3, strike 155, cost basis 150, 30 DTE, 25% assignment odds
        let y = covered_call_yield(3.0, 155.0, 150.0, 30, 0.25);

        assert!((y.assigned_profit - 8.0).abs() < 1e-12);
        assert!((y.unassigned_profit - 3.0).abs() < 1e-12);
        // 0.25 * 8 + 0.75 * 3 = 4.25
        assert!((y.expected_profit - 4.25).abs() < 1e-12);
        let expected = (4.25 / 150.0) * (365.0 / 30.0);
        assert!((y.annualized_return - expected).abs() < 1e-12);
    }

    #[test]
    fn test_covered_call_yield_degenerate_dte() {
        let y = covered_call_yield(3.0, 155.0, 150.0, 0, 0.25);
        assert_eq!(y.annualized_return, 0.0);
    }

    #[test]
    fn test_breakeven() {
        assert_eq!(breakeven_price(145.0, 2.85, OptionType::Put), 142.15);
        assert_eq!(breakeven_price(155.0, 3.0, OptionType::Call), 158.0);
    }

    #[test]
    fn test_profit_profile_put() {
        let p = profit_profile(2.85, 145.0, OptionType::Put);
        assert_eq!(p.max_profit, 2.85);
        assert_eq!(p.max_loss, 142.15);
        assert!((p.risk_reward_ratio - 2.85 / 142.15).abs() < 1e-12);
    }

    #[test]
    fn test_profit_profile_call_unbounded() {
        let p = profit_profile(3.0, 155.0, OptionType::Call);
        assert_eq!(p.max_profit, 3.0);
        assert_eq!(p.max_loss, f64::INFINITY);
        assert_eq!(p.risk_reward_ratio, 0.0);
    }

    #[test]
    fn test_profit_profile_zero_loss_flagged() {
        // Premium equals strike: nothing at risk on the put side
        let p = profit_profile(100.0, 100.0, OptionType::Put);
        assert_eq!(p.max_loss, 0.0);
        assert_eq!(p.risk_reward_ratio, f64::INFINITY);
    }
}
