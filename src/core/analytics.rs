//! Per-contract analytics
//!
//! `Greeks` holds the pricing-kernel sensitivities; `AnalyticsResult` is the
//! full metric bundle computed once per surviving contract per analysis
//! cycle. Every field except the deliberately unbounded call-side loss
//! figures must be finite, or the contract is excluded upstream.

use serde::{Deserialize, Serialize};

use super::contract::ContractQuote;

/// Option Greeks (sensitivities)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Delta: dV/dS (sensitivity to spot)
    pub delta: f64,
    /// Gamma: d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// Theta: dV/dt (time decay, per calendar day)
    pub theta: f64,
    /// Vega: dV/dσ (per 1% vol move)
    pub vega: f64,
}

impl Greeks {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
        }
    }
}

/// Computed metric bundle for one contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// Calibrated implied volatility
    pub implied_vol: f64,
    /// Delta
    pub delta: f64,
    /// Gamma
    pub gamma: f64,
    /// Theta (per calendar day)
    pub theta: f64,
    /// Vega (per 1% vol point)
    pub vega: f64,
    /// Probability the option finishes in the money
    pub assignment_probability: f64,
    /// Annualized return (strategy-dependent variant)
    pub annualized_return: f64,
    /// Breakeven price for the short position
    pub breakeven_price: f64,
    /// Maximum profit (the premium received)
    pub max_profit: f64,
    /// Maximum loss; +inf for the call leg
    pub max_loss: f64,
    /// max_profit / max_loss; +inf when max_loss is 0
    pub risk_reward_ratio: f64,
}

impl AnalyticsResult {
    /// Check the finiteness invariant. `max_loss` and `risk_reward_ratio`
    /// are allowed to be +inf; everything else must be a finite number.
    pub fn is_well_formed(&self) -> bool {
        let core_finite = [
            self.implied_vol,
            self.delta,
            self.gamma,
            self.theta,
            self.vega,
            self.assignment_probability,
            self.annualized_return,
            self.breakeven_price,
            self.max_profit,
        ]
        .iter()
        .all(|v| v.is_finite());

        let bounded_ok = |v: f64| v.is_finite() || v == f64::INFINITY;

        core_finite && bounded_ok(self.max_loss) && bounded_ok(self.risk_reward_ratio)
    }
}

/// One row of the ranked output table: quote fields plus analytics fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedContract {
    /// The validated contract quote
    pub quote: ContractQuote,
    /// The computed metric bundle
    pub analytics: AnalyticsResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(max_loss: f64, annualized_return: f64) -> AnalyticsResult {
        AnalyticsResult {
            implied_vol: 0.3,
            delta: -0.3,
            gamma: 0.02,
            theta: -0.05,
            vega: 0.15,
            assignment_probability: 0.25,
            annualized_return,
            breakeven_price: 142.0,
            max_profit: 2.5,
            max_loss,
            risk_reward_ratio: 0.02,
        }
    }

    #[test]
    fn test_well_formed_allows_infinite_loss() {
        assert!(result_with(142.5, 0.2).is_well_formed());
        assert!(result_with(f64::INFINITY, 0.2).is_well_formed());
    }

    #[test]
    fn test_well_formed_rejects_nan() {
        assert!(!result_with(142.5, f64::NAN).is_well_formed());
        assert!(!result_with(f64::NAN, 0.2).is_well_formed());
        assert!(!result_with(f64::NEG_INFINITY, 0.2).is_well_formed());
    }
}
