//! Analysis facade
//!
//! `OptionsAnalyzer` wires the pricing kernel, IV calibration, and the risk
//! and return metrics into a per-contract and per-chain analysis pass. It is
//! explicitly constructed with its risk-free rate; there is no global state.

use serde::{Deserialize, Serialize};

use crate::core::{
    AnalyticsResult, AnalyzedContract, ContractQuote, EngineError, EngineResult, OptionType,
    ScreeningCriteria,
};
use crate::metrics::{
    annualized_return, assignment_probability, breakeven_price, covered_call_yield, profit_profile,
};
use crate::models::{bs_greeks, implied_volatility_or_default};
use crate::screen::{screen, summarize, ScreenSummary};

/// Income strategy under analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    /// Sell a put, fully cash-collateralized at the strike
    CashSecuredPut,
    /// Sell a call against stock held at the given cost basis
    CoveredCall { cost_basis: f64 },
}

impl Strategy {
    /// The option side this strategy sells
    pub fn option_type(&self) -> OptionType {
        match self {
            Strategy::CashSecuredPut => OptionType::Put,
            Strategy::CoveredCall { .. } => OptionType::Call,
        }
    }
}

/// Per-chain analysis engine
#[derive(Debug, Clone)]
pub struct OptionsAnalyzer {
    risk_free_rate: f64,
}

impl OptionsAnalyzer {
    /// Create an analyzer with the given annualized risk-free rate.
    ///
    /// The rate is validated once here so every downstream computation can
    /// assume it is sane.
    pub fn new(risk_free_rate: f64) -> EngineResult<Self> {
        if !risk_free_rate.is_finite() || !(0.0..=1.0).contains(&risk_free_rate) {
            return Err(EngineError::invalid_input(format!(
                "Risk-free rate out of range [0, 1]: {}",
                risk_free_rate
            )));
        }
        Ok(Self { risk_free_rate })
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Compute the full metric bundle for one contract.
    ///
    /// Returns `None` when the result fails the finiteness invariant; such
    /// contracts are excluded rather than poisoning the ranked output.
    pub fn analyze_contract(
        &self,
        quote: &ContractQuote,
        spot: f64,
        strategy: Strategy,
    ) -> Option<AnalyticsResult> {
        let time = quote.time_to_expiry();

        // Calibrate to the quoted price; a failed solve degrades to the
        // default vol instead of dropping the contract.
        let implied_vol = implied_volatility_or_default(
            quote.price,
            spot,
            quote.strike,
            time,
            self.risk_free_rate,
            quote.option_type,
        );

        let greeks = bs_greeks(
            spot,
            quote.strike,
            time,
            self.risk_free_rate,
            implied_vol,
            quote.option_type,
        );

        let prob = assignment_probability(
            spot,
            quote.strike,
            time,
            self.risk_free_rate,
            implied_vol,
            quote.option_type,
        );

        let annual_return = match strategy {
            Strategy::CashSecuredPut => annualized_return(quote.price, quote.strike, quote.dte),
            Strategy::CoveredCall { cost_basis } => {
                covered_call_yield(quote.price, quote.strike, cost_basis, quote.dte, prob)
                    .annualized_return
            }
        };

        let profile = profit_profile(quote.price, quote.strike, quote.option_type);

        let result = AnalyticsResult {
            implied_vol,
            delta: greeks.delta,
            gamma: greeks.gamma,
            theta: greeks.theta,
            vega: greeks.vega,
            assignment_probability: prob,
            annualized_return: annual_return,
            breakeven_price: breakeven_price(quote.strike, quote.price, quote.option_type),
            max_profit: profile.max_profit,
            max_loss: profile.max_loss,
            risk_reward_ratio: profile.risk_reward_ratio,
        };

        if !result.is_well_formed() {
            tracing::warn!(
                strike = quote.strike,
                dte = quote.dte,
                "excluding contract with non-finite analytics"
            );
            return None;
        }

        Some(result)
    }

    /// Analyze a full chain for the given strategy.
    ///
    /// Contracts on the wrong side of spot for the strategy (ITM strikes)
    /// and contracts whose option type does not match the strategy are
    /// skipped before any pricing work.
    pub fn analyze_chain(
        &self,
        quotes: &[ContractQuote],
        spot: f64,
        strategy: Strategy,
    ) -> Vec<AnalyzedContract> {
        let side = strategy.option_type();

        let analyzed: Vec<AnalyzedContract> = quotes
            .iter()
            .filter(|q| q.option_type == side && side.is_otm_strike(spot, q.strike))
            .filter_map(|q| {
                self.analyze_contract(q, spot, strategy)
                    .map(|analytics| AnalyzedContract {
                        quote: q.clone(),
                        analytics,
                    })
            })
            .collect();

        tracing::info!(
            chain = quotes.len(),
            analyzed = analyzed.len(),
            spot,
            ?strategy,
            "analyzed option chain"
        );

        analyzed
    }

    /// Analyze, screen, and rank a chain in one pass.
    pub fn screen_chain(
        &self,
        quotes: &[ContractQuote],
        spot: f64,
        strategy: Strategy,
        criteria: &ScreeningCriteria,
    ) -> (Vec<AnalyzedContract>, ScreenSummary) {
        let analyzed = self.analyze_chain(quotes, spot, strategy);
        let ranked = screen(&analyzed, criteria);
        let summary = summarize(&ranked);
        (ranked, summary)
    }
}
