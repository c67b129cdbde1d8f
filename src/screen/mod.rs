//! Screening and ranking
//!
//! Applies the conjunctive criteria filter to analyzed contracts and ranks
//! survivors by annualized return. The pass is deterministic: same input,
//! same output, and candidates tied on return keep their input order.

use serde::{Deserialize, Serialize};

use crate::core::{AnalyzedContract, ScreeningCriteria};

/// Filter analyzed contracts against the criteria and rank the survivors
/// by annualized return, best first.
///
/// A contract passes only if every active threshold holds. An empty result
/// is a valid outcome, not an error.
pub fn screen(
    contracts: &[AnalyzedContract],
    criteria: &ScreeningCriteria,
) -> Vec<AnalyzedContract> {
    let mut passed: Vec<AnalyzedContract> = contracts
        .iter()
        .filter(|c| passes(c, criteria))
        .cloned()
        .collect();

    // Stable sort keeps insertion order for equal returns
    passed.sort_by(|a, b| {
        b.analytics
            .annualized_return
            .partial_cmp(&a.analytics.annualized_return)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::info!(
        candidates = contracts.len(),
        passed = passed.len(),
        "screened contracts"
    );

    passed
}

fn passes(contract: &AnalyzedContract, criteria: &ScreeningCriteria) -> bool {
    let a = &contract.analytics;
    let q = &contract.quote;

    if a.annualized_return < criteria.min_annual_return {
        return false;
    }
    if a.assignment_probability > criteria.max_assignment_prob {
        return false;
    }
    if q.volume < criteria.min_volume {
        return false;
    }
    if q.dte > criteria.max_dte {
        return false;
    }
    if let Some(min) = criteria.min_strike {
        if q.strike < min {
            return false;
        }
    }
    if let Some(max) = criteria.max_strike {
        if q.strike > max {
            return false;
        }
    }
    true
}

/// Aggregate view of a screening pass
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenSummary {
    /// Contracts that passed every criterion
    pub count: usize,
    /// Mean annualized return of the survivors
    pub mean_annualized_return: f64,
    /// Mean assignment probability of the survivors
    pub mean_assignment_probability: f64,
}

/// Summarize a screened set. Means are 0 for an empty set.
pub fn summarize(contracts: &[AnalyzedContract]) -> ScreenSummary {
    if contracts.is_empty() {
        return ScreenSummary {
            count: 0,
            mean_annualized_return: 0.0,
            mean_assignment_probability: 0.0,
        };
    }

    let n = contracts.len() as f64;
    let ret_sum: f64 = contracts
        .iter()
        .map(|c| c.analytics.annualized_return)
        .sum();
    let prob_sum: f64 = contracts
        .iter()
        .map(|c| c.analytics.assignment_probability)
        .sum();

    ScreenSummary {
        count: contracts.len(),
        mean_annualized_return: ret_sum / n,
        mean_assignment_probability: prob_sum / n,
    }
}
