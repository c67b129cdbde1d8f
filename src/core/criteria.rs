//! Screening criteria
//!
//! Thresholds applied as a pure conjunction by the screening pipeline.

use serde::{Deserialize, Serialize};

/// Filter thresholds for the screening pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningCriteria {
    /// Minimum annualized return (decimal, e.g. 0.15 = 15%)
    pub min_annual_return: f64,
    /// Maximum assignment probability (decimal)
    pub max_assignment_prob: f64,
    /// Minimum traded volume
    pub min_volume: u64,
    /// Maximum days to expiry
    pub max_dte: u32,
    /// Optional minimum strike
    pub min_strike: Option<f64>,
    /// Optional maximum strike
    pub max_strike: Option<f64>,
}

impl Default for ScreeningCriteria {
    fn default() -> Self {
        Self {
            min_annual_return: 0.15,
            max_assignment_prob: 0.30,
            min_volume: 50,
            max_dte: 45,
            min_strike: None,
            max_strike: None,
        }
    }
}

impl ScreeningCriteria {
    pub fn with_strike_band(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_strike = min;
        self.max_strike = max;
        self
    }
}
