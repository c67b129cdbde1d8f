//! Ranked-output export
//!
//! Flattens analyzed contracts into one CSV row each. Unbounded loss figures
//! serialize as "inf" so spreadsheet consumers see them rather than a blank.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::{AnalyzedContract, EngineResult};

/// One flattened CSV row
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    contract_symbol: &'a str,
    option_type: &'a str,
    strike: f64,
    price: f64,
    volume: u64,
    dte: u32,
    implied_vol: f64,
    delta: f64,
    gamma: f64,
    theta: f64,
    vega: f64,
    assignment_probability: f64,
    annualized_return: f64,
    breakeven_price: f64,
    max_profit: f64,
    max_loss: String,
    risk_reward_ratio: String,
}

fn fmt_bounded(v: f64) -> String {
    if v == f64::INFINITY {
        "inf".to_string()
    } else {
        format!("{:.6}", v)
    }
}

/// Write analyzed contracts as CSV to any writer.
pub fn write_csv<W: Write>(contracts: &[AnalyzedContract], writer: W) -> EngineResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for c in contracts {
        let q = &c.quote;
        let a = &c.analytics;
        let row = CsvRow {
            contract_symbol: q.contract_symbol.as_deref().unwrap_or(""),
            option_type: match q.option_type {
                crate::core::OptionType::Call => "call",
                crate::core::OptionType::Put => "put",
            },
            strike: q.strike,
            price: q.price,
            volume: q.volume,
            dte: q.dte,
            implied_vol: a.implied_vol,
            delta: a.delta,
            gamma: a.gamma,
            theta: a.theta,
            vega: a.vega,
            assignment_probability: a.assignment_probability,
            annualized_return: a.annualized_return,
            breakeven_price: a.breakeven_price,
            max_profit: a.max_profit,
            max_loss: fmt_bounded(a.max_loss),
            risk_reward_ratio: fmt_bounded(a.risk_reward_ratio),
        };
        wtr.serialize(row)
            .map_err(|e| crate::core::EngineError::Serialization(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write analyzed contracts as a CSV file at the given path.
pub fn export_csv<P: AsRef<Path>>(contracts: &[AnalyzedContract], path: P) -> EngineResult<()> {
    let file = File::create(path.as_ref())?;
    write_csv(contracts, file)?;
    tracing::info!(
        rows = contracts.len(),
        path = %path.as_ref().display(),
        "exported screening results"
    );
    Ok(())
}
