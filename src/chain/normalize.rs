//! Chain cleaning rules
//!
//! Validates raw provider rows into `ContractQuote` records:
//!
//! - Table-level: strike or price column entirely absent → empty result
//!   (pricing is impossible without them)
//! - Row drops: null strike/price, non-positive price, volume < 1 when the
//!   provider supplies volume, quoted IV > 5.0, negative (expired) DTE
//! - Backfills, surfaced in logs: missing DTE → 30 days, absent volume
//!   column → placeholder 100, missing IV → 0.30

use crate::core::{ContractQuote, OptionType};
use crate::models::DEFAULT_IMPLIED_VOL;

use super::raw::RawContractRow;

/// Default days-to-expiry when the provider omits it (documented heuristic)
pub const DEFAULT_DTE: u32 = 30;

/// Placeholder volume when the provider omits the column entirely,
/// distinguishing "no volume data" from "zero liquidity"
pub const PLACEHOLDER_VOLUME: u64 = 100;

/// Quoted IV above this is treated as corrupt, not merely high
pub const MAX_QUOTED_IV: f64 = 5.0;

/// Validate and clean a raw option chain into contract quotes.
///
/// The provider delivers calls and puts as separate tables, so the option
/// type applies to the whole batch.
pub fn normalize(rows: &[RawContractRow], option_type: OptionType) -> Vec<ContractQuote> {
    if rows.is_empty() {
        return Vec::new();
    }

    // Column absence: with typed rows, a column the provider never sent shows
    // up as None in every row.
    if rows.iter().all(|r| r.strike.is_none()) || rows.iter().all(|r| r.last_price.is_none()) {
        tracing::warn!(
            rows = rows.len(),
            "strike or price column absent from chain, dropping table"
        );
        return Vec::new();
    }

    let volume_column_present = rows.iter().any(|r| r.volume.is_some());
    let mut dte_backfills = 0usize;
    let mut dropped = 0usize;

    let mut quotes = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(strike) = row.strike.filter(|&s| s > 0.0) else {
            dropped += 1;
            continue;
        };

        let Some(price) = row.last_price.filter(|&p| p > 0.0) else {
            dropped += 1;
            continue;
        };

        // Missing DTE is backfilled, not dropped; negative DTE means the
        // listing already expired and is rejected.
        let dte = match row.dte {
            Some(d) => {
                let d = d as i64;
                if d < 0 {
                    dropped += 1;
                    continue;
                }
                d as u32
            }
            None => {
                dte_backfills += 1;
                DEFAULT_DTE
            }
        };

        let volume = if volume_column_present {
            match row.volume {
                Some(v) if v >= 1.0 => v as u64,
                _ => {
                    dropped += 1;
                    continue;
                }
            }
        } else {
            PLACEHOLDER_VOLUME
        };

        let implied_vol = match row.implied_volatility {
            Some(iv) if iv > MAX_QUOTED_IV => {
                dropped += 1;
                continue;
            }
            Some(iv) if iv > 0.0 => iv,
            _ => DEFAULT_IMPLIED_VOL,
        };

        quotes.push(ContractQuote {
            contract_symbol: row.contract_symbol.clone(),
            option_type,
            strike,
            price,
            bid: row.bid.filter(|&b| b >= 0.0),
            ask: row.ask.filter(|&a| a >= 0.0),
            volume,
            open_interest: row.open_interest.filter(|&oi| oi >= 0.0).map(|oi| oi as u64),
            implied_vol,
            dte,
            expiration: row.expiration,
        });
    }

    if dte_backfills > 0 {
        tracing::warn!(
            count = dte_backfills,
            default = DEFAULT_DTE,
            "backfilled missing days-to-expiry"
        );
    }
    if !volume_column_present {
        tracing::warn!(
            placeholder = PLACEHOLDER_VOLUME,
            "volume column absent, using placeholder"
        );
    }
    tracing::info!(
        input = rows.len(),
        kept = quotes.len(),
        dropped,
        "normalized option chain"
    );

    quotes
}
