//! Command-line demo: analyze and screen a synthetic put chain
//!
//! Run with: cargo run --bin screener-cli

use wheel_screener::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Wheel Screener Demo ===\n");

    let snapshot = MarketSnapshot::new("AAPL", 150.0)?.with_historical_volatility(Some(0.28));
    let analyzer = OptionsAnalyzer::new(0.05)?;

    println!(
        "Underlying: {} @ {:.2} (hist vol {:.0}%)",
        snapshot.symbol,
        snapshot.spot,
        snapshot.historical_volatility * 100.0
    );
    println!("Risk-free rate: {:.1}%\n", analyzer.risk_free_rate() * 100.0);

    // Synthetic put chain around spot, 36 days out
    let chain: Vec<ContractQuote> = [
        (130.0, 0.55, 420),
        (135.0, 1.05, 310),
        (140.0, 1.85, 260),
        (142.5, 2.30, 180),
        (145.0, 3.20, 220),
        (147.5, 4.10, 90),
    ]
    .iter()
    .map(|&(strike, price, volume)| ContractQuote {
        contract_symbol: Some(format!("AAPL P {}", strike)),
        option_type: OptionType::Put,
        strike,
        price,
        bid: Some(price - 0.05),
        ask: Some(price + 0.05),
        volume,
        open_interest: Some(1000),
        implied_vol: 0.30,
        dte: 36,
        expiration: None,
    })
    .collect();

    let criteria = ScreeningCriteria {
        min_annual_return: 0.10,
        max_assignment_prob: 0.35,
        min_volume: 100,
        max_dte: 45,
        min_strike: None,
        max_strike: None,
    };

    let (ranked, summary) =
        analyzer.screen_chain(&chain, snapshot.spot, Strategy::CashSecuredPut, &criteria);

    println!("--- Cash-Secured Put Candidates ---");
    println!(
        "{:<8} {:>8} {:>8} {:>9} {:>8} {:>10}",
        "Strike", "Premium", "IV", "AnnRet", "Assign", "Breakeven"
    );
    for c in &ranked {
        let a = &c.analytics;
        println!(
            "{:<8.1} {:>8.2} {:>7.1}% {:>8.1}% {:>7.1}% {:>10.2}",
            c.quote.strike,
            c.quote.price,
            a.implied_vol * 100.0,
            a.annualized_return * 100.0,
            a.assignment_probability * 100.0,
            a.breakeven_price,
        );
    }

    println!(
        "\n{} of {} contracts passed; mean annualized return {:.1}%, mean assignment {:.1}%",
        summary.count,
        chain.len(),
        summary.mean_annualized_return * 100.0,
        summary.mean_assignment_probability * 100.0
    );

    let out = std::env::temp_dir().join("wheel_screen.csv");
    wheel_screener::report::export_csv(&ranked, &out)?;
    println!("Results exported to {}", out.display());

    Ok(())
}
