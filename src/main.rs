//! FX Impact CLI
//!
//! Command-line interface for running a single import-cost projection

use clap::Parser;
use fx_impact::{
    BaseCurrency, CurrencyPair, MarketAssumptions, ProjectionEngine, ProjectionInput,
    TargetCurrency, FORECAST_WINDOW_MONTHS,
};
use std::fs::File;
use std::io::Write;

/// Project the impact of exchange-rate movement on an import cost
#[derive(Debug, Parser)]
#[command(name = "fx-impact", version)]
struct Args {
    /// Supplier invoice currency (USD, EUR, GBP)
    #[arg(long, default_value = "EUR", value_parser = parse_base)]
    base: BaseCurrency,

    /// Local currency (MAD, DZD, TND, XOF)
    #[arg(long, default_value = "MAD", value_parser = parse_target)]
    target: TargetCurrency,

    /// Cost per unit in the invoice currency
    #[arg(long, default_value_t = 10_000.0)]
    unit_cost: f64,

    /// Units imported
    #[arg(long, default_value_t = 1_000)]
    volume: u64,

    /// Months into the forecast window (0-6)
    #[arg(long, default_value_t = 6)]
    horizon: u32,

    /// Load reference data from data/reference/ instead of the built-in snapshot
    #[arg(long)]
    from_csv: bool,

    /// Write the month-by-month schedule to this CSV file
    #[arg(long, default_value = "projection_schedule.csv")]
    output: String,
}

fn parse_base(code: &str) -> Result<BaseCurrency, String> {
    BaseCurrency::from_code(code).ok_or_else(|| format!("unsupported base currency '{}'", code))
}

fn parse_target(code: &str) -> Result<TargetCurrency, String> {
    TargetCurrency::from_code(code).ok_or_else(|| format!("unsupported target currency '{}'", code))
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    println!("FX Impact v0.1.0");
    println!("================\n");

    let assumptions = if args.from_csv {
        MarketAssumptions::from_csv().expect("Failed to load reference data")
    } else {
        MarketAssumptions::default_reference()
    };

    let pair = CurrencyPair::new(args.base, args.target);
    let input = ProjectionInput {
        pair,
        unit_cost: args.unit_cost,
        volume: args.volume,
        horizon_months: args.horizon,
    };

    println!("Pair: {}", pair);
    println!("  Unit Cost: {:.2} {}", input.unit_cost, args.base);
    println!("  Volume: {} units", input.volume);
    println!("  Horizon: {} months", input.horizon_months);
    println!();

    let engine = ProjectionEngine::new(assumptions);
    let result = engine.project(&input).expect("Projection failed");

    println!("Rates:");
    println!("  Current:      1 {} = {:.4} {}", args.base, result.current_rate, args.target);
    println!("  6-month:      1 {} = {:.4} {}", args.base, result.forecast_rate, args.target);
    println!("  At horizon:   1 {} = {:.4} {}", args.base, result.interpolated_rate, args.target);
    println!();

    println!("Costs ({}):", args.target);
    println!("  Unit, current:    {:>16.2}", result.unit_cost_current);
    println!("  Unit, projected:  {:>16.2}", result.unit_cost_projected);
    println!("  Total, current:   {:>16.2}", result.total_cost_current);
    println!("  Total, projected: {:>16.2}", result.total_cost_projected);
    println!();

    println!("Budget impact:");
    println!("  Delta:   {:+.2} {}", result.delta, args.target);
    println!("  Delta %: {:+.2}%", result.delta_percent);
    if result.delta > 0.0 {
        println!("  Import costs are expected to rise over the horizon.");
    } else {
        println!("  Import costs are expected to fall over the horizon.");
    }

    // Month-by-month table across the full window
    let full_window = ProjectionInput {
        horizon_months: FORECAST_WINDOW_MONTHS,
        ..input
    };
    let schedule = engine
        .project_schedule(&full_window)
        .expect("Schedule projection failed");

    println!("\nSchedule (months 0-{}):", FORECAST_WINDOW_MONTHS);
    println!("{:>5} {:>10} {:>16} {:>16} {:>9}", "Month", "Rate", "Total Cost", "Delta", "Delta %");
    println!("{}", "-".repeat(62));
    for row in &schedule {
        println!(
            "{:>5} {:>10.4} {:>16.2} {:>+16.2} {:>+8.2}%",
            row.month, row.rate, row.total_cost, row.delta, row.delta_percent
        );
    }

    // Write full schedule to CSV
    let mut file = File::create(&args.output).expect("Unable to create CSV file");
    writeln!(file, "Month,Rate,UnitCost,TotalCost,Delta,DeltaPercent").unwrap();
    for row in &schedule {
        writeln!(
            file,
            "{},{:.6},{:.6},{:.2},{:.2},{:.4}",
            row.month, row.rate, row.unit_cost, row.total_cost, row.delta, row.delta_percent
        )
        .unwrap();
    }

    println!("\nFull schedule written to: {}", args.output);
}
