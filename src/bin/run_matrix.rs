//! Run projections for the full currency-pair matrix
//!
//! Outputs per-pair cost figures for every horizon month, for comparison
//! across supplier and local currencies.

use fx_impact::{
    CurrencyPair, MarketAssumptions, ProjectionEngine, ProjectionInput, ProjectionResult,
    FORECAST_WINDOW_MONTHS,
};
use rayon::prelude::*;
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// One pair projected across the whole forecast window
#[derive(Debug, Clone)]
struct MatrixRow {
    pair: CurrencyPair,
    by_horizon: Vec<ProjectionResult>,
}

fn main() {
    env_logger::init();

    let start = Instant::now();

    let unit_cost: f64 = env::var("UNIT_COST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10_000.0);
    let volume: u64 = env::var("VOLUME")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1_000);

    let assumptions = MarketAssumptions::default_reference();
    assumptions.validate().expect("Reference data incomplete");

    println!("Running matrix: {} pairs x {} horizons...", CurrencyPair::all().len(), FORECAST_WINDOW_MONTHS + 1);
    let proj_start = Instant::now();

    // Project pairs in parallel
    let rows: Vec<MatrixRow> = CurrencyPair::all()
        .par_iter()
        .map(|&pair| {
            let engine = ProjectionEngine::new(assumptions.clone());
            let by_horizon = (0..=FORECAST_WINDOW_MONTHS)
                .map(|horizon_months| {
                    engine
                        .project(&ProjectionInput {
                            pair,
                            unit_cost,
                            volume,
                            horizon_months,
                        })
                        .expect("Projection failed")
                })
                .collect();
            MatrixRow { pair, by_horizon }
        })
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    // Write output
    let output_path = "matrix_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "Pair,Horizon,Rate,TotalCostCurrent,TotalCostProjected,Delta,DeltaPercent").unwrap();

    for row in &rows {
        for (horizon, result) in row.by_horizon.iter().enumerate() {
            writeln!(
                file,
                "{},{},{:.6},{:.2},{:.2},{:.2},{:.4}",
                row.pair,
                horizon,
                result.interpolated_rate,
                result.total_cost_current,
                result.total_cost_projected,
                result.delta,
                result.delta_percent,
            )
            .unwrap();
        }
    }

    println!("Output written to {}", output_path);

    // Print summary: most and least exposed pairs at the full horizon
    let mut by_exposure: Vec<_> = rows
        .iter()
        .map(|row| (row.pair, row.by_horizon[FORECAST_WINDOW_MONTHS as usize].delta_percent))
        .collect();
    by_exposure.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("delta percent is finite"));

    println!("\nExposure at month {} (delta % of current cost):", FORECAST_WINDOW_MONTHS);
    for (pair, delta_percent) in &by_exposure {
        println!("  {:>8}: {:+.2}%", pair.to_string(), delta_percent);
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
