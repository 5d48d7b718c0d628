//! Generate a JSON impact report for API integration
//!
//! Runs a single projection plus the demo basket and prints the report as
//! JSON to stdout.
//! Accepts config via environment variables:
//!   BASE, TARGET, UNIT_COST, VOLUME, HORIZON_MONTHS
//! Set BASKET_PATH to load a basket CSV other than data/import_basket.csv;
//! set SKIP_BASKET=1 to omit the basket section.

use anyhow::{anyhow, Context, Result};
use fx_impact::analysis::{category_sensitivities, CategorySensitivity};
use fx_impact::basket::{load_import_lines, BasketImpact};
use fx_impact::{
    BaseCurrency, CurrencyPair, ProjectionInput, ProjectionResult, ScenarioRunner, TargetCurrency,
};
use serde::Serialize;
use std::env;
use std::time::Instant;

#[derive(Serialize)]
struct ImpactReport {
    pair: String,
    unit_cost: f64,
    volume: u64,
    horizon_months: u32,
    projection: ProjectionResult,
    basket: Option<BasketImpact>,
    category_sensitivities: Vec<CategorySensitivity>,
    execution_time_ms: u64,
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<()> {
    env_logger::init();

    let start = Instant::now();

    let base_code = env::var("BASE").unwrap_or_else(|_| "EUR".to_string());
    let target_code = env::var("TARGET").unwrap_or_else(|_| "MAD".to_string());

    let base = BaseCurrency::from_code(&base_code)
        .ok_or_else(|| anyhow!("unsupported base currency '{}'", base_code))?;
    let target = TargetCurrency::from_code(&target_code)
        .ok_or_else(|| anyhow!("unsupported target currency '{}'", target_code))?;

    let unit_cost: f64 = env_or("UNIT_COST", 10_000.0);
    let volume: u64 = env_or("VOLUME", 1_000);
    let horizon_months: u32 = env_or("HORIZON_MONTHS", 6);

    let runner = ScenarioRunner::new();
    let pair = CurrencyPair::new(base, target);

    let projection = runner.run(&ProjectionInput {
        pair,
        unit_cost,
        volume,
        horizon_months,
    })?;

    let basket = if env::var("SKIP_BASKET").is_ok() {
        None
    } else {
        let basket_path =
            env::var("BASKET_PATH").unwrap_or_else(|_| "data/import_basket.csv".to_string());
        let lines = load_import_lines(&basket_path)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("failed to load basket from {}", basket_path))?;
        Some(runner.run_basket(&lines, target, horizon_months)?)
    };

    let report = ImpactReport {
        pair: pair.to_string(),
        unit_cost,
        volume,
        horizon_months,
        projection,
        basket,
        category_sensitivities: category_sensitivities(),
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
