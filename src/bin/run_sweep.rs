//! Sweep a grid of deduction rates for one principal and growth rate
//!
//! Outputs one CSV row per rate with the horizon-end balance and the drag
//! relative to the zero-deduction outcome

use anyhow::Context;
use clap::Parser;
use finance_simulators::projection::{
    project, DEFAULT_GROWTH_RATE, DEFAULT_INITIAL, DEFAULT_PERIODS, MAX_PERIODS,
};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(
    name = "run_sweep",
    about = "Project a grid of deduction rates and write the outcomes to CSV"
)]
struct Args {
    /// Starting principal
    #[arg(long, default_value_t = DEFAULT_INITIAL)]
    initial: f64,

    /// Gross per-period growth rate as a fraction
    #[arg(long, default_value_t = DEFAULT_GROWTH_RATE)]
    growth_rate: f64,

    /// Projection horizon in periods
    #[arg(long, default_value_t = DEFAULT_PERIODS)]
    periods: i64,

    /// Lowest deduction rate in the grid
    #[arg(long, default_value_t = 0.0)]
    min_deduction: f64,

    /// Highest deduction rate in the grid
    #[arg(long, default_value_t = 0.03)]
    max_deduction: f64,

    /// Number of grid points, endpoints included
    #[arg(long, default_value_t = 31)]
    steps: usize,

    /// Output CSV path
    #[arg(long, default_value = "deduction_sweep.csv")]
    output: String,
}

/// One grid point's horizon outcome
#[derive(Debug, Serialize)]
struct SweepRow {
    deduction_rate: f64,
    final_balance: f64,
    drag: f64,
    drag_pct_of_gross: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let initial = args.initial.max(0.0);
    let periods = args.periods.clamp(1, MAX_PERIODS) as u32;

    let rates = build_grid(args.min_deduction, args.max_deduction, args.steps);
    println!(
        "Sweeping {} deduction rates over {} periods (principal {:.2} at {:.2}% gross)...",
        rates.len(),
        periods,
        initial,
        100.0 * args.growth_rate,
    );

    let gross_final = project(initial, args.growth_rate, 0.0, periods)
        .last()
        .copied()
        .unwrap_or(initial);

    // Each grid point is an independent projection
    let sweep_start = Instant::now();
    let rows: Vec<SweepRow> = rates
        .par_iter()
        .map(|&deduction_rate| {
            let final_balance = project(initial, args.growth_rate, deduction_rate, periods)
                .last()
                .copied()
                .unwrap_or(initial);
            let drag = gross_final - final_balance;
            let drag_pct_of_gross = if gross_final != 0.0 {
                drag / gross_final
            } else {
                0.0
            };
            SweepRow {
                deduction_rate,
                final_balance,
                drag,
                drag_pct_of_gross,
            }
        })
        .collect();
    println!("Sweep complete in {:?}", sweep_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("Output written to {}", args.output);

    if let (Some(first), Some(last)) = (rows.first(), rows.last()) {
        println!("\nSweep Summary:");
        println!(
            "  {:.4} deduction: final={:.2}, drag={:.2} ({:.2}% of gross)",
            first.deduction_rate,
            first.final_balance,
            first.drag,
            100.0 * first.drag_pct_of_gross,
        );
        println!(
            "  {:.4} deduction: final={:.2}, drag={:.2} ({:.2}% of gross)",
            last.deduction_rate,
            last.final_balance,
            last.drag,
            100.0 * last.drag_pct_of_gross,
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

/// Evenly spaced grid over [min, max], endpoints included
fn build_grid(min: f64, max: f64, steps: usize) -> Vec<f64> {
    if steps <= 1 {
        return vec![min];
    }
    let span = max - min;
    (0..steps)
        .map(|i| min + span * i as f64 / (steps - 1) as f64)
        .collect()
}
