//! Run the calculator over every scenario in a CSV file
//!
//! Outputs one row per scenario with the normalized inputs, period count,
//! final balance, and profit for comparison across configurations.

use anyhow::Context;
use deposit_calculator::calculator::{calculate, project_schedule};
use deposit_calculator::scenario::{
    load_default_scenarios, load_scenarios, Scenario, DEFAULT_SCENARIO_FILE,
};
use deposit_calculator::CalculationResult;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

struct BatchRow {
    name: String,
    tenor_months: u32,
    holding_months: u32,
    periods: usize,
    principal: f64,
    result: CalculationResult,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    let path = std::env::args().nth(1);

    let scenarios = match &path {
        Some(path) => {
            println!("Loading scenarios from {}...", path);
            load_scenarios(path)?
        }
        None => {
            println!("Loading scenarios from {}...", DEFAULT_SCENARIO_FILE);
            load_default_scenarios()?
        }
    };
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running calculations...");
    let calc_start = Instant::now();

    let rows: Vec<BatchRow> = scenarios
        .par_iter()
        .map(|scenario: &Scenario| {
            let normalized = scenario.input().normalize();
            let schedule = project_schedule(&normalized, None);
            let result = calculate(&normalized);
            BatchRow {
                name: scenario.name.clone(),
                tenor_months: normalized.tenor_months,
                holding_months: normalized.holding_months,
                periods: schedule.rows.len(),
                principal: normalized.principal,
                result,
            }
        })
        .collect();

    println!("Calculations complete in {:?}", calc_start.elapsed());

    let output_path = "batch_output.csv";
    let mut file = File::create(output_path)
        .with_context(|| format!("failed to create {}", output_path))?;

    writeln!(
        file,
        "Name,TenorMonths,HoldingMonths,Periods,Principal,FinalBalance,Profit"
    )?;
    for row in &rows {
        writeln!(
            file,
            "{},{},{},{},{:.2},{:.2},{:.2}",
            row.name,
            row.tenor_months,
            row.holding_months,
            row.periods,
            row.principal,
            row.result.final_balance,
            row.result.profit,
        )?;
    }

    println!("Output written to {}", output_path);

    // Print summary stats
    let total_principal: f64 = rows.iter().map(|r| r.principal).sum();
    let total_profit: f64 = rows.iter().map(|r| r.result.profit).sum();
    let grown = rows.iter().filter(|r| r.result.profit > 0.0).count();

    println!("\nBatch Summary:");
    println!("  Scenarios:       {}", rows.len());
    println!("  With growth:     {}", grown);
    println!("  Total principal: {:.2}", total_principal);
    println!("  Total profit:    {:.2}", total_profit);

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
