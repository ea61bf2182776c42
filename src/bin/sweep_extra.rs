//! Sweep the snowball extra-payment grid for a debt inforce
//!
//! Outputs one row per extra amount for comparison charting: how many
//! months and how much interest each additional euro of monthly budget
//! buys.

use finance_engine::debt::load_debts;
use finance_engine::engine::{SimulationConfig, SimulationEngine, SimulationResult};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "debts_inforce.csv".to_string());

    let start = Instant::now();
    println!("Loading debts from {path}...");
    let debts = load_debts(&path).expect("Failed to load debts");
    println!("Loaded {} debts in {:?}", debts.len(), start.elapsed());

    // 0 to 1000 per month in 25-euro steps
    let extras: Vec<f64> = (0..=40).map(|i| i as f64 * 25.0).collect();

    println!("Running {} snowball simulations...", extras.len());
    let sim_start = Instant::now();

    let results: Vec<(f64, SimulationResult)> = extras
        .par_iter()
        .map(|&extra| {
            let engine = SimulationEngine::new(SimulationConfig::default());
            let result = engine
                .simulate_snowball(&debts, extra)
                .expect("simulation failed");
            (extra, result)
        })
        .collect();

    println!("Simulations complete in {:?}", sim_start.elapsed());

    let output_path = "extra_sweep_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(file, "ExtraMonthly,Months,Years,TotalInterest,CapReached").unwrap();
    for (extra, result) in &results {
        writeln!(
            file,
            "{:.2},{},{:.1},{:.2},{}",
            extra, result.months, result.years, result.total_interest, result.cap_reached,
        )
        .unwrap();
    }

    println!("Output written to {output_path}");

    // Print a few milestone rows for a quick sanity read
    println!("\nSweep summary:");
    for idx in [0, 4, 8, 20, 40] {
        if let Some((extra, result)) = results.get(idx) {
            println!(
                "  extra {:>7.2}: {:>3} months ({:>4.1} years), interest {:>12.2}",
                extra, result.months, result.years, result.total_interest
            );
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
