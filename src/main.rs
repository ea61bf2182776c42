//! Finance Engine CLI
//!
//! Loads a household debt list, prints the straight-line analysis and the
//! current-vs-snowball comparison, and optionally writes the monthly
//! balance trace to CSV for charting.

use anyhow::{bail, Context};
use clap::Parser;
use finance_engine::debt::{load_debts, Debt, DebtStore};
use finance_engine::engine::{analyze, SimulationConfig};
use finance_engine::ScenarioRunner;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "finance_engine", version, about = "Debt payoff analysis and snowball simulation")]
struct Args {
    /// Debts inforce CSV (DebtID,Creditor,Reference,CurrentBalance,...)
    #[arg(long)]
    debts: Option<PathBuf>,

    /// JSON debt store saved by a previous session
    #[arg(long)]
    store: Option<PathBuf>,

    /// Extra monthly amount directed at the snowball target
    #[arg(long, default_value_t = 100.0)]
    extra: f64,

    /// Write the snowball month-by-month balance trace to this CSV
    #[arg(long)]
    trace_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let debts: Vec<Debt> = match (&args.debts, &args.store) {
        (Some(path), _) => load_debts(path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("loading debts from {}", path.display()))?,
        (None, Some(path)) => DebtStore::new(path)
            .load()
            .map_err(|e| anyhow::anyhow!("{e}"))?,
        (None, None) => bail!("provide --debts <csv> or --store <json>"),
    };
    if debts.is_empty() {
        bail!("no debts to analyze");
    }

    println!("Finance Engine v0.1.0");
    println!("=====================\n");

    println!("Debts ({}):", debts.len());
    for debt in &debts {
        println!(
            "  [{}] {} - {}: balance {:.2}, rate {:.2}%, min payment {:.2}, {} months left",
            debt.id,
            debt.creditor_name,
            debt.reference,
            debt.current_balance,
            debt.annual_rate,
            debt.minimum_payment,
            debt.remaining_term,
        );
    }
    println!();

    // Straight-line analysis block
    let analysis = analyze(&debts)?;
    println!("Analysis (straight-line):");
    println!("  Total balance:   {:.2}", analysis.total_balance);
    println!("  Total to pay:    {:.2}", analysis.total_to_pay);
    println!("  Total interest:  {:.2}", analysis.total_interest);
    println!("  Avg rate:        {:.2}%", analysis.weighted_avg_rate);
    println!("  Time to free:    {} months ({} years)", analysis.months, analysis.years);
    for id in &analysis.underfunded {
        println!("  WARNING: debt {id} is underfunded (scheduled payments below principal)");
    }
    println!();

    // Simulations
    let runner = ScenarioRunner::with_config(SimulationConfig {
        trace: args.trace_out.is_some(),
        ..Default::default()
    });
    let cmp = runner.compare(&debts, args.extra)?;

    println!("Strategy comparison (extra = {:.2}/month):", args.extra);
    println!("{:>20} {:>10} {:>8} {:>14}", "", "Months", "Years", "Interest");
    println!("{}", "-".repeat(56));
    println!(
        "{:>20} {:>10} {:>8.1} {:>14.2}",
        "Current situation", cmp.current.months, cmp.current.years, cmp.current.total_interest
    );
    println!(
        "{:>20} {:>10} {:>8.1} {:>14.2}",
        "Snowball", cmp.snowball.months, cmp.snowball.years, cmp.snowball.total_interest
    );
    println!();
    println!(
        "Savings: {} months ({} years) and {:.2} in interest",
        cmp.months_saved, cmp.years_saved, cmp.interest_saved
    );

    for result in [&cmp.current, &cmp.snowball] {
        for id in &result.non_amortizing {
            println!("WARNING: debt {id} never amortizes at its minimum payment");
        }
    }
    if cmp.current.cap_reached || cmp.snowball.cap_reached {
        println!("WARNING: simulation cap reached; treat the payoff time as \"effectively never\"");
    }

    // Optional balance trace for charting
    if let Some(path) = &args.trace_out {
        let mut file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;

        write!(file, "Month")?;
        for outcome in &cmp.snowball.per_debt {
            write!(file, ",Debt{}", outcome.debt_id)?;
        }
        writeln!(file, ",Total")?;

        for row in &cmp.snowball.trace {
            write!(file, "{}", row.month)?;
            for balance in &row.balances {
                write!(file, ",{balance:.2}")?;
            }
            writeln!(file, ",{:.2}", row.total_balance)?;
        }
        println!("\nBalance trace written to: {}", path.display());
    }

    Ok(())
}
