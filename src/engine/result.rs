//! Simulation output structures

use serde::{Deserialize, Serialize};

/// Per-debt outcome of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtOutcome {
    /// Identifier of the debt this outcome belongs to
    pub debt_id: u64,

    /// Months until this debt's balance cleared. Holds the iteration cap
    /// as a sentinel when the debt never pays off.
    pub months: u32,

    /// Interest accrued on this debt over the run
    pub interest_paid: f64,

    /// Minimum payment does not cover the monthly interest; the balance
    /// can never reach zero at that payment
    pub non_amortizing: bool,
}

/// One month of balance history, kept only when tracing is enabled.
/// Granular enough for a presentation layer to plot payoff curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRow {
    /// Month number (1-indexed)
    pub month: u32,

    /// End-of-month balance per debt, in the order the simulation
    /// processed them (input order for the current situation, ascending
    /// starting balance for the snowball; match via `per_debt`)
    pub balances: Vec<f64>,

    /// Sum of the per-debt balances
    pub total_balance: f64,
}

/// Summary result of a payoff simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Months until the household is debt-free (max across debts)
    pub months: u32,

    /// `months / 12` rounded to one decimal
    pub years: f64,

    /// Total interest paid across all debts
    pub total_interest: f64,

    /// The iteration cap was hit before every balance cleared. The UI
    /// treats this as "effectively never", not a literal 50-year payoff;
    /// a genuine cap-length payoff leaves this false.
    pub cap_reached: bool,

    /// Ids of debts whose minimum payment never amortizes them
    pub non_amortizing: Vec<u64>,

    /// Per-debt breakdown
    pub per_debt: Vec<DebtOutcome>,

    /// Month-by-month balances when tracing was requested, empty otherwise
    pub trace: Vec<TraceRow>,
}

impl SimulationResult {
    /// Convert a month count to years with one-decimal rounding
    pub fn years_from_months(months: u32) -> f64 {
        (months as f64 / 12.0 * 10.0).round() / 10.0
    }
}
