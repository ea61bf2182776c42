//! Working state for one simulation run
//!
//! Created fresh at the start of each run, mutated month by month, and
//! discarded once the summary result is produced. Input debts are only
//! ever borrowed; the state owns private balance copies.

use crate::debt::Debt;

/// Mutable state of a multi-debt payoff simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Simulation clock, starts at 0
    pub month: u32,

    /// Working copy of each debt's balance, same order as the debt slice
    pub balances: Vec<f64>,

    /// Running interest accumulator across all debts
    pub total_interest_paid: f64,

    /// Freed payment capacity available to redirect each month.
    /// Starts at the user-chosen extra contribution and grows by each
    /// paid-off debt's minimum payment.
    pub extra_pool: f64,
}

impl SimulationState {
    /// Initialize state from a debt list at simulation start.
    /// Takes any borrowing iterator so callers can feed a reordered view.
    pub fn from_debts<'a, I>(debts: I, extra_monthly: f64) -> Self
    where
        I: IntoIterator<Item = &'a Debt>,
    {
        Self {
            month: 0,
            balances: debts.into_iter().map(|d| d.current_balance).collect(),
            total_interest_paid: 0.0,
            extra_pool: extra_monthly,
        }
    }

    /// Whether any debt still carries a balance above the epsilon
    pub fn any_open(&self, epsilon: f64) -> bool {
        self.balances.iter().any(|&b| b > epsilon)
    }

    /// Index of the open debt with the smallest balance.
    /// Strict comparison during the scan makes the lowest index win on
    /// exact ties, keeping target selection deterministic.
    pub fn smallest_open(&self, epsilon: f64) -> Option<usize> {
        let mut target: Option<usize> = None;
        for (i, &balance) in self.balances.iter().enumerate() {
            if balance <= epsilon {
                continue;
            }
            match target {
                Some(t) if self.balances[t] <= balance => {}
                _ => target = Some(i),
            }
        }
        target
    }

    /// Sum of all working balances
    pub fn total_balance(&self) -> f64 {
        self.balances.iter().sum()
    }
}
