//! Amortization engine: payment formula, payoff simulations, and the
//! straight-line analysis summary

mod amortization;
mod result;
mod simulation;
mod state;

pub use amortization::{analyze, monthly_payment, DebtAnalysis};
pub use result::{DebtOutcome, SimulationResult, TraceRow};
pub use simulation::{SimulationConfig, SimulationEngine};
pub use state::SimulationState;

/// Hard iteration cap: 600 months (50 years). Hitting it is a valid
/// terminal state reported via `SimulationResult::cap_reached`, not an
/// error.
pub const MAX_SIMULATION_MONTHS: u32 = 600;

/// Balances are compared against a cent-level epsilon rather than exact
/// zero to avoid floating-point residue keeping a loop alive.
pub const BALANCE_EPSILON: f64 = 0.01;
