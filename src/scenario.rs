//! Scenario runner for strategy comparisons
//!
//! Holds a base simulation configuration once, then allows running many
//! simulations (different extra amounts, different debt sets) without
//! rebuilding it.

use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::engine::{SimulationConfig, SimulationEngine, SimulationResult};
use crate::error::EngineError;

/// Pre-configured runner for batch payoff simulations
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// for extra in [0.0, 50.0, 100.0] {
///     let result = runner.run_snowball(&debts, extra)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_config: SimulationConfig,
}

/// Current-situation vs snowball, with the savings the strategy buys
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub current: SimulationResult,
    pub snowball: SimulationResult,

    /// Months shaved off the payoff
    pub months_saved: u32,

    /// `months_saved / 12` rounded to one decimal
    pub years_saved: f64,

    /// Interest avoided by the strategy
    pub interest_saved: f64,
}

impl ScenarioRunner {
    /// Create a runner with the default configuration
    pub fn new() -> Self {
        Self { base_config: SimulationConfig::default() }
    }

    /// Create a runner with a custom base configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { base_config: config }
    }

    /// Run the minimums-only simulation
    pub fn run_current(&self, debts: &[Debt]) -> Result<SimulationResult, EngineError> {
        let engine = SimulationEngine::new(self.base_config.clone());
        engine.simulate_current(debts)
    }

    /// Run one snowball simulation
    pub fn run_snowball(
        &self,
        debts: &[Debt],
        extra_monthly: f64,
    ) -> Result<SimulationResult, EngineError> {
        let engine = SimulationEngine::new(self.base_config.clone());
        engine.simulate_snowball(debts, extra_monthly)
    }

    /// Run one snowball simulation per extra amount
    pub fn sweep_extra(
        &self,
        debts: &[Debt],
        extras: &[f64],
    ) -> Result<Vec<SimulationResult>, EngineError> {
        extras
            .iter()
            .map(|&extra| self.run_snowball(debts, extra))
            .collect()
    }

    /// Compare the current situation against the snowball strategy
    pub fn compare(
        &self,
        debts: &[Debt],
        extra_monthly: f64,
    ) -> Result<StrategyComparison, EngineError> {
        let current = self.run_current(debts)?;
        let snowball = self.run_snowball(debts, extra_monthly)?;

        let months_saved = current.months.saturating_sub(snowball.months);
        let interest_saved = current.total_interest - snowball.total_interest;

        log::info!(
            "strategy comparison: {} -> {} months, {:.2} interest saved",
            current.months,
            snowball.months,
            interest_saved
        );

        Ok(StrategyComparison {
            current,
            snowball,
            months_saved,
            years_saved: SimulationResult::years_from_months(months_saved),
            interest_saved,
        })
    }

    /// Base configuration for inspection/modification
    pub fn config(&self) -> &SimulationConfig {
        &self.base_config
    }

    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.base_config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
