//! Finance Engine - personal-finance calculation engine
//!
//! This library provides:
//! - Debt amortization (annuity payment formula, straight-line summaries)
//! - Month-by-month payoff simulation, minimums-only and snowball strategy
//! - Batch scenario runs for strategy comparison
//! - Household planners: retirement outlook, emergency fund sizing,
//!   financial leak projection, snapshot ratios
//!
//! The engine is pure computation: no I/O, no formatting, no rendering.
//! Presentation, persistence, and input sanitization live at the edges
//! (`debt::store`, `debt::loader`, `input`).

pub mod debt;
pub mod engine;
pub mod error;
pub mod input;
pub mod planner;
pub mod scenario;

// Re-export commonly used types
pub use debt::Debt;
pub use engine::{
    analyze, monthly_payment, DebtAnalysis, SimulationConfig, SimulationEngine, SimulationResult,
};
pub use error::EngineError;
pub use scenario::{ScenarioRunner, StrategyComparison};
