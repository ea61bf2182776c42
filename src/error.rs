//! Error taxonomy for the calculation engine
//!
//! Only contract violations are errors. Business outcomes that represent
//! valid financial situations (a debt that never amortizes, a simulation
//! that hits the iteration cap) are reported as flags on the result types,
//! never raised here.

use thiserror::Error;

/// Errors raised by engine and planner functions
#[derive(Debug, Error)]
pub enum EngineError {
    /// A precondition on an input value was violated
    #[error("invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A monetary string could not be parsed into a number
    #[error("unparseable money input: {0:?}")]
    ParseMoney(String),
}

impl EngineError {
    /// Shorthand used throughout the engine for precondition failures
    pub fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        EngineError::InvalidInput { field, value, reason }
    }
}

/// Reject non-finite and out-of-range values at the engine boundary.
/// The UI layer pre-validates, but the engine never trusts it.
pub fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), EngineError> {
    if !value.is_finite() {
        return Err(EngineError::invalid(field, value, "must be finite"));
    }
    if value < min {
        return Err(EngineError::invalid(field, value, "below allowed minimum"));
    }
    if value > max {
        return Err(EngineError::invalid(field, value, "above allowed maximum"));
    }
    Ok(())
}
