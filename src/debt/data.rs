//! Debt record matching the household inforce format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{check_range, EngineError};

/// A single outstanding debt as entered by the user
///
/// Inputs are immutable during simulation; the engine works on private
/// copies of the balance and never mutates the record it borrows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Opaque unique identifier, assigned at creation
    pub id: u64,

    /// Who the debt is owed to (bank, card issuer, ...)
    pub creditor_name: String,

    /// Free-text label the user recognizes the debt by
    pub reference: String,

    /// Principal outstanding today, non-negative
    pub current_balance: f64,

    /// Nominal annual interest rate as a percentage in [0, 100]
    pub annual_rate: f64,

    /// Months remaining at the contractual minimum payment, >= 1
    pub remaining_term: u32,

    /// Contractual monthly payment, non-negative
    pub minimum_payment: f64,

    /// When the record was created
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl Debt {
    /// Create a validated debt record
    pub fn new(
        id: u64,
        creditor_name: impl Into<String>,
        reference: impl Into<String>,
        current_balance: f64,
        annual_rate: f64,
        remaining_term: u32,
        minimum_payment: f64,
    ) -> Result<Self, EngineError> {
        let debt = Self {
            id,
            creditor_name: creditor_name.into(),
            reference: reference.into(),
            current_balance,
            annual_rate,
            remaining_term,
            minimum_payment,
            added_at: Utc::now(),
        };
        debt.validate()?;
        Ok(debt)
    }

    /// Enforce the data-model invariants
    ///
    /// Deserialized records (JSON store, CSV inforce) go through this
    /// before they reach the engine.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_range("current_balance", self.current_balance, 0.0, f64::MAX)?;
        check_range("annual_rate", self.annual_rate, 0.0, 100.0)?;
        check_range("minimum_payment", self.minimum_payment, 0.0, f64::MAX)?;
        if self.remaining_term < 1 {
            return Err(EngineError::invalid(
                "remaining_term",
                self.remaining_term as f64,
                "must be at least one month",
            ));
        }
        Ok(())
    }

    /// Monthly interest rate as a decimal fraction
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0 / 100.0
    }

    /// A debt whose minimum payment does not cover its own monthly
    /// interest never amortizes: principal can only grow.
    pub fn is_non_amortizing(&self) -> bool {
        self.minimum_payment <= self.current_balance * self.monthly_rate()
    }

    /// Straight-line total outlay at the minimum payment
    ///
    /// Summary-display approximation only; ignores amortization curvature.
    pub fn total_payment(&self) -> f64 {
        self.minimum_payment * self.remaining_term as f64
    }

    /// Straight-line total interest; negative when the scheduled payments
    /// do not even cover the principal (underfunded debt). Callers must
    /// surface the negative value as a warning, never clamp it.
    pub fn total_interest(&self) -> f64 {
        self.total_payment() - self.current_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Debt {
        Debt::new(1, "Banco Santander", "Tarjeta", 15_000.0, 12.5, 36, 450.0).unwrap()
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut d = sample();
        d.current_balance = -1.0;
        assert!(d.validate().is_err());

        let mut d = sample();
        d.annual_rate = 120.0;
        assert!(d.validate().is_err());

        let mut d = sample();
        d.remaining_term = 0;
        assert!(d.validate().is_err());

        let mut d = sample();
        d.minimum_payment = f64::NAN;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_monthly_rate() {
        let d = Debt::new(1, "a", "b", 1000.0, 12.0, 12, 100.0).unwrap();
        assert!((d.monthly_rate() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_non_amortizing_detection() {
        // 1% monthly interest on 10k = 100; a 100 payment never amortizes
        let d = Debt::new(1, "a", "b", 10_000.0, 12.0, 120, 100.0).unwrap();
        assert!(d.is_non_amortizing());

        let d = Debt::new(1, "a", "b", 10_000.0, 12.0, 120, 150.0).unwrap();
        assert!(!d.is_non_amortizing());
    }

    #[test]
    fn test_straight_line_totals_can_signal_underfunding() {
        // 36 * 450 = 16200 against 15000 owed
        let d = sample();
        assert!((d.total_payment() - 16_200.0).abs() < 1e-9);
        assert!((d.total_interest() - 1_200.0).abs() < 1e-9);

        // 12 * 50 = 600 against 1000 owed: negative interest, not clamped
        let under = Debt::new(2, "a", "b", 1_000.0, 5.0, 12, 50.0).unwrap();
        assert!(under.total_interest() < 0.0);
    }
}
