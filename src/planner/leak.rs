//! Financial leak calculator
//!
//! Adds up the yearly cost of idle savings, small recurring spending, and
//! debt interest, then projects what that leak would have compounded to
//! if invested instead.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, EngineError};

/// Assumed lost return on savings sitting in a non-interest account
const OPPORTUNITY_RATE: f64 = 0.05;

/// Assumed market return for the reinvestment projection
const PROJECTION_RATE: f64 = 0.06;

/// Working weeks of coffee purchases per year
const COFFEE_PURCHASES_PER_YEAR: f64 = 220.0;

/// Projection horizon bounds in years
const MIN_YEARS: u32 = 1;
const MAX_YEARS: u32 = 50;

/// User inputs for the leak calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakInputs {
    /// Savings sitting idle in a checking account
    pub idle_savings: f64,

    /// Cost of one coffee-type daily purchase
    pub coffee_price: f64,

    /// Monthly subscription spend
    pub monthly_subscriptions: f64,

    /// Weekly takeout/delivery spend
    pub weekly_takeout: f64,

    /// Total debt balance carrying interest
    pub debt_balance: f64,

    /// Annual interest rate on that debt, percent in [0, 100]
    pub debt_rate: f64,

    /// Projection horizon in years (1-50)
    pub years: u32,
}

/// Annual leak breakdown and its compounded projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeakReport {
    /// Lost return on idle savings per year
    pub opportunity_leak: f64,

    /// Small recurring spending per year
    pub spending_leak: f64,

    /// Debt interest per year
    pub debt_leak: f64,

    /// Sum of the three components
    pub total_annual_leak: f64,

    /// Future value of investing the total leak yearly at the
    /// projection rate over the horizon
    pub projected_value: f64,
}

impl LeakInputs {
    pub fn report(&self) -> Result<LeakReport, EngineError> {
        check_range("idle_savings", self.idle_savings, 0.0, f64::MAX)?;
        check_range("coffee_price", self.coffee_price, 0.0, f64::MAX)?;
        check_range("monthly_subscriptions", self.monthly_subscriptions, 0.0, f64::MAX)?;
        check_range("weekly_takeout", self.weekly_takeout, 0.0, f64::MAX)?;
        check_range("debt_balance", self.debt_balance, 0.0, f64::MAX)?;
        check_range("debt_rate", self.debt_rate, 0.0, 100.0)?;
        if self.years < MIN_YEARS || self.years > MAX_YEARS {
            return Err(EngineError::invalid(
                "years",
                self.years as f64,
                "projection horizon must be between 1 and 50 years",
            ));
        }

        let opportunity_leak = self.idle_savings * OPPORTUNITY_RATE;
        let spending_leak = self.coffee_price * COFFEE_PURCHASES_PER_YEAR
            + self.monthly_subscriptions * 12.0
            + self.weekly_takeout * 52.0;
        let debt_leak = self.debt_balance * (self.debt_rate / 100.0);
        let total_annual_leak = opportunity_leak + spending_leak + debt_leak;

        // Future value of an annual annuity at the projection rate
        let growth = (1.0 + PROJECTION_RATE).powi(self.years as i32);
        let projected_value = if total_annual_leak > 0.0 {
            total_annual_leak * ((growth - 1.0) / PROJECTION_RATE)
        } else {
            0.0
        };

        Ok(LeakReport {
            opportunity_leak,
            spending_leak,
            debt_leak,
            total_annual_leak,
            projected_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs() -> LeakInputs {
        LeakInputs {
            idle_savings: 10_000.0,
            coffee_price: 2.5,
            monthly_subscriptions: 40.0,
            weekly_takeout: 25.0,
            debt_balance: 5_000.0,
            debt_rate: 18.0,
            years: 10,
        }
    }

    #[test]
    fn test_component_breakdown() {
        let report = inputs().report().unwrap();
        assert_relative_eq!(report.opportunity_leak, 500.0);
        assert_relative_eq!(report.spending_leak, 2.5 * 220.0 + 40.0 * 12.0 + 25.0 * 52.0);
        assert_relative_eq!(report.debt_leak, 900.0);
        assert_relative_eq!(
            report.total_annual_leak,
            report.opportunity_leak + report.spending_leak + report.debt_leak
        );
    }

    #[test]
    fn test_projection_compounds_the_annuity() {
        let report = inputs().report().unwrap();
        let growth = 1.06_f64.powi(10);
        let expected = report.total_annual_leak * ((growth - 1.0) / 0.06);
        assert_relative_eq!(report.projected_value, expected, epsilon = 1e-6);
        // Compounding beats simple accumulation
        assert!(report.projected_value > report.total_annual_leak * 10.0);
    }

    #[test]
    fn test_zero_leak_projects_to_zero() {
        let zero = LeakInputs {
            idle_savings: 0.0,
            coffee_price: 0.0,
            monthly_subscriptions: 0.0,
            weekly_takeout: 0.0,
            debt_balance: 0.0,
            debt_rate: 0.0,
            years: 10,
        };
        let report = zero.report().unwrap();
        assert_eq!(report.total_annual_leak, 0.0);
        assert_eq!(report.projected_value, 0.0);
    }

    #[test]
    fn test_horizon_bounds_rejected() {
        let mut bad = inputs();
        bad.years = 0;
        assert!(bad.report().is_err());
        bad.years = 51;
        assert!(bad.report().is_err());
    }
}
