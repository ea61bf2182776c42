//! Emergency fund sizing from a household risk profile
//!
//! The cushion target starts at three months of essential spending and is
//! adjusted by income stability, dependents, and how many earners the
//! household has, plus a user-chosen comfort margin.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, EngineError};

/// Months of cushion every household starts from
const BASE_MONTHS: u32 = 3;

/// Upper bound on the user's comfort margin
const MAX_EXTRA_MONTHS: u32 = 6;

/// Answers to the risk-profile questions
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Income varies month to month (freelance, commission)
    pub variable_income: bool,

    /// Someone depends on this income
    pub has_dependents: bool,

    /// Household earners
    pub earners: Earners,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Earners {
    /// Single income covering the household
    Sole,
    /// Two incomes, either could carry the essentials
    Dual,
    /// Shared but uneven (one main income plus support)
    Mixed,
}

impl RiskFactors {
    /// Base cushion months implied by the profile, floored at three
    pub fn base_months(&self) -> u32 {
        let mut base = BASE_MONTHS as i32;
        if self.variable_income {
            base += 3;
        }
        if self.has_dependents {
            base += 2;
        }
        match self.earners {
            Earners::Sole => base += 1,
            Earners::Dual => base -= 1,
            Earners::Mixed => {}
        }
        base.max(BASE_MONTHS as i32) as u32
    }
}

/// Inputs for the emergency-fund calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundPlan {
    /// Monthly essential spending (housing, food, utilities, ...)
    pub monthly_essentials: f64,

    /// Monthly minimum debt payments, survival-mode only
    pub debt_minimums: f64,

    /// Cash available today
    pub current_liquidity: f64,

    pub risk: RiskFactors,

    /// Comfort margin on top of the profile's base months (0-6)
    pub extra_months: u32,
}

/// How funded the cushion currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundStatus {
    /// Less than one month of runway
    Critical,
    /// Some runway, short of the target
    Building,
    /// Target reached
    Funded,
}

/// Computed emergency-fund outlook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyOutlook {
    /// Total monthly burn (essentials plus debt minimums)
    pub monthly_burn: f64,

    /// Cushion target in months (profile base plus comfort margin)
    pub target_months: u32,

    /// Cushion target in money
    pub target_amount: f64,

    /// How long current liquidity lasts, in months (fractional)
    pub survival_months: f64,

    pub status: FundStatus,
}

impl EmergencyFundPlan {
    pub fn outlook(&self) -> Result<EmergencyOutlook, EngineError> {
        check_range("monthly_essentials", self.monthly_essentials, 0.0, f64::MAX)?;
        check_range("debt_minimums", self.debt_minimums, 0.0, f64::MAX)?;
        check_range("current_liquidity", self.current_liquidity, 0.0, f64::MAX)?;
        if self.extra_months > MAX_EXTRA_MONTHS {
            return Err(EngineError::invalid(
                "extra_months",
                self.extra_months as f64,
                "comfort margin is capped at six months",
            ));
        }

        let monthly_burn = self.monthly_essentials + self.debt_minimums;
        let target_months = self.risk.base_months() + self.extra_months;
        let target_amount = monthly_burn * target_months as f64;
        let survival_months = if monthly_burn > 0.0 {
            self.current_liquidity / monthly_burn
        } else {
            0.0
        };

        let status = if survival_months < 1.0 {
            FundStatus::Critical
        } else if survival_months < target_months as f64 {
            FundStatus::Building
        } else {
            FundStatus::Funded
        };

        Ok(EmergencyOutlook {
            monthly_burn,
            target_months,
            target_amount,
            survival_months,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plan(liquidity: f64, risk: RiskFactors, extra: u32) -> EmergencyFundPlan {
        EmergencyFundPlan {
            monthly_essentials: 1_500.0,
            debt_minimums: 500.0,
            current_liquidity: liquidity,
            risk,
            extra_months: extra,
        }
    }

    #[test]
    fn test_base_months_adjustments() {
        let stable_dual = RiskFactors {
            variable_income: false,
            has_dependents: false,
            earners: Earners::Dual,
        };
        // 3 - 1 = 2, floored back to 3
        assert_eq!(stable_dual.base_months(), 3);

        let fragile = RiskFactors {
            variable_income: true,
            has_dependents: true,
            earners: Earners::Sole,
        };
        // 3 + 3 + 2 + 1
        assert_eq!(fragile.base_months(), 9);

        let mixed = RiskFactors {
            variable_income: false,
            has_dependents: true,
            earners: Earners::Mixed,
        };
        assert_eq!(mixed.base_months(), 5);
    }

    #[test]
    fn test_target_and_survival() {
        let risk = RiskFactors {
            variable_income: false,
            has_dependents: false,
            earners: Earners::Mixed,
        };
        let outlook = plan(4_000.0, risk, 2).outlook().unwrap();

        assert_relative_eq!(outlook.monthly_burn, 2_000.0);
        assert_eq!(outlook.target_months, 5);
        assert_relative_eq!(outlook.target_amount, 10_000.0);
        assert_relative_eq!(outlook.survival_months, 2.0);
        assert_eq!(outlook.status, FundStatus::Building);
    }

    #[test]
    fn test_status_bands() {
        let risk = RiskFactors {
            variable_income: false,
            has_dependents: false,
            earners: Earners::Mixed,
        };
        assert_eq!(plan(500.0, risk, 0).outlook().unwrap().status, FundStatus::Critical);
        assert_eq!(plan(4_000.0, risk, 0).outlook().unwrap().status, FundStatus::Building);
        assert_eq!(plan(6_000.0, risk, 0).outlook().unwrap().status, FundStatus::Funded);
    }

    #[test]
    fn test_extra_months_cap() {
        let risk = RiskFactors {
            variable_income: false,
            has_dependents: false,
            earners: Earners::Mixed,
        };
        assert!(plan(1_000.0, risk, 7).outlook().is_err());
    }
}
