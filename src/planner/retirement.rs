//! Retirement outlook: compound accumulation and the required-rate solve
//!
//! The target portfolio is sized as a perpetuity covering the
//! inflation-adjusted future lifestyle cost; the annual return required to
//! reach it from current savings is found by bisection.

use serde::{Deserialize, Serialize};

use crate::error::{check_range, EngineError};

/// Bisection bounds for the required annual return
const RATE_LOW: f64 = -0.99;
const RATE_HIGH: f64 = 2.0;
const MAX_BISECTION_ITERATIONS: u32 = 100;

/// Future value of `pv` plus level end-of-year contributions `pmt`
/// compounded at `rate` for `years`.
///
/// `fv = pv*(1+r)^n + pmt*((1+r)^n - 1)/r`, with the zero-rate case
/// collapsing to straight accumulation.
pub fn future_value(pv: f64, pmt: f64, rate: f64, years: u32) -> f64 {
    if rate == 0.0 {
        return pv + pmt * years as f64;
    }
    let growth = (1.0 + rate).powi(years as i32);
    pv * growth + pmt * ((growth - 1.0) / rate)
}

/// Solve for the annual return that grows `pv` plus yearly `pmt` to
/// `target` in `years`.
///
/// Returns `Some(0.0)` when contributions alone reach the target and
/// `None` when no rate inside the search interval gets close (the goal is
/// unreachable on this horizon).
pub fn required_rate(target: f64, years: u32, pmt: f64, pv: f64) -> Option<f64> {
    if years == 0 {
        // No time to grow: the target is either already met or unreachable
        return if pv >= target { Some(0.0) } else { None };
    }
    if pv + pmt * years as f64 >= target {
        return Some(0.0);
    }

    let mut low = RATE_LOW;
    let mut high = RATE_HIGH;
    let mut iterations = 0;
    let (mut mid, mut fv);

    loop {
        mid = (low + high) / 2.0;
        fv = future_value(pv, pmt, mid, years);
        if fv < target {
            low = mid;
        } else {
            high = mid;
        }
        iterations += 1;
        if (fv - target).abs() <= 1.0 || iterations >= MAX_BISECTION_ITERATIONS {
            break;
        }
    }

    // The interval is exhausted without getting anywhere near the target:
    // the goal is unreachable, not "roughly 200%".
    if iterations >= MAX_BISECTION_ITERATIONS && (fv - target).abs() > 1_000.0 {
        return None;
    }
    Some(mid)
}

/// Qualitative banding of the required return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskProfile {
    /// Required return under 5%
    Conservative,
    /// Required return under 9%
    Moderate,
    /// Required return of 9% or more
    Aggressive,
    /// No achievable rate on this horizon
    VeryAggressive,
}

impl RiskProfile {
    fn from_rate(rate: Option<f64>) -> Self {
        match rate {
            None => RiskProfile::VeryAggressive,
            Some(r) if r < 0.05 => RiskProfile::Conservative,
            Some(r) if r < 0.09 => RiskProfile::Moderate,
            Some(_) => RiskProfile::Aggressive,
        }
    }
}

/// User inputs for the retirement outlook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementPlan {
    pub current_age: u32,
    pub retirement_age: u32,

    /// Portfolio value today
    pub initial_investment: f64,

    /// Monthly savings contribution
    pub monthly_savings: f64,

    /// Desired monthly lifestyle cost in today's money
    pub desired_monthly_lifestyle: f64,

    /// Annual inflation assumption as a decimal (e.g. 0.03)
    pub inflation_rate: f64,

    /// Sustainable annual withdrawal rate as a decimal (e.g. 0.04)
    pub perpetuity_rate: f64,
}

/// One point of the accumulation chart series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    /// Contributions to date (initial investment plus savings)
    pub principal: f64,
    /// Compound growth on top of the contributions, floored at 0
    pub interest: f64,
}

/// Computed retirement outlook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementOutlook {
    /// Years between now and retirement
    pub horizon_years: u32,

    /// Lifestyle cost per month at retirement, inflation-adjusted
    pub future_monthly_cost: f64,

    /// Portfolio needed to fund that cost as a perpetuity
    pub target_portfolio: f64,

    /// Annual return required to get there; `None` when unreachable
    pub required_rate: Option<f64>,

    pub risk_profile: RiskProfile,

    /// Per-year principal/interest split for charting, computed at the
    /// required rate (or a default 8% when unreachable)
    pub growth_series: Vec<GrowthPoint>,
}

impl RetirementPlan {
    /// Compute the full outlook
    pub fn outlook(&self) -> Result<RetirementOutlook, EngineError> {
        check_range("initial_investment", self.initial_investment, 0.0, f64::MAX)?;
        check_range("monthly_savings", self.monthly_savings, 0.0, f64::MAX)?;
        check_range("desired_monthly_lifestyle", self.desired_monthly_lifestyle, 0.0, f64::MAX)?;
        check_range("inflation_rate", self.inflation_rate, 0.0, 1.0)?;
        check_range("perpetuity_rate", self.perpetuity_rate, 0.0, 1.0)?;

        let horizon_years = self.retirement_age.saturating_sub(self.current_age);
        let annual_savings = self.monthly_savings * 12.0;

        let future_monthly_cost =
            self.desired_monthly_lifestyle * (1.0 + self.inflation_rate).powi(horizon_years as i32);
        let target_portfolio = if self.perpetuity_rate > 0.0 {
            (future_monthly_cost * 12.0) / self.perpetuity_rate
        } else {
            0.0
        };

        let required = required_rate(
            target_portfolio,
            horizon_years,
            annual_savings,
            self.initial_investment,
        );
        let chart_rate = required.unwrap_or(0.08);

        let growth_series = (0..=horizon_years)
            .map(|year| {
                let principal = self.initial_investment + annual_savings * year as f64;
                let fv = future_value(self.initial_investment, annual_savings, chart_rate, year);
                GrowthPoint {
                    year,
                    principal,
                    interest: (fv - principal).max(0.0),
                }
            })
            .collect();

        Ok(RetirementOutlook {
            horizon_years,
            future_monthly_cost,
            target_portfolio,
            required_rate: required,
            risk_profile: RiskProfile::from_rate(required),
            growth_series,
        })
    }
}
