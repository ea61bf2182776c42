//! Level-payment annuity formula and the straight-line analysis summary

use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::error::{check_range, EngineError};

/// Level monthly payment that fully amortizes `balance` over
/// `term_months` at the given nominal annual rate.
///
/// Standard annuity formula:
/// `payment = B * (r * (1+r)^n) / ((1+r)^n - 1)` with `r` the monthly
/// rate. A zero rate makes the denominator vanish and is special-cased
/// to straight division.
pub fn monthly_payment(
    balance: f64,
    annual_rate_pct: f64,
    term_months: u32,
) -> Result<f64, EngineError> {
    check_range("balance", balance, f64::MIN_POSITIVE, f64::MAX)?;
    check_range("annual_rate", annual_rate_pct, 0.0, 100.0)?;
    if term_months < 1 {
        return Err(EngineError::invalid(
            "term_months",
            term_months as f64,
            "must be at least one month",
        ));
    }

    let term = term_months as f64;
    if annual_rate_pct == 0.0 {
        return Ok(balance / term);
    }

    let monthly_rate = annual_rate_pct / 12.0 / 100.0;
    let growth = (1.0 + monthly_rate).powf(term);
    let payment = balance * (monthly_rate * growth) / (growth - 1.0);

    if !payment.is_finite() {
        return Err(EngineError::invalid(
            "payment",
            payment,
            "annuity formula produced a non-finite result",
        ));
    }
    Ok(payment)
}

/// Straight-line portfolio summary for the analysis screen
///
/// Uses `minimum_payment * remaining_term` per debt, deliberately ignoring
/// amortization curvature. Figures here will differ from the simulated
/// interest; the simulation is the authoritative payoff estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtAnalysis {
    pub debt_count: usize,

    /// Sum of current balances
    pub total_balance: f64,

    /// Sum of straight-line total payments
    pub total_to_pay: f64,

    /// `total_to_pay - total_balance`; can be negative in aggregate when
    /// scheduled payments do not cover principal
    pub total_interest: f64,

    /// Balance-weighted average annual rate (percent)
    pub weighted_avg_rate: f64,

    /// Longest remaining term across debts
    pub months: u32,

    /// `months / 12` rounded to one decimal
    pub years: f64,

    /// Debts whose straight-line interest is negative: the scheduled
    /// payments fall short of the principal. Surfaced as warnings, never
    /// clamped away.
    pub underfunded: Vec<u64>,
}

/// Summarize a debt list with straight-line approximations
pub fn analyze(debts: &[Debt]) -> Result<DebtAnalysis, EngineError> {
    let mut total_balance = 0.0;
    let mut total_to_pay = 0.0;
    let mut weighted_rate = 0.0;
    let mut months = 0u32;
    let mut underfunded = Vec::new();

    for debt in debts {
        debt.validate()?;
        total_balance += debt.current_balance;
        total_to_pay += debt.total_payment();
        weighted_rate += debt.annual_rate * debt.current_balance;
        months = months.max(debt.remaining_term);
        if debt.total_interest() < 0.0 {
            underfunded.push(debt.id);
        }
    }

    let weighted_avg_rate = if total_balance > 0.0 {
        weighted_rate / total_balance
    } else {
        0.0
    };

    Ok(DebtAnalysis {
        debt_count: debts.len(),
        total_balance,
        total_to_pay,
        total_interest: total_to_pay - total_balance,
        weighted_avg_rate,
        months,
        years: (months as f64 / 12.0 * 10.0).round() / 10.0,
        underfunded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_straight_division() {
        let payment = monthly_payment(1200.0, 0.0, 12).unwrap();
        assert_relative_eq!(payment, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_known_annuity_payment() {
        // 1200 at 12% annual over 12 months: the classic ~106.62 payment
        let payment = monthly_payment(1200.0, 12.0, 12).unwrap();
        assert_relative_eq!(payment, 106.619, epsilon = 0.01);
    }

    #[test]
    fn test_payment_covers_interest() {
        // A fully amortizing payment always exceeds month-1 interest
        let balance = 50_000.0;
        let payment = monthly_payment(balance, 18.0, 60).unwrap();
        assert!(payment > balance * 0.18 / 12.0);
    }

    #[test]
    fn test_preconditions_rejected() {
        assert!(monthly_payment(0.0, 5.0, 12).is_err());
        assert!(monthly_payment(-100.0, 5.0, 12).is_err());
        assert!(monthly_payment(1000.0, -1.0, 12).is_err());
        assert!(monthly_payment(1000.0, 101.0, 12).is_err());
        assert!(monthly_payment(1000.0, 5.0, 0).is_err());
        assert!(monthly_payment(f64::NAN, 5.0, 12).is_err());
    }

    #[test]
    fn test_analysis_weighted_rate_and_underfunded() {
        let debts = vec![
            Debt::new(1, "a", "x", 10_000.0, 10.0, 24, 500.0).unwrap(),
            Debt::new(2, "b", "y", 30_000.0, 20.0, 48, 700.0).unwrap(),
            // 12 * 40 = 480 < 1000: underfunded
            Debt::new(3, "c", "z", 1_000.0, 5.0, 12, 40.0).unwrap(),
        ];

        let analysis = analyze(&debts).unwrap();
        assert_eq!(analysis.debt_count, 3);
        assert_relative_eq!(analysis.total_balance, 41_000.0, epsilon = 1e-9);
        assert_eq!(analysis.months, 48);
        assert_eq!(analysis.years, 4.0);
        assert_eq!(analysis.underfunded, vec![3]);

        // (10*10000 + 20*30000 + 5*1000) / 41000
        let expected = (10.0 * 10_000.0 + 20.0 * 30_000.0 + 5.0 * 1_000.0) / 41_000.0;
        assert_relative_eq!(analysis.weighted_avg_rate, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_analysis_empty_list() {
        let analysis = analyze(&[]).unwrap();
        assert_eq!(analysis.debt_count, 0);
        assert_eq!(analysis.weighted_avg_rate, 0.0);
        assert_eq!(analysis.months, 0);
    }
}
