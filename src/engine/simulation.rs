//! Month-by-month payoff simulations
//!
//! Two strategies over the same amortization mechanics:
//! - current situation: every debt serviced independently at its own
//!   minimum payment, no cross-debt interaction
//! - snowball: minimums everywhere plus a growing extra payment aimed at
//!   the smallest remaining balance, retargeted every month

use super::result::{DebtOutcome, SimulationResult, TraceRow};
use super::state::SimulationState;
use super::{BALANCE_EPSILON, MAX_SIMULATION_MONTHS};
use crate::debt::Debt;
use crate::error::EngineError;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Iteration cap in months
    pub max_months: u32,

    /// Convergence epsilon for balance comparisons
    pub balance_epsilon: f64,

    /// Whether to record the month-by-month balance trace
    pub trace: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_months: MAX_SIMULATION_MONTHS,
            balance_epsilon: BALANCE_EPSILON,
            trace: false,
        }
    }
}

/// Payoff simulation engine
///
/// Pure computation: no I/O, no formatting. Each call constructs and owns
/// its own working state, so concurrent invocations share nothing.
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Simulate every debt independently at its own minimum payment
    ///
    /// Aggregate months is the max across debts (the household is
    /// debt-free only once every debt is paid); total interest is the sum.
    pub fn simulate_current(&self, debts: &[Debt]) -> Result<SimulationResult, EngineError> {
        for debt in debts {
            debt.validate()?;
        }

        let eps = self.config.balance_epsilon;
        let cap = self.config.max_months;

        let mut per_debt = Vec::with_capacity(debts.len());
        let mut series: Vec<Vec<f64>> = Vec::new();
        let mut overall_months = 0u32;
        let mut total_interest = 0.0;
        let mut cap_reached = false;
        let mut non_amortizing = Vec::new();

        for debt in debts {
            let monthly_rate = debt.monthly_rate();
            let mut balance = debt.current_balance;
            let mut months = 0u32;
            let mut interest_paid = 0.0;
            let mut never_amortizes = false;
            let mut history = Vec::new();

            while balance > eps && months < cap {
                let interest = balance * monthly_rate;
                let principal = debt.minimum_payment - interest;

                if principal <= 0.0 {
                    // Payment never touches principal: record the cap
                    // sentinel and stop simulating this debt.
                    months = cap;
                    never_amortizes = true;
                    break;
                }

                balance -= principal;
                interest_paid += interest;
                months += 1;
                if self.config.trace {
                    history.push(balance.max(0.0));
                }
            }

            if balance > eps {
                cap_reached = true;
            }
            if never_amortizes {
                non_amortizing.push(debt.id);
            }

            overall_months = overall_months.max(months);
            total_interest += interest_paid;
            per_debt.push(DebtOutcome {
                debt_id: debt.id,
                months,
                interest_paid,
                non_amortizing: never_amortizes,
            });
            if self.config.trace {
                series.push(history);
            }
        }

        let trace = if self.config.trace {
            build_current_trace(debts, &per_debt, &series, overall_months)
        } else {
            Vec::new()
        };

        Ok(SimulationResult {
            months: overall_months,
            years: SimulationResult::years_from_months(overall_months),
            total_interest,
            cap_reached,
            non_amortizing,
            per_debt,
            trace,
        })
    }

    /// Simulate the snowball strategy
    ///
    /// Debts are stable-sorted ascending by starting balance (a
    /// deterministic seed; the live target is recomputed every month).
    /// When the extra payment fully clears its target, that debt's
    /// minimum payment rolls into the extra pool for all later months,
    /// cumulatively across payoffs.
    pub fn simulate_snowball(
        &self,
        debts: &[Debt],
        extra_monthly: f64,
    ) -> Result<SimulationResult, EngineError> {
        for debt in debts {
            debt.validate()?;
        }
        if !extra_monthly.is_finite() || extra_monthly < 0.0 {
            return Err(EngineError::invalid(
                "extra_monthly",
                extra_monthly,
                "must be a finite non-negative amount",
            ));
        }

        let eps = self.config.balance_epsilon;
        let cap = self.config.max_months;

        let mut ordered: Vec<&Debt> = debts.iter().collect();
        ordered.sort_by(|a, b| a.current_balance.total_cmp(&b.current_balance));

        let mut state = SimulationState::from_debts(ordered.iter().copied(), extra_monthly);
        let mut interest_by_debt = vec![0.0; ordered.len()];
        // A debt that starts at or below the epsilon was never open
        let mut cleared_month: Vec<Option<u32>> = state
            .balances
            .iter()
            .map(|&b| if b <= eps { Some(0) } else { None })
            .collect();
        let mut trace = Vec::new();

        while state.any_open(eps) && state.month < cap {
            state.month += 1;

            // Minimum payments and interest accrual on every open debt.
            // A non-amortizing debt grows here; it is never a reason to
            // stop the run, it just pins the loop at the cap.
            for (i, debt) in ordered.iter().enumerate() {
                let balance = state.balances[i];
                if balance <= eps {
                    continue;
                }
                let interest = balance * debt.monthly_rate();
                let principal = debt.minimum_payment - interest;
                state.balances[i] = (balance - principal).max(0.0);
                state.total_interest_paid += interest;
                interest_by_debt[i] += interest;

                if state.balances[i] <= eps && cleared_month[i].is_none() {
                    cleared_month[i] = Some(state.month);
                }
            }

            // Dynamic retargeting: the snowball always aims at the
            // currently smallest open balance.
            if let Some(target) = state.smallest_open(eps) {
                if state.extra_pool > 0.0 {
                    let previous = state.balances[target];
                    state.balances[target] = (previous - state.extra_pool).max(0.0);

                    // Clearing is an epsilon crossing, not an exact zero:
                    // a sub-cent residual is a paid-off debt.
                    if previous > eps && state.balances[target] <= eps {
                        // Rollover: the freed minimum joins the pool
                        // permanently.
                        state.extra_pool += ordered[target].minimum_payment;
                        if cleared_month[target].is_none() {
                            cleared_month[target] = Some(state.month);
                        }
                    }
                }
            }

            if self.config.trace {
                trace.push(TraceRow {
                    month: state.month,
                    balances: state.balances.clone(),
                    total_balance: state.total_balance(),
                });
            }
        }

        let cap_reached = state.any_open(eps);
        let mut non_amortizing = Vec::new();
        let mut per_debt = Vec::with_capacity(ordered.len());
        for (i, debt) in ordered.iter().enumerate() {
            if debt.is_non_amortizing() {
                non_amortizing.push(debt.id);
            }
            per_debt.push(DebtOutcome {
                debt_id: debt.id,
                months: cleared_month[i].unwrap_or(cap),
                interest_paid: interest_by_debt[i],
                non_amortizing: debt.is_non_amortizing(),
            });
        }

        Ok(SimulationResult {
            months: state.month,
            years: SimulationResult::years_from_months(state.month),
            total_interest: state.total_interest_paid,
            cap_reached,
            non_amortizing,
            per_debt,
            trace,
        })
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

/// Assemble per-month rows from the independent per-debt histories.
/// Paid-off debts read 0 past their payoff month; a non-amortizing debt
/// holds its starting balance (no payment ever reduces it).
fn build_current_trace(
    debts: &[Debt],
    outcomes: &[DebtOutcome],
    series: &[Vec<f64>],
    overall_months: u32,
) -> Vec<TraceRow> {
    let mut rows = Vec::with_capacity(overall_months as usize);
    for month in 1..=overall_months {
        let idx = (month - 1) as usize;
        let balances: Vec<f64> = debts
            .iter()
            .enumerate()
            .map(|(i, debt)| match series[i].get(idx) {
                Some(&b) => b,
                None if outcomes[i].non_amortizing => debt.current_balance,
                None => 0.0,
            })
            .collect();
        let total_balance = balances.iter().sum();
        rows.push(TraceRow { month, balances, total_balance });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::monthly_payment;
    use approx::assert_relative_eq;

    fn debt(id: u64, balance: f64, rate: f64, term: u32, payment: f64) -> Debt {
        Debt::new(id, "bank", format!("debt-{id}"), balance, rate, term, payment).unwrap()
    }

    fn engine() -> SimulationEngine {
        SimulationEngine::default()
    }

    fn tracing_engine() -> SimulationEngine {
        SimulationEngine::new(SimulationConfig { trace: true, ..Default::default() })
    }

    #[test]
    fn test_sufficient_payment_terminates_within_term() {
        // Payment computed from the annuity formula pays off in ~term
        let payment = monthly_payment(10_000.0, 9.0, 48).unwrap();
        let d = debt(1, 10_000.0, 9.0, 48, payment);

        let result = engine().simulate_current(&[d]).unwrap();
        assert!(!result.cap_reached);
        assert!(result.non_amortizing.is_empty());
        assert!(result.months >= 47 && result.months <= 49, "months = {}", result.months);
    }

    #[test]
    fn test_non_amortizing_debt_reports_cap_sentinel() {
        // 1% monthly interest on 10k = 100 >= payment
        let d = debt(1, 10_000.0, 12.0, 120, 100.0);

        let result = engine().simulate_current(&[d]).unwrap();
        assert_eq!(result.months, MAX_SIMULATION_MONTHS);
        assert!(result.cap_reached);
        assert_eq!(result.non_amortizing, vec![1]);
        assert!(result.per_debt[0].non_amortizing);
        // No misleading interest figure accumulates past detection
        assert_eq!(result.per_debt[0].interest_paid, 0.0);
    }

    #[test]
    fn test_concrete_single_debt_scenario() {
        // 1200 at 12% with the ~12-month amortizing payment
        let d = debt(1, 1_200.0, 12.0, 12, 113.10);

        let result = engine().simulate_current(&[d]).unwrap();
        assert!(result.months >= 11 && result.months <= 13, "months = {}", result.months);
        assert!(
            result.total_interest > 70.0 && result.total_interest < 90.0,
            "interest = {}",
            result.total_interest
        );
        assert!(!result.cap_reached);
    }

    #[test]
    fn test_snowball_zero_extra_matches_current_situation() {
        let debts = vec![
            debt(1, 500.0, 10.0, 12, 50.0),
            debt(2, 2_000.0, 15.0, 24, 100.0),
            debt(3, 1_200.0, 12.0, 12, 113.10),
        ];

        let eng = engine();
        let current = eng.simulate_current(&debts).unwrap();
        let snowball = eng.simulate_snowball(&debts, 0.0).unwrap();

        assert_eq!(current.months, snowball.months);
        assert_relative_eq!(current.total_interest, snowball.total_interest, epsilon = 1e-6);
    }

    #[test]
    fn test_snowball_monotone_in_extra_payment() {
        let debts = vec![
            debt(1, 500.0, 10.0, 12, 50.0),
            debt(2, 2_000.0, 15.0, 24, 100.0),
            debt(3, 5_000.0, 18.0, 60, 150.0),
        ];

        let eng = engine();
        let mut last_months = u32::MAX;
        let mut last_interest = f64::MAX;
        for extra in [0.0, 50.0, 100.0, 200.0, 400.0] {
            let result = eng.simulate_snowball(&debts, extra).unwrap();
            assert!(
                result.months <= last_months,
                "months increased at extra={extra}: {} > {}",
                result.months,
                last_months
            );
            assert!(
                result.total_interest <= last_interest + 1e-9,
                "interest increased at extra={extra}"
            );
            last_months = result.months;
            last_interest = result.total_interest;
        }
    }

    #[test]
    fn test_snowball_rollover_grows_extra_pool() {
        // A (500 @ 10%, 50/mo) clears first; from then on B should see
        // 100 minimum + 150 extra pool per month.
        let a = debt(1, 500.0, 10.0, 12, 50.0);
        let b = debt(2, 2_000.0, 15.0, 24, 100.0);

        let result = tracing_engine().simulate_snowball(&[a, b], 100.0).unwrap();

        let outcome_a = result.per_debt.iter().find(|o| o.debt_id == 1).unwrap();
        let outcome_b = result.per_debt.iter().find(|o| o.debt_id == 2).unwrap();
        assert!(outcome_a.months < outcome_b.months, "smallest debt clears first");

        // Verify the 150 pool lands on B after A clears: over one month
        // B's balance moves by interest accrual minus (100 + 150).
        let m = outcome_a.months as usize;
        let before = &result.trace[m - 1]; // month A cleared
        let after = &result.trace[m]; // first full month with the rollover
        let b_idx = before.balances.len() - 1; // B sorted last (larger balance)
        let expected = (before.balances[b_idx] * (1.0 + 0.15 / 12.0) - 250.0).max(0.0);
        assert_relative_eq!(after.balances[b_idx], expected, epsilon = 1e-6);
    }

    #[test]
    fn test_simulation_is_idempotent_over_borrowed_input() {
        let debts = vec![
            debt(1, 500.0, 10.0, 12, 50.0),
            debt(2, 2_000.0, 15.0, 24, 100.0),
        ];
        let snapshot: Vec<f64> = debts.iter().map(|d| d.current_balance).collect();

        let eng = engine();
        let first = eng.simulate_snowball(&debts, 100.0).unwrap();
        let second = eng.simulate_snowball(&debts, 100.0).unwrap();

        assert_eq!(first.months, second.months);
        assert_eq!(first.total_interest, second.total_interest);
        let unchanged: Vec<f64> = debts.iter().map(|d| d.current_balance).collect();
        assert_eq!(snapshot, unchanged);
    }

    #[test]
    fn test_zero_balance_debt_reports_zero_months() {
        let paid_off = debt(1, 0.0, 10.0, 12, 50.0);
        let open = debt(2, 2_000.0, 15.0, 24, 100.0);

        let result = engine().simulate_snowball(&[paid_off, open], 100.0).unwrap();
        assert!(!result.cap_reached);

        let outcome = result.per_debt.iter().find(|o| o.debt_id == 1).unwrap();
        assert_eq!(outcome.months, 0);
        assert!(!outcome.non_amortizing);
        // Overall payoff time is driven by the open debt alone
        let open_outcome = result.per_debt.iter().find(|o| o.debt_id == 2).unwrap();
        assert_eq!(result.months, open_outcome.months);
    }

    #[test]
    fn test_sub_epsilon_residual_counts_as_cleared() {
        // At 0% the balance is 100.0 entering month 1's extra payment;
        // 99.995 leaves a 0.005 residual, below the epsilon.
        let d = debt(1, 150.0, 0.0, 12, 50.0);

        let result = engine().simulate_snowball(&[d], 99.995).unwrap();
        assert_eq!(result.months, 1);
        assert!(!result.cap_reached);
        assert_eq!(result.per_debt[0].months, 1);
    }

    #[test]
    fn test_negative_extra_is_rejected_not_floored() {
        let debts = vec![debt(1, 500.0, 10.0, 12, 50.0)];
        assert!(engine().simulate_snowball(&debts, -1.0).is_err());
        assert!(engine().simulate_snowball(&debts, f64::NAN).is_err());
    }

    #[test]
    fn test_snowball_with_non_amortizing_debt_pins_at_cap() {
        let bad = debt(1, 10_000.0, 12.0, 120, 100.0);
        let ok = debt(2, 500.0, 10.0, 12, 50.0);

        // No extra: the bad debt never clears, the run hits the cap and
        // interest keeps accumulating (worst-case modeling).
        let result = engine().simulate_snowball(&[bad.clone(), ok.clone()], 0.0).unwrap();
        assert_eq!(result.months, MAX_SIMULATION_MONTHS);
        assert!(result.cap_reached);
        assert_eq!(result.non_amortizing, vec![1]);
        assert!(result.total_interest > 0.0);

        // A large enough extra pool clears it anyway; the warning flag
        // stays, the cap flag goes away.
        let result = engine().simulate_snowball(&[bad, ok], 500.0).unwrap();
        assert!(!result.cap_reached);
        assert_eq!(result.non_amortizing, vec![1]);
    }

    #[test]
    fn test_current_trace_shape() {
        let debts = vec![
            debt(1, 500.0, 10.0, 12, 50.0),
            debt(2, 2_000.0, 15.0, 24, 100.0),
        ];
        let result = tracing_engine().simulate_current(&debts).unwrap();
        assert_eq!(result.trace.len(), result.months as usize);

        let last = result.trace.last().unwrap();
        assert_eq!(last.balances.len(), 2);
        assert!(last.total_balance <= BALANCE_EPSILON);

        // Balances never increase for amortizing debts
        for pair in result.trace.windows(2) {
            assert!(pair[1].total_balance <= pair[0].total_balance + 1e-9);
        }
    }
}
