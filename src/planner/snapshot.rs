//! Financial snapshot: balance-sheet and cashflow ratios with alerts

use serde::{Deserialize, Serialize};

use crate::error::{check_range, EngineError};

/// A household's monthly cashflow and balance-sheet figures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub monthly_income: f64,

    // Monthly outflow categories
    pub non_negotiables: f64,
    pub debt_payments: f64,
    pub savings: f64,
    pub investment: f64,
    pub lifestyle: f64,
    pub giving: f64,

    // Balance sheet
    pub total_assets: f64,
    pub total_debt: f64,
    pub emergency_fund: f64,
}

/// Severity of a metric alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    Danger,
    Warning,
    Success,
}

/// A metric crossing one of the fixed thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotAlert {
    pub level: AlertLevel,
    pub message: String,
}

/// Computed ratios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetrics {
    /// Share of income consumed by all outflows, percent.
    /// `None` when income is zero.
    pub income_utilization_pct: Option<f64>,

    /// Assets over debt. `None` when debt-free.
    pub solvency: Option<f64>,

    /// Debt over assets, percent. `None` without assets.
    pub debt_ratio_pct: Option<f64>,

    /// Debt payments over income, percent. `None` when income is zero.
    pub debt_to_income_pct: Option<f64>,

    /// Emergency fund over essential monthly spending
    pub emergency_months: f64,

    pub alerts: Vec<SnapshotAlert>,
}

impl Snapshot {
    pub fn metrics(&self) -> Result<SnapshotMetrics, EngineError> {
        for (field, value) in [
            ("monthly_income", self.monthly_income),
            ("non_negotiables", self.non_negotiables),
            ("debt_payments", self.debt_payments),
            ("savings", self.savings),
            ("investment", self.investment),
            ("lifestyle", self.lifestyle),
            ("giving", self.giving),
            ("total_assets", self.total_assets),
            ("total_debt", self.total_debt),
            ("emergency_fund", self.emergency_fund),
        ] {
            check_range(field, value, 0.0, f64::MAX)?;
        }

        let total_outflow = self.non_negotiables
            + self.debt_payments
            + self.savings
            + self.investment
            + self.lifestyle
            + self.giving;

        let income_utilization_pct = if self.monthly_income > 0.0 {
            Some(total_outflow / self.monthly_income * 100.0)
        } else {
            None
        };
        let solvency = if self.total_debt > 0.0 {
            Some(self.total_assets / self.total_debt)
        } else {
            None
        };
        let debt_ratio_pct = if self.total_assets > 0.0 {
            Some(self.total_debt / self.total_assets * 100.0)
        } else {
            None
        };
        let debt_to_income_pct = if self.monthly_income > 0.0 {
            Some(self.debt_payments / self.monthly_income * 100.0)
        } else {
            None
        };
        let emergency_months = if self.non_negotiables > 0.0 {
            self.emergency_fund / self.non_negotiables
        } else {
            0.0
        };

        let mut alerts = Vec::new();
        if let Some(dti) = debt_to_income_pct {
            if dti > 40.0 {
                alerts.push(SnapshotAlert {
                    level: AlertLevel::Danger,
                    message: "debt payments above 40% of income".to_string(),
                });
            } else if dti > 30.0 {
                alerts.push(SnapshotAlert {
                    level: AlertLevel::Warning,
                    message: "debt payments above 30% of income".to_string(),
                });
            }
        }
        if emergency_months < 1.0 {
            alerts.push(SnapshotAlert {
                level: AlertLevel::Danger,
                message: "emergency fund covers less than one month".to_string(),
            });
        } else if emergency_months < 3.0 {
            alerts.push(SnapshotAlert {
                level: AlertLevel::Warning,
                message: "emergency fund below the 3-6 month range".to_string(),
            });
        } else if emergency_months >= 6.0 {
            alerts.push(SnapshotAlert {
                level: AlertLevel::Success,
                message: "emergency fund fully covers 6+ months".to_string(),
            });
        }
        if let Some(s) = solvency {
            if s < 1.0 {
                alerts.push(SnapshotAlert {
                    level: AlertLevel::Danger,
                    message: "debts exceed assets".to_string(),
                });
            }
        }

        Ok(SnapshotMetrics {
            income_utilization_pct,
            solvency,
            debt_ratio_pct,
            debt_to_income_pct,
            emergency_months,
            alerts,
        })
    }
}
