//! Household planning calculators: retirement outlook, emergency fund
//! sizing, financial leak projection, the snapshot ratio dashboard, and
//! the double-taxation treaty lookup

pub mod emergency;
pub mod leak;
pub mod retirement;
pub mod snapshot;
pub mod taxation;

pub use emergency::{EmergencyFundPlan, EmergencyOutlook, FundStatus, RiskFactors};
pub use leak::{LeakInputs, LeakReport};
pub use retirement::{RetirementOutlook, RetirementPlan, RiskProfile};
pub use snapshot::{Snapshot, SnapshotAlert, SnapshotMetrics};
pub use taxation::{Country, IncomeType, Residency, ResidencyFacts, TreatyAssessment};
