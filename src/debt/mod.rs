//! Debt data model, CSV loading, and JSON persistence

mod data;
pub mod loader;
pub mod store;

pub use data::Debt;
pub use loader::{load_debts, load_debts_from_reader};
pub use store::DebtStore;
