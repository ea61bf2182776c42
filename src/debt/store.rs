//! Flat JSON persistence for the debt list
//!
//! The engine itself has no opinion on storage; the debt list is kept
//! between sessions as a single JSON document keyed by nothing but its
//! file path.

use super::Debt;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store for a `Vec<Debt>`
#[derive(Debug, Clone)]
pub struct DebtStore {
    path: PathBuf,
}

impl DebtStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Load the saved debt list, validating every record.
    /// A missing file is an empty list, not an error.
    pub fn load(&self) -> Result<Vec<Debt>, Box<dyn Error>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let debts: Vec<Debt> = serde_json::from_str(&raw)?;
        for debt in &debts {
            debt.validate()?;
        }
        log::debug!("loaded {} debts from {}", debts.len(), self.path.display());
        Ok(debts)
    }

    /// Persist the full debt list, replacing any previous contents
    pub fn save(&self, debts: &[Debt]) -> Result<(), Box<dyn Error>> {
        let raw = serde_json::to_string_pretty(debts)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Remove the backing file (the "reset" action)
    pub fn clear(&self) -> Result<(), Box<dyn Error>> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
