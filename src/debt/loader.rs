//! Load debts from a household inforce CSV

use super::Debt;
use chrono::Utc;
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the debts inforce columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "DebtID")]
    debt_id: u64,
    #[serde(rename = "Creditor")]
    creditor: String,
    #[serde(rename = "Reference")]
    reference: String,
    #[serde(rename = "CurrentBalance")]
    current_balance: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "RemainingTerm")]
    remaining_term: u32,
    #[serde(rename = "MinimumPayment")]
    minimum_payment: f64,
}

impl CsvRow {
    fn to_debt(self) -> Result<Debt, Box<dyn Error>> {
        let debt = Debt {
            id: self.debt_id,
            creditor_name: self.creditor,
            reference: self.reference,
            current_balance: self.current_balance,
            annual_rate: self.annual_rate,
            remaining_term: self.remaining_term,
            minimum_payment: self.minimum_payment,
            added_at: Utc::now(),
        };
        debt.validate()?;
        Ok(debt)
    }
}

/// Load all debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut debts = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.to_debt()?);
    }

    log::debug!("loaded {} debts from csv", debts.len());
    Ok(debts)
}

/// Load debts from any reader (e.g., string buffer, network stream)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut debts = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.to_debt()?);
    }

    Ok(debts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
DebtID,Creditor,Reference,CurrentBalance,AnnualRate,RemainingTerm,MinimumPayment
1,Banco Santander,Tarjeta de credito,15000,12.5,36,450
2,CaixaBank,Prestamo coche,8000,7.9,48,195.50
";

    #[test]
    fn test_load_from_reader() {
        let debts = load_debts_from_reader(SAMPLE.as_bytes()).expect("Failed to load debts");
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].id, 1);
        assert_eq!(debts[0].remaining_term, 36);
        assert!((debts[1].minimum_payment - 195.50).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_row_is_rejected() {
        let bad = "\
DebtID,Creditor,Reference,CurrentBalance,AnnualRate,RemainingTerm,MinimumPayment
1,Banco,Tarjeta,15000,250.0,36,450
";
        assert!(load_debts_from_reader(bad.as_bytes()).is_err());
    }
}
