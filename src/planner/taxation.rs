//! Double-taxation treaty lookup for cross-border income with France
//!
//! Pure reference data and rules: which country may tax each income type
//! under the bilateral treaty, how tax residency is determined from days
//! of presence and vital interests, and the relief method the treaty
//! applies. No rates or amounts are computed here.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Days of presence in a fiscal year that establish residency on their own
const RESIDENCY_DAY_THRESHOLD: u32 = 183;

/// Origin countries with a treaty on record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Colombia,
    Mexico,
    Argentina,
    Brazil,
    Chile,
}

/// Income categories the treaties assign taxing rights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeType {
    DependentWork,
    IndependentWork,
    Dividends,
    Interest,
    Royalties,
    RealEstate,
    Pensions,
}

/// Which country may tax an income type under a treaty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaxingRight {
    /// Taxed where the work or service is performed
    WhereServicePerformed,
    /// Taxed in the taxpayer's country of residence
    ResidenceCountry,
    /// The source country may withhold up to the given percentage
    SourceWithholdingCap { max_pct: u8 },
    /// Taxed where the property is located
    WherePropertyLocated,
}

/// How a treaty eliminates double taxation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReliefMethod {
    /// Tax paid abroad is credited against the residence-country liability
    TaxCredit,
}

/// One bilateral treaty with France
#[derive(Debug, Clone, Serialize)]
pub struct Treaty {
    pub country: Country,
    pub in_force: bool,
    pub signed_year: u32,
    pub effective_year: u32,
}

impl Treaty {
    /// Treaty on record for the given origin country
    pub fn for_country(country: Country) -> Self {
        let (signed_year, effective_year) = match country {
            Country::Colombia => (2015, 2019),
            Country::Mexico => (1991, 1993),
            Country::Argentina => (1979, 1983),
            Country::Brazil => (1971, 1972),
            Country::Chile => (2004, 2007),
        };
        Self { country, in_force: true, signed_year, effective_year }
    }

    /// Taxing right for one income type under this treaty
    pub fn taxing_right(&self, income: IncomeType) -> TaxingRight {
        match income {
            IncomeType::DependentWork => TaxingRight::WhereServicePerformed,
            IncomeType::IndependentWork | IncomeType::Pensions | IncomeType::Royalties => {
                TaxingRight::ResidenceCountry
            }
            IncomeType::Dividends => TaxingRight::SourceWithholdingCap { max_pct: 15 },
            IncomeType::Interest => {
                // The newer treaties cap interest withholding lower
                let max_pct = match self.country {
                    Country::Colombia | Country::Mexico => 10,
                    Country::Argentina | Country::Brazil | Country::Chile => 15,
                };
                TaxingRight::SourceWithholdingCap { max_pct }
            }
            IncomeType::RealEstate => TaxingRight::WherePropertyLocated,
        }
    }

    pub fn relief_method(&self) -> ReliefMethod {
        ReliefMethod::TaxCredit
    }
}

/// Where the taxpayer's personal and economic ties sit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VitalInterests {
    France,
    Origin,
    Both,
}

/// Facts the residency determination works from
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResidencyFacts {
    /// Days spent in France during the fiscal year (0-365)
    pub days_in_france: u32,

    pub vital_interests: VitalInterests,
}

/// Outcome of the residency determination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Residency {
    France,
    Origin,
    /// Resident in both countries; the treaty tie-breakers decide
    Dual,
}

impl ResidencyFacts {
    /// Determine tax residency from presence and vital interests.
    ///
    /// 183 or more days in France, or vital interests centered there,
    /// makes a French resident; vital interests in the origin country
    /// (or split interests under 183 days) keeps origin residency alive.
    /// Both at once is dual residency.
    pub fn determine(&self) -> Result<Residency, EngineError> {
        if self.days_in_france > 365 {
            return Err(EngineError::invalid(
                "days_in_france",
                self.days_in_france as f64,
                "must be between 0 and 365",
            ));
        }

        let france = self.days_in_france >= RESIDENCY_DAY_THRESHOLD
            || self.vital_interests == VitalInterests::France;
        let origin = self.vital_interests == VitalInterests::Origin
            || (self.days_in_france < RESIDENCY_DAY_THRESHOLD
                && self.vital_interests == VitalInterests::Both);

        Ok(match (france, origin) {
            (true, true) => Residency::Dual,
            (true, false) => Residency::France,
            _ => Residency::Origin,
        })
    }
}

/// Taxing right resolved for one requested income type
#[derive(Debug, Clone, Serialize)]
pub struct IncomeRuling {
    pub income: IncomeType,
    pub taxing_right: TaxingRight,
}

/// Full treaty assessment for one taxpayer situation
#[derive(Debug, Clone, Serialize)]
pub struct TreatyAssessment {
    pub treaty: Treaty,
    pub residency: Residency,
    pub rulings: Vec<IncomeRuling>,
    pub relief_method: ReliefMethod,
}

/// Assess a cross-border situation: residency, one ruling per requested
/// income type, and the treaty's relief method
pub fn assess(
    country: Country,
    facts: ResidencyFacts,
    income_types: &[IncomeType],
) -> Result<TreatyAssessment, EngineError> {
    if income_types.is_empty() {
        return Err(EngineError::invalid(
            "income_types",
            0.0,
            "at least one income type is required",
        ));
    }

    let residency = facts.determine()?;
    let treaty = Treaty::for_country(country);
    let rulings = income_types
        .iter()
        .map(|&income| IncomeRuling { income, taxing_right: treaty.taxing_right(income) })
        .collect();
    let relief_method = treaty.relief_method();

    Ok(TreatyAssessment { treaty, residency, rulings, relief_method })
}
