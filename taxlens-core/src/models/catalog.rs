use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Country, FederalSchedule, Jurisdiction, TaxBracket};

/// Errors found while validating a tax catalog.
///
/// `schedule` names the offending bracket table: a jurisdiction code, or
/// `"CA federal"` / `"US federal"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{schedule}: bracket {index} has negative minimum {min}")]
    NegativeBracketMin {
        schedule: String,
        index: usize,
        min: Decimal,
    },

    #[error("{schedule}: bracket {index} has rate {rate} outside [0, 1]")]
    RateOutOfRange {
        schedule: String,
        index: usize,
        rate: Decimal,
    },

    #[error("{schedule}: bracket {index} has max {max} not above min {min}")]
    EmptyBracketRange {
        schedule: String,
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    #[error("{schedule}: bracket {index} max {max} does not meet next bracket min {next_min}")]
    DiscontiguousBrackets {
        schedule: String,
        index: usize,
        max: Decimal,
        next_min: Decimal,
    },

    #[error("{schedule}: final bracket must be unbounded (max omitted)")]
    BoundedFinalBracket { schedule: String },

    #[error("{country} federal schedule has no brackets")]
    EmptyFederalSchedule { country: Country },

    #[error("duplicate jurisdiction code {0}")]
    DuplicateCode(String),

    #[error("{code}: standard deduction {amount} is negative")]
    NegativeDeduction { code: String, amount: Decimal },

    #[error("{code}: tax credit {amount} is negative")]
    NegativeCredit { code: String, amount: Decimal },
}

/// Federal rate schedules, one per country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalSchedules {
    #[serde(rename = "CA")]
    pub ca: FederalSchedule,
    #[serde(rename = "US")]
    pub us: FederalSchedule,
}

/// The immutable rate table for one tax year.
///
/// Loaded once at startup and never mutated. Replacing the backing data
/// file is how a new tax year is introduced; no code changes are involved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCatalog {
    pub tax_year: i32,
    pub federal: FederalSchedules,
    pub jurisdictions: Vec<Jurisdiction>,
}

impl TaxCatalog {
    /// The federal schedule that applies to jurisdictions of `country`.
    pub fn federal(&self, country: Country) -> &FederalSchedule {
        match country {
            Country::Canada => &self.federal.ca,
            Country::UnitedStates => &self.federal.us,
        }
    }

    /// Looks up a jurisdiction by its code. The catalog is small enough
    /// that a linear scan beats maintaining a parallel index.
    pub fn jurisdiction(&self, code: &str) -> Option<&Jurisdiction> {
        self.jurisdictions.iter().find(|j| j.code == code)
    }

    /// Checks every invariant the calculation code relies on: bracket
    /// ordering and contiguity, rates within [0, 1], an unbounded final
    /// bracket, unique codes, and non-negative deductions and credits.
    ///
    /// An empty bracket table is valid for a jurisdiction (a state with no
    /// income tax) but not for a federal schedule.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (country, schedule) in [
            (Country::Canada, &self.federal.ca),
            (Country::UnitedStates, &self.federal.us),
        ] {
            if schedule.brackets.is_empty() {
                return Err(CatalogError::EmptyFederalSchedule { country });
            }
            validate_brackets(&format!("{country} federal"), &schedule.brackets)?;
        }

        let mut seen = std::collections::BTreeSet::new();
        for jurisdiction in &self.jurisdictions {
            if !seen.insert(jurisdiction.code.as_str()) {
                return Err(CatalogError::DuplicateCode(jurisdiction.code.clone()));
            }
            validate_brackets(&jurisdiction.code, &jurisdiction.brackets)?;
            if jurisdiction.standard_deduction < Decimal::ZERO {
                return Err(CatalogError::NegativeDeduction {
                    code: jurisdiction.code.clone(),
                    amount: jurisdiction.standard_deduction,
                });
            }
            if jurisdiction.tax_credit < Decimal::ZERO {
                return Err(CatalogError::NegativeCredit {
                    code: jurisdiction.code.clone(),
                    amount: jurisdiction.tax_credit,
                });
            }
        }

        Ok(())
    }
}

fn validate_brackets(schedule: &str, brackets: &[TaxBracket]) -> Result<(), CatalogError> {
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.min < Decimal::ZERO {
            return Err(CatalogError::NegativeBracketMin {
                schedule: schedule.to_string(),
                index,
                min: bracket.min,
            });
        }
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(CatalogError::RateOutOfRange {
                schedule: schedule.to_string(),
                index,
                rate: bracket.rate,
            });
        }

        let is_last = index == brackets.len() - 1;
        match bracket.max {
            Some(max) if max <= bracket.min => {
                return Err(CatalogError::EmptyBracketRange {
                    schedule: schedule.to_string(),
                    index,
                    min: bracket.min,
                    max,
                });
            }
            Some(max) if !is_last => {
                let next_min = brackets[index + 1].min;
                if max != next_min {
                    return Err(CatalogError::DiscontiguousBrackets {
                        schedule: schedule.to_string(),
                        index,
                        max,
                        next_min,
                    });
                }
            }
            Some(_) => {
                return Err(CatalogError::BoundedFinalBracket {
                    schedule: schedule.to_string(),
                });
            }
            None if !is_last => {
                // An unbounded bracket anywhere but last would shadow the
                // brackets after it.
                return Err(CatalogError::BoundedFinalBracket {
                    schedule: schedule.to_string(),
                });
            }
            None => {}
        }
    }

    Ok(())
}
