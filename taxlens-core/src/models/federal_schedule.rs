use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxBracket;

/// A country's federal rate schedule.
///
/// The US schedule carries the federal standard deduction; the Canadian
/// schedule is a bare bracket table and leaves the deduction at its zero
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalSchedule {
    pub brackets: Vec<TaxBracket>,
    #[serde(default)]
    pub standard_deduction: Decimal,
}
