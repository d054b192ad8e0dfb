use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Country, TaxBracket};

/// A US state or Canadian province with its regional rate schedule.
///
/// `standard_deduction` and `tax_credit` are always present with explicit
/// zero defaults rather than optional fields, so calculation code never
/// branches on presence. A deduction reduces income before the bracket
/// schedule is applied; a credit is subtracted from the bracketed tax,
/// floored at zero:
///
/// `regional_tax = max(0, progressive_tax(income - standard_deduction) - tax_credit)`
///
/// No catalog entry currently carries both, but the combination is defined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub code: String,
    pub name: String,
    pub country: Country,
    pub brackets: Vec<TaxBracket>,
    #[serde(default)]
    pub standard_deduction: Decimal,
    #[serde(default)]
    pub tax_credit: Decimal,
}
