use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Country, Currency};

/// The core output of a single (income, jurisdiction) resolution.
///
/// All monetary fields are in one currency; which one depends on context
/// (see [`TaxBreakdown`], which carries both a native and a display copy).
/// `effective_rate` is `total_tax / gross_income` as a fraction, zero when
/// gross income is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculation {
    pub federal_tax: Decimal,
    pub regional_tax: Decimal,
    pub total_tax: Decimal,
    pub effective_rate: Decimal,
    pub after_tax_income: Decimal,
}

/// The full currency-aware result of `resolve_with_breakdown`.
///
/// `native` is authoritative: tax is always computed in the jurisdiction's
/// own currency. `display` holds the same amounts converted to the
/// requested display currency (a scaled copy when `needs_conversion`,
/// otherwise identical). The effective rate is a ratio of two amounts in
/// the same currency, so it is carried over unchanged; display-currency
/// choice can never move it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub jurisdiction_code: String,
    pub jurisdiction_name: String,
    pub country: Country,

    /// Gross income converted into the jurisdiction's native currency;
    /// this is the amount the bracket schedules were applied to.
    pub gross_income_native: Decimal,
    pub native: TaxCalculation,
    pub display: TaxCalculation,

    /// Deductions and credit actually applied, in the native currency.
    pub federal_deduction: Decimal,
    pub regional_deduction: Decimal,
    pub tax_credit: Decimal,

    /// One line per contributing bracket, native currency.
    pub federal_bracket_lines: Vec<String>,
    pub regional_bracket_lines: Vec<String>,

    /// Currency the bracket lines and deduction amounts are expressed in.
    pub bracket_currency: Currency,
    pub user_currency: Currency,
    pub display_currency: Currency,
    pub needs_conversion: bool,
}
