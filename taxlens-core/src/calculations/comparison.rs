//! Multi-jurisdiction comparison: thin orchestration over the resolver.
//!
//! One breakdown per requested jurisdiction, all for the same user income
//! and display currency, ordered for presentation. Cross-border ordering
//! only makes sense in a common currency, so the sort key is always the
//! display-converted amount.

use rust_decimal::Decimal;

use crate::calculations::resolver::{ResolveError, TaxResolver};
use crate::exchange::ExchangeRate;
use crate::models::{Currency, TaxBreakdown};

/// Sort order for a comparison listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    TotalTaxAscending,
    TotalTaxDescending,
    AfterTaxIncomeDescending,
}

/// Resolves every requested jurisdiction and sorts the results.
///
/// Ties are broken by jurisdiction code so the ordering is deterministic
/// regardless of input order.
///
/// # Errors
///
/// Fails on the first unknown code or invalid income; a comparison with a
/// bad entry is reported rather than silently thinned out.
pub fn rank(
    resolver: &TaxResolver<'_>,
    codes: &[&str],
    income: Decimal,
    user_currency: Currency,
    display_currency: Currency,
    rate: ExchangeRate,
    by: RankBy,
) -> Result<Vec<TaxBreakdown>, ResolveError> {
    let mut entries = codes
        .iter()
        .map(|code| {
            resolver.resolve_with_breakdown(income, user_currency, code, display_currency, rate)
        })
        .collect::<Result<Vec<_>, _>>()?;

    entries.sort_by(|a, b| {
        let key = match by {
            RankBy::TotalTaxAscending => a.display.total_tax.cmp(&b.display.total_tax),
            RankBy::TotalTaxDescending => b.display.total_tax.cmp(&a.display.total_tax),
            RankBy::AfterTaxIncomeDescending => {
                b.display.after_tax_income.cmp(&a.display.after_tax_income)
            }
        };
        key.then_with(|| a.jurisdiction_code.cmp(&b.jurisdiction_code))
    });

    Ok(entries)
}
