//! Human-readable per-bracket breakdown of a progressive schedule.
//!
//! Produces one line per bracket that actually taxed something, in the
//! schedule's native currency, for transparency in UIs and debugging:
//!
//! `22% on US$48,475 to US$103,350: US$7,870.50`

use rust_decimal::Decimal;

use crate::calculations::common::{format_amount, format_rate_percent, round_half_up};
use crate::models::{Currency, TaxBracket};

/// The portion of a taxable income that fell inside one bracket, and the
/// tax that slice generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketSlice {
    pub floor: Decimal,
    pub ceiling: Option<Decimal>,
    pub rate: Decimal,
    pub taxed: Decimal,
    pub tax: Decimal,
}

/// Splits `taxable_income` across the brackets it reaches. Brackets the
/// income never enters produce no slice, so the slice taxes sum to exactly
/// the progressive tax.
pub fn bracket_slices(taxable_income: Decimal, brackets: &[TaxBracket]) -> Vec<BracketSlice> {
    let mut slices = Vec::new();

    for bracket in brackets {
        if taxable_income <= bracket.min {
            break;
        }

        let ceiling = match bracket.max {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        let taxed = ceiling - bracket.min;
        slices.push(BracketSlice {
            floor: bracket.min,
            ceiling: bracket.max,
            rate: bracket.rate,
            taxed,
            tax: taxed * bracket.rate,
        });
    }

    slices
}

/// Renders one narration line per contributing bracket.
pub fn bracket_lines(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
    currency: Currency,
) -> Vec<String> {
    bracket_slices(taxable_income, brackets)
        .iter()
        .map(|slice| narrate(slice, currency))
        .collect()
}

fn narrate(slice: &BracketSlice, currency: Currency) -> String {
    let symbol = currency.symbol();
    let rate = format_rate_percent(slice.rate);
    let floor = format_amount(slice.floor);
    let tax = format_amount(round_half_up(slice.tax));

    match slice.ceiling {
        Some(max) => {
            let max = format_amount(max);
            format!("{rate}% on {symbol}{floor} to {symbol}{max}: {symbol}{tax}")
        }
        None => format!("{rate}% on {symbol}{floor} and up: {symbol}{tax}"),
    }
}
