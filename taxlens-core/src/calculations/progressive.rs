//! The progressive bracket scan at the heart of every schedule.

use rust_decimal::Decimal;

use crate::models::TaxBracket;

/// Applies an ordered bracket table to a taxable income.
///
/// Each bracket taxes the slice of income that falls inside it:
/// `min(income, max) - bracket.min` at the bracket's marginal rate.
/// Brackets are sorted ascending, so the scan stops at the first bracket
/// the income does not reach. Non-positive income owes nothing.
///
/// The result is monotonically non-decreasing in `taxable_income` and
/// continuous at every bracket boundary; the tests pin both properties.
pub fn progressive_tax(taxable_income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    let mut tax = Decimal::ZERO;

    for bracket in brackets {
        if taxable_income <= bracket.min {
            break;
        }

        let ceiling = match bracket.max {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        tax += (ceiling - bracket.min) * bracket.rate;
    }

    tax
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    /// 2025 US federal single-filer schedule.
    fn us_federal_brackets() -> Vec<TaxBracket> {
        vec![
            TaxBracket::new(dec!(0), Some(dec!(11925)), dec!(0.10)),
            TaxBracket::new(dec!(11925), Some(dec!(48475)), dec!(0.12)),
            TaxBracket::new(dec!(48475), Some(dec!(103350)), dec!(0.22)),
            TaxBracket::new(dec!(103350), Some(dec!(197300)), dec!(0.24)),
            TaxBracket::new(dec!(197300), Some(dec!(250525)), dec!(0.32)),
            TaxBracket::new(dec!(250525), Some(dec!(626350)), dec!(0.35)),
            TaxBracket::new(dec!(626350), None, dec!(0.37)),
        ]
    }

    fn flat_brackets(rate: Decimal) -> Vec<TaxBracket> {
        vec![TaxBracket::new(dec!(0), None, rate)]
    }

    // =========================================================================
    // basic bracket application
    // =========================================================================

    #[test]
    fn zero_income_owes_nothing() {
        assert_eq!(progressive_tax(dec!(0), &us_federal_brackets()), dec!(0));
    }

    #[test]
    fn negative_income_owes_nothing() {
        assert_eq!(
            progressive_tax(dec!(-5000), &us_federal_brackets()),
            dec!(0)
        );
    }

    #[test]
    fn empty_bracket_table_owes_nothing() {
        assert_eq!(progressive_tax(dec!(100000), &[]), dec!(0));
    }

    #[test]
    fn income_within_first_bracket() {
        // 10000 * 0.10 = 1000
        assert_eq!(
            progressive_tax(dec!(10000), &us_federal_brackets()),
            dec!(1000.00)
        );
    }

    #[test]
    fn income_spanning_three_brackets() {
        // 11925 * 0.10 + (48475 - 11925) * 0.12 + (84250 - 48475) * 0.22
        //   = 1192.50 + 4386 + 7870.50 = 13449
        assert_eq!(
            progressive_tax(dec!(84250), &us_federal_brackets()),
            dec!(13449.0000)
        );
    }

    #[test]
    fn income_in_unbounded_top_bracket() {
        // 1192.50 + 4386 + 12072.50 + 22548 + 17032 + 131538.75
        //   + (700000 - 626350) * 0.37 = 216020.25
        assert_eq!(
            progressive_tax(dec!(700000), &us_federal_brackets()),
            dec!(216020.2500)
        );
    }

    #[test]
    fn flat_schedule_taxes_everything_at_one_rate() {
        assert_eq!(
            progressive_tax(dec!(50000), &flat_brackets(dec!(0.0455))),
            dec!(2275.0000)
        );
    }

    // =========================================================================
    // monotonicity and boundary continuity
    // =========================================================================

    #[test]
    fn tax_is_monotonically_non_decreasing() {
        let brackets = us_federal_brackets();
        let mut previous = Decimal::ZERO;

        let mut income = Decimal::ZERO;
        while income <= dec!(700000) {
            let tax = progressive_tax(income, &brackets);
            assert!(
                tax >= previous,
                "tax decreased from {previous} to {tax} at income {income}"
            );
            previous = tax;
            income += dec!(3777.77);
        }
    }

    #[test]
    fn tax_is_continuous_at_every_bracket_boundary() {
        let brackets = us_federal_brackets();
        let epsilon = dec!(0.01);

        for boundary in brackets.iter().filter_map(|b| b.max) {
            let below = progressive_tax(boundary - epsilon, &brackets);
            let at = progressive_tax(boundary, &brackets);
            let above = progressive_tax(boundary + epsilon, &brackets);

            // One cent of income moves tax by at most one cent times the
            // top marginal rate; a cliff would show up as a full bracket's
            // worth of jump.
            assert!(
                (at - below).abs() <= epsilon,
                "discontinuity below boundary {boundary}: {below} vs {at}"
            );
            assert!(
                (above - at).abs() <= epsilon,
                "discontinuity above boundary {boundary}: {at} vs {above}"
            );
        }
    }

    #[test]
    fn boundary_income_taxed_identically_from_either_bracket() {
        // At exactly the boundary the upper bracket contributes a zero
        // slice, so both formulations agree.
        let brackets = us_federal_brackets();

        let at_boundary = progressive_tax(dec!(48475), &brackets);
        let expected = dec!(11925) * dec!(0.10) + (dec!(48475) - dec!(11925)) * dec!(0.12);

        assert_eq!(at_boundary, expected);
    }
}
