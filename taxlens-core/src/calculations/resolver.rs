//! Per-jurisdiction tax resolution: federal + regional schedules,
//! deduction and credit handling, and the currency-aware breakdown.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::narration::bracket_lines;
use crate::calculations::progressive::progressive_tax;
use crate::exchange::{self, ExchangeRate};
use crate::models::{Currency, Jurisdiction, TaxBreakdown, TaxCalculation, TaxCatalog};

/// Errors that can occur while resolving a tax calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The requested code has no catalog entry. Never silently defaulted.
    #[error("unknown jurisdiction code '{0}'")]
    UnknownJurisdiction(String),

    /// Gross income below zero is rejected rather than clamped, so a bad
    /// input cannot masquerade as a zero-tax result.
    #[error("gross income must be non-negative, got {0}")]
    NegativeIncome(Decimal),
}

/// Everything resolve computes besides the public calculation; the
/// breakdown variant narrates from the same taxable incomes the tax was
/// computed from.
struct Resolved {
    calculation: TaxCalculation,
    federal_taxable: Decimal,
    regional_taxable: Decimal,
}

/// Resolves tax calculations against one immutable catalog.
///
/// Pure and deterministic: the same inputs always produce the same
/// outputs, and nothing here performs I/O or mutates shared state.
#[derive(Debug, Clone)]
pub struct TaxResolver<'a> {
    catalog: &'a TaxCatalog,
}

impl<'a> TaxResolver<'a> {
    pub fn new(catalog: &'a TaxCatalog) -> Self {
        Self { catalog }
    }

    /// Computes the tax burden on a gross income already denominated in
    /// the jurisdiction's native currency.
    ///
    /// Federal tax applies the country's schedule after its standard
    /// deduction (zero for Canada). Regional tax applies the
    /// jurisdiction's own schedule after its standard deduction, then
    /// subtracts any flat credit, floored at zero.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownJurisdiction`] if `code` has no catalog
    /// entry; [`ResolveError::NegativeIncome`] for negative income.
    pub fn resolve(
        &self,
        gross_income: Decimal,
        code: &str,
    ) -> Result<TaxCalculation, ResolveError> {
        let jurisdiction = self.lookup(code)?;
        check_income(gross_income)?;

        Ok(self.resolve_native(gross_income, jurisdiction).calculation)
    }

    /// The currency-aware variant: converts a user-entered income into the
    /// jurisdiction's native currency, resolves there, and reports both
    /// native and display-converted amounts plus per-bracket narration.
    ///
    /// Converting the *input* income changes which bracket thresholds are
    /// crossed and therefore the effective rate; converting the *outputs*
    /// to a display currency scales every amount by the same factor and
    /// leaves the effective rate untouched. The two conversions are kept
    /// strictly separate here.
    pub fn resolve_with_breakdown(
        &self,
        income: Decimal,
        user_currency: Currency,
        code: &str,
        display_currency: Currency,
        rate: ExchangeRate,
    ) -> Result<TaxBreakdown, ResolveError> {
        let jurisdiction = self.lookup(code)?;
        check_income(income)?;

        let native_currency = jurisdiction.country.native_currency();
        let gross_native = exchange::to_native(income, user_currency, jurisdiction.country, rate);
        debug!(
            code,
            %gross_native,
            user = user_currency.as_str(),
            native = native_currency.as_str(),
            "resolving breakdown"
        );

        let resolved = self.resolve_native(gross_native, jurisdiction);
        let federal = self.catalog.federal(jurisdiction.country);

        let display = convert_calculation(
            &resolved.calculation,
            native_currency,
            display_currency,
            rate,
        );

        Ok(TaxBreakdown {
            jurisdiction_code: jurisdiction.code.clone(),
            jurisdiction_name: jurisdiction.name.clone(),
            country: jurisdiction.country,
            gross_income_native: round_half_up(gross_native),
            native: resolved.calculation,
            display,
            federal_deduction: federal.standard_deduction,
            regional_deduction: jurisdiction.standard_deduction,
            tax_credit: jurisdiction.tax_credit,
            federal_bracket_lines: bracket_lines(
                resolved.federal_taxable,
                &federal.brackets,
                native_currency,
            ),
            regional_bracket_lines: bracket_lines(
                resolved.regional_taxable,
                &jurisdiction.brackets,
                native_currency,
            ),
            bracket_currency: native_currency,
            user_currency,
            display_currency,
            needs_conversion: native_currency != display_currency,
        })
    }

    fn lookup(&self, code: &str) -> Result<&'a Jurisdiction, ResolveError> {
        self.catalog
            .jurisdiction(code)
            .ok_or_else(|| ResolveError::UnknownJurisdiction(code.to_string()))
    }

    /// The core arithmetic, entirely in the jurisdiction's native
    /// currency. Deductions and credits are plain fields with zero
    /// defaults, so one formula covers every jurisdiction; Canadian
    /// entries simply carry zeroes.
    fn resolve_native(&self, gross_income: Decimal, jurisdiction: &Jurisdiction) -> Resolved {
        let federal = self.catalog.federal(jurisdiction.country);

        let federal_taxable = max(gross_income - federal.standard_deduction, Decimal::ZERO);
        let federal_tax = round_half_up(progressive_tax(federal_taxable, &federal.brackets));

        let regional_taxable = max(
            gross_income - jurisdiction.standard_deduction,
            Decimal::ZERO,
        );
        let regional_tax = round_half_up(max(
            progressive_tax(regional_taxable, &jurisdiction.brackets) - jurisdiction.tax_credit,
            Decimal::ZERO,
        ));

        let total_tax = federal_tax + regional_tax;
        let after_tax_income = round_half_up(gross_income - total_tax);
        let effective_rate = if gross_income.is_zero() {
            Decimal::ZERO
        } else {
            total_tax / gross_income
        };

        Resolved {
            calculation: TaxCalculation {
                federal_tax,
                regional_tax,
                total_tax,
                effective_rate,
                after_tax_income,
            },
            federal_taxable,
            regional_taxable,
        }
    }
}

fn check_income(income: Decimal) -> Result<(), ResolveError> {
    if income < Decimal::ZERO {
        return Err(ResolveError::NegativeIncome(income));
    }
    Ok(())
}

/// Converts a calculation's monetary fields into the display currency.
/// The effective rate is a ratio of two like-currency amounts and is
/// carried over unchanged; this is what makes it invariant under
/// display-currency choice.
fn convert_calculation(
    native: &TaxCalculation,
    native_currency: Currency,
    display_currency: Currency,
    rate: ExchangeRate,
) -> TaxCalculation {
    let to_display =
        |amount: Decimal| round_half_up(exchange::convert(amount, native_currency, display_currency, rate));

    TaxCalculation {
        federal_tax: to_display(native.federal_tax),
        regional_tax: to_display(native.regional_tax),
        total_tax: to_display(native.total_tax),
        effective_rate: native.effective_rate,
        after_tax_income: to_display(native.after_tax_income),
    }
}
