use std::io::Read;

use taxlens_core::models::{CatalogError, TaxCatalog};
use thiserror::Error;

/// Errors that can occur when loading a tax catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogLoadError {
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

impl From<serde_json::Error> for CatalogLoadError {
    fn from(err: serde_json::Error) -> Self {
        CatalogLoadError::JsonParse(err.to_string())
    }
}

/// The bundled 2025 single-filer rate table for US states + federal and
/// Canadian provinces + federal. A new tax year ships as a new JSON file;
/// no code changes are involved.
pub const NORTH_AMERICA_2025_JSON: &str = include_str!("../data/north_america_2025.json");

/// Loader for tax catalog data.
///
/// Catalogs are JSON documents with per-country federal schedules and a
/// list of jurisdictions. Every loaded catalog is validated before it is
/// handed out, so calculation code can rely on bracket ordering,
/// contiguity and unique codes without re-checking.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse and validate a catalog from any reader.
    pub fn parse<R: Read>(reader: R) -> Result<TaxCatalog, CatalogLoadError> {
        let catalog: TaxCatalog = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The embedded 2025 catalog, parsed and validated.
    pub fn north_america_2025() -> Result<TaxCatalog, CatalogLoadError> {
        Self::parse(NORTH_AMERICA_2025_JSON.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use taxlens_core::models::Country;

    use super::*;

    #[test]
    fn embedded_catalog_parses_and_validates() {
        let catalog = CatalogLoader::north_america_2025().unwrap();

        assert_eq!(catalog.tax_year, 2025);
        assert_eq!(catalog.jurisdictions.len(), 31);
    }

    #[test]
    fn embedded_catalog_covers_both_countries() {
        let catalog = CatalogLoader::north_america_2025().unwrap();

        let provinces = catalog
            .jurisdictions
            .iter()
            .filter(|j| j.country == Country::Canada)
            .count();
        let states = catalog
            .jurisdictions
            .iter()
            .filter(|j| j.country == Country::UnitedStates)
            .count();

        assert_eq!(provinces, 10);
        assert_eq!(states, 21);
    }

    #[test]
    fn embedded_federal_schedules_match_published_2025_values() {
        let catalog = CatalogLoader::north_america_2025().unwrap();

        let us = catalog.federal(Country::UnitedStates);
        assert_eq!(us.standard_deduction, dec!(15750));
        assert_eq!(us.brackets.len(), 7);
        assert_eq!(us.brackets[0].rate, dec!(0.10));
        assert_eq!(us.brackets[6].min, dec!(626350));

        let ca = catalog.federal(Country::Canada);
        assert_eq!(ca.standard_deduction, dec!(0));
        assert_eq!(ca.brackets.len(), 5);
        assert_eq!(ca.brackets[0].rate, dec!(0.15));
    }

    #[test]
    fn embedded_catalog_has_the_nine_no_tax_states() {
        let catalog = CatalogLoader::north_america_2025().unwrap();

        for code in ["TX", "FL", "WA", "NV", "SD", "WY", "AK", "TN", "NH"] {
            let state = catalog.jurisdiction(code).unwrap();
            assert!(state.brackets.is_empty(), "{code} should have no brackets");
        }
    }

    #[test]
    fn embedded_utah_entry_carries_flat_credit() {
        let catalog = CatalogLoader::north_america_2025().unwrap();

        let utah = catalog.jurisdiction("UT").unwrap();

        assert_eq!(utah.tax_credit, dec!(900));
        assert_eq!(utah.brackets.len(), 1);
        assert_eq!(utah.brackets[0].rate, dec!(0.0455));
        assert_eq!(utah.standard_deduction, dec!(0));
    }

    #[test]
    fn embedded_canadian_entries_have_no_deductions_or_credits() {
        let catalog = CatalogLoader::north_america_2025().unwrap();

        for jurisdiction in catalog
            .jurisdictions
            .iter()
            .filter(|j| j.country == Country::Canada)
        {
            assert_eq!(
                jurisdiction.standard_deduction,
                dec!(0),
                "{}",
                jurisdiction.code
            );
            assert_eq!(jurisdiction.tax_credit, dec!(0), "{}", jurisdiction.code);
        }
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let result = CatalogLoader::parse("{ not json".as_bytes());

        let err = result.unwrap_err();
        assert!(matches!(err, CatalogLoadError::JsonParse(_)));
    }

    #[test]
    fn parse_rejects_invalid_catalog() {
        // Final bracket must be unbounded.
        let json = r#"{
            "tax_year": 2025,
            "federal": {
                "CA": { "brackets": [{ "min": "0", "max": "100", "rate": "0.15" }] },
                "US": {
                    "brackets": [{ "min": "0", "max": null, "rate": "0.10" }],
                    "standard_deduction": "15750"
                }
            },
            "jurisdictions": []
        }"#;

        let err = CatalogLoader::parse(json.as_bytes()).unwrap_err();

        assert_eq!(
            err,
            CatalogLoadError::Invalid(CatalogError::BoundedFinalBracket {
                schedule: "CA federal".to_string(),
            })
        );
    }

    #[test]
    fn parse_rejects_missing_field() {
        let json = r#"{ "tax_year": 2025 }"#;

        let err = CatalogLoader::parse(json.as_bytes()).unwrap_err();

        let CatalogLoadError::JsonParse(msg) = err else {
            panic!("expected JsonParse, got: {err:?}");
        };
        assert!(
            msg.contains("missing field"),
            "expected 'missing field' in error, got: {msg}"
        );
    }
}
