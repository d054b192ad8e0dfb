mod catalog;
mod country;
mod currency;
mod federal_schedule;
mod jurisdiction;
mod tax_bracket;
mod tax_calculation;

pub use catalog::{CatalogError, FederalSchedules, TaxCatalog};
pub use country::Country;
pub use currency::Currency;
pub use federal_schedule::FederalSchedule;
pub use jurisdiction::Jurisdiction;
pub use tax_bracket::TaxBracket;
pub use tax_calculation::{TaxBreakdown, TaxCalculation};
