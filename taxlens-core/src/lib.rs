pub mod calculations;
pub mod exchange;
pub mod models;

pub use calculations::{RankBy, ResolveError, TaxResolver, progressive_tax, rank};
pub use exchange::{ExchangeRate, ExchangeRateError, convert};
pub use models::*;
