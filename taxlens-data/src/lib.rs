pub mod loader;
pub mod rates;

pub use loader::{CatalogLoadError, CatalogLoader, NORTH_AMERICA_2025_JSON};
pub use rates::{DEFAULT_RATE_TTL, FALLBACK_USD_CAD_RATE, RateCache, RateRefreshError};
