//! Time-bounded cache for the externally-sourced USD→CAD exchange rate.
//!
//! The engine itself only ever accepts a plain [`ExchangeRate`] argument;
//! this cache belongs to the presentation layer that fetches rates from
//! wherever it fetches them. Fetching is injected as a closure, so this
//! crate stays free of network code.

use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use taxlens_core::exchange::{ExchangeRate, ExchangeRateError};
use thiserror::Error;

/// Rate used when no live rate has ever been stored.
pub const FALLBACK_USD_CAD_RATE: Decimal = Decimal::from_parts(135, 0, 0, false, 2);

/// How long a fetched rate stays fresh.
pub const DEFAULT_RATE_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Error)]
pub enum RateRefreshError {
    /// The injected rate source failed; the previously cached value (if
    /// any) remains in place.
    #[error("rate source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The source produced a non-positive rate.
    #[error(transparent)]
    Invalid(#[from] ExchangeRateError),
}

#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: ExchangeRate,
    fetched_at: Instant,
}

/// A one-value cache with a TTL and a constant fallback.
///
/// `get` never fails: it serves the cached rate (flagged stale once the
/// TTL has elapsed) or the fallback when nothing was ever stored. Callers
/// that see `stale == true` are expected to `refresh_with` a live source
/// when they can, and carry on with the stale value when they cannot.
#[derive(Debug)]
pub struct RateCache {
    ttl: Duration,
    fallback: ExchangeRate,
    cached: Option<CachedRate>,
}

impl RateCache {
    pub fn new(ttl: Duration, fallback: ExchangeRate) -> Self {
        Self {
            ttl,
            fallback,
            cached: None,
        }
    }

    /// A cache with the 5-minute TTL and 1.35 fallback.
    pub fn with_defaults() -> Self {
        // from_parts above encodes exactly 1.35; the constructor cannot
        // reject it.
        let fallback =
            ExchangeRate::new(FALLBACK_USD_CAD_RATE).unwrap_or_else(|_| unreachable!());
        Self::new(DEFAULT_RATE_TTL, fallback)
    }

    /// Returns the best known rate and whether it is stale. The fallback
    /// is always reported stale.
    pub fn get(&self) -> (ExchangeRate, bool) {
        match self.cached {
            Some(cached) => (cached.rate, cached.fetched_at.elapsed() >= self.ttl),
            None => (self.fallback, true),
        }
    }

    /// Fetches a new rate through `fetch`, validates it, and stores it.
    ///
    /// On any failure the previous cached value is left untouched, so a
    /// flaky source degrades to stale data rather than no data.
    pub fn refresh_with<F, E>(&mut self, fetch: F) -> Result<ExchangeRate, RateRefreshError>
    where
        F: FnOnce() -> Result<Decimal, E>,
        E: std::error::Error + Send + Sync + 'static,
    {
        let raw = fetch().map_err(|e| RateRefreshError::Source(Box::new(e)))?;
        let rate = ExchangeRate::new(raw)?;
        self.cached = Some(CachedRate {
            rate,
            fetched_at: Instant::now(),
        });
        Ok(rate)
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}
