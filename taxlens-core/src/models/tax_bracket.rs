use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single slice of a progressive rate schedule.
///
/// Brackets are stored sorted ascending by `min`; adjacent brackets are
/// contiguous (`brackets[i].max == brackets[i + 1].min`) and the final
/// bracket has `max: None` (unbounded). Catalog validation enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        Self { min, max, rate }
    }
}
