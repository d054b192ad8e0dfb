//! Tax calculation logic: the progressive bracket scan, per-jurisdiction
//! resolution, bracket narration, and multi-jurisdiction comparison.

pub mod common;
pub mod comparison;
pub mod narration;
pub mod progressive;
pub mod resolver;

pub use comparison::{RankBy, rank};
pub use narration::{BracketSlice, bracket_lines, bracket_slices};
pub use progressive::progressive_tax;
pub use resolver::{ResolveError, TaxResolver};
