use serde::{Deserialize, Serialize};

use crate::models::Currency;

/// Country a jurisdiction belongs to. Determines which federal bracket
/// schedule applies and which currency amounts are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "CA")]
    Canada,
    #[serde(rename = "US")]
    UnitedStates,
}

impl Country {
    /// The currency all of this country's bracket thresholds, deductions
    /// and credits are denominated in.
    pub fn native_currency(&self) -> Currency {
        match self {
            Self::Canada => Currency::Cad,
            Self::UnitedStates => Currency::Usd,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Canada => "CA",
            Self::UnitedStates => "US",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
