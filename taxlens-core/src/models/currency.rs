use serde::{Deserialize, Serialize};

/// Currency an amount is denominated in.
///
/// Only the two currencies of the catalog's countries are supported; the
/// engine never deals in anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "CAD")]
    Cad,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cad => "CAD",
            Self::Usd => "USD",
        }
    }

    /// Symbol used in bracket narration lines, e.g. `US$48,475`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Cad => "CA$",
            Self::Usd => "US$",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CAD" => Some(Self::Cad),
            "USD" => Some(Self::Usd),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
