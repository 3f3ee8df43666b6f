//! Market identifiers (BTC/USDT or on-chain address)

use std::fmt;

/// Identifiers at or above this length are treated as market addresses.
///
/// The backends route symbolic names and addresses to different paths, so
/// this threshold is part of the wire contract.
pub const ADDRESS_MIN_LEN: usize = 15;

/// A market, named either by trading pair or by on-chain address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarketId {
    /// Short pair name such as `BTC/USDT` or `SRMSOL`
    Symbol(String),
    /// Base58 market address
    Address(String),
}

impl MarketId {
    /// Classify an identifier by length
    pub fn parse(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.chars().count() < ADDRESS_MIN_LEN {
            Self::Symbol(s)
        } else {
            Self::Address(s)
        }
    }

    pub fn is_address(&self) -> bool {
        matches!(self, Self::Address(_))
    }

    /// The identifier as supplied
    pub fn as_str(&self) -> &str {
        match self {
            Self::Symbol(s) | Self::Address(s) => s,
        }
    }

    /// Form used for matching and path building.
    ///
    /// Symbols are upper-cased; addresses are case sensitive and kept as is.
    pub fn normalized(&self) -> String {
        match self {
            Self::Symbol(s) => s.to_uppercase(),
            Self::Address(s) => s.clone(),
        }
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for MarketId {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for MarketId {
    fn from(s: String) -> Self {
        Self::parse(s)
    }
}
