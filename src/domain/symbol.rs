//! Currency symbols and trading pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DomainError;

/// A currency code such as `USD` or `BTC`.
///
/// Codes are normalised to upper case on construction so that `btc` and
/// `BTC` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub const BTC: &'static str = "BTC";
    pub const LTC: &'static str = "LTC";
    pub const CNY: &'static str = "CNY";
    pub const USD: &'static str = "USD";

    /// Create a symbol, rejecting empty codes.
    pub fn new(code: impl AsRef<str>) -> Result<Self, DomainError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(DomainError::EmptySymbol);
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn known(code: &'static str) -> Self {
        Self(code.to_owned())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A market, quoted as `target` priced in `base`.
///
/// `BTC/USD` has target `BTC` and base `USD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    base: Symbol,
    target: Symbol,
}

impl Pair {
    /// Create a pair from its base (quote) and target (traded) symbols.
    pub fn new(base: Symbol, target: Symbol) -> Self {
        Self { base, target }
    }

    pub fn base(&self) -> &Symbol {
        &self.base
    }

    pub fn target(&self) -> &Symbol {
        &self.target
    }

    /// Lower-case underscore form used in exchange URLs, e.g. `btc_usd`.
    pub fn lower(&self) -> String {
        format!("{}_{}", self.target, self.base).to_ascii_lowercase()
    }

    pub fn btc_cny() -> Self {
        Self::new(Symbol::known(Symbol::CNY), Symbol::known(Symbol::BTC))
    }

    pub fn btc_usd() -> Self {
        Self::new(Symbol::known(Symbol::USD), Symbol::known(Symbol::BTC))
    }

    pub fn ltc_cny() -> Self {
        Self::new(Symbol::known(Symbol::CNY), Symbol::known(Symbol::LTC))
    }

    pub fn ltc_usd() -> Self {
        Self::new(Symbol::known(Symbol::USD), Symbol::known(Symbol::LTC))
    }

    pub fn ltc_btc() -> Self {
        Self::new(Symbol::known(Symbol::BTC), Symbol::known(Symbol::LTC))
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.target, self.base)
    }
}

impl FromStr for Pair {
    type Err = DomainError;

    /// Accepts `BTC/USD` as well as the exchange form `btc_usd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidPair {
            input: s.to_owned(),
        };
        let (target, base) = s.split_once(['/', '_']).ok_or_else(invalid)?;
        if base.contains(['/', '_']) {
            return Err(invalid());
        }
        let target = Symbol::new(target).map_err(|_| invalid())?;
        let base = Symbol::new(base).map_err(|_| invalid())?;
        Ok(Self::new(base, target))
    }
}

impl Serialize for Pair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.lower())
    }
}

impl<'de> Deserialize<'de> for Pair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
