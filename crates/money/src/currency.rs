//! Currency reference: ISO-4217 codes and their decimal precision.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use moneypools_core::{DomainError, DomainResult, ValueObject};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::iso4217::CURRENCIES;

/// One row of the ISO-4217 table.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub numeric_code: u16,
    pub name: &'static str,
    pub entities: &'static [&'static str],
    /// Number of fractional digits amounts in this currency carry.
    pub precision: u32,
}

/// Handle to a known currency.
///
/// Only obtainable through a successful lookup, so holding a `Currency` proves
/// the code is in the reference table. Equality, ordering and hashing follow
/// the alphabetic code.
#[derive(Copy, Clone)]
pub struct Currency(&'static CurrencyInfo);

impl Currency {
    /// Case-insensitive lookup; `None` for codes outside the table.
    pub fn find(code: &str) -> Option<Self> {
        if code.len() != 3 || !code.is_ascii() {
            return None;
        }
        let upper = code.to_ascii_uppercase();
        CURRENCIES
            .binary_search_by(|info| info.code.cmp(upper.as_str()))
            .ok()
            .map(|idx| Self(&CURRENCIES[idx]))
    }

    /// Like [`Currency::find`], but rejects unknown codes with `UnknownCurrency`.
    pub fn parse(code: &str) -> DomainResult<Self> {
        Self::find(code).ok_or_else(|| DomainError::unknown_currency(code))
    }

    pub fn code(&self) -> &'static str {
        self.0.code
    }

    pub fn precision(&self) -> u32 {
        self.0.precision
    }

    pub fn info(&self) -> &'static CurrencyInfo {
        self.0
    }

    /// Every known currency, in code order.
    pub fn all() -> impl Iterator<Item = Currency> {
        CURRENCIES.iter().map(Currency)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.0.code == other.0.code
    }
}

impl Eq for Currency {}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.code.cmp(other.0.code)
    }
}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.code.hash(state);
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Currency").field(&self.0.code).finish()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.code)
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ValueObject for Currency {}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.code)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Currency::parse(&code).map_err(serde::de::Error::custom)
    }
}
