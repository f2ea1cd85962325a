//! Money value: a precision-aware amount tied to one currency.

use core::fmt;
use core::str::FromStr;

use moneypools_core::{DomainError, DomainResult, ValueObject};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::currency::Currency;

/// Amount as it arrives on the wire: a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    /// Parses into an exact decimal, before any rounding.
    ///
    /// Numbers go through their shortest round-trip representation, so `12.345`
    /// parses as exactly twelve and 345 thousandths rather than the nearest
    /// binary fraction.
    pub fn to_decimal(&self) -> DomainResult<Decimal> {
        match self {
            RawAmount::Number(value) => {
                if !value.is_finite() {
                    return Err(DomainError::invalid_amount(value.to_string()));
                }
                Decimal::from_str(&value.to_string())
                    .map_err(|e| DomainError::invalid_amount(format!("{value}: {e}")))
            }
            RawAmount::Text(text) => {
                let text = text.trim();
                Decimal::from_str(text)
                    .or_else(|_| Decimal::from_scientific(text))
                    .or_else(|e| parse_tiny_scientific(text).ok_or(e))
                    .map_err(|e| DomainError::invalid_amount(format!("{text:?}: {e}")))
            }
        }
    }
}

/// Scientific notation whose exponent pushes the scale past what `Decimal`
/// holds (`1e-30`). The mantissa is shifted right one digit at a time, so
/// digits beyond the 28th fractional place round away and the value may
/// reach zero.
fn parse_tiny_scientific(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(['e', 'E'])?;
    let mantissa = Decimal::from_str(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;
    if exponent >= 0 {
        return None;
    }
    let mut value = mantissa;
    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value = value.checked_div(Decimal::TEN)?;
    }
    Some(value)
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        RawAmount::Text(value.to_string())
    }
}

/// Rounds half away from zero to `precision` digits and pins the scale, so the
/// string form always carries exactly `precision` fractional digits.
///
/// `rescale` quietly keeps a smaller scale when the integer part leaves no
/// room for the fraction; such amounts are rejected.
fn round_to(amount: Decimal, precision: u32) -> DomainResult<Decimal> {
    let mut rounded =
        amount.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    if rounded.scale() != precision {
        return Err(DomainError::invalid_amount(format!(
            "{amount} is too large to carry {precision} fractional digits"
        )));
    }
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Ok(rounded)
}

/// An amount in a single currency, always rounded to that currency's precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "WireMoneySum")]
pub struct MoneySum {
    amount: Decimal,
    currency: Currency,
}

#[derive(Deserialize)]
struct WireMoneySum {
    amount: RawAmount,
    currency: String,
}

impl TryFrom<WireMoneySum> for MoneySum {
    type Error = DomainError;

    fn try_from(wire: WireMoneySum) -> Result<Self, Self::Error> {
        MoneySum::normalize(wire.amount, &wire.currency)
    }
}

impl MoneySum {
    /// Builds a sum from an exact decimal, rounding to the currency precision.
    ///
    /// Fails with `InvalidAmount` when the amount is too large to keep every
    /// fractional digit the currency requires.
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        Ok(Self {
            amount: round_to(amount, currency.precision())?,
            currency,
        })
    }

    /// Validates the currency code and amount, then rounds.
    ///
    /// Fails with `UnknownCurrency` for codes outside the reference table and
    /// `InvalidAmount` for non-finite or non-numeric input.
    pub fn normalize(raw: impl Into<RawAmount>, currency_code: &str) -> DomainResult<Self> {
        let currency = Currency::parse(currency_code)?;
        let amount = raw.into().to_decimal()?;
        Self::new(amount, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::new(0, currency.precision()),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    pub fn add(&self, other: &MoneySum) -> DomainResult<MoneySum> {
        if self.currency != other.currency {
            return Err(DomainError::currency_mismatch(
                self.currency.code(),
                other.currency.code(),
            ));
        }
        let total = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| DomainError::invalid_amount(format!("{self} + {other} overflows")))?;
        Self::new(total, self.currency)
    }

    pub fn sub(&self, other: &MoneySum) -> DomainResult<MoneySum> {
        self.add(&other.negate())
    }

    /// Flips the sign. The scale is unchanged and zero stays unsigned.
    pub fn negate(&self) -> MoneySum {
        let mut amount = -self.amount;
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }
        Self {
            amount,
            currency: self.currency,
        }
    }
}

impl ValueObject for MoneySum {}

impl fmt::Display for MoneySum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl Serialize for MoneySum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("MoneySum", 2)?;
        state.serialize_field("amount", &self.amount.to_string())?;
        state.serialize_field("currency", self.currency.code())?;
        state.end()
    }
}
