//! `moneypools-money`: currency reference and money values.
//!
//! [`Currency`] is a handle into the static ISO-4217 table; [`MoneySum`] pairs a
//! decimal amount with one currency and keeps it rounded to that currency's
//! precision.

pub mod currency;
mod iso4217;
pub mod money_sum;

pub use currency::{Currency, CurrencyInfo};
pub use money_sum::{MoneySum, RawAmount};
