//! Request bodies accepted by the engine's write and list operations.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use moneypools_core::time::unix_seconds;
use moneypools_core::{DomainError, DomainResult, PoolId};
use moneypools_money::{Currency, MoneySum, RawAmount};
use serde::{Deserialize, Serialize};

/// Upper bound on `count` for any transaction listing.
pub const MAX_PAGE_SIZE: usize = 200;

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMoneyPool {
    pub display_name: String,
    #[serde(default)]
    pub balance: Vec<MoneySum>,
    #[serde(default = "default_visible")]
    pub is_visible: bool,
    #[serde(default)]
    pub display_color: Option<String>,
}

impl NewMoneyPool {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            balance: Vec::new(),
            is_visible: true,
            display_color: None,
        }
    }

    pub fn with_balance(mut self, sum: MoneySum) -> Self {
        self.balance.push(sum);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.display_color = Some(color.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.is_visible = false;
        self
    }
}

/// Partial update of a pool's presentation attributes. `None` leaves the
/// field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyPoolAttributesUpdate {
    #[serde(default)]
    pub is_visible: Option<bool>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_color: Option<String>,
}

impl MoneyPoolAttributesUpdate {
    pub fn is_empty(&self) -> bool {
        self.is_visible.is_none() && self.display_name.is_none() && self.display_color.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub pool_id: PoolId,
    pub sum: MoneySum,
    #[serde(default)]
    pub description: String,
    /// Defaults to the time the entry is recorded.
    #[serde(with = "unix_seconds::option", default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_diffuse: bool,
    #[serde(default)]
    pub original_currency: Option<Currency>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewTransaction {
    pub fn new(pool_id: PoolId, sum: MoneySum, description: impl Into<String>) -> Self {
        Self {
            pool_id,
            sum,
            description: description.into(),
            timestamp: None,
            is_diffuse: false,
            original_currency: None,
            tags: Vec::new(),
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn diffuse(mut self) -> Self {
        self.is_diffuse = true;
        self
    }

    pub fn with_original_currency(mut self, currency: Currency) -> Self {
        self.original_currency = Some(currency);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferMoneyRequest {
    pub from_pool: PoolId,
    pub to_pool: PoolId,
    pub sum: MoneySum,
    #[serde(default)]
    pub description: String,
}

/// Authoritative amounts, aligned by position with the pool's balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncBalanceRequest {
    pub amounts: Vec<RawAmount>,
}

impl SyncBalanceRequest {
    pub fn new<I, A>(amounts: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<RawAmount>,
    {
        Self {
            amounts: amounts.into_iter().map(Into::into).collect(),
        }
    }
}

/// Authoritative amounts keyed by currency code. Currencies left out are not
/// touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncBalanceByCurrencyRequest {
    pub balances: BTreeMap<String, RawAmount>,
}

impl SyncBalanceByCurrencyRequest {
    pub fn with(mut self, currency_code: impl Into<String>, amount: impl Into<RawAmount>) -> Self {
        self.balances.insert(currency_code.into(), amount.into());
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: i64,
    pub count: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            count: 50,
        }
    }
}

impl Pagination {
    pub fn new(offset: i64, count: i64) -> Self {
        Self { offset, count }
    }

    /// Checks `offset >= 0` and `1 <= count <= max_count`, returning both as
    /// indices.
    pub fn validate(&self, max_count: usize) -> DomainResult<(usize, usize)> {
        let offset = usize::try_from(self.offset).map_err(|_| {
            DomainError::invalid_pagination(format!("offset must be >= 0, got {}", self.offset))
        })?;
        let count = usize::try_from(self.count)
            .ok()
            .filter(|c| (1..=max_count).contains(c))
            .ok_or_else(|| {
                DomainError::invalid_pagination(format!(
                    "count must be within 1..={max_count}, got {}",
                    self.count
                ))
            })?;
        Ok((offset, count))
    }
}
