//! Money pools: named holders of a multi-currency balance.

use chrono::{DateTime, Utc};
use moneypools_core::time::unix_seconds;
use moneypools_core::{DomainError, DomainResult, Entity, PoolId};
use moneypools_money::{Currency, MoneySum};
use serde::{Deserialize, Serialize};

/// A pool as stored and returned to callers.
///
/// `balance` holds at most one entry per currency, in the order the
/// currencies first appeared. It is only changed by the balance engine, which
/// also stamps `last_updated`; attribute edits leave both alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMoneyPool {
    pub id: PoolId,
    pub display_name: String,
    pub balance: Vec<MoneySum>,
    pub is_visible: bool,
    #[serde(with = "unix_seconds::option", default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub display_color: Option<String>,
}

impl StoredMoneyPool {
    /// Cached balance in `currency`, if the pool holds that currency at all.
    pub fn balance_in(&self, currency: Currency) -> Option<&MoneySum> {
        self.balance.iter().find(|sum| sum.currency() == currency)
    }

    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.balance.iter().map(MoneySum::currency)
    }
}

impl Entity for StoredMoneyPool {
    type Id = PoolId;
    const KIND: &'static str = "pool";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Rejects a balance that lists any currency twice.
pub(crate) fn ensure_unique_currencies(balance: &[MoneySum]) -> DomainResult<()> {
    for (idx, sum) in balance.iter().enumerate() {
        if balance[..idx].iter().any(|s| s.currency() == sum.currency()) {
            return Err(DomainError::DuplicateCurrency(sum.currency().code().to_string()));
        }
    }
    Ok(())
}
