//! Ledger entries and the criteria used to query them.

use core::cmp::Ordering;

use chrono::{DateTime, Utc};
use moneypools_core::time::unix_seconds;
use moneypools_core::{Entity, PoolId, TransactionId};
use moneypools_money::{Currency, MoneySum};
use serde::{Deserialize, Serialize};

/// A ledger entry. Never mutated after it is appended.
///
/// `is_diffuse` marks synthetic reconciliation entries created by a balance
/// sync. `original_currency` records the currency the user dealt in when it
/// differs from `sum`'s currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub id: TransactionId,
    pub pool_id: PoolId,
    pub sum: MoneySum,
    pub description: String,
    #[serde(with = "unix_seconds")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_diffuse: bool,
    #[serde(default)]
    pub original_currency: Option<Currency>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entity for StoredTransaction {
    type Id = TransactionId;
    const KIND: &'static str = "transaction";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Query criteria for listing transactions. Every supplied criterion must
/// match; timestamp bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    #[serde(with = "unix_seconds::option", default)]
    pub min_timestamp: Option<DateTime<Utc>>,
    #[serde(with = "unix_seconds::option", default)]
    pub max_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pool_ids: Option<Vec<PoolId>>,
    #[serde(default)]
    pub transaction_ids: Option<Vec<TransactionId>>,
    #[serde(default)]
    pub untagged_only: bool,
    #[serde(default)]
    pub is_diffuse: Option<bool>,
}

impl TransactionFilter {
    pub fn for_pool(pool_id: PoolId) -> Self {
        Self {
            pool_ids: Some(vec![pool_id]),
            ..Self::default()
        }
    }

    pub fn between(mut self, min: Option<DateTime<Utc>>, max: Option<DateTime<Utc>>) -> Self {
        self.min_timestamp = min;
        self.max_timestamp = max;
        self
    }

    pub fn with_diffuse(mut self, is_diffuse: bool) -> Self {
        self.is_diffuse = Some(is_diffuse);
        self
    }

    pub fn untagged(mut self) -> Self {
        self.untagged_only = true;
        self
    }

    pub fn matches(&self, tx: &StoredTransaction) -> bool {
        if self.min_timestamp.is_some_and(|min| tx.timestamp < min) {
            return false;
        }
        if self.max_timestamp.is_some_and(|max| tx.timestamp > max) {
            return false;
        }
        if let Some(pool_ids) = &self.pool_ids {
            if !pool_ids.contains(&tx.pool_id) {
                return false;
            }
        }
        if let Some(ids) = &self.transaction_ids {
            if !ids.contains(&tx.id) {
                return false;
            }
        }
        if self.untagged_only && !tx.tags.is_empty() {
            return false;
        }
        self.is_diffuse.is_none_or(|d| tx.is_diffuse == d)
    }
}

/// Sort order for transaction listings.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionOrder {
    /// Latest timestamp first; equal timestamps list the later insertion first.
    #[default]
    NewestFirst,
    OldestFirst,
    /// Most negative amount first, ties by recency.
    LargestNegative,
}

impl TransactionOrder {
    /// Compares two entries tagged with their insertion sequence numbers.
    pub(crate) fn compare(
        self,
        (a_seq, a): (u64, &StoredTransaction),
        (b_seq, b): (u64, &StoredTransaction),
    ) -> Ordering {
        let newest_first = || b.timestamp.cmp(&a.timestamp).then(b_seq.cmp(&a_seq));
        match self {
            TransactionOrder::NewestFirst => newest_first(),
            TransactionOrder::OldestFirst => a.timestamp.cmp(&b.timestamp).then(a_seq.cmp(&b_seq)),
            TransactionOrder::LargestNegative => a
                .sum
                .amount()
                .cmp(&b.sum.amount())
                .then_with(newest_first),
        }
    }
}
