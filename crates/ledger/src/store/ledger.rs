//! Transaction Ledger: append-only store of transactions, removable by id.

use chrono::{DateTime, Utc};
use moneypools_core::{DomainError, DomainResult, PoolId, TransactionId};

use super::pools::PoolStore;
use super::table::Table;
use crate::requests::{MAX_PAGE_SIZE, NewTransaction, Pagination};
use crate::transaction::{StoredTransaction, TransactionFilter, TransactionOrder};

#[derive(Debug, Default)]
pub struct TransactionLedger {
    entries: Table<StoredTransaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry for an existing pool. The timestamp defaults to `now`.
    pub fn append(
        &mut self,
        pools: &PoolStore,
        new: NewTransaction,
        now: DateTime<Utc>,
    ) -> DomainResult<StoredTransaction> {
        if !pools.contains(&new.pool_id) {
            return Err(DomainError::not_found("pool", new.pool_id));
        }

        let stored = StoredTransaction {
            id: TransactionId::new(),
            pool_id: new.pool_id,
            sum: new.sum,
            description: new.description,
            timestamp: new.timestamp.unwrap_or(now),
            is_diffuse: new.is_diffuse,
            original_currency: new.original_currency,
            tags: new.tags,
        };
        self.entries.insert(stored.clone())?;
        Ok(stored)
    }

    pub fn get(&self, id: &TransactionId) -> DomainResult<&StoredTransaction> {
        self.entries.require(id)
    }

    pub fn remove(&mut self, id: &TransactionId) -> DomainResult<StoredTransaction> {
        self.entries.remove(id)
    }

    /// Newest first; see [`TransactionLedger::list_filtered`].
    pub fn list(&self, page: Pagination) -> DomainResult<Vec<StoredTransaction>> {
        self.list_filtered(&TransactionFilter::default(), TransactionOrder::NewestFirst, page)
    }

    /// Filters, sorts, then skips `offset` and returns up to `count` entries.
    pub fn list_filtered(
        &self,
        filter: &TransactionFilter,
        order: TransactionOrder,
        page: Pagination,
    ) -> DomainResult<Vec<StoredTransaction>> {
        let (offset, count) = page.validate(MAX_PAGE_SIZE)?;

        let mut matching: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, tx)| filter.matches(tx))
            .collect();
        matching.sort_by(|a, b| order.compare(*a, *b));

        Ok(matching
            .into_iter()
            .skip(offset)
            .take(count)
            .map(|(_, tx)| tx.clone())
            .collect())
    }

    /// Every entry booked against `pool_id`, in insertion order.
    pub fn for_pool(&self, pool_id: PoolId) -> impl Iterator<Item = &StoredTransaction> {
        self.entries
            .iter()
            .map(|(_, tx)| tx)
            .filter(move |tx| tx.pool_id == pool_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::NewMoneyPool;
    use chrono::Duration;
    use moneypools_money::MoneySum;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn usd(amount: &str) -> MoneySum {
        MoneySum::normalize(amount, "USD").unwrap()
    }

    fn setup() -> (PoolStore, TransactionLedger, PoolId) {
        let mut pools = PoolStore::new();
        let pool = pools.create(NewMoneyPool::new("cash"), t0()).unwrap();
        (pools, TransactionLedger::new(), pool.id)
    }

    #[test]
    fn append_requires_existing_pool() {
        let (pools, mut ledger, _) = setup();
        let ghost = PoolId::new();
        let err = ledger
            .append(&pools, NewTransaction::new(ghost, usd("1"), "x"), t0())
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("pool", ghost));
        assert!(ledger.is_empty());
    }

    #[test]
    fn append_defaults_timestamp_to_now() {
        let (pools, mut ledger, pool_id) = setup();
        let stored = ledger
            .append(&pools, NewTransaction::new(pool_id, usd("1"), "x"), t0())
            .unwrap();
        assert_eq!(stored.timestamp, t0());

        let earlier = t0() - Duration::days(1);
        let backdated = ledger
            .append(&pools, NewTransaction::new(pool_id, usd("1"), "y").at(earlier), t0())
            .unwrap();
        assert_eq!(backdated.timestamp, earlier);
        assert_ne!(backdated.id, stored.id);
    }

    #[test]
    fn list_is_newest_first_with_insertion_tiebreak() {
        let (pools, mut ledger, pool_id) = setup();
        let mut add = |desc: &str, at| {
            ledger
                .append(&pools, NewTransaction::new(pool_id, usd("1"), desc).at(at), t0())
                .unwrap();
        };
        add("old", t0() - Duration::hours(1));
        add("tie-1", t0());
        add("tie-2", t0());
        add("future", t0() + Duration::hours(1));

        let page = ledger.list(Pagination::new(0, 10)).unwrap();
        let names: Vec<_> = page.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["future", "tie-2", "tie-1", "old"]);

        let page = ledger.list(Pagination::new(1, 2)).unwrap();
        let names: Vec<_> = page.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["tie-2", "tie-1"]);

        assert!(ledger.list(Pagination::new(10, 5)).unwrap().is_empty());
        assert!(matches!(
            ledger.list(Pagination::new(0, 0)),
            Err(DomainError::InvalidPagination(_))
        ));
    }

    #[test]
    fn filtering_happens_before_pagination() {
        let (mut pools, mut ledger, cash) = setup();
        let bank = pools.create(NewMoneyPool::new("bank"), t0()).unwrap().id;
        for (pool, amount) in [(cash, "-1"), (bank, "-9"), (cash, "-5"), (bank, "2"), (cash, "3")] {
            ledger
                .append(&pools, NewTransaction::new(pool, usd(amount), amount), t0())
                .unwrap();
        }

        let only_cash = ledger
            .list_filtered(
                &TransactionFilter::for_pool(cash),
                TransactionOrder::LargestNegative,
                Pagination::new(0, 2),
            )
            .unwrap();
        let amounts: Vec<_> = only_cash.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(amounts, vec!["-5", "-1"]);

        assert_eq!(ledger.for_pool(bank).count(), 2);
    }

    #[test]
    fn remove_returns_the_record() {
        let (pools, mut ledger, pool_id) = setup();
        let stored = ledger
            .append(&pools, NewTransaction::new(pool_id, usd("4"), "x"), t0())
            .unwrap();
        assert_eq!(ledger.remove(&stored.id).unwrap(), stored);
        assert!(ledger.get(&stored.id).unwrap_err().is_not_found());
        assert!(ledger.remove(&stored.id).unwrap_err().is_not_found());
    }
}
