//! Balance engine: keeps each pool's cached balance in step with the ledger.
//!
//! Every write runs validate → append → apply under one write guard covering
//! both stores. Validation includes projecting every balance change, so once
//! the first ledger entry is written the remaining steps cannot fail and no
//! caller ever sees half an operation.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use moneypools_core::{Clock, DomainError, DomainResult, PoolId, SystemClock, TransactionId};
use moneypools_money::{Currency, MoneySum};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::pool::StoredMoneyPool;
use crate::requests::{
    MoneyPoolAttributesUpdate, NewMoneyPool, NewTransaction, Pagination,
    SyncBalanceByCurrencyRequest, SyncBalanceRequest, TransferMoneyRequest,
};
use crate::store::{PoolStore, TransactionLedger};
use crate::transaction::{StoredTransaction, TransactionFilter, TransactionOrder};

/// A currency whose cached balance disagrees with the replayed ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceDrift {
    pub pool_id: PoolId,
    pub currency: Currency,
    /// What the pool record says.
    pub cached: MoneySum,
    /// Opening balance plus every ledger entry for the currency.
    pub replayed: MoneySum,
}

#[derive(Debug, Default)]
struct Books {
    pools: PoolStore,
    ledger: TransactionLedger,
}

impl Books {
    /// Appends `new` and applies its sum to the pool. Callers project the
    /// delta first.
    fn book(&mut self, new: NewTransaction, now: DateTime<Utc>) -> DomainResult<StoredTransaction> {
        let stored = self.ledger.append(&self.pools, new, now)?;
        self.pools
            .apply_balance_delta(&stored.pool_id, &stored.sum, now)?;
        Ok(stored)
    }
}

/// The balance-consistency engine. `Send + Sync`; share it through `Arc`.
#[derive(Debug)]
pub struct BalanceEngine<C: Clock = SystemClock> {
    books: RwLock<Books>,
    clock: C,
    config: EngineConfig,
}

impl BalanceEngine<SystemClock> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for BalanceEngine<SystemClock> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<C: Clock> BalanceEngine<C> {
    pub fn with_clock(config: EngineConfig, clock: C) -> Self {
        Self {
            books: RwLock::new(Books::default()),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Books>> {
        self.books
            .read()
            .map_err(|_| DomainError::storage("lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Books>> {
        self.books
            .write()
            .map_err(|_| DomainError::storage("lock poisoned"))
    }

    // ---- pools ----

    pub fn create_pool(&self, new: NewMoneyPool) -> DomainResult<StoredMoneyPool> {
        let mut books = self.write()?;
        let pool = books.pools.create(new, self.clock.now())?;
        info!(
            pool_id = %pool.id,
            name = %pool.display_name,
            currencies = pool.balance.len(),
            "pool created"
        );
        Ok(pool)
    }

    pub fn get_pool(&self, pool_id: PoolId) -> DomainResult<StoredMoneyPool> {
        let books = self.read()?;
        books.pools.get(&pool_id).cloned()
    }

    /// All pools in creation order, hidden ones included.
    pub fn list_pools(&self) -> DomainResult<Vec<StoredMoneyPool>> {
        let books = self.read()?;
        Ok(books.pools.list().cloned().collect())
    }

    pub fn update_pool_attributes(
        &self,
        pool_id: PoolId,
        patch: MoneyPoolAttributesUpdate,
    ) -> DomainResult<StoredMoneyPool> {
        let mut books = self.write()?;
        if patch.is_empty() {
            debug!(pool_id = %pool_id, "empty attribute update");
        }
        let pool = books.pools.update_attributes(&pool_id, patch)?;
        info!(pool_id = %pool.id, visible = pool.is_visible, "pool attributes updated");
        Ok(pool)
    }

    // ---- transactions ----

    /// Appends a transaction and applies its amount to the pool's balance.
    /// Balances may go negative.
    pub fn record_transaction(&self, new: NewTransaction) -> DomainResult<StoredTransaction> {
        let mut books = self.write()?;
        let now = self.clock.now();

        books.pools.project_delta(&new.pool_id, &new.sum)?;
        let stored = books.book(new, now)?;

        info!(
            transaction_id = %stored.id,
            pool_id = %stored.pool_id,
            sum = %stored.sum,
            "transaction recorded"
        );
        Ok(stored)
    }

    pub fn get_transaction(&self, id: TransactionId) -> DomainResult<StoredTransaction> {
        let books = self.read()?;
        books.ledger.get(&id).cloned()
    }

    /// Removes a transaction and reverses its effect on the owning pool.
    pub fn delete_transaction(&self, id: TransactionId) -> DomainResult<StoredTransaction> {
        let mut books = self.write()?;
        let now = self.clock.now();

        let (pool_id, reversal) = {
            let existing = books.ledger.get(&id)?;
            (existing.pool_id, existing.sum.negate())
        };
        books.pools.project_delta(&pool_id, &reversal)?;

        let removed = books.ledger.remove(&id)?;
        books.pools.apply_balance_delta(&pool_id, &reversal, now)?;

        info!(
            transaction_id = %removed.id,
            pool_id = %removed.pool_id,
            sum = %removed.sum,
            "transaction deleted"
        );
        Ok(removed)
    }

    /// Newest first.
    pub fn list_transactions(&self, page: Pagination) -> DomainResult<Vec<StoredTransaction>> {
        self.list_transactions_filtered(
            &TransactionFilter::default(),
            TransactionOrder::NewestFirst,
            page,
        )
    }

    pub fn list_transactions_filtered(
        &self,
        filter: &TransactionFilter,
        order: TransactionOrder,
        page: Pagination,
    ) -> DomainResult<Vec<StoredTransaction>> {
        page.validate(self.config.max_page_size)?;
        let books = self.read()?;
        let entries = books.ledger.list_filtered(filter, order, page)?;
        debug!(returned = entries.len(), offset = page.offset, "transactions listed");
        Ok(entries)
    }

    // ---- transfer / sync ----

    /// Moves `sum` from one pool to another as two entries sharing description
    /// and timestamp. Returns `(debit, credit)`.
    ///
    /// Both legs book in `sum`'s currency; no conversion happens here.
    pub fn transfer(
        &self,
        request: TransferMoneyRequest,
    ) -> DomainResult<(StoredTransaction, StoredTransaction)> {
        if request.from_pool == request.to_pool {
            return Err(DomainError::SamePool(request.from_pool.to_string()));
        }

        let mut books = self.write()?;
        let now = self.clock.now();
        let debit_sum = request.sum.negate();

        books.pools.project_delta(&request.from_pool, &debit_sum)?;
        books.pools.project_delta(&request.to_pool, &request.sum)?;

        let debit = books.book(
            NewTransaction::new(request.from_pool, debit_sum, request.description.clone()).at(now),
            now,
        )?;
        let credit = books.book(
            NewTransaction::new(request.to_pool, request.sum, request.description).at(now),
            now,
        )?;

        info!(
            from_pool = %debit.pool_id,
            to_pool = %credit.pool_id,
            sum = %credit.sum,
            "transfer booked"
        );
        Ok((debit, credit))
    }

    /// Reconciles the pool against authoritative amounts given by position.
    ///
    /// Every drifted currency gets one diffuse entry for the difference.
    /// Nothing is written when the balance already matches, so repeating a
    /// sync is a no-op.
    pub fn sync_balance(
        &self,
        pool_id: PoolId,
        request: &SyncBalanceRequest,
    ) -> DomainResult<Vec<StoredTransaction>> {
        let mut books = self.write()?;

        let deltas = {
            let pool = books.pools.get(&pool_id)?;
            if pool.balance.len() != request.amounts.len() {
                return Err(DomainError::BalanceShapeMismatch {
                    expected: pool.balance.len(),
                    actual: request.amounts.len(),
                });
            }
            pool.balance
                .iter()
                .zip(&request.amounts)
                .map(|(current, raw)| {
                    let target = MoneySum::new(raw.to_decimal()?, current.currency())?;
                    target.sub(current)
                })
                .collect::<DomainResult<Vec<_>>>()?
        };

        self.book_sync(&mut books, pool_id, deltas)
    }

    /// Keyed reconciliation. Currencies missing from the request are left
    /// alone; currencies the pool does not hold yet are added.
    pub fn sync_balance_by_currency(
        &self,
        pool_id: PoolId,
        request: &SyncBalanceByCurrencyRequest,
    ) -> DomainResult<Vec<StoredTransaction>> {
        let mut books = self.write()?;
        let pool = books.pools.get(&pool_id)?;

        let mut targets: BTreeMap<Currency, MoneySum> = BTreeMap::new();
        for (code, raw) in &request.balances {
            let currency = Currency::parse(code)?;
            let target = MoneySum::new(raw.to_decimal()?, currency)?;
            if targets.insert(currency, target).is_some() {
                return Err(DomainError::DuplicateCurrency(currency.code().to_string()));
            }
        }

        let mut deltas = Vec::with_capacity(targets.len());
        for current in &pool.balance {
            if let Some(target) = targets.remove(&current.currency()) {
                deltas.push(target.sub(current)?);
            }
        }
        deltas.extend(targets.into_values());

        self.book_sync(&mut books, pool_id, deltas)
    }

    fn book_sync(
        &self,
        books: &mut Books,
        pool_id: PoolId,
        deltas: Vec<MoneySum>,
    ) -> DomainResult<Vec<StoredTransaction>> {
        let deltas: Vec<_> = deltas.into_iter().filter(|d| !d.is_zero()).collect();
        if deltas.is_empty() {
            debug!(pool_id = %pool_id, "balance already in sync");
            return Ok(Vec::new());
        }
        for delta in &deltas {
            books.pools.project_delta(&pool_id, delta)?;
        }

        let now = self.clock.now();
        let mut created = Vec::with_capacity(deltas.len());
        for delta in deltas {
            let entry = NewTransaction::new(pool_id, delta, self.config.sync_description.clone())
                .at(now)
                .diffuse();
            created.push(books.book(entry, now)?);
        }

        info!(pool_id = %pool_id, entries = created.len(), "balance synced");
        Ok(created)
    }

    // ---- audit ----

    /// Replays the pool's opening balance and ledger entries and reports every
    /// currency where the cached balance disagrees. Never repairs anything.
    pub fn audit(&self, pool_id: PoolId) -> DomainResult<Vec<BalanceDrift>> {
        let books = self.read()?;
        let pool = books.pools.get(&pool_id)?;

        let mut replayed: BTreeMap<Currency, MoneySum> = BTreeMap::new();
        let opening = books.pools.opening_balance(&pool_id)?.iter();
        let entries = books.ledger.for_pool(pool_id).map(|tx| &tx.sum);
        for sum in opening.chain(entries) {
            let total = match replayed.get(&sum.currency()) {
                Some(running) => running.add(sum)?,
                None => *sum,
            };
            replayed.insert(sum.currency(), total);
        }

        let mut drifts = Vec::new();
        for cached in &pool.balance {
            let expected = replayed
                .remove(&cached.currency())
                .unwrap_or_else(|| MoneySum::zero(cached.currency()));
            if expected != *cached {
                drifts.push(BalanceDrift {
                    pool_id,
                    currency: cached.currency(),
                    cached: *cached,
                    replayed: expected,
                });
            }
        }
        for (currency, expected) in replayed {
            if !expected.is_zero() {
                drifts.push(BalanceDrift {
                    pool_id,
                    currency,
                    cached: MoneySum::zero(currency),
                    replayed: expected,
                });
            }
        }

        for drift in &drifts {
            warn!(
                pool_id = %pool_id,
                currency = %drift.currency,
                cached = %drift.cached,
                replayed = %drift.replayed,
                "balance drift detected"
            );
        }
        if drifts.is_empty() {
            debug!(pool_id = %pool_id, "pool balance consistent with ledger");
        }
        Ok(drifts)
    }
}
