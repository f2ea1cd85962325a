//! Pool Store: owns money pool records and their cached balances.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use moneypools_core::{DomainResult, PoolId};
use moneypools_money::MoneySum;

use super::table::Table;
use crate::pool::{StoredMoneyPool, ensure_unique_currencies};
use crate::requests::{MoneyPoolAttributesUpdate, NewMoneyPool};

/// In-memory pool records, listed in creation order.
///
/// Besides the live record, the store remembers the balance each pool was
/// created with: those amounts have no ledger entries behind them, and
/// auditing needs them to replay the balance.
#[derive(Debug, Default)]
pub struct PoolStore {
    pools: Table<StoredMoneyPool>,
    opening: HashMap<PoolId, Vec<MoneySum>>,
}

impl PoolStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, new: NewMoneyPool, now: DateTime<Utc>) -> DomainResult<StoredMoneyPool> {
        ensure_unique_currencies(&new.balance)?;

        let pool = StoredMoneyPool {
            id: PoolId::new(),
            display_name: new.display_name,
            last_updated: (!new.balance.is_empty()).then_some(now),
            balance: new.balance,
            is_visible: new.is_visible,
            display_color: new.display_color,
        };
        self.pools.insert(pool.clone())?;
        self.opening.insert(pool.id, pool.balance.clone());
        Ok(pool)
    }

    pub fn get(&self, id: &PoolId) -> DomainResult<&StoredMoneyPool> {
        self.pools.require(id)
    }

    pub fn contains(&self, id: &PoolId) -> bool {
        self.pools.contains(id)
    }

    pub fn list(&self) -> impl Iterator<Item = &StoredMoneyPool> {
        self.pools.iter().map(|(_, pool)| pool)
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies only the supplied fields. Balance and `last_updated` are never
    /// touched here.
    pub fn update_attributes(
        &mut self,
        id: &PoolId,
        patch: MoneyPoolAttributesUpdate,
    ) -> DomainResult<StoredMoneyPool> {
        let pool = self.pools.require_mut(id)?;
        if let Some(is_visible) = patch.is_visible {
            pool.is_visible = is_visible;
        }
        if let Some(display_name) = patch.display_name {
            pool.display_name = display_name;
        }
        if let Some(display_color) = patch.display_color {
            pool.display_color = Some(display_color);
        }
        Ok(pool.clone())
    }

    /// Balance the pool was created with.
    pub fn opening_balance(&self, id: &PoolId) -> DomainResult<&[MoneySum]> {
        self.pools.require(id)?;
        Ok(self.opening.get(id).map(Vec::as_slice).unwrap_or_default())
    }

    /// The balance entry `delta` would produce, without changing anything.
    ///
    /// Fails with `NotFound` for an unknown pool and `InvalidAmount` when the
    /// sum overflows.
    pub(crate) fn project_delta(&self, id: &PoolId, delta: &MoneySum) -> DomainResult<MoneySum> {
        let pool = self.pools.require(id)?;
        match pool.balance_in(delta.currency()) {
            Some(current) => current.add(delta),
            None => Ok(*delta),
        }
    }

    /// Adds `delta` to the pool's entry for its currency, creating the entry
    /// at zero first when the pool does not hold that currency yet.
    pub(crate) fn apply_balance_delta(
        &mut self,
        id: &PoolId,
        delta: &MoneySum,
        at: DateTime<Utc>,
    ) -> DomainResult<MoneySum> {
        let updated = self.project_delta(id, delta)?;
        let pool = self.pools.require_mut(id)?;
        match pool
            .balance
            .iter_mut()
            .find(|sum| sum.currency() == delta.currency())
        {
            Some(entry) => *entry = updated,
            None => pool.balance.push(updated),
        }
        pool.last_updated = Some(at);
        Ok(updated)
    }
}
