//! `moneypools-ledger`: pools, the transaction ledger and the balance engine.
//!
//! Callers go through [`BalanceEngine`]: it owns a [`PoolStore`] and a
//! [`TransactionLedger`] and keeps every pool's cached balance equal to its
//! opening balance plus the sum of its ledger entries.

pub mod config;
pub mod engine;
pub mod pool;
pub mod requests;
pub mod store;
pub mod transaction;

pub use config::EngineConfig;
pub use engine::{BalanceDrift, BalanceEngine};
pub use pool::StoredMoneyPool;
pub use requests::{
    MAX_PAGE_SIZE, MoneyPoolAttributesUpdate, NewMoneyPool, NewTransaction, Pagination,
    SyncBalanceByCurrencyRequest, SyncBalanceRequest, TransferMoneyRequest,
};
pub use store::{PoolStore, TransactionLedger};
pub use transaction::{StoredTransaction, TransactionFilter, TransactionOrder};
