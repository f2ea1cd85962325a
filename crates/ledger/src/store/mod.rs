//! In-memory stores behind the balance engine.
//!
//! Neither store locks on its own: the engine owns both and guards them with
//! one lock, so a ledger entry and its balance delta are always observed
//! together.

pub mod ledger;
pub mod pools;
mod table;

pub use ledger::TransactionLedger;
pub use pools::PoolStore;
