//! `moneypools-core`: domain foundation building blocks.
//!
//! Pure domain primitives shared by the money and ledger crates: the error
//! taxonomy, typed identifiers, the entity/value-object traits and the clock
//! abstraction.

pub mod entity;
pub mod error;
pub mod id;
pub mod time;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{PoolId, TransactionId};
pub use time::{Clock, FixedClock, SystemClock};
pub use value_object::ValueObject;
