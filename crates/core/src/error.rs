//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a per-request rejection: operations validate fully before
/// mutating anything, so receiving one of these means no state changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced pool or transaction does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The currency code is not part of the ISO-4217 reference table.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// The amount is non-finite, non-numeric or otherwise unparsable.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Two money sums with different currencies were combined.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// A balance listed the same currency more than once.
    #[error("duplicate currency in balance: {0}")]
    DuplicateCurrency(String),

    /// A transfer named the same pool as source and destination.
    #[error("transfer source and destination are the same pool: {0}")]
    SamePool(String),

    /// A positional sync supplied the wrong number of amounts.
    #[error("balance shape mismatch: pool has {expected} currencies, got {actual} amounts")]
    BalanceShapeMismatch { expected: usize, actual: usize },

    /// Pagination parameters are out of range.
    #[error("invalid pagination: {0}")]
    InvalidPagination(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The backing store could not be accessed (e.g. a poisoned lock).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency(code.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn currency_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn invalid_pagination(msg: impl Into<String>) -> Self {
        Self::InvalidPagination(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether the error points at a missing entity (as opposed to bad input).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
