//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stored pools and transactions are entities: two records with the same id
/// are the same record, whatever their other fields say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Short, human-readable kind used in errors and logs (e.g. `"pool"`).
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
