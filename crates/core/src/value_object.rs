//! Value object trait: equality by value, not identity.

/// Marker for immutable values compared by their attributes.
///
/// A `MoneySum` of `12.35 USD` is a value object: any other `12.35 USD` is
/// interchangeable with it. Contrast with [`crate::Entity`], where identity
/// survives changes to every other field.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
