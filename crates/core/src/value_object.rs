//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**; two instances
/// holding the same values are interchangeable. Contrast with
/// [`Entity`](crate::entity::Entity), where only identity decides equality.
///
/// Example:
/// - `Timestamp(2024-01-01T00:00:00Z)` is a value object
/// - `Customer { base: EntityBase<CustomerProps, EntityId> }` is an entity
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
