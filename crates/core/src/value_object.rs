//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values
/// are interchangeable (`Money`, shipping addresses). Contrast with
/// [`crate::Entity`], where only the id matters.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Address {
///     line1: String,
///     city: String,
/// }
///
/// impl ValueObject for Address {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
