//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** of their own; they are defined entirely by
//! their attribute values. In the catalog, a product's seller and dimensions are
//! embedded value objects: a partial update changes them field by field and the
//! product, not the value object, carries the identity.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: value objects are copied out of and back into their owning entity
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: for logging and test assertions
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
