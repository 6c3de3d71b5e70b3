//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that are defined entirely by their
//! attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable by convention** and **compared by value**.
/// To "modify" one, build a new one with the new values.
///
/// ## Copies at boundaries
///
/// Every read path that hands a value object to another component hands out an
/// owned `Clone`, never a shared mutable handle. A caller mutating its copy can
/// therefore never affect the source collection or another caller's view.
///
/// The trait requires:
/// - **Clone**: a full, independent copy (no shared interior state)
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (logging, tests)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price {
///     amount: f64,
/// }
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
