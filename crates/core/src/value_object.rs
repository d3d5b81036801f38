//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// A stock ledger is the canonical value object here: two ledgers holding the
/// same `(capacity, quantity)` pair are interchangeable. Which warehouse a
/// ledger belongs to is the owning entity's concern, not the ledger's.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy (they're values, not references)
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable (helpful for logging, testing)
///
/// To "modify" a value object, construct a new one - wholesale replacement is
/// how the registry swaps a warehouse's ledger during an update.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
