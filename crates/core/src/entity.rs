//! Entity trait: identity + continuity across state changes.
//!
//! A warehouse stays the same entity while its name and ledger are replaced;
//! only deletion ends its identity.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
