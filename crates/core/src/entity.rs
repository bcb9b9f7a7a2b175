//! Things the store tracks by identity rather than by value.

/// An object whose identity is its id.
///
/// A catalog product re-read after a price change is still the same product,
/// so carts merge it into the existing line. `PartialEq` and `Hash` on
/// implementors compare ids only.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
