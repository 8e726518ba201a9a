//! Identity-bearing domain objects.

/// A domain object compared by identity rather than by value.
///
/// A product keeps its id across every merge; two records with the same id are
/// the same product even when every other field differs.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
