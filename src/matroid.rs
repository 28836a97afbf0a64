//! The independence-oracle interface shared by all matroids in this crate.
//!
//! A matroid is a ground set together with a family of *independent* subsets that
//! contains the empty set, is closed under taking subsets and satisfies the
//! augmentation property: if $A$ and $B$ are independent and $|A| < |B|$, then
//! some $x \in B \setminus A$ makes $A \cup \\{x\\}$ independent.
//!
//! Implementations pick their own representation of a candidate set (the
//! [Matroid::Subset] type). The intersector only ever talks to a matroid through
//! this trait, converting plain element sequences with [Matroid::to_subset] and
//! keeping the subsets up to date through [Matroid::insert] and [Matroid::remove].
use std::fmt::Debug;
use std::hash::Hash;

/// Selects which partition matroid implementation is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatroidKind {
    /// Rescans the candidate set on every query.
    Naive,
    /// Keeps an index from vertices to occupying elements.
    Indexed
}

pub trait Matroid {
    type Element: Copy + Eq + Hash + Debug;
    type Subset;

    /// Every element of the ground set exactly once, in a deterministic order.
    fn ground_set(&self) -> Vec<Self::Element>;

    /// # Panics
    /// If `elements` contains an element more than once.
    fn to_subset(&self, elements:&[Self::Element]) -> Self::Subset;

    /// The elements of `set`, in the order in which they were added.
    fn elements(&self, set:&Self::Subset) -> Vec<Self::Element>;

    fn is_independent(&self, set:&Self::Subset) -> bool;

    /// Whether `set` $\cup \\{x\\}$ is independent.
    ///
    /// # Panics
    /// If `x` is already contained in `set`.
    fn can_extend(&self, set:&Self::Subset, x:&Self::Element) -> bool;

    /// Whether `set` $\setminus \\{y\\} \cup \\{x\\}$ is independent.
    ///
    /// # Panics
    /// If `x` is contained in `set` or `y` is not.
    fn can_exchange(&self, set:&Self::Subset, x:&Self::Element, y:&Self::Element) -> bool;

    /// # Panics
    /// If `x` is already contained in `set`.
    fn insert(&self, set:&mut Self::Subset, x:Self::Element);

    /// # Panics
    /// If `y` is not contained in `set`.
    fn remove(&self, set:&mut Self::Subset, y:&Self::Element);

    fn is_independent_elements(&self, elements:&[Self::Element]) -> bool {
        self.is_independent(&self.to_subset(elements))
    }
}
