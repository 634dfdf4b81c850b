//! The capability interface behind the generic collection operations.
//!
//! Instead of probing a value for map-like or iterator-like behavior at
//! every call, the collection kind is decided once at the API boundary:
//! a type takes part in the generic operations by implementing
//! [`Collection`], and each implementation states how a same-kind result
//! is rebuilt. An unsupported type is a compile error, not a silent
//! `None`.
//!
//! Three kinds are provided out of the box:
//!
//! - `Vec<T>` — the native ordered sequence; operations are eager.
//! - [`Vector<T>`](crate::persistent::Vector) — the persistent sequence;
//!   operations materialize and rebuild through the structure's own
//!   constructors.
//! - [`LazySequence<T>`](crate::control::LazySequence) — deferred
//!   operations that pull from the source on demand and therefore work on
//!   infinite sequences.

use crate::control::LazySequence;
use crate::persistent::Vector;

/// A collection that the generic operations can transform while preserving
/// its kind.
///
/// The [`Rebind`](Collection::Rebind) associated type names "the same kind
/// of collection with a different element type", which is what lets
/// [`transform`](Collection::transform) return an array for an array, a
/// persistent vector for a persistent vector and a lazy sequence for a
/// lazy sequence.
///
/// # Laws
///
/// - **Kind preservation**: `Rebind<Item>` is the implementing type itself.
/// - **Order preservation**: every operation yields elements in the source
///   order (`distinct` keeps the first occurrence).
/// - **Laziness**: for a lazy implementation, `transform`, `retain`,
///   `prefix` and `distinct` must not pull from the source; `discard`
///   advances the cursor exactly `count` times up front.
///
/// # Closure bounds
///
/// Callback parameters carry `'static` bounds so that lazy implementations
/// can store them inside the rebuilt sequence; element types are `Clone`
/// where a persistent implementation has to materialize shared storage.
pub trait Collection: Sized {
    /// The element type.
    type Item;

    /// The same collection kind with element type `U`.
    type Rebind<U: Clone + 'static>: Collection<Item = U>;

    /// Same-kind `map`: applies `function` to every element.
    ///
    /// The callback receives the element only, never an index or the whole
    /// collection.
    fn transform<U, F>(self, function: F) -> Self::Rebind<U>
    where
        U: Clone + 'static,
        F: FnMut(Self::Item) -> U + 'static;

    /// Same-kind `filter`: keeps the elements satisfying `predicate`.
    fn retain<F>(self, predicate: F) -> Self
    where
        F: FnMut(&Self::Item) -> bool + 'static;

    /// Reduces the collection to a single value.
    ///
    /// Draining a lazy sequence this way requires a finite source.
    fn fold<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, Self::Item) -> B;

    /// Same-kind `take`: the first `count` elements.
    ///
    /// Stops pulling after `count` elements even from an infinite source.
    fn prefix(self, count: usize) -> Self;

    /// Same-kind `drop`: everything after the first `count` elements.
    ///
    /// For a lazy sequence the skip happens immediately and irreversibly;
    /// it is not re-checked on subsequent pulls.
    fn discard(self, count: usize) -> Self;

    /// Same-kind `uniq`: removes duplicates, keeping first occurrences.
    ///
    /// Duplicate detection is element-wise equality — O(n²) by design,
    /// since no hashing is assumed for arbitrary element types.
    fn distinct(self) -> Self
    where
        Self::Item: PartialEq + Clone + 'static;
}

// =============================================================================
// Native sequence (Vec)
// =============================================================================

impl<T> Collection for Vec<T> {
    type Item = T;
    type Rebind<U: Clone + 'static> = Vec<U>;

    fn transform<U, F>(self, function: F) -> Vec<U>
    where
        U: Clone + 'static,
        F: FnMut(T) -> U + 'static,
    {
        self.into_iter().map(function).collect()
    }

    fn retain<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool + 'static,
    {
        self.into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    fn fold<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(initial, function)
    }

    fn prefix(self, count: usize) -> Self {
        self.into_iter().take(count).collect()
    }

    fn discard(self, count: usize) -> Self {
        self.into_iter().skip(count).collect()
    }

    fn distinct(self) -> Self
    where
        T: PartialEq + Clone + 'static,
    {
        let mut unique = Vec::new();
        for element in self {
            if !unique.contains(&element) {
                unique.push(element);
            }
        }
        unique
    }
}

// =============================================================================
// Persistent vector
// =============================================================================

impl<T: Clone + 'static> Collection for Vector<T> {
    type Item = T;
    type Rebind<U: Clone + 'static> = Vector<U>;

    fn transform<U, F>(self, function: F) -> Vector<U>
    where
        U: Clone + 'static,
        F: FnMut(T) -> U + 'static,
    {
        self.map(function)
    }

    fn retain<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool + 'static,
    {
        self.filter(|element| predicate(element))
    }

    fn fold<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        Self::fold(&self, initial, function)
    }

    fn prefix(self, count: usize) -> Self {
        let mut elements = self.to_vec();
        elements.truncate(count);
        Self::from(elements)
    }

    fn discard(self, count: usize) -> Self {
        Self::from(self.to_vec().into_iter().skip(count).collect::<Vec<_>>())
    }

    fn distinct(self) -> Self
    where
        T: PartialEq + Clone + 'static,
    {
        // Built through the structure's own append, not array semantics.
        let mut unique = Self::new();
        for element in self.iter() {
            if !unique.contains(&element) {
                unique = unique.push_back(element);
            }
        }
        unique
    }
}

// =============================================================================
// Lazy sequence
// =============================================================================

impl<T: 'static> Collection for LazySequence<T> {
    type Item = T;
    type Rebind<U: Clone + 'static> = LazySequence<U>;

    fn transform<U, F>(self, function: F) -> LazySequence<U>
    where
        U: Clone + 'static,
        F: FnMut(T) -> U + 'static,
    {
        LazySequence::from_iterator(self.map(function))
    }

    fn retain<F>(self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool + 'static,
    {
        LazySequence::from_iterator(self.filter(move |element| predicate(element)))
    }

    fn fold<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        Iterator::fold(self, initial, function)
    }

    fn prefix(self, count: usize) -> Self {
        LazySequence::from_iterator(self.take(count))
    }

    fn discard(mut self, count: usize) -> Self {
        // One-time cursor advance; nothing is re-checked per pull.
        self.advance_by(count);
        self
    }

    fn distinct(self) -> Self
    where
        T: PartialEq + Clone + 'static,
    {
        let mut seen: Vec<T> = Vec::new();
        LazySequence::from_iterator(self.filter(move |element| {
            if seen.contains(element) {
                false
            } else {
                seen.push(element.clone());
                true
            }
        }))
    }
}
