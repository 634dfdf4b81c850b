//! Pull-based lazy sequences.
//!
//! This module provides [`LazySequence`], a demand-driven sequence of
//! elements. Nothing is produced until a consumer pulls, each pull may
//! trigger a pull on an upstream sequence, and a sequence may be infinite.
//!
//! Lazy sequences are **not restartable**: once a position has been
//! consumed it cannot be rewound, and a sequence is meant for exactly one
//! logical reader. Cancellation is simply dropping the handle; no external
//! resources are held.
//!
//! # Examples
//!
//! ```rust
//! use laminar::control::{nat, LazySequence};
//!
//! let mut naturals = nat();
//! assert_eq!(naturals.next(), Some(0));
//! assert_eq!(naturals.next(), Some(1));
//! // The sequence has advanced permanently; 0 and 1 are gone.
//! assert_eq!(naturals.next(), Some(2));
//! ```

use std::fmt;

/// A pull-based, possibly infinite, non-restartable sequence.
///
/// `LazySequence` wraps an arbitrary element source behind a uniform
/// handle. Transformations produced by the generic operations
/// (`map`, `filter`, `take`, `drop`) stay lazy: they wrap the source and
/// defer all work to the next pull.
///
/// The type deliberately does not implement `Clone` — a sequence has a
/// single cursor and a single reader.
///
/// # Examples
///
/// ```rust
/// use laminar::control::LazySequence;
///
/// let sequence = LazySequence::from_iterator(1..);
/// let doubled: Vec<i32> = sequence.take(3).map(|x| x * 2).collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub struct LazySequence<T> {
    source: Box<dyn Iterator<Item = T>>,
}

impl<T: 'static> LazySequence<T> {
    /// Wraps an iterator as a lazy sequence.
    ///
    /// The iterator is not advanced; elements are produced only when the
    /// sequence is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::control::LazySequence;
    ///
    /// let sequence = LazySequence::from_iterator(vec![1, 2, 3].into_iter());
    /// let collected: Vec<i32> = sequence.collect();
    /// assert_eq!(collected, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_iterator(iterator: impl Iterator<Item = T> + 'static) -> Self {
        Self {
            source: Box::new(iterator),
        }
    }

    /// Creates an infinite sequence by repeatedly applying `step` to a seed.
    ///
    /// Yields `seed, step(seed), step(step(seed)), ...`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::control::LazySequence;
    ///
    /// let powers = LazySequence::iterate(1u32, |x| x * 2);
    /// let collected: Vec<u32> = powers.take(5).collect();
    /// assert_eq!(collected, vec![1, 2, 4, 8, 16]);
    /// ```
    #[must_use]
    pub fn iterate<F>(seed: T, step: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> T + 'static,
    {
        let mut step = step;
        Self::from_iterator(std::iter::successors(Some(seed), move |current| {
            Some(step(current))
        }))
    }

    /// Advances the cursor by `count` elements, discarding them.
    ///
    /// This is a one-time, irreversible skip: the discarded elements are
    /// pulled from the source immediately and cannot be recovered. A source
    /// shorter than `count` is simply exhausted.
    pub fn advance_by(&mut self, count: usize) {
        for _ in 0..count {
            if self.source.next().is_none() {
                break;
            }
        }
    }
}

impl<T> Iterator for LazySequence<T> {
    type Item = T;

    /// Pulls the next element from the source.
    #[inline]
    fn next(&mut self) -> Option<T> {
        self.source.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<T> fmt::Debug for LazySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("LazySequence").field(&"<lazy>").finish()
    }
}

/// The unbounded natural-number counter `0, 1, 2, ...`.
///
/// A trivial infinite source, useful with `take`/`drop` windows.
///
/// # Examples
///
/// ```rust
/// use laminar::control::nat;
/// use laminar::operation::{drop, take};
///
/// let window: Vec<u64> = take(3, drop(5, nat())).collect();
/// assert_eq!(window, vec![5, 6, 7]);
/// ```
#[must_use]
pub fn nat() -> LazySequence<u64> {
    LazySequence::from_iterator(0u64..)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn test_pull_is_deferred() {
        let pulled = Rc::new(Cell::new(0));
        let counter = Rc::clone(&pulled);

        let mut sequence = LazySequence::from_iterator((0..10).inspect(move |_| {
            counter.set(counter.get() + 1);
        }));

        assert_eq!(pulled.get(), 0); // Nothing pulled yet

        let _ = sequence.next();
        let _ = sequence.next();
        assert_eq!(pulled.get(), 2); // Exactly the demanded elements
    }

    #[rstest]
    fn test_nat_counts_from_zero() {
        let mut naturals = nat();
        assert_eq!(naturals.next(), Some(0));
        assert_eq!(naturals.next(), Some(1));
        assert_eq!(naturals.next(), Some(2));
    }

    #[rstest]
    fn test_advance_by_is_irreversible() {
        let mut naturals = nat();
        naturals.advance_by(5);
        assert_eq!(naturals.next(), Some(5));
    }

    #[rstest]
    fn test_advance_by_past_end_exhausts() {
        let mut sequence = LazySequence::from_iterator(0..3);
        sequence.advance_by(10);
        assert_eq!(sequence.next(), None);
    }

    #[rstest]
    fn test_iterate_unfolds_seed() {
        let doubling = LazySequence::iterate(1u64, |x| x + x);
        let collected: Vec<u64> = doubling.take(4).collect();
        assert_eq!(collected, vec![1, 2, 4, 8]);
    }
}
