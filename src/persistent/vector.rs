//! Persistent (immutable) vector based on a segmented parent chain.
//!
//! This module provides [`Vector`], an immutable ordered sequence that uses
//! structural sharing for efficient operations.
//!
//! # Overview
//!
//! A `Vector` is a chain of array *segments*. Each version owns one segment
//! (a growable buffer plus a count of its visible elements) and a read-only
//! link to the version that precedes it. Appending usually extends the
//! current segment in place; popping merely hides the last visible slot.
//! Neither operation touches elements owned by older versions, so every
//! handle ever returned keeps observing exactly the elements it had when it
//! was created.
//!
//! - O(1) amortized `push_back` and `pop_back`
//! - O(1) `len` and `is_empty`
//! - O(N) materialization (`to_vec`, iteration, `map`, `filter`, ...)
//!
//! # Internal Structure
//!
//! The append fast path relies on one guard: a segment buffer may be
//! extended in place only while its physical length does not exceed the
//! current version's visible length. A pop (which hides a slot) or a sibling
//! derivation (which has already extended the buffer) makes the buffer
//! longer than the visible prefix, and any further append from that version
//! allocates a fresh one-element segment instead. Older handles only ever
//! read their shorter visible prefix, so the in-place extension is never
//! observable through them.
//!
//! # Examples
//!
//! ```rust
//! use laminar::persistent::Vector;
//!
//! let vector = Vector::from(vec![1, 2, 3]);
//! let extended = vector.push_back(4);
//!
//! assert_eq!(vector.len(), 3);      // Original unchanged
//! assert_eq!(extended.len(), 4);    // New version
//! assert_eq!(extended.to_vec(), vec![1, 2, 3, 4]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::iter::FromIterator;

use super::ReferenceCounter;

/// A persistent (immutable) vector based on a segmented parent chain.
///
/// Every edit returns a new `Vector` value; the original is never modified.
/// Versions share unchanged segments, so deriving a new version is cheap.
///
/// # Time Complexity
///
/// | Operation   | Complexity       |
/// |-------------|------------------|
/// | `new`       | O(1)             |
/// | `push_back` | O(1) amortized   |
/// | `pop_back`  | O(1)             |
/// | `len`       | O(1)             |
/// | `to_vec`    | O(N)             |
/// | `contains`  | O(N)             |
/// | `==`        | O(N), O(1) when both handles share the top segment |
///
/// # Examples
///
/// ```rust
/// use laminar::persistent::Vector;
///
/// let vector: Vector<i32> = (1..=5).collect();
/// assert_eq!(vector.len(), 5);
/// assert_eq!(vector.to_vec(), vec![1, 2, 3, 4, 5]);
/// ```
pub struct Vector<T> {
    /// Backing buffer for the most recently appended elements.
    segment: ReferenceCounter<RefCell<Vec<T>>>,
    /// Number of logically visible elements in `segment`. May be less than
    /// the buffer's physical length after a pop or a sibling append.
    segment_len: usize,
    /// The version preceding this segment. `None` at the root.
    parent: Option<ReferenceCounter<Vector<T>>>,
    /// Total visible element count across the whole chain, cached at
    /// construction.
    length: usize,
}

impl<T> Vector<T> {
    /// Creates a new empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let vector: Vector<i32> = Vector::new();
    /// assert!(vector.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            segment: ReferenceCounter::new(RefCell::new(Vec::new())),
            segment_len: 0,
            parent: None,
            length: 0,
        }
    }

    /// Creates a vector containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let vector = Vector::singleton(42);
    /// assert_eq!(vector.to_vec(), vec![42]);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            segment: ReferenceCounter::new(RefCell::new(vec![element])),
            segment_len: 1,
            parent: None,
            length: 1,
        }
    }

    /// Builds a node over `segment`, normalizing the chain invariants.
    ///
    /// Exhausted segments (`segment_len == 0`) never become parents, and a
    /// would-be exhausted head over a live parent collapses to the parent
    /// itself, so dead links cannot accumulate.
    fn create(
        segment: ReferenceCounter<RefCell<Vec<T>>>,
        segment_len: usize,
        parent: Option<ReferenceCounter<Self>>,
    ) -> Self {
        let mut parent = parent;
        while let Some(node) = &parent {
            if node.segment_len == 0 {
                parent = node.parent.clone();
            } else {
                break;
            }
        }

        if segment_len == 0 {
            if let Some(node) = parent {
                return Self::clone(&node);
            }
        }

        let length = segment_len + parent.as_ref().map_or(0, |node| node.length);

        Self {
            segment,
            segment_len,
            parent,
            length,
        }
    }

    /// Returns the number of elements in the vector.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the vector contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let empty: Vector<i32> = Vector::new();
    /// assert!(empty.is_empty());
    /// assert!(!empty.push_back(1).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a vector with `element` appended to the end.
    ///
    /// The receiver is unaffected. When the current segment's buffer has no
    /// hidden slots (no pop and no sibling append since the last extension),
    /// the element is appended into the shared buffer and the new version
    /// reuses it; otherwise a fresh one-element segment is allocated with
    /// the receiver as its parent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![5, 23, 4, 9]);
    /// let pushed = vector.push_back(12);
    ///
    /// assert_eq!(pushed.to_vec(), vec![5, 23, 4, 9, 12]);
    /// assert_eq!(vector.len(), 4);
    /// ```
    #[must_use]
    pub fn push_back(&self, element: T) -> Self {
        let can_extend = self.segment.borrow().len() <= self.segment_len;

        if can_extend {
            self.segment.borrow_mut().push(element);
            Self::create(
                ReferenceCounter::clone(&self.segment),
                self.segment_len + 1,
                self.parent.clone(),
            )
        } else {
            let segment = ReferenceCounter::new(RefCell::new(vec![element]));
            Self::create(segment, 1, Some(ReferenceCounter::new(self.clone())))
        }
    }

    /// Returns a vector with the last element removed.
    ///
    /// No buffer is copied: the new version merely hides the last visible
    /// slot of the top segment. Popping past a segment boundary continues in
    /// the parent chain. Popping an empty vector is a no-op that returns the
    /// empty vector, never an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2, 3]);
    /// assert_eq!(vector.pop_back().to_vec(), vec![1, 2]);
    /// assert_eq!(vector.to_vec(), vec![1, 2, 3]);
    ///
    /// let empty: Vector<i32> = Vector::new();
    /// assert!(empty.pop_back().is_empty());
    /// ```
    #[must_use]
    pub fn pop_back(&self) -> Self {
        if self.length == 0 {
            return Self::new();
        }

        if self.segment_len > 0 {
            Self::create(
                ReferenceCounter::clone(&self.segment),
                self.segment_len - 1,
                self.parent.clone(),
            )
        } else {
            match &self.parent {
                Some(parent) => parent.pop_back(),
                None => Self::new(),
            }
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Materializes the vector into a plain `Vec`.
    ///
    /// Walks the parent chain and concatenates each segment's visible
    /// prefix; the innermost segment contributes the tail end of the result.
    /// The receiver is not modified and the call can be repeated freely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2]).push_back(3);
    /// assert_eq!(vector.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let mut segments = Vec::new();
        let mut node = Some(self);
        while let Some(vector) = node {
            segments.push((&vector.segment, vector.segment_len));
            node = vector.parent.as_deref();
        }

        let mut elements = Vec::with_capacity(self.length);
        for (segment, visible) in segments.into_iter().rev() {
            elements.extend(segment.borrow()[..visible].iter().cloned());
        }
        elements
    }

    /// Returns an iterator over the elements in index order.
    ///
    /// The iterator is backed by a fresh materialization taken up front:
    /// it is finite, restartable (call `iter` again for a new pass) and
    /// never observes later edits to shared buffers.
    #[must_use]
    pub fn iter(&self) -> VectorIterator<T> {
        VectorIterator {
            inner: self.to_vec().into_iter(),
        }
    }

    /// Returns `true` if the vector contains `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2, 3]);
    /// assert!(vector.contains(&2));
    /// assert!(!vector.contains(&7));
    /// ```
    #[must_use]
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| candidate == *element)
    }

    /// Maps over the vector with `function`, producing a new vector.
    ///
    /// The callback receives the element only, never an index or the whole
    /// collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2, 3]);
    /// assert_eq!(vector.map(|x| x * 10).to_vec(), vec![10, 20, 30]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Vector<U>
    where
        F: FnMut(T) -> U,
    {
        Vector::from(self.to_vec().into_iter().map(function).collect::<Vec<_>>())
    }

    /// Filters the vector with `predicate`, producing a new vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2, 3, 4]);
    /// assert_eq!(vector.filter(|x| x % 2 == 0).to_vec(), vec![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        Self::from(
            self.to_vec()
                .into_iter()
                .filter(|element| predicate(element))
                .collect::<Vec<_>>(),
        )
    }

    /// Reduces the vector to a single value with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let vector = Vector::from(vec![1, 2, 3, 4]);
    /// assert_eq!(vector.fold(0, |sum, x| sum + x), 10);
    /// ```
    #[must_use]
    pub fn fold<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.to_vec().into_iter().fold(initial, function)
    }

    /// Returns `true` if `predicate` holds for at least one element.
    #[must_use]
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.to_vec().iter().any(predicate)
    }

    /// Returns `true` if `predicate` holds for every element.
    #[must_use]
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.to_vec().iter().all(predicate)
    }

    /// Concatenates two vectors into a fresh vector, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let left = Vector::from(vec![1, 2]).push_back(3);
    /// let right = Vector::singleton(4).push_back(5).push_back(6);
    /// assert_eq!(left.concat(&right).to_vec(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut elements = self.to_vec();
        elements.extend(other.to_vec());
        Self::from(elements)
    }

    /// Concatenates any number of vectors into a fresh vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// let first = Vector::from(vec![1, 2]);
    /// let second = Vector::from(vec![3]);
    /// let third = Vector::from(vec![4, 5]);
    ///
    /// let combined = Vector::concat_all([&first, &second, &third]);
    /// assert_eq!(combined.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn concat_all<'a>(vectors: impl IntoIterator<Item = &'a Self>) -> Self
    where
        T: 'a,
    {
        let mut elements = Vec::new();
        for vector in vectors {
            elements.extend(vector.to_vec());
        }
        Self::from(elements)
    }
}

impl Vector<i64> {
    /// Creates a vector of numbers in `[0, max)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// assert_eq!(Vector::range_to(4).to_vec(), vec![0, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn range_to(max: i64) -> Self {
        Self::range_step(0, max, 1)
    }

    /// Creates a vector of numbers in `[min, max)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// assert_eq!(Vector::range(2, 6).to_vec(), vec![2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn range(min: i64, max: i64) -> Self {
        Self::range_step(min, max, 1)
    }

    /// Creates a vector of numbers in `[min, max)` with the given step.
    ///
    /// The upper bound is exclusive; the result holds exactly
    /// `ceil((max - min) / step)` elements (zero when the step points away
    /// from the bound). A negative step counts downward.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use laminar::persistent::Vector;
    ///
    /// assert_eq!(Vector::range_step(0, 7, 2).to_vec(), vec![0, 2, 4, 6]);
    /// assert_eq!(Vector::range_step(5, 0, -2).to_vec(), vec![5, 3, 1]);
    /// assert!(Vector::range_step(3, 0, 1).is_empty());
    /// ```
    #[must_use]
    pub fn range_step(min: i64, max: i64, step: i64) -> Self {
        assert!(step != 0, "range step must be non-zero");

        let span = max - min;
        let count = if span != 0 && (span > 0) == (step > 0) {
            let distance = span.unsigned_abs();
            let stride = step.unsigned_abs();
            usize::try_from(distance.div_ceil(stride)).unwrap_or(usize::MAX)
        } else {
            0
        };

        let elements: Vec<i64> = (0..count)
            .map(|index| min + (index as i64) * step)
            .collect();
        Self::from(elements)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over a [`Vector`]'s elements in index order.
///
/// Created by [`Vector::iter`]; backed by a materialization taken when the
/// iterator was created.
pub struct VectorIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for VectorIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for VectorIterator<T> {}

impl<T: Clone> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = VectorIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for &Vector<T> {
    type Item = T;
    type IntoIter = VectorIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            segment: ReferenceCounter::clone(&self.segment),
            segment_len: self.segment_len,
            parent: self.parent.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(elements: Vec<T>) -> Self {
        let segment_len = elements.len();
        Self::create(
            ReferenceCounter::new(RefCell::new(elements)),
            segment_len,
            None,
        )
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from(iterator.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Clone + PartialEq> PartialEq for Vector<T> {
    /// Element-wise equality in index order.
    ///
    /// Two handles of equal length that share the identical top segment are
    /// equal without walking the chain: the same buffer identity implies the
    /// same parent chain by construction.
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }

        if ReferenceCounter::ptr_eq(&self.segment, &other.segment)
            && self.segment_len == other.segment_len
        {
            return true;
        }

        self.to_vec() == other.to_vec()
    }
}

impl<T: Clone + Eq> Eq for Vector<T> {}

impl<T: Clone + fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Vector")?;
        formatter.debug_list().entries(self.to_vec()).finish()
    }
}

impl<T: Clone + fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize + Clone> serde::Serialize for Vector<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.to_vec())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Vector<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(Self::from)
    }
}

// =============================================================================
// Macros
// =============================================================================

/// Creates a [`Vector`] from a list of elements.
///
/// The element-list counterpart of constructing from a `Vec`, analogous to
/// `vec!`.
///
/// # Examples
///
/// ```rust
/// use laminar::vector;
///
/// let vector = vector![1, 2, 3];
/// assert_eq!(vector.to_vec(), vec![1, 2, 3]);
///
/// let empty: laminar::persistent::Vector<i32> = vector![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::persistent::Vector::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::persistent::Vector::from(vec![$($element),+])
    };
}

// =============================================================================
// Tests
// =============================================================================
