//! Generic, kind-preserving collection operations.
//!
//! Every function here takes its callback first and the collection last,
//! which composes naturally with the [`compose`](crate::compose) layer,
//! and returns the *same kind* of collection it was given: a `Vec` stays a
//! `Vec`, a persistent [`Vector`](crate::persistent::Vector) stays a
//! `Vector`, a [`LazySequence`](crate::control::LazySequence) stays lazy.
//! Kind selection happens at compile time through the [`Collection`]
//! trait; a type outside the trait simply does not type-check.
//!
//! # Examples
//!
//! ```
//! use laminar::control::nat;
//! use laminar::operation::{drop, map, take};
//! use laminar::persistent::Vector;
//!
//! // Eager over a persistent vector:
//! let doubled = map(|x: i32| x * 2, Vector::from(vec![1, 2, 3]));
//! assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
//!
//! // Deferred over an infinite sequence:
//! let window: Vec<u64> = take(3, drop(5, nat())).collect();
//! assert_eq!(window, vec![5, 6, 7]);
//! ```

mod collection;

pub use collection::Collection;

// =============================================================================
// Generic operations
// =============================================================================

/// Applies `function` to every element, preserving the collection kind.
///
/// The callback receives the element alone; there is no index or
/// whole-collection parameter.
///
/// # Examples
///
/// ```
/// use laminar::operation::map;
///
/// assert_eq!(map(|x: i32| x + 1, vec![1, 2, 3]), vec![2, 3, 4]);
/// ```
#[must_use]
pub fn map<C, U, F>(function: F, collection: C) -> C::Rebind<U>
where
    C: Collection,
    U: Clone + 'static,
    F: FnMut(C::Item) -> U + 'static,
{
    collection.transform(function)
}

/// Keeps the elements satisfying `predicate`, preserving the collection
/// kind and the element order.
///
/// # Examples
///
/// ```
/// use laminar::operation::filter;
///
/// assert_eq!(filter(|x: &i32| x % 2 == 0, vec![1, 2, 3, 4]), vec![2, 4]);
/// ```
#[must_use]
pub fn filter<C, F>(predicate: F, collection: C) -> C
where
    C: Collection,
    F: FnMut(&C::Item) -> bool + 'static,
{
    collection.retain(predicate)
}

/// Folds the collection into a single value, left to right.
///
/// The accumulator comes first in the callback. Reducing a lazy sequence
/// drains it, so the source must be finite.
///
/// # Examples
///
/// ```
/// use laminar::operation::reduce;
///
/// let total = reduce(|accumulator, x| accumulator + x, 0, vec![1, 2, 3]);
/// assert_eq!(total, 6);
/// ```
#[must_use]
pub fn reduce<C, B, F>(function: F, initial: B, collection: C) -> B
where
    C: Collection,
    F: FnMut(B, C::Item) -> B,
{
    collection.fold(initial, function)
}

/// The first `count` elements, preserving the collection kind.
///
/// Safe on infinite sequences: at most `count` elements are ever pulled.
///
/// # Examples
///
/// ```
/// use laminar::control::nat;
/// use laminar::operation::take;
///
/// let first: Vec<u64> = take(3, nat()).collect();
/// assert_eq!(first, vec![0, 1, 2]);
/// ```
#[must_use]
pub fn take<C>(count: usize, collection: C) -> C
where
    C: Collection,
{
    collection.prefix(count)
}

/// Everything after the first `count` elements, preserving the collection
/// kind.
///
/// On a lazy sequence the skip is performed immediately, advancing the
/// single shared cursor; the dropped positions cannot be revisited.
#[must_use]
pub fn drop<C>(count: usize, collection: C) -> C
where
    C: Collection,
{
    collection.discard(count)
}

/// Removes duplicate elements, keeping the first occurrence of each.
///
/// Detection is element-wise `==` over the elements seen so far, so the
/// cost is quadratic in the number of distinct elements; no `Hash` or
/// `Ord` bound is required.
///
/// # Examples
///
/// ```
/// use laminar::operation::uniq;
///
/// assert_eq!(uniq(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
#[must_use]
pub fn uniq<C>(collection: C) -> C
where
    C: Collection,
    C::Item: PartialEq + Clone + 'static,
{
    collection.distinct()
}

// =============================================================================
// Native-sequence helpers
// =============================================================================

/// The first element of a sequence, if any.
#[must_use]
pub fn head<T>(elements: &[T]) -> Option<&T> {
    elements.first()
}

/// Everything after the first element; empty input yields an empty vector.
#[must_use]
pub fn tail<T: Clone>(elements: &[T]) -> Vec<T> {
    elements.get(1..).map(<[T]>::to_vec).unwrap_or_default()
}

/// Flattens one level of nesting, left to right.
///
/// # Examples
///
/// ```
/// use laminar::operation::flatten;
///
/// assert_eq!(flatten(vec![vec![1, 2], vec![], vec![3]]), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn flatten<T>(nested: Vec<Vec<T>>) -> Vec<T> {
    nested.into_iter().flatten().collect()
}

/// Maps every element to a sequence and flattens the results.
#[must_use]
pub fn flat_map<T, U, F>(function: F, elements: Vec<T>) -> Vec<U>
where
    F: FnMut(T) -> Vec<U>,
{
    elements.into_iter().flat_map(function).collect()
}

/// Discards the `None` entries and unwraps the rest, preserving order.
///
/// # Examples
///
/// ```
/// use laminar::operation::compact;
///
/// assert_eq!(compact(vec![Some(1), None, Some(3)]), vec![1, 3]);
/// ```
#[must_use]
pub fn compact<T>(options: Vec<Option<T>>) -> Vec<T> {
    options.into_iter().flatten().collect()
}

/// Sums a sequence of numbers, starting from zero.
#[must_use]
pub fn sum<T>(elements: Vec<T>) -> T
where
    T: Default + std::ops::Add<Output = T>,
{
    elements.into_iter().fold(T::default(), |total, x| total + x)
}

/// Concatenates two sequences, left followed by right.
#[must_use]
pub fn concat<T>(mut left: Vec<T>, right: Vec<T>) -> Vec<T> {
    left.extend(right);
    left
}

/// The integers from `min` (inclusive) to `max` (exclusive), stepping by 1.
///
/// An empty range when `min >= max`.
#[must_use]
pub fn range(min: i64, max: i64) -> Vec<i64> {
    range_step(min, max, 1)
}

/// The integers from `min` toward `max` (exclusive), stepping by `step`.
///
/// A negative `step` counts down. The result holds
/// `ceil((max - min) / step)` elements, or none when the step points away
/// from `max`.
///
/// # Panics
///
/// Panics when `step == 0`.
#[must_use]
pub fn range_step(min: i64, max: i64, step: i64) -> Vec<i64> {
    assert!(step != 0, "range step must be non-zero");

    let span = max - min;
    if span == 0 || (span > 0) != (step > 0) {
        return Vec::new();
    }

    let count = span.unsigned_abs().div_ceil(step.unsigned_abs());
    (0..count as i64).map(|index| min + index * step).collect()
}
