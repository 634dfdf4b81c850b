#![cfg(feature = "operation")]
//! Integration tests for the generic collection operations.
//!
//! The same call sites are exercised over all three collection kinds to
//! pin down kind preservation, and over unbounded sources to pin down
//! laziness.

use laminar::control::{LazySequence, nat};
use laminar::operation::{
    Collection, compact, drop, filter, flat_map, flatten, head, map, range, range_step, reduce,
    sum, tail, take, uniq,
};
use laminar::persistent::Vector;
use laminar::vector;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Kind preservation
// =============================================================================

#[rstest]
fn test_map_returns_same_kind() {
    let native: Vec<i32> = map(|x: i32| x + 1, vec![1, 2]);
    assert_eq!(native, vec![2, 3]);

    let persistent: Vector<i32> = map(|x: i32| x + 1, vector![1, 2]);
    assert_eq!(persistent, vector![2, 3]);

    let lazy: LazySequence<u64> = map(|x: u64| x + 1, nat());
    let first: Vec<u64> = take(2, lazy).collect();
    assert_eq!(first, vec![1, 2]);
}

#[rstest]
fn test_filter_returns_same_kind() {
    assert_eq!(filter(|x: &i32| *x > 1, vec![1, 2, 3]), vec![2, 3]);
    assert_eq!(filter(|x: &i32| *x > 1, vector![1, 2, 3]), vector![2, 3]);

    let odds: Vec<u64> = take(3, filter(|x: &u64| x % 2 == 1, nat())).collect();
    assert_eq!(odds, vec![1, 3, 5]);
}

#[rstest]
fn test_chained_operations_stay_persistent() {
    let vector = vector![4, 1, 4, 2, 3, 2];
    let result: Vector<i32> = take(2, filter(|x: &i32| x % 2 == 0, uniq(vector)));
    assert_eq!(result, vector![4, 2]);
}

// =============================================================================
// Reduction
// =============================================================================

#[rstest]
fn test_reduce_over_each_kind() {
    let add = |accumulator: i64, x: i64| accumulator + x;

    assert_eq!(reduce(add, 0, vec![1i64, 2, 3]), 6);
    assert_eq!(reduce(add, 0, vector![1i64, 2, 3]), 6);

    let bounded = take(4, LazySequence::iterate(1i64, |x| x * 2));
    assert_eq!(reduce(add, 0, bounded), 15);
}

// =============================================================================
// Windows over infinite sequences
// =============================================================================

#[rstest]
fn test_take_after_drop_over_nat() {
    let window: Vec<u64> = take(3, drop(5, nat())).collect();
    assert_eq!(window, vec![5, 6, 7]);
}

#[rstest]
fn test_nothing_pulled_until_consumed() {
    let pulled = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&pulled);
    let source = LazySequence::from_iterator((0u64..).inspect(move |_| {
        counter.set(counter.get() + 1);
    }));

    let pipeline = take(3, map(|x: u64| x * 10, filter(|x: &u64| x % 2 == 0, source)));
    assert_eq!(pulled.get(), 0);

    let collected: Vec<u64> = pipeline.collect();
    assert_eq!(collected, vec![0, 20, 40]);
    // Only the elements needed to produce three even numbers were pulled.
    assert_eq!(pulled.get(), 5);
}

#[rstest]
fn test_uniq_over_infinite_source_stays_lazy() {
    let repeating = map(|x: u64| x % 3, nat());
    let distinct: Vec<u64> = take(3, uniq(repeating)).collect();
    assert_eq!(distinct, vec![0, 1, 2]);
}

// =============================================================================
// uniq
// =============================================================================

#[rstest]
fn test_uniq_keeps_first_occurrence_order() {
    assert_eq!(uniq(vec![1, 2, 3, 4, 5, 5, 6]), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(uniq(vec![2, 7, 2, 1, 7, 7]), vec![2, 7, 1]);
    assert_eq!(uniq(vector!["b", "a", "b"]), vector!["b", "a"]);
}

#[rstest]
fn test_uniq_without_hash_or_ord() {
    // Only PartialEq is required of the element type.
    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    let points = vec![
        Point { x: 0, y: 0 },
        Point { x: 1, y: 0 },
        Point { x: 0, y: 0 },
    ];
    assert_eq!(uniq(points).len(), 2);
}

// =============================================================================
// Native-sequence helpers
// =============================================================================

#[rstest]
fn test_head_tail_flatten() {
    assert_eq!(head(&[10, 20]), Some(&10));
    assert_eq!(tail(&[10, 20, 30]), vec![20, 30]);
    assert_eq!(flatten(vec![vec![1], vec![2, 3]]), vec![1, 2, 3]);
    assert_eq!(flat_map(|x: i32| vec![x; x as usize], vec![1, 2]), vec![1, 2, 2]);
}

#[rstest]
fn test_compact_and_sum() {
    let parsed: Vec<Option<i32>> = vec!["1", "x", "3"]
        .into_iter()
        .map(|s| s.parse().ok())
        .collect();
    assert_eq!(sum(compact(parsed)), 4);
}

#[rstest]
fn test_range_helpers() {
    assert_eq!(range(0, 4), vec![0, 1, 2, 3]);
    assert_eq!(range_step(10, 0, -4), vec![10, 6, 2]);
    assert_eq!(range(4, 4), Vec::<i64>::new());
}

// =============================================================================
// Direct trait usage
// =============================================================================

#[rstest]
fn test_collection_methods_compose() {
    let result = vector![1, 2, 3, 4, 5, 6]
        .retain(|x| x % 2 == 0)
        .transform(|x| x * x)
        .prefix(2);
    assert_eq!(result, vector![4, 16]);
}
