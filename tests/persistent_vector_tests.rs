#![cfg(feature = "persistent")]
//! Integration tests for the persistent `Vector`.
//!
//! These exercise whole workflows over the public API: version forking,
//! structural sharing across handles, concatenation and the range
//! constructors.

use laminar::persistent::Vector;
use laminar::vector;
use rstest::rstest;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_empty_vector() {
    let vector: Vector<i32> = Vector::new();
    assert_eq!(vector.len(), 0);
    assert!(vector.is_empty());
    assert_eq!(vector.to_vec(), Vec::<i32>::new());
}

#[rstest]
fn test_vector_macro_matches_from() {
    let via_macro = vector![1, 2, 3];
    let via_from = Vector::from(vec![1, 2, 3]);
    assert_eq!(via_macro, via_from);
}

#[rstest]
fn test_collect_into_vector() {
    let collected: Vector<i32> = (1..=4).collect();
    assert_eq!(collected.to_vec(), vec![1, 2, 3, 4]);
}

// =============================================================================
// Versioning and structural sharing
// =============================================================================

#[rstest]
fn test_push_back_leaves_source_untouched() {
    let base = vector![5, 23, 4, 9];
    let extended = base.push_back(12);

    assert_eq!(base.to_vec(), vec![5, 23, 4, 9]);
    assert_eq!(extended.to_vec(), vec![5, 23, 4, 9, 12]);
    assert_eq!(base.len(), 4);
    assert_eq!(extended.len(), 5);
}

#[rstest]
fn test_sibling_forks_do_not_interfere() {
    let base = vector![1, 2];
    let left = base.push_back(3);
    let right = base.push_back(4);

    assert_eq!(base.to_vec(), vec![1, 2]);
    assert_eq!(left.to_vec(), vec![1, 2, 3]);
    assert_eq!(right.to_vec(), vec![1, 2, 4]);
}

#[rstest]
fn test_long_version_chain() {
    let mut versions = vec![Vector::new()];
    for index in 0..100 {
        let next = versions[versions.len() - 1].push_back(index);
        versions.push(next);
    }

    // Every intermediate version still sees exactly its own prefix.
    for (length, version) in versions.iter().enumerate() {
        assert_eq!(version.len(), length);
        assert_eq!(version.to_vec(), (0..length as i32).collect::<Vec<_>>());
    }
}

#[rstest]
fn test_pop_back_then_push_diverges() {
    let base = vector![1, 2, 3];
    let shortened = base.pop_back();
    let rewritten = shortened.push_back(9);

    assert_eq!(base.to_vec(), vec![1, 2, 3]);
    assert_eq!(shortened.to_vec(), vec![1, 2]);
    assert_eq!(rewritten.to_vec(), vec![1, 2, 9]);
}

#[rstest]
fn test_pop_back_on_empty_is_noop() {
    let empty: Vector<i32> = Vector::new();
    assert_eq!(empty.pop_back(), empty);
}

#[rstest]
fn test_drain_by_popping() {
    let mut vector = vector![1, 2, 3];
    for expected_length in (0..3).rev() {
        vector = vector.pop_back();
        assert_eq!(vector.len(), expected_length);
    }
    assert!(vector.is_empty());
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_equality_is_element_wise() {
    let grown = Vector::new().push_back(1).push_back(2);
    let direct = vector![1, 2];
    assert_eq!(grown, direct);
    assert_ne!(grown, vector![1, 2, 3]);
    assert_ne!(grown, vector![2, 1]);
}

#[rstest]
fn test_push_then_pop_restores_equality() {
    let base = vector![1, 2, 3];
    assert_eq!(base.push_back(9).pop_back(), base);
}

// =============================================================================
// Queries and transformation
// =============================================================================

#[rstest]
fn test_contains_any_all() {
    let vector = vector![1, 2, 3];
    assert!(vector.contains(&2));
    assert!(!vector.contains(&5));
    assert!(vector.any(|&x| x > 2));
    assert!(!vector.all(|&x| x > 2));
}

#[rstest]
fn test_map_filter_fold_pipeline() {
    let vector = vector![1, 2, 3, 4, 5];
    let squares_of_odds = vector.filter(|x| x % 2 == 1).map(|x| x * x);
    assert_eq!(squares_of_odds.to_vec(), vec![1, 9, 25]);
    assert_eq!(squares_of_odds.fold(0, |sum, x| sum + x), 35);
}

#[rstest]
fn test_iteration_over_reference() {
    let vector = vector!["a", "b", "c"];
    let joined: String = (&vector).into_iter().collect();
    assert_eq!(joined, "abc");
    // The vector is still usable after iterating by reference.
    assert_eq!(vector.len(), 3);
}

// =============================================================================
// Concatenation
// =============================================================================

#[rstest]
fn test_concat_preserves_order_and_sources() {
    let left = vector![1, 2];
    let right = vector![3, 4];
    let joined = left.concat(&right);

    assert_eq!(joined.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(left.to_vec(), vec![1, 2]);
    assert_eq!(right.to_vec(), vec![3, 4]);
}

#[rstest]
fn test_concat_halves() {
    let joined = vector![1, 2, 3].concat(&vector![4, 5, 6]);
    assert_eq!(joined.to_vec(), vec![1, 2, 3, 4, 5, 6]);
}

#[rstest]
fn test_concat_all_flattens_left_to_right() {
    let parts = [vector![1], Vector::new(), vector![2, 3]];
    assert_eq!(Vector::concat_all(&parts).to_vec(), vec![1, 2, 3]);
}

// =============================================================================
// Ranges
// =============================================================================

#[rstest]
#[case(Vector::range_to(4), vec![0, 1, 2, 3])]
#[case(Vector::range(2, 5), vec![2, 3, 4])]
#[case(Vector::range_step(0, 10, 3), vec![0, 3, 6, 9])]
#[case(Vector::range_step(5, 0, -2), vec![5, 3, 1])]
#[case(Vector::range(3, 3), vec![])]
fn test_range_constructors(#[case] vector: Vector<i64>, #[case] expected: Vec<i64>) {
    assert_eq!(vector.to_vec(), expected);
}

#[rstest]
#[should_panic(expected = "range step must be non-zero")]
fn test_range_step_zero_panics() {
    let _ = Vector::range_step(0, 5, 0);
}

// =============================================================================
// Formatting
// =============================================================================

#[rstest]
fn test_display_and_debug() {
    let vector = vector![1, 2, 3];
    assert_eq!(format!("{vector}"), "[1, 2, 3]");
    assert_eq!(format!("{vector:?}"), "Vector[1, 2, 3]");
}
