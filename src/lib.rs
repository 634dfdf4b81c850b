//! # laminar
//!
//! A functional programming library for Rust providing persistent data
//! structures, lazy sequences, and generic collection operations.
//!
//! ## Overview
//!
//! The heart of the library is a pair of immutable data structures built on
//! structural sharing:
//!
//! - [`persistent::Vector`]: an ordered sequence stored as a chain of array
//!   segments, with O(1) amortized append and pop.
//! - [`persistent::Dict`]: a string-keyed mapping stored as a chain of
//!   copy-on-write layers.
//!
//! Around them the library provides:
//!
//! - **Generic Operations**: `map`, `filter`, `reduce`, `take`, `drop` and
//!   `uniq` that work uniformly over native vectors, persistent vectors and
//!   lazy sequences, always producing a same-kind result.
//! - **Lazy Sequences**: pull-based, possibly infinite sequences such as the
//!   natural-number counter [`control::nat`].
//! - **Function Composition**: `compose!`, `pipe!`, `partial!` and
//!   `curry2!`-style macros for point-free programming.
//!
//! ## Feature Flags
//!
//! - `persistent`: persistent data structures (`Vector`, `Dict`)
//! - `control`: lazy sequences
//! - `operation`: generic collection operations (implies `persistent`, `control`)
//! - `compose`: function composition macros
//! - `serde`: serialization support for the persistent structures
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use laminar::persistent::Vector;
//! use laminar::operation::{drop, take};
//! use laminar::control::nat;
//!
//! let vector = Vector::from(vec![5, 23, 4, 9]).push_back(12);
//! assert_eq!(vector.to_vec(), vec![5, 23, 4, 9, 12]);
//!
//! // take(3, drop(5, nat())) pulls exactly three elements from an
//! // unbounded source.
//! let window: Vec<u64> = take(3, drop(5, nat())).collect();
//! assert_eq!(window, vec![5, 6, 7]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use laminar::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "operation")]
    pub use crate::operation::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "operation")]
pub mod operation;

#[cfg(feature = "compose")]
pub mod compose;
