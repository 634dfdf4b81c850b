//! Lazy, pull-based sequences.
//!
//! This module provides deferred-evaluation machinery: the
//! [`LazySequence`] type, a pull-based sequence that may be infinite, and
//! its generator constructors such as [`nat`] and [`LazySequence::iterate`].
//!
//! # Examples
//!
//! ```rust
//! use laminar::control::nat;
//!
//! // nat() is unbounded; pulling drives it one element at a time.
//! let first_three: Vec<u64> = nat().take(3).collect();
//! assert_eq!(first_three, vec![0, 1, 2]);
//! ```

mod lazy;

pub use lazy::LazySequence;
pub use lazy::nat;
