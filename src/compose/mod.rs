//! Function composition and partial-application utilities.
//!
//! These combinators pair with the function-first signatures in
//! [`operation`](crate::operation): because every collection operation
//! takes its callback before its data, pipelines read as a straight
//! left-to-right flow and partially applied steps slot in directly.
//!
//! - [`compose!`](crate::compose!) — right-to-left composition,
//!   `compose!(f, g)(x) == f(g(x))`.
//! - [`pipe!`](crate::pipe!) — left-to-right application,
//!   `pipe!(x, f, g) == g(f(x))`.
//! - [`partial!`](crate::partial) — fixes some arguments, with `__`
//!   marking the ones left open.
//! - [`curry2!`](crate::curry2) / [`curry3!`](crate::curry3) /
//!   [`curry4!`](crate::curry4) — one-argument-at-a-time form; the arity
//!   is chosen by macro name since a Rust function's argument count is
//!   fixed at the type level.
//! - [`identity`], [`constant`], [`flip`] — the small combinators the
//!   macros compose with.
//!
//! # Examples
//!
//! ```
//! use laminar::pipe;
//! use laminar::operation::{filter, uniq};
//!
//! let evens = pipe!(
//!     vec![1, 2, 2, 3, 4, 4],
//!     |xs| uniq(xs),
//!     |xs| filter(|x: &i32| x % 2 == 0, xs),
//! );
//! assert_eq!(evens, vec![2, 4]);
//! ```
//!
//! ```
//! use laminar::curry2;
//!
//! fn scale(factor: i32, value: i32) -> i32 {
//!     factor * value
//! }
//!
//! let double = curry2!(scale)(2);
//! assert_eq!(double(21), 42);
//! ```

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use utils::{Placeholder, __, constant, flip, identity};
