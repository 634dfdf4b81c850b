//! Persistent (immutable) data structures.
//!
//! This module provides immutable data structures that use structural
//! sharing to minimize copying:
//!
//! - [`Vector`]: Persistent ordered sequence (segmented parent chain)
//! - [`Dict`]: Persistent string-keyed mapping (layered parent chain)
//!
//! # Structural Sharing
//!
//! Every edit returns a *new* value whose internals mostly alias the storage
//! of the previous version. Old versions remain valid and unaffected: a
//! version exclusively owns its own top segment or layer and holds only a
//! read-only reference to its parent version, which may simultaneously be
//! referenced by sibling versions. Parent links always point to strictly
//! older versions, so no cycles can form.
//!
//! # Examples
//!
//! ## `Vector`
//!
//! ```rust
//! use laminar::persistent::Vector;
//!
//! let vector = Vector::from(vec![1, 2, 3]);
//! let extended = vector.push_back(4);
//!
//! // Structural sharing: the original vector is preserved
//! assert_eq!(vector.to_vec(), vec![1, 2, 3]);
//! assert_eq!(extended.to_vec(), vec![1, 2, 3, 4]);
//! ```
//!
//! ## `Dict`
//!
//! ```rust
//! use laminar::persistent::Dict;
//!
//! let dict = Dict::new().insert("one", 1).insert("two", 2);
//! assert_eq!(dict.get("one"), Some(&1));
//!
//! // Structural sharing: the original dict is preserved
//! let updated = dict.insert("one", 100);
//! assert_eq!(dict.get("one"), Some(&1));
//! assert_eq!(updated.get("one"), Some(&100));
//! ```
//!
//! # Thread Safety
//!
//! These structures are single-threaded by design. Sharing is value-level
//! aliasing between versions created sequentially by one writer; the append
//! fast paths are not safe to drive from multiple threads.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer used for parent links and shared storage.
///
/// The structures in this module are single-threaded value types, so this is
/// `std::rc::Rc` rather than `Arc`.
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod dict;
mod vector;

pub use dict::Dict;
pub use dict::DictKeys;
pub use vector::Vector;
pub use vector::VectorIterator;

// =============================================================================
// Tests
// =============================================================================
