//! Sequence transformations.
//!
//! This module provides pure, order-preserving transformations over plain
//! sequences:
//!
//! - [`chunk`]: Fixed-size partitioning
//! - [`dedup`] / [`dedup_by`]: Order-preserving duplicate removal
//! - [`flatten`] / [`flatten_deep`]: Depth-bounded flattening of nested
//!   sequences via [`Nested`] and [`Depth`]
//! - [`intersection`] / [`union`] / [`difference`] and their `_by` variants:
//!   Set algebra over two sequences
//!
//! # Purity
//!
//! No operation mutates its input; every result is a newly constructed
//! sequence. Operations borrow their inputs where possible and clone only
//! the elements that appear in the result.
//!
//! # Equality
//!
//! The primary entry points require `T: Eq + Hash` and use a hash-based
//! membership set for amortized O(1) lookups. For compound types without
//! those bounds, the `_by` variants accept a caller-supplied equality
//! closure and fall back to linear scans.
//!
//! # Examples
//!
//! ```rust
//! use recollect::seq::{chunk, dedup, intersection, union};
//!
//! let chunks = chunk(&[1, 2, 3, 4, 5], 2)?;
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//!
//! assert_eq!(dedup(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
//! assert_eq!(intersection(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
//! assert_eq!(union(&[1, 2], &[2, 3]), vec![1, 2, 3]);
//! # Ok::<(), recollect::seq::ChunkSizeError>(())
//! ```

mod chunk;
mod dedup;
mod flatten;
mod set_ops;

pub use chunk::{ChunkSizeError, chunk};
pub use dedup::{dedup, dedup_by};
pub use flatten::{Depth, Nested, flatten, flatten_deep};
pub use set_ops::{
    difference, difference_by, intersection, intersection_by, union, union_by,
};

/// The membership set used by the hash-based fast paths.
#[cfg(feature = "fxhash")]
pub(crate) type SeenSet<T> = rustc_hash::FxHashSet<T>;

/// The membership set used by the hash-based fast paths.
#[cfg(not(feature = "fxhash"))]
pub(crate) type SeenSet<T> = std::collections::HashSet<T>;
