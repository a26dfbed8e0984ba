//! # recollect
//!
//! A collection transformation toolkit for Rust providing stable grouping,
//! depth-bounded flattening, order-preserving deduplication, fixed-size
//! chunking, set algebra, and composable pipelines.
//!
//! ## Overview
//!
//! Every operation in this library is a pure function over in-memory
//! sequences and records: inputs are never mutated, outputs are newly
//! constructed, and no operation holds process-wide state. This makes every
//! operation trivially reentrant and safe to call from any number of
//! independent call sites.
//!
//! The library is organized into four modules:
//!
//! - [`seq`]: Sequence transformations — [`chunk`](seq::chunk),
//!   [`dedup`](seq::dedup), [`flatten`](seq::flatten), and set algebra
//!   ([`intersection`](seq::intersection), [`union`](seq::union),
//!   [`difference`](seq::difference))
//! - [`group`]: Stable grouping and per-group aggregation
//!   ([`group_by`](group::group_by), [`Grouped`](group::Grouped))
//! - [`record`]: A heterogeneous [`Value`](record::Value) /
//!   [`Record`](record::Record) data model usable as grouping keys
//! - [`compose`]: The [`pipe!`] and [`compose!`] macros plus stage builders
//!   ([`filtering`](compose::filtering), [`mapping`](compose::mapping),
//!   [`folding`](compose::folding))
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` implementations for
//!   [`Value`](record::Value) and [`Record`](record::Record)
//! - `fxhash`: Uses `FxHasher` for the internal membership sets and group
//!   indices instead of the standard hasher
//!
//! ## Example
//!
//! ```rust
//! use recollect::prelude::*;
//! use recollect::{pipe, record};
//!
//! let inventory = vec![
//!     record! { "name" => "Laptop", "price" => 1200.0 },
//!     record! { "name" => "Phone", "price" => 800.0 },
//!     record! { "name" => "Tablet", "price" => 500.0 },
//! ];
//!
//! // Total price of items over 600, after a 10% discount.
//! let total = pipe!(
//!     inventory,
//!     filtering(|item: &Record| {
//!         item.get("price").and_then(Value::as_f64).is_some_and(|price| price > 600.0)
//!     }),
//!     mapping(|item: Record| {
//!         item.get("price").and_then(Value::as_f64).unwrap_or(0.0) * 0.9
//!     }),
//!     folding(0.0, |total, price| total + price)
//! );
//! assert!((total - 1800.0).abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use recollect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::group::*;
    pub use crate::record::*;
    pub use crate::seq::*;
}

pub mod compose;
pub mod group;
pub mod record;
pub mod seq;
