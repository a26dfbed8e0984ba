//! Pipeline composition utilities.
//!
//! Pipelines chain pure stages over a sequence: the output of one stage is
//! the exact input of the next, and no stage observes its position in the
//! chain. Two macros cover the two reading directions:
//!
//! - [`pipe!`](crate::pipe): apply stages left-to-right (data flow style)
//! - [`compose!`](crate::compose): compose stages right-to-left into a new
//!   function (mathematical composition)
//!
//! # Stage Builders
//!
//! - [`filtering`]: keeps elements matching a predicate, preserving the
//!   relative order of survivors
//! - [`mapping`]: transforms each element, preserving length and order
//! - [`sorting`]: stably reorders elements with a caller-supplied
//!   comparator
//! - [`folding`]: collapses a sequence into a single accumulated value
//! - [`identity`]: the do-nothing stage
//!
//! Since folding collapses order into one value, any ordering the caller
//! needs downstream must be established before the fold stage.
//!
//! # Examples
//!
//! ```rust
//! use recollect::compose::{filtering, folding, mapping};
//! use recollect::pipe;
//!
//! let total = pipe!(
//!     vec![1, 2, 3, 4, 5, 6],
//!     filtering(|value: &i32| value % 2 == 0),
//!     mapping(|value: i32| value * 10),
//!     folding(0, |total, value| total + value)
//! );
//! assert_eq!(total, 120);
//! ```

mod compose_macro;
mod pipe_macro;
mod stages;

pub use stages::{filtering, folding, identity, mapping, sorting};
