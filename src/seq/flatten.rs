//! Depth-bounded flattening of nested sequences.
//!
//! Arbitrarily nested sequences are represented by the [`Nested`] tree:
//! every element is either a terminal [`Nested::Item`] or a
//! [`Nested::Seq`] of further elements. [`flatten`] splices nested
//! sequences into their parent up to a caller-chosen [`Depth`], emitting
//! elements in pre-order (left-to-right) without reordering anything.
//!
//! Because [`Nested`] is an owned tree, cyclic structures cannot be
//! constructed and termination follows from the finite element count.
//!
//! # Examples
//!
//! ```rust
//! use recollect::nested;
//! use recollect::seq::{Depth, flatten, flatten_deep};
//!
//! let values = nested![[1, 2], [3, [4, 5]], 6, [[7]], [8, 9]];
//!
//! assert_eq!(
//!     flatten(values.clone(), Depth::Bounded(2)),
//!     nested![1, 2, 3, 4, 5, 6, 7, 8, 9],
//! );
//! assert_eq!(flatten_deep(values), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! ```

/// An element of an arbitrarily nested sequence.
///
/// Terminal values are wrapped in [`Nested::Item`]; sub-sequences in
/// [`Nested::Seq`]. Items are opaque to [`flatten`] — in particular, a
/// record or any other compound value stored as an item passes through
/// unchanged at whatever level it is encountered.
///
/// The [`nested!`](crate::nested) macro builds `Vec<Nested<T>>` literals:
///
/// ```rust
/// use recollect::nested;
/// use recollect::seq::Nested;
///
/// let values = nested![1, [2, 3]];
/// assert_eq!(
///     values,
///     vec![Nested::Item(1), Nested::Seq(vec![Nested::Item(2), Nested::Item(3)])],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A terminal value.
    Item(T),
    /// A nested sub-sequence.
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this element is a terminal item.
    pub const fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Returns `true` if this element is a nested sub-sequence.
    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Returns the terminal value, if this element is one.
    pub const fn as_item(&self) -> Option<&T> {
        match self {
            Self::Item(item) => Some(item),
            Self::Seq(_) => None,
        }
    }
}

/// How many levels of nesting [`flatten`] descends into.
///
/// `Bounded(0)` performs no flattening; `Unbounded` flattens fully
/// regardless of nesting depth. Negative depths are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// Descend at most this many levels.
    Bounded(usize),
    /// Descend through every level.
    Unbounded,
}

impl Depth {
    /// Returns the depth remaining after descending one level, or `None`
    /// when no further descent is allowed.
    const fn descend(self) -> Option<Self> {
        match self {
            Self::Unbounded => Some(Self::Unbounded),
            Self::Bounded(0) => None,
            Self::Bounded(levels) => Some(Self::Bounded(levels - 1)),
        }
    }
}

impl From<usize> for Depth {
    fn from(levels: usize) -> Self {
        Self::Bounded(levels)
    }
}

/// Flattens nested sequences up to `depth` levels, preserving pre-order.
///
/// Elements are emitted left-to-right. A [`Nested::Seq`] encountered
/// within the allowed depth is spliced into the output; one deeper than
/// `depth` allows is emitted unchanged. [`Nested::Item`] elements always
/// pass through unchanged.
///
/// Flattening is monotone in `depth`: a larger depth is never "less flat",
/// and `Depth::Unbounded` leaves no `Seq` elements in the output.
///
/// # Examples
///
/// ```rust
/// use recollect::nested;
/// use recollect::seq::{Depth, flatten};
///
/// let values = nested![[1, 2], [3, [4, 5]], 6];
///
/// // Depth 0 returns the input structurally unchanged.
/// assert_eq!(flatten(values.clone(), Depth::Bounded(0)), values);
///
/// // Depth 1 splices the top-level sequences only.
/// assert_eq!(
///     flatten(values.clone(), Depth::Bounded(1)),
///     nested![1, 2, 3, [4, 5], 6],
/// );
///
/// assert_eq!(
///     flatten(values, Depth::Unbounded),
///     nested![1, 2, 3, 4, 5, 6],
/// );
/// ```
pub fn flatten<T>(nested: Vec<Nested<T>>, depth: Depth) -> Vec<Nested<T>> {
    let mut flattened = Vec::with_capacity(nested.len());
    flatten_into(nested, depth, &mut flattened);
    flattened
}

fn flatten_into<T>(nested: Vec<Nested<T>>, depth: Depth, output: &mut Vec<Nested<T>>) {
    for element in nested {
        match element {
            Nested::Seq(inner) => match depth.descend() {
                Some(remaining) => flatten_into(inner, remaining, output),
                None => output.push(Nested::Seq(inner)),
            },
            item @ Nested::Item(_) => output.push(item),
        }
    }
}

/// Flattens a nested sequence completely, returning the bare items.
///
/// Equivalent to [`flatten`] with [`Depth::Unbounded`] followed by
/// unwrapping every item.
///
/// # Examples
///
/// ```rust
/// use recollect::nested;
/// use recollect::seq::flatten_deep;
///
/// let values = nested![[1, 2], [3, [4, [5]]]];
/// assert_eq!(flatten_deep(values), vec![1, 2, 3, 4, 5]);
/// ```
pub fn flatten_deep<T>(nested: Vec<Nested<T>>) -> Vec<T> {
    let mut items = Vec::with_capacity(nested.len());
    flatten_deep_into(nested, &mut items);
    items
}

fn flatten_deep_into<T>(nested: Vec<Nested<T>>, output: &mut Vec<T>) {
    for element in nested {
        match element {
            Nested::Item(item) => output.push(item),
            Nested::Seq(inner) => flatten_deep_into(inner, output),
        }
    }
}

/// Builds a `Vec<Nested<T>>` literal.
///
/// Bracketed elements become [`Nested::Seq`] sub-sequences, everything
/// else becomes a [`Nested::Item`]. Wrap compound expressions in
/// parentheses so they parse as a single element.
///
/// # Examples
///
/// ```rust
/// use recollect::nested;
/// use recollect::seq::flatten_deep;
///
/// let values = nested![[1, 2], [3, [4, 5]], 6, [[7]], [8, 9]];
/// assert_eq!(flatten_deep(values), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
///
/// let base = 10;
/// let computed = nested![(base + 1), [(base + 2)]];
/// assert_eq!(flatten_deep(computed), vec![11, 12]);
/// ```
#[macro_export]
macro_rules! nested {
    ($($elements:tt),* $(,)?) => {
        vec![$($crate::nested_element!($elements)),*]
    };
}

/// Internal helper for [`nested!`]; not part of the public API.
#[macro_export]
#[doc(hidden)]
macro_rules! nested_element {
    ([$($inner:tt),* $(,)?]) => {
        $crate::seq::Nested::Seq(vec![$($crate::nested_element!($inner)),*])
    };
    ($item:expr) => {
        $crate::seq::Nested::Item($item)
    };
}
