//! Set algebra over two sequences.
//!
//! All three operations scan the left operand in order and never reorder
//! surviving elements:
//!
//! - [`intersection`]: elements of `a` that occur in `b`
//! - [`union`]: all distinct elements of `a` then `b`, each exactly once
//! - [`difference`]: elements of `a` absent from `b`
//!
//! [`intersection`] and [`difference`] preserve `a`'s multiplicity — a
//! duplicate in `a` tests against `b` independently each time and no
//! deduplication is performed. Together they partition `a`: every element
//! of `a` lands in exactly one of the two results.
//!
//! The `_by` variants take a caller-supplied equality closure for compound
//! types; they trade the hash-based membership set for linear scans.

use std::hash::Hash;

use super::SeenSet;

/// Returns the elements of `a` that also occur in `b`, preserving `a`'s
/// order and multiplicity.
///
/// # Examples
///
/// ```rust
/// use recollect::seq::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3, 4, 5], &[3, 4, 5, 6, 7]), vec![3, 4, 5]);
///
/// // Duplicates in `a` are kept; `b`'s multiplicity is irrelevant.
/// assert_eq!(intersection(&[1, 1, 2], &[1]), vec![1, 1]);
/// ```
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let membership: SeenSet<&T> = b.iter().collect();
    a.iter()
        .filter(|item| membership.contains(item))
        .cloned()
        .collect()
}

/// Returns all distinct elements appearing in `a` or `b`, each exactly
/// once, in first-occurrence order scanning `a` then `b`.
///
/// # Examples
///
/// ```rust
/// use recollect::seq::union;
///
/// assert_eq!(union(&[1, 2, 3, 4, 5], &[3, 4, 5, 6, 7]), vec![1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(union(&[] as &[i32], &[1, 1, 2]), vec![1, 2]);
/// ```
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = SeenSet::default();
    let mut combined = Vec::new();
    for item in a.iter().chain(b) {
        if seen.insert(item.clone()) {
            combined.push(item.clone());
        }
    }
    combined
}

/// Returns the elements of `a` not present anywhere in `b`, preserving
/// `a`'s order and multiplicity.
///
/// # Examples
///
/// ```rust
/// use recollect::seq::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4, 5], &[3, 4, 5, 6, 7]), vec![1, 2]);
/// assert_eq!(difference(&[1, 1, 2], &[2]), vec![1, 1]);
/// ```
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let membership: SeenSet<&T> = b.iter().collect();
    a.iter()
        .filter(|item| !membership.contains(item))
        .cloned()
        .collect()
}

/// [`intersection`] with a caller-supplied equality closure.
///
/// # Examples
///
/// ```rust
/// use recollect::seq::intersection_by;
///
/// let a = [(1, "one"), (2, "two")];
/// let b = [(2, "zwei"), (3, "drei")];
/// let common = intersection_by(&a, &b, |left, right| left.0 == right.0);
/// assert_eq!(common, vec![(2, "two")]);
/// ```
pub fn intersection_by<T, F>(a: &[T], b: &[T], mut equals: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    a.iter()
        .filter(|item| b.iter().any(|other| equals(item, other)))
        .cloned()
        .collect()
}

/// [`union`] with a caller-supplied equality closure.
///
/// # Examples
///
/// ```rust
/// use recollect::seq::union_by;
///
/// let a = [(1, "one"), (2, "two")];
/// let b = [(2, "zwei"), (3, "drei")];
/// let all = union_by(&a, &b, |left, right| left.0 == right.0);
/// assert_eq!(all, vec![(1, "one"), (2, "two"), (3, "drei")]);
/// ```
pub fn union_by<T, F>(a: &[T], b: &[T], mut equals: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut combined: Vec<T> = Vec::new();
    for item in a.iter().chain(b) {
        if !combined.iter().any(|kept| equals(kept, item)) {
            combined.push(item.clone());
        }
    }
    combined
}

/// [`difference`] with a caller-supplied equality closure.
///
/// # Examples
///
/// ```rust
/// use recollect::seq::difference_by;
///
/// let a = [(1, "one"), (2, "two")];
/// let b = [(2, "zwei")];
/// let only_in_a = difference_by(&a, &b, |left, right| left.0 == right.0);
/// assert_eq!(only_in_a, vec![(1, "one")]);
/// ```
pub fn difference_by<T, F>(a: &[T], b: &[T], mut equals: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    a.iter()
        .filter(|item| !b.iter().any(|other| equals(item, other)))
        .cloned()
        .collect()
}
