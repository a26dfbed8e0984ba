//! Stable grouping and per-group aggregation.
//!
//! [`group_by`] partitions a sequence into groups keyed by a
//! caller-supplied key extractor. Grouping is *stable*: groups appear in
//! first-occurrence order of their keys, and each group preserves the
//! relative order its members had in the input. Every input element lands
//! in exactly one group, so concatenating the groups in order yields a
//! permutation of the input in which within-group order is intact.
//!
//! The key extractor must be total and deterministic for the duration of
//! one call; the library treats keys as opaque beyond equality and
//! hashing.
//!
//! # Examples
//!
//! ```rust
//! use recollect::group::group_by;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Transaction {
//!     kind: &'static str,
//!     amount: i64,
//! }
//!
//! let transactions = vec![
//!     Transaction { kind: "debit", amount: 100 },
//!     Transaction { kind: "credit", amount: 1000 },
//!     Transaction { kind: "debit", amount: 50 },
//! ];
//!
//! let grouped = group_by(transactions, |transaction| transaction.kind);
//!
//! // Groups appear in first-occurrence order of their keys.
//! let keys: Vec<&&str> = grouped.keys().collect();
//! assert_eq!(keys, vec![&"debit", &"credit"]);
//!
//! // Per-group totals via an independent left fold.
//! let totals = grouped.aggregate(0, |total, transaction| total + transaction.amount);
//! assert_eq!(totals, vec![("debit", 150), ("credit", 1000)]);
//! ```

use std::hash::Hash;

/// The index mapping keys to their position in the ordered group list.
#[cfg(feature = "fxhash")]
type GroupIndex<K> = rustc_hash::FxHashMap<K, usize>;

/// The index mapping keys to their position in the ordered group list.
#[cfg(not(feature = "fxhash"))]
type GroupIndex<K> = std::collections::HashMap<K, usize>;

/// The result of a stable grouping: an ordered mapping from key to the
/// members that produced it.
///
/// Construct with [`group_by`]. Groups iterate in first-occurrence order
/// of their keys; lookup by key is O(1) via an internal index.
#[derive(Debug, Clone)]
pub struct Grouped<K, T> {
    entries: Vec<(K, Vec<T>)>,
    index: GroupIndex<K>,
}

impl<K, T> Grouped<K, T>
where
    K: Eq + Hash,
{
    /// Returns the number of distinct groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no elements were grouped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the members grouped under `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::group::group_by;
    ///
    /// let grouped = group_by(vec![1, 2, 3, 4], |value| value % 2);
    /// assert_eq!(grouped.get(&0), Some(&[2, 4][..]));
    /// assert_eq!(grouped.get(&5), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&[T]> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Iterates over the group keys in first-occurrence order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over `(key, members)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[T])> {
        self.entries
            .iter()
            .map(|(key, members)| (key, members.as_slice()))
    }

    /// Consumes the grouping, returning the ordered `(key, members)` pairs.
    pub fn into_entries(self) -> Vec<(K, Vec<T>)> {
        self.entries
    }

    /// Folds each group independently, producing `(key, result)` pairs in
    /// group order.
    ///
    /// Every group is folded left-to-right from its own clone of `init`,
    /// exactly as a general reduce: `fold(accumulator, member)` returns
    /// the next accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::group::group_by;
    ///
    /// let words = vec!["apple", "avocado", "banana"];
    /// let grouped = group_by(words, |word| word.as_bytes()[0]);
    ///
    /// // Average word length per initial letter.
    /// let totals = grouped.aggregate((0usize, 0usize), |(sum, count), word| {
    ///     (sum + word.len(), count + 1)
    /// });
    /// let averages: Vec<(u8, usize)> = totals
    ///     .into_iter()
    ///     .map(|(initial, (sum, count))| (initial, sum / count))
    ///     .collect();
    /// assert_eq!(averages, vec![(b'a', 6), (b'b', 6)]);
    /// ```
    pub fn aggregate<A, F>(self, init: A, mut fold: F) -> Vec<(K, A)>
    where
        A: Clone,
        F: FnMut(A, T) -> A,
    {
        self.entries
            .into_iter()
            .map(|(key, members)| {
                let folded = members.into_iter().fold(init.clone(), &mut fold);
                (key, folded)
            })
            .collect()
    }
}

impl<K, T> Grouped<K, T>
where
    K: Eq + Hash + Clone,
{
    /// Returns `(key, group size)` pairs in group order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recollect::group::group_by;
    ///
    /// let grouped = group_by(vec![1, 2, 3, 4, 5], |value| value % 2);
    /// assert_eq!(grouped.counts(), vec![(1, 3), (0, 2)]);
    /// ```
    pub fn counts(&self) -> Vec<(K, usize)> {
        self.entries
            .iter()
            .map(|(key, members)| (key.clone(), members.len()))
            .collect()
    }
}

impl<K: PartialEq, T: PartialEq> PartialEq for Grouped<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, T: Eq> Eq for Grouped<K, T> {}

impl<K, T> IntoIterator for Grouped<K, T> {
    type Item = (K, Vec<T>);
    type IntoIter = std::vec::IntoIter<(K, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Groups a sequence by the key each element maps to under `key_of`.
///
/// Grouping is stable as described in the [module docs](self): group order
/// follows the first occurrence of each key, member order within a group
/// follows the input.
///
/// # Examples
///
/// ```rust
/// use recollect::group::group_by;
///
/// let grouped = group_by(vec!["ant", "bee", "ape", "bat"], |word| word.as_bytes()[0]);
/// assert_eq!(grouped.get(&b'a'), Some(&["ant", "ape"][..]));
/// assert_eq!(grouped.get(&b'b'), Some(&["bee", "bat"][..]));
/// ```
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_of: F) -> Grouped<K, T>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut entries: Vec<(K, Vec<T>)> = Vec::new();
    let mut index = GroupIndex::default();
    for item in items {
        let key = key_of(&item);
        if let Some(&position) = index.get(&key) {
            entries[position].1.push(item);
        } else {
            index.insert(key.clone(), entries.len());
            entries.push((key, vec![item]));
        }
    }
    Grouped { entries, index }
}
