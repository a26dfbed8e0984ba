//! Stage builders for sequence pipelines.
//!
//! Each builder takes a pure closure and returns a sequence-in /
//! sequence-out (or sequence-in / value-out, for [`folding`]) stage
//! suitable for [`pipe!`](crate::pipe) and [`compose!`](crate::compose).
//! Stages never mutate their input sequence; they consume it and build a
//! new one.

/// Returns the value unchanged.
///
/// The identity function is the unit of composition:
/// `compose!(identity, f)` and `compose!(f, identity)` both behave like
/// `f`.
///
/// # Examples
///
/// ```rust
/// use recollect::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a stage that keeps the elements matching `predicate`.
///
/// Surviving elements keep their relative order; nothing is reordered or
/// duplicated.
///
/// # Examples
///
/// ```rust
/// use recollect::compose::filtering;
/// use recollect::pipe;
///
/// let evens = pipe!(vec![1, 2, 3, 4, 5, 6], filtering(|value: &i32| value % 2 == 0));
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
#[inline]
pub fn filtering<T, P>(predicate: P) -> impl Fn(Vec<T>) -> Vec<T>
where
    P: Fn(&T) -> bool,
{
    move |items| items.into_iter().filter(|item| predicate(item)).collect()
}

/// Builds a stage that transforms every element with `transform`.
///
/// The output has the same length and order as the input.
///
/// # Examples
///
/// ```rust
/// use recollect::compose::mapping;
/// use recollect::pipe;
///
/// let lengths = pipe!(
///     vec!["apple", "fig", "banana"],
///     mapping(|word: &str| word.len())
/// );
/// assert_eq!(lengths, vec![5, 3, 6]);
/// ```
#[inline]
pub fn mapping<T, U, F>(transform: F) -> impl Fn(Vec<T>) -> Vec<U>
where
    F: Fn(T) -> U,
{
    move |items| items.into_iter().map(&transform).collect()
}

/// Builds a stage that folds the sequence into a single value.
///
/// The fold runs left-to-right from a fresh clone of `init` on every
/// invocation: `fold(accumulator, element)` returns the next accumulator.
/// Folding collapses order into one value, so establish any ordering you
/// need before this stage.
///
/// # Examples
///
/// ```rust
/// use recollect::compose::folding;
/// use recollect::pipe;
///
/// let sum = pipe!(vec![1, 2, 3, 4, 5], folding(0, |total, value| total + value));
/// assert_eq!(sum, 15);
/// ```
#[inline]
pub fn folding<T, A, F>(init: A, fold: F) -> impl Fn(Vec<T>) -> A
where
    A: Clone,
    F: Fn(A, T) -> A,
{
    move |items| items.into_iter().fold(init.clone(), &fold)
}

/// Builds a stage that sorts the sequence with `comparator`.
///
/// The sort is stable: elements the comparator considers equal keep their
/// relative order. Establish any ordering you need before a [`folding`]
/// stage, since folding collapses order into a single value.
///
/// # Examples
///
/// ```rust
/// use recollect::compose::sorting;
/// use recollect::pipe;
///
/// let descending = pipe!(
///     vec![40, 1, 5, 200, 3],
///     sorting(|left: &i32, right: &i32| right.cmp(left))
/// );
/// assert_eq!(descending, vec![200, 40, 5, 3, 1]);
/// ```
#[inline]
pub fn sorting<T, C>(comparator: C) -> impl Fn(Vec<T>) -> Vec<T>
where
    C: Fn(&T, &T) -> std::cmp::Ordering,
{
    move |mut items| {
        items.sort_by(&comparator);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtering_keeps_survivor_order() {
        let keep_odd = filtering(|value: &i32| value % 2 == 1);
        assert_eq!(keep_odd(vec![5, 2, 3, 8, 1]), vec![5, 3, 1]);
    }

    #[test]
    fn test_mapping_preserves_length() {
        let negate = mapping(|value: i32| -value);
        assert_eq!(negate(vec![1, 2, 3]), vec![-1, -2, -3]);
    }

    #[test]
    fn test_folding_reuses_init_across_invocations() {
        let sum = folding(100, |total, value: i32| total + value);
        assert_eq!(sum(vec![1, 2]), 103);
        assert_eq!(sum(vec![3]), 103);
    }

    #[test]
    fn test_sorting_is_stable() {
        let by_first = sorting(|left: &(i32, char), right: &(i32, char)| left.0.cmp(&right.0));
        assert_eq!(
            by_first(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]),
            vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[test]
    fn test_stages_are_reusable() {
        let doubled = mapping(|value: i32| value * 2);
        assert_eq!(doubled(vec![1]), vec![2]);
        assert_eq!(doubled(vec![2]), vec![4]);
    }
}
