//! Order-preserving duplicate removal.

use std::hash::Hash;

use super::SeenSet;

/// Removes duplicates from a sequence, keeping the first occurrence of each
/// distinct value in its original position.
///
/// Membership is tracked with a hash-based seen-set, giving amortized O(1)
/// lookups per element. The operation is idempotent:
/// `dedup(&dedup(items))` equals `dedup(items)`.
///
/// # Examples
///
/// ```rust
/// use recollect::seq::dedup;
///
/// assert_eq!(dedup(&[1, 2, 2, 3, 4, 4, 5, 5, 5]), vec![1, 2, 3, 4, 5]);
/// assert_eq!(dedup(&["b", "a", "b", "c"]), vec!["b", "a", "c"]);
/// assert_eq!(dedup(&[] as &[i32]), Vec::<i32>::new());
/// ```
pub fn dedup<T>(items: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = SeenSet::default();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Removes duplicates using a caller-supplied equality closure.
///
/// Use this for compound types that do not implement `Eq + Hash`, or when
/// equality should consider only part of the value. Each element is
/// compared against the values already kept, so this runs in O(n²) in the
/// worst case where [`dedup`] runs in O(n).
///
/// # Examples
///
/// ```rust
/// use recollect::seq::dedup_by;
///
/// // Deduplicate points by their x coordinate only.
/// let points = [(1, "first"), (2, "second"), (1, "third")];
/// let unique = dedup_by(&points, |kept, candidate| kept.0 == candidate.0);
/// assert_eq!(unique, vec![(1, "first"), (2, "second")]);
/// ```
pub fn dedup_by<T, F>(items: &[T], mut equals: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut unique: Vec<T> = Vec::new();
    for item in items {
        if !unique.iter().any(|kept| equals(kept, item)) {
            unique.push(item.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_preserves_first_occurrence_order() {
        assert_eq!(dedup(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let once = dedup(&[1, 1, 2, 3, 3]);
        let twice = dedup(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedup_by_with_float_tolerance() {
        let readings = [1.0_f64, 1.05, 2.0, 1.98];
        let unique = dedup_by(&readings, |kept, candidate| (kept - candidate).abs() < 0.1);
        assert_eq!(unique, vec![1.0, 2.0]);
    }
}
