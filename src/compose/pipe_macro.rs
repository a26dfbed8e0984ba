//! The `pipe!` macro for left-to-right stage application.

/// Pipes a value through a series of stages from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// This is the "data flow" reading of a pipeline: the sequence flows
/// through transformations in the order they are written, which matches
/// the filter → map → fold shape of most collection processing.
///
/// # Relationship with compose!
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(h, g, f)(x)`. While
/// [`compose!`](crate::compose) creates a new function, `pipe!`
/// immediately applies the stages to a value.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each stage only needs to implement [`FnOnce`], since each is called
/// exactly once; the stage builders in [`compose`](crate::compose) all
/// qualify.
///
/// # Examples
///
/// ## Filter → map → fold over records
///
/// ```rust
/// use recollect::compose::{filtering, folding, mapping};
/// use recollect::record::{Record, Value};
/// use recollect::{pipe, record};
///
/// let inventory = vec![
///     record! { "name" => "Laptop", "price" => 1200.0 },
///     record! { "name" => "Phone", "price" => 800.0 },
///     record! { "name" => "Tablet", "price" => 500.0 },
/// ];
///
/// let price_of = |item: &Record| item.get("price").and_then(Value::as_f64).unwrap_or(0.0);
///
/// // Items over 600, discounted by 10%, totalled.
/// let total = pipe!(
///     inventory,
///     filtering(move |item: &Record| price_of(item) > 600.0),
///     mapping(move |item: Record| price_of(&item) * 0.9),
///     folding(0.0, |total, price| total + price)
/// );
/// assert!((total - 1800.0).abs() < f64::EPSILON);
/// ```
///
/// ## Mixing stages with ordinary functions
///
/// ```rust
/// use recollect::pipe;
/// use recollect::seq::dedup;
///
/// fn doubled(values: Vec<i32>) -> Vec<i32> {
///     values.into_iter().map(|value| value * 2).collect()
/// }
///
/// let result = pipe!(vec![1, 1, 2, 3], |values: Vec<i32>| dedup(&values), doubled);
/// assert_eq!(result, vec![2, 4, 6]);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single stage: apply it
    ($value:expr, $stage:expr $(,)?) => {
        $stage($value)
    };

    // Multiple stages: apply left to right recursively
    ($value:expr, $stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::pipe!($stage($value), $($remaining_stages),+)
    };
}

#[cfg(test)]
mod tests {
    use crate::compose::{filtering, mapping};

    #[test]
    fn test_pipe_value_only() {
        let result = pipe!(vec![1, 2, 3]);
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_pipe_single_stage() {
        let result = pipe!(vec![1, 2, 3], mapping(|value: i32| value + 1));
        assert_eq!(result, vec![2, 3, 4]);
    }

    #[test]
    fn test_pipe_preserves_survivor_order() {
        let result = pipe!(
            vec![5, 1, 4, 2, 3],
            filtering(|value: &i32| *value >= 3),
            mapping(|value: i32| value * 100)
        );
        assert_eq!(result, vec![500, 400, 300]);
    }
}
