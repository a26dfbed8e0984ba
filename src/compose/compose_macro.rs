//! The `compose!` macro for right-to-left stage composition.

/// Composes stages right-to-left into a single function.
///
/// `compose!(f, g)(x)` is equivalent to `f(g(x))`: the rightmost stage
/// runs first, matching mathematical function composition. Use
/// [`pipe!`](crate::pipe) when you have a value in hand and want the
/// left-to-right reading instead.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h))` behaves like
///   `compose!(compose!(f, g), h)`
/// - **Identity**: composing with [`identity`](crate::compose::identity)
///   on either side changes nothing
///
/// # Examples
///
/// ## Building a reusable pipeline
///
/// ```rust
/// use recollect::compose;
/// use recollect::compose::{filtering, mapping};
///
/// // Rightmost stage runs first: filter, then map.
/// let evens_doubled = compose!(
///     mapping(|value: i32| value * 2),
///     filtering(|value: &i32| value % 2 == 0)
/// );
///
/// assert_eq!(evens_doubled(vec![1, 2, 3, 4]), vec![4, 8]);
/// ```
///
/// ## Verifying associativity
///
/// ```rust
/// use recollect::compose;
///
/// fn increment(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn negate(x: i32) -> i32 { -x }
///
/// let left = compose!(increment, compose!(double, negate));
/// let right = compose!(compose!(increment, double), negate);
///
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    // Single stage: identity composition
    ($stage:expr) => {
        $stage
    };

    // Two stages: basic composition
    // compose!(f, g)(x) = f(g(x))
    ($outer_stage:expr, $inner_stage:expr $(,)?) => {{
        let outer = $outer_stage;
        let inner = $inner_stage;
        move |input| outer(inner(input))
    }};

    // Three or more stages: recursive composition
    ($outer_stage:expr, $($remaining_stages:expr),+ $(,)?) => {{
        let outer = $outer_stage;
        let inner_composed = $crate::compose!($($remaining_stages),+);
        move |input| outer(inner_composed(input))
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;

    #[test]
    fn test_compose_single() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed(5), 10);
    }

    #[test]
    fn test_compose_runs_rightmost_first() {
        let increment = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let composed = compose!(increment, double);
        assert_eq!(composed(5), 11);
    }

    #[test]
    fn test_compose_identity_is_neutral() {
        let double = |x: i32| x * 2;
        let left = compose!(identity, double);
        let right = compose!(double, identity);
        assert_eq!(left(7), right(7));
    }
}
