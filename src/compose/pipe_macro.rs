//! The `pipe!` macro: left-to-right application of a transformation chain.

/// Threads a value through functions, left to right.
///
/// `pipe!(x, f, g, h)` evaluates as `h(g(f(x)))` — the value enters on the
/// left and flows through each step in reading order. This is the
/// data-flow mirror of [`compose!`](crate::compose): the same chain, with
/// the value supplied up front.
///
/// # Examples
///
/// ```
/// use laminar::pipe;
///
/// fn successor(x: i32) -> i32 {
///     x + 1
/// }
/// fn double(x: i32) -> i32 {
///     x * 2
/// }
///
/// // double first, then successor
/// assert_eq!(pipe!(5, double, successor), 11);
/// ```
///
/// Collection pipelines read top to bottom:
///
/// ```
/// use laminar::operation::{filter, map, reduce};
/// use laminar::pipe;
///
/// let total = pipe!(
///     vec![1, 2, 3, 4, 5],
///     |xs| filter(|x: &i32| x % 2 == 1, xs),
///     |xs| map(|x: i32| x * x, xs),
///     |xs| reduce(|sum, x| sum + x, 0, xs),
/// );
/// assert_eq!(total, 35);
/// ```
#[macro_export]
macro_rules! pipe {
    // A bare value passes through.
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // pipe!(x, f, g, ...) = pipe!(f(x), g, ...)
    ($value:expr, $function:expr, $($rest:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($rest),+)
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn test_pipe_bare_value() {
        assert_eq!(pipe!(42), 42);
    }

    #[rstest]
    fn test_pipe_applies_left_to_right() {
        let successor = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        // double(successor(5)) = 12, not successor(double(5)) = 11.
        assert_eq!(pipe!(5, successor, double), 12);
    }

    #[rstest]
    fn test_pipe_changes_type_mid_chain() {
        let render = |x: i32| x.to_string();
        let width = |s: String| s.len();
        assert_eq!(pipe!(12345, render, width), 5);
    }

    #[rstest]
    fn test_pipe_mirrors_compose() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 3;
        assert_eq!(pipe!(7, f, g), crate::compose!(g, f)(7));
    }
}
