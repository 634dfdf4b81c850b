//! The `compose!` macro: right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` evaluates as `f(g(h(x)))` — the rightmost
/// function runs first, matching the mathematical reading of `f ∘ g ∘ h`.
/// For the data-flow reading, see [`pipe!`](crate::pipe).
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h))` and
///   `compose!(compose!(f, g), h)` agree on every input.
/// - **Identity**: composing with
///   [`identity`](crate::compose::identity) on either side leaves the
///   function unchanged.
///
/// # Examples
///
/// ```
/// use laminar::compose;
///
/// fn halve(x: i32) -> i32 {
///     x / 2
/// }
/// fn successor(x: i32) -> i32 {
///     x + 1
/// }
///
/// // halve(successor(9)) = halve(10) = 5
/// let composed = compose!(halve, successor);
/// assert_eq!(composed(9), 5);
/// ```
///
/// Types flow through the chain right to left:
///
/// ```
/// use laminar::compose;
///
/// let render = |x: i32| x.to_string();
/// let width = |s: String| s.len();
///
/// let digits = compose!(width, render);
/// assert_eq!(digits(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    // A single function composes to itself.
    ($function:expr) => {
        $function
    };

    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($rest),+);
        move |input| outer(inner(input))
    }};
}
