//! The elementary combinators the composition macros build on.

/// Returns its argument unchanged.
///
/// The unit of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use laminar::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2]), vec![1, 2]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields `value` every time.
///
/// # Examples
///
/// ```
/// use laminar::compose::constant;
/// use laminar::operation::map;
///
/// let zeros = map(constant(0), vec![7, 8, 9]);
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a two-argument function.
///
/// `flip(f)(a, b) == f(b, a)`, and `flip(flip(f))` behaves as `f`. Handy
/// with [`partial!`](crate::partial) when the argument worth fixing is the
/// second one.
///
/// # Examples
///
/// ```
/// use laminar::compose::flip;
///
/// fn append(mut line: String, suffix: &str) -> String {
///     line.push_str(suffix);
///     line
/// }
///
/// let prepend_to = flip(append);
/// assert_eq!(prepend_to("!", "hey".to_string()), "hey!");
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Marker type behind the `__` placeholder of
/// [`partial!`](crate::partial).
///
/// The macro matches `__` as a literal token, so the constant is never
/// imported at a call site; the type exists so the token has something to
/// resolve to outside macro positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder;

/// The placeholder value.
///
/// Write `__` directly inside [`partial!`](crate::partial) without
/// importing it; an imported `__` shadows the literal the macro expects.
/// Double underscore because `macro_rules!` cannot treat a single `_` as a
/// literal token.
#[allow(non_upper_case_globals)]
pub const __: Placeholder = Placeholder;
