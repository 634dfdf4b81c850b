//! The `partial!` macro: partial application with `__` placeholders.

/// Fixes some arguments of a function, leaving `__` positions open.
///
/// `partial!(f, a, __)` returns a closure over the remaining argument, so
/// `partial!(f, a, __)(b)` is `f(a, b)`. Placeholders may appear in any
/// position and in any number; the returned closure takes the open
/// arguments in their original order. Two- and three-argument functions
/// are supported.
///
/// Fixed arguments are cloned into each call, so the partial application
/// can be invoked repeatedly; the fixed values must implement [`Clone`].
///
/// Write `__` literally — do not import
/// [`compose::__`](crate::compose::__), the macro matches the bare token.
///
/// # Examples
///
/// ```
/// use laminar::partial;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let to_percent = partial!(clamp, 0, 100, __);
/// assert_eq!(to_percent(250), 100);
/// assert_eq!(to_percent(-4), 0);
/// ```
///
/// Fixing a later argument:
///
/// ```
/// use laminar::partial;
///
/// fn join(separator: &str, left: String, right: String) -> String {
///     format!("{left}{separator}{right}")
/// }
///
/// let dashed = partial!(join, "-", __, __);
/// assert_eq!(dashed("a".to_string(), "b".to_string()), "a-b");
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 3-argument functions (placeholder-only patterns first)
    // =========================================================================
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3)
    }};

    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};

    ($function:expr, __, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1, arg3| function(arg1, arg2.clone(), arg3)
    }};

    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};

    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};

    ($function:expr, $arg1:expr, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg3 = $arg3;
        move |arg2| function(arg1.clone(), arg2, arg3.clone())
    }};

    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |arg1, arg2| function(arg1, arg2)
    }};

    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};

    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    fn between(low: i32, high: i32, value: i32) -> bool {
        low <= value && value < high
    }

    #[rstest]
    fn test_partial_fixes_first_argument() {
        let from_hundred = partial!(subtract, 100, __);
        assert_eq!(from_hundred(30), 70);
        assert_eq!(from_hundred(1), 99);
    }

    #[rstest]
    fn test_partial_fixes_second_argument() {
        let decrement_by_three = partial!(subtract, __, 3);
        assert_eq!(decrement_by_three(10), 7);
    }

    #[rstest]
    fn test_partial_all_placeholders() {
        let raw = partial!(subtract, __, __);
        assert_eq!(raw(5, 2), 3);
    }

    #[rstest]
    fn test_partial_three_arguments_mixed() {
        let is_digit = partial!(between, 0, 10, __);
        assert!(is_digit(9));
        assert!(!is_digit(10));

        let starts_at_zero = partial!(between, 0, __, __);
        assert!(starts_at_zero(5, 3));
    }

    #[rstest]
    fn test_partial_clones_fixed_non_copy_values() {
        fn tag(label: String, value: i32) -> String {
            format!("{label}:{value}")
        }

        let tagged = partial!(tag, "id".to_string(), __);
        assert_eq!(tagged(1), "id:1");
        assert_eq!(tagged(2), "id:2"); // Reusable after the first call
    }
}
