//! The curry macro family: one-argument-at-a-time application.
//!
//! A Rust function's arity is part of its type, so the caller names it by
//! picking `curry2!`, `curry3!` or `curry4!`. The expansions share the
//! function and the already-supplied arguments through [`std::rc::Rc`] so
//! every intermediate stage implements [`Fn`] and can be applied more than
//! once, including arguments that are not [`Copy`].

/// Converts a two-argument function into curried form.
///
/// `curry2!(f)(a)(b)` is `f(a, b)`; `curry2!(f)(a)` is a reusable closure
/// over the second argument.
///
/// # Examples
///
/// ```
/// use laminar::curry2;
///
/// fn scale(factor: i32, value: i32) -> i32 {
///     factor * value
/// }
///
/// let curried = curry2!(scale);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(7), 14);
/// assert_eq!(triple(7), 21);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a three-argument function into curried form.
///
/// Every stage but the last must receive a [`Clone`] argument, since the
/// partial applications can be reused.
///
/// # Examples
///
/// ```
/// use laminar::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let to_percent = curry3!(clamp)(0)(100);
/// assert_eq!(to_percent(130), 100);
/// assert_eq!(to_percent(-2), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

/// Converts a four-argument function into curried form.
///
/// # Examples
///
/// ```
/// use laminar::curry4;
///
/// fn weighted(a_weight: i32, b_weight: i32, a: i32, b: i32) -> i32 {
///     a_weight * a + b_weight * b
/// }
///
/// let blend = curry4!(weighted)(3)(1);
/// assert_eq!(blend(10)(2), 32);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            arg4,
                        )
                    }
                }
            }
        }
    }};
}
