//! Applicative type class - combining independent optional values.
//!
//! [`Applicative`] extends [`Functor`] with
//!
//! - `pure`, which lifts a plain value into the context,
//! - `map2`, which combines two independent contexts with a binary function,
//! - `apply`, which applies a function that is itself in a context.
//!
//! For `Option` the result of any of these is present only when every input
//! is present.
//!
//! # Laws
//!
//! `apply` takes the value as receiver and the wrapped function as argument.
//!
//! ## Identity Law
//!
//! ```text
//! v.apply(pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(x).apply(pure(f)) == pure(f(x))
//! ```
//!
//! ## Consistency with map2
//!
//! ```text
//! v.apply(u) == v.map2(u, |x, f| f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_refactoring::typeclass::Applicative;
//!
//! let lifted: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(lifted, Some(42));
//!
//! let total = Some(100).map2(Some(50), |amount, discount| amount - discount);
//! assert_eq!(total, Some(50));
//!
//! let halve: Option<fn(i32) -> i32> = Some(|n| n / 2);
//! assert_eq!(Some(100).apply(halve), Some(50));
//! ```

use super::functor::Functor;
use super::monad::Monad;

/// A [`Functor`] that can lift plain values and combine several contexts.
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    ///
    /// ```rust
    /// use functional_refactoring::typeclass::Applicative;
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines `self` and `other` with a binary function.
    ///
    /// The receiver is inspected first. If it is absent, `other` is dropped
    /// without being inspected and `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_refactoring::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three contexts with a ternary function.
    ///
    /// ```rust
    /// use functional_refactoring::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z), Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the two contained values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a wrapped function to the wrapped receiver.
    ///
    /// If the receiver is absent the result is absent. Otherwise, if the
    /// function is absent the result is absent. Otherwise the function is
    /// called once with the receiver's value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_refactoring::typeclass::Applicative;
    ///
    /// let rule: Option<fn(u32) -> u32> = Some(|amount| amount / 2);
    /// assert_eq!(Some(100).apply(rule), Some(50));
    ///
    /// let no_rule: Option<fn(u32) -> u32> = None;
    /// assert_eq!(Some(100).apply(no_rule), None);
    /// ```
    fn apply<B, F>(self, function: Self::WithType<F>) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> B;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match self {
            None => None,
            Some(a) => other.flat_map(|b| Some(function(a, b))),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, F>(self, function: Option<F>) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            None => None,
            Some(value) => function.flat_map(|function| Some(function(value))),
        }
    }
}

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match self {
            Err(error) => Err(error),
            Ok(a) => other.flat_map(|b| Ok(function(a, b))),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, F>(self, function: Result<F, E>) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Err(error) => Err(error),
            Ok(value) => function.flat_map(|function| Ok(function(value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(2), Some(3), Some(5))]
    #[case(Some(2), None, None)]
    #[case(None, Some(3), None)]
    #[case(None, None, None)]
    fn option_map2_is_present_only_when_both_are(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(left.map2(right, |a, b| a + b), expected);
    }

    #[rstest]
    fn option_map2_skips_the_function_on_absence() {
        let calls = Cell::new(0);
        let result = None::<i32>.map2(Some(1), |a, b| {
            calls.set(calls.get() + 1);
            a + b
        });

        assert_eq!(result, None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[case(Some(10), true, Some(5))]
    #[case(Some(10), false, None)]
    #[case(None, true, None)]
    #[case(None, false, None)]
    fn option_apply_needs_value_and_function(
        #[case] value: Option<i32>,
        #[case] with_function: bool,
        #[case] expected: Option<i32>,
    ) {
        let halve: fn(i32) -> i32 = |n| n / 2;
        assert_eq!(value.apply(with_function.then_some(halve)), expected);
    }

    #[rstest]
    fn option_apply_accepts_boxed_closures() {
        let offset = 7;
        let function: Option<Box<dyn FnOnce(i32) -> i32>> = Some(Box::new(move |n| n + offset));
        assert_eq!(Some(1).apply(function), Some(8));
    }

    #[rstest]
    fn option_map3_and_product() {
        assert_eq!(Some(1).map3(Some(2), None::<i32>, |a, b, c| a + b + c), None);
        assert_eq!(Some(1).product(Some("one")), Some((1, "one")));
    }

    #[rstest]
    fn result_map2_reports_the_first_error() {
        let left: Result<i32, &str> = Err("left");
        let right: Result<i32, &str> = Err("right");
        assert_eq!(left.map2(right, |a, b| a + b), Err("left"));
    }

    #[rstest]
    fn result_apply_checks_the_receiver_first() {
        let value: Result<i32, &str> = Err("value");
        let function: Result<fn(i32) -> i32, &str> = Err("function");
        assert_eq!(value.apply(function), Err("value"));

        let present: Result<i32, &str> = Ok(4);
        let missing: Result<fn(i32) -> i32, &str> = Err("function");
        assert_eq!(present.apply(missing), Err("function"));
    }
}
