//! Monad type class - sequencing dependent optional computations.
//!
//! [`Monad::flat_map`] is the `flatMap` (bind) combinator. The function it
//! receives produces a new context itself, and the result is returned as is,
//! without double wrapping. For `Option` this chains lookups that each may
//! come back empty: the first absence ends the chain and no later step runs.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_refactoring::typeclass::Monad;
//!
//! fn customer_of(cart: &str) -> Option<&'static str> {
//!     cart.contains("gold").then_some("gold-customer")
//! }
//!
//! assert_eq!(Some("gold-1").flat_map(customer_of), Some("gold-customer"));
//! assert_eq!(Some("other").flat_map(customer_of), None);
//! assert_eq!(None::<&str>.flat_map(customer_of), None);
//! ```

use super::applicative::Applicative;

/// An [`Applicative`] whose next step may depend on the previous value.
pub trait Monad: Applicative {
    /// Feeds the contained value to `function` and returns its context.
    ///
    /// On absence `function` is not called.
    ///
    /// ```rust
    /// use functional_refactoring::typeclass::Monad;
    ///
    /// let w = Some(5).flat_map(|n| if n > 10 { Some(n) } else { None });
    /// assert_eq!(w, None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `next` after `self`, discarding the value of `self`.
    ///
    /// ```rust
    /// use functional_refactoring::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value),
            None => None,
        }
    }
}

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        match self {
            Ok(value) => function(value),
            Err(error) => Err(error),
        }
    }
}
