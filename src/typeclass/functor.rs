//! Functor type class - transforming a present value.
//!
//! [`Functor::fmap`] is the `map` combinator: it rewrites the value inside a
//! container and leaves the container's shape alone. For `Option`, absence
//! stays absence and the function is never called.
//!
//! The method is called `fmap` rather than `map` because `Option::map` is an
//! inherent method, and inherent methods always win method resolution.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functional_refactoring::typeclass::Functor;
//!
//! let present: Option<i32> = Some(100);
//! assert_eq!(present.fmap(|amount| amount / 2), Some(50));
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.fmap(|amount| amount / 2), None);
//! ```

use super::higher::TypeConstructor;

/// A container whose contents can be transformed by a total function.
///
/// The function passed to [`fmap`](Functor::fmap) must not itself signal
/// absence. When it can, use [`Monad::flat_map`](super::Monad::flat_map).
pub trait Functor: TypeConstructor {
    /// Applies `function` to the contained value, if there is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_refactoring::typeclass::Functor;
    ///
    /// let label: Option<String> = Some(42).fmap(|n| format!("cart-{n}"));
    /// assert_eq!(label, Some("cart-42".to_string()));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the contained value.
    ///
    /// The receiver is left untouched, which is useful when the value is
    /// still needed later in a pipeline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functional_refactoring::typeclass::Functor;
    ///
    /// let identifier = Some("gold-42".to_string());
    /// assert_eq!(identifier.fmap_ref(|s| s.contains("gold")), Some(true));
    /// assert!(identifier.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained value with `value`.
    ///
    /// ```rust
    /// use functional_refactoring::typeclass::Functor;
    ///
    /// assert_eq!(Some(1).replace("x"), Some("x"));
    /// assert_eq!(None::<i32>.replace("x"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Forgets the contained value, keeping only presence or absence.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Some(value) => Some(function(value)),
            None => None,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Some(value) => Some(function(value)),
            None => None,
        }
    }
}

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error),
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(4), Some(8))]
    #[case(None, None)]
    fn option_fmap_doubles_present_values(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(input.fmap(|n| n * 2), expected);
    }

    #[rstest]
    fn option_fmap_on_none_never_calls_the_function() {
        let calls = Cell::new(0);
        let result: Option<i32> = None::<i32>.fmap(|n| {
            calls.set(calls.get() + 1);
            n
        });

        assert_eq!(result, None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn option_fmap_ref_leaves_the_receiver_usable() {
        let value = Some(String::from("normal-7"));
        let length = value.fmap_ref(String::len);

        assert_eq!(length, Some(8));
        assert_eq!(value, Some(String::from("normal-7")));
    }

    #[rstest]
    #[case(Some(3), Some(()))]
    #[case(None, None)]
    fn option_void_keeps_only_presence(#[case] input: Option<i32>, #[case] expected: Option<()>) {
        assert_eq!(input.void(), expected);
    }

    #[rstest]
    fn result_fmap_passes_errors_through() {
        let failed: Result<i32, String> = Err("boom".to_string());
        assert_eq!(failed.fmap(|n| n + 1), Err("boom".to_string()));
    }

    #[rstest]
    fn result_fmap_ref_clones_the_error() {
        let failed: Result<i32, String> = Err("boom".to_string());
        assert_eq!(failed.fmap_ref(|n| n + 1), Err("boom".to_string()));
        assert!(failed.is_err());
    }

    #[rstest]
    fn result_replace_swaps_the_success_value() {
        let succeeded: Result<i32, String> = Ok(1);
        assert_eq!(succeeded.replace("done"), Ok("done"));
    }
}
