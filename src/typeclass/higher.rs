//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! [`TypeConstructor`] recovers that ability with a GAT: an implementor names
//! the type it is applied to (`Inner`) and how to re-apply the same
//! constructor to another type (`WithType<B>`). Every combinator trait in
//! this crate is built on it.
//!
//! # Example
//!
//! ```rust
//! use functional_refactoring::typeclass::TypeConstructor;
//!
//! fn absent_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Option<String> = absent_like(Some(42));
//! assert_eq!(absent, None);
//! ```

/// A type constructor applied to some type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is the same type as `F`.
pub trait TypeConstructor {
    /// The type the constructor is currently applied to.
    ///
    /// For `Option<Cart>` this is `Cart`.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// For `Option<Cart>`, `WithType<Amount>` is `Option<Amount>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn option_inner_type_is_the_payload() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<Option<String>>();
    }

    #[test]
    fn result_with_type_keeps_the_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<String, (), u64>();
    }

    #[test]
    fn with_type_chains_across_several_steps() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_option_bool::<Step2>();
    }

    #[rstest]
    #[case(Some(7))]
    #[case(None)]
    fn option_with_its_own_inner_is_itself(#[case] original: Option<i32>) {
        fn same<T: TypeConstructor>(value: T) -> T::WithType<T::Inner>
        where
            T: Into<T::WithType<T::Inner>>,
        {
            value.into()
        }

        let result: Option<i32> = same(original);
        assert_eq!(result, original);
    }
}
