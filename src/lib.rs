//! # functional-refactoring
//!
//! Replacing null checks with `Option` combinators, shown on a cart
//! discount calculation.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative) and [`Monad`](typeclass::Monad),
//!   implemented for `Option` and `Result`. They provide the `fmap`,
//!   `flat_map`, `map2` and `apply` combinators.
//! - **Discount Workflow**: loads a cart, looks up its customer's discount
//!   rule, applies it and flushes the discounted cart to an injected
//!   storage, composing each step with the combinators above.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `discount`: The discount workflow
//! - `serde`: `Serialize`/`Deserialize` for domain values and configuration
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use functional_refactoring::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let storage = InMemoryStorage::new();
//! let saved = apply_discount(&CartId::new("gold-42"), &storage)?;
//!
//! assert_eq!(saved.fmap(|cart| cart.amount().value()), Some(Decimal::from(50)));
//! # Ok::<(), StorageError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use functional_refactoring::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "discount")]
    pub use crate::discount::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "discount")]
pub mod discount;
