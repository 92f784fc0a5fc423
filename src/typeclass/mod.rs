//! Type class traits for composing optional values.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: `fmap`, transforming a present value
//! - [`Applicative`]: `pure`, `map2`, `apply`, combining independent values
//! - [`Monad`]: `flat_map`, chaining dependent computations
//!
//! All four are implemented for the standard `Option` (absence
//! short-circuits) and for `Result` (the first error short-circuits).
//!
//! # Examples
//!
//! ```rust
//! use functional_refactoring::typeclass::{Applicative, Functor, Monad};
//!
//! let amount = Some(100)
//!     .flat_map(|total| (total > 0).then_some(total))
//!     .fmap(|total| total / 2);
//! assert_eq!(amount, Some(50));
//!
//! let remaining = Some(100).map2(amount, |total, discount| total - discount);
//! assert_eq!(remaining, Some(50));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
