//! Cart discount workflow composed with the `Option` type classes.
//!
//! A cart id goes through a fixed pipeline:
//!
//! 1. [`CartLookup::load_cart`] finds the cart.
//! 2. [`Monad::flat_map`](crate::typeclass::Monad::flat_map) looks up the
//!    customer's [`DiscountRule`].
//! 3. [`Applicative::apply`](crate::typeclass::Applicative::apply) runs the
//!    rule on the cart, giving the discount.
//! 4. [`Applicative::map2`](crate::typeclass::Applicative::map2) combines the
//!    cart and the discount with [`update_amount`].
//! 5. The discounted cart, if any, is flushed to the injected [`Storage`].
//!
//! Absence at any step is not an error: nothing is flushed and the workflow
//! returns `Ok(None)`. Only a failing flush produces an `Err`.
//!
//! # Example
//!
//! ```rust
//! use functional_refactoring::discount::{
//!     apply_discount, Amount, Cart, CartId, CustomerId, InMemoryStorage,
//! };
//! use rust_decimal::Decimal;
//!
//! let storage = InMemoryStorage::new();
//! apply_discount(&CartId::new("gold-42"), &storage)?;
//! apply_discount(&CartId::new("unknown-1"), &storage)?;
//!
//! assert_eq!(
//!     storage.flushed(),
//!     vec![Cart::new(
//!         CartId::new("gold-42"),
//!         CustomerId::new("gold-customer"),
//!         Amount::new(Decimal::from(50)),
//!     )]
//! );
//! # Ok::<(), functional_refactoring::discount::StorageError>(())
//! ```

mod config;
mod lookup;
mod storage;
mod value_objects;
mod workflow;

pub use config::{ConfigError, DiscountConfig, MAX_SCALE, Rounding};
pub use lookup::{
    CartLookup, DiscountRule, DiscountRuleLookup, FixtureCarts, GoldCustomerDiscount, half,
    load_cart, lookup_discount_rule,
};
pub use storage::{InMemoryStorage, Storage, StorageError};
pub use value_objects::{Amount, Cart, CartId, CustomerId};
pub use workflow::{DiscountWorkflow, FixtureWorkflow, apply_discount, update_amount};
