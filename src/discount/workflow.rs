//! The discount workflow.
//!
//! ```text
//! cart id -> Option<Cart> -> Option<DiscountRule> -> Option<Amount>
//!         -> Option<Cart> -> flush
//! ```
//!
//! Every step is pure except the final flush. A missing cart or a missing
//! rule makes every later step absent, and the workflow finishes with
//! `Ok(None)` without touching storage.

use crate::typeclass::{Applicative, Functor, Monad};

use super::config::DiscountConfig;
use super::lookup::{CartLookup, DiscountRuleLookup, FixtureCarts, GoldCustomerDiscount};
use super::storage::{Storage, StorageError};
use super::value_objects::{Amount, Cart, CartId};

/// The workflow wired with the substring fixtures.
pub type FixtureWorkflow = DiscountWorkflow<FixtureCarts, GoldCustomerDiscount>;

/// Returns `cart` with `discount` subtracted from its amount.
///
/// The subtraction is exact; rounding happens when the discount is computed.
///
/// # Examples
///
/// ```
/// use functional_refactoring::discount::{update_amount, Amount, Cart, CartId, CustomerId};
/// use rust_decimal::Decimal;
///
/// let cart = Cart::new(
///     CartId::new("gold-1"),
///     CustomerId::new("gold-customer"),
///     Amount::new(Decimal::ONE_HUNDRED),
/// );
/// let updated = update_amount(cart, Amount::new(Decimal::from(50)));
/// assert_eq!(updated.amount().value(), Decimal::from(50));
/// ```
#[must_use]
pub fn update_amount(cart: Cart, discount: Amount) -> Cart {
    let amount = cart.amount().subtract(discount);
    cart.with_amount(amount)
}

/// Computes and persists cart discounts.
///
/// `L` finds carts and `R` finds the discount rule of a cart's customer.
/// Both are injected so that lookup policy can be swapped without touching
/// the pipeline.
///
/// # Examples
///
/// ```
/// use functional_refactoring::discount::{CartId, FixtureWorkflow, InMemoryStorage};
/// use rust_decimal::Decimal;
///
/// let workflow = FixtureWorkflow::default();
/// let storage = InMemoryStorage::new();
///
/// let saved = workflow.apply_discount(&CartId::new("gold-42"), &storage)?;
/// assert_eq!(saved.map(|cart| cart.amount().value()), Some(Decimal::from(50)));
///
/// let skipped = workflow.apply_discount(&CartId::new("unknown-1"), &storage)?;
/// assert_eq!(skipped, None);
/// assert_eq!(storage.flush_count(), 1);
/// # Ok::<(), functional_refactoring::discount::StorageError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DiscountWorkflow<L, R> {
    carts: L,
    rules: R,
}

impl<L, R> DiscountWorkflow<L, R>
where
    L: CartLookup,
    R: DiscountRuleLookup,
{
    /// Creates a workflow from its two lookups.
    pub const fn new(carts: L, rules: R) -> Self {
        Self { carts, rules }
    }

    /// Runs the pure part of the pipeline.
    ///
    /// Returns the discounted cart, or `None` when the cart does not exist
    /// or its customer has no discount rule.
    pub fn discounted_cart(&self, cart_id: &CartId) -> Option<Cart> {
        let cart = self.carts.load_cart(cart_id);
        let rule = cart
            .clone()
            .flat_map(|cart| self.rules.lookup_discount_rule(cart.customer_id()));
        let discount = cart.clone().apply(rule);
        let updated = cart.map2(discount, update_amount);

        if updated.is_none() {
            tracing::debug!(cart_id = %cart_id, "no discount applies");
        }
        updated
    }

    /// Applies the discount to the cart named `cart_id` and flushes the
    /// result to `storage`.
    ///
    /// Returns the flushed cart, or `Ok(None)` when no discount applies, in
    /// which case `storage` is never called.
    ///
    /// # Errors
    ///
    /// Returns the `StorageError` reported by `storage.flush`.
    pub fn apply_discount<S>(
        &self,
        cart_id: &CartId,
        storage: &S,
    ) -> Result<Option<Cart>, StorageError>
    where
        S: Storage<Cart> + ?Sized,
    {
        self.discounted_cart(cart_id)
            .fmap(|cart| save(cart, storage))
            .transpose()
    }
}

impl FixtureWorkflow {
    /// The fixture lookups with a custom discount policy.
    #[must_use]
    pub const fn with_config(config: DiscountConfig) -> Self {
        Self {
            carts: FixtureCarts,
            rules: GoldCustomerDiscount::new(config),
        }
    }
}

impl Default for FixtureWorkflow {
    fn default() -> Self {
        Self::with_config(DiscountConfig::default())
    }
}

fn save<S>(cart: Cart, storage: &S) -> Result<Cart, StorageError>
where
    S: Storage<Cart> + ?Sized,
{
    match storage.flush(cart.clone()) {
        Ok(()) => {
            tracing::info!(
                cart_id = %cart.id(),
                amount = %cart.amount(),
                "flushed discounted cart"
            );
            Ok(cart)
        }
        Err(error) => {
            tracing::warn!(cart_id = %cart.id(), %error, "failed to flush discounted cart");
            Err(error)
        }
    }
}

/// Runs [`DiscountWorkflow::apply_discount`] with the fixture lookups and the
/// default discount policy.
///
/// # Errors
///
/// Returns the `StorageError` reported by `storage.flush`.
pub fn apply_discount<S>(cart_id: &CartId, storage: &S) -> Result<Option<Cart>, StorageError>
where
    S: Storage<Cart> + ?Sized,
{
    FixtureWorkflow::default().apply_discount(cart_id, storage)
}
