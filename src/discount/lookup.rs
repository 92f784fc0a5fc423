//! Cart and discount-rule lookups.
//!
//! Both lookups are capabilities injected into
//! [`DiscountWorkflow`](super::DiscountWorkflow). Plain functions and
//! closures with the right signature already implement them, so a test can
//! pass `|_: &CartId| None` where a lookup is expected.
//!
//! The fixtures here match identifiers by substring. They stand in for real
//! data access and are kept exactly reproducible:
//!
//! | cart id contains | customer          | amount |
//! |------------------|-------------------|--------|
//! | `"gold"`         | `gold-customer`   | 100    |
//! | `"normal"`       | `normal-customer` | 100    |
//! | neither          | no cart           |        |
//!
//! Only customers whose id contains `"gold"` have a discount rule.

use rust_decimal::Decimal;

use super::config::DiscountConfig;
use super::value_objects::{Amount, Cart, CartId, CustomerId};

/// A discount rule: computes the discount owed on a cart.
pub type DiscountRule = Box<dyn FnOnce(Cart) -> Amount>;

/// Finds a cart by identifier.
pub trait CartLookup {
    /// Returns the cart named `id`, or `None` when there is no such cart.
    fn load_cart(&self, id: &CartId) -> Option<Cart>;
}

impl<F> CartLookup for F
where
    F: Fn(&CartId) -> Option<Cart>,
{
    fn load_cart(&self, id: &CartId) -> Option<Cart> {
        self(id)
    }
}

/// Finds the discount rule that applies to a customer.
pub trait DiscountRuleLookup {
    /// Returns the customer's rule, or `None` when no discount applies.
    fn lookup_discount_rule(&self, id: &CustomerId) -> Option<DiscountRule>;
}

impl<F> DiscountRuleLookup for F
where
    F: Fn(&CustomerId) -> Option<DiscountRule>,
{
    fn lookup_discount_rule(&self, id: &CustomerId) -> Option<DiscountRule> {
        self(id)
    }
}

/// Fixture cart lookup by substring of the cart id.
///
/// # Examples
///
/// ```
/// use functional_refactoring::discount::{load_cart, CartId};
/// use rust_decimal::Decimal;
///
/// let cart = load_cart(&CartId::new("gold-42")).unwrap();
/// assert_eq!(cart.customer_id().as_str(), "gold-customer");
/// assert_eq!(cart.amount().value(), Decimal::ONE_HUNDRED);
///
/// assert!(load_cart(&CartId::new("unknown-1")).is_none());
/// ```
#[must_use]
pub fn load_cart(id: &CartId) -> Option<Cart> {
    let customer = if id.as_str().contains("gold") {
        "gold-customer"
    } else if id.as_str().contains("normal") {
        "normal-customer"
    } else {
        return None;
    };

    Some(Cart::new(
        id.clone(),
        CustomerId::new(customer),
        Amount::new(Decimal::ONE_HUNDRED),
    ))
}

/// Fixture rule lookup using the default [`DiscountConfig`].
#[must_use]
pub fn lookup_discount_rule(id: &CustomerId) -> Option<DiscountRule> {
    GoldCustomerDiscount::default().lookup_discount_rule(id)
}

/// Halves the cart amount under the default [`DiscountConfig`].
///
/// Takes the cart by value so that it is itself a [`DiscountRule`].
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn half(cart: Cart) -> Amount {
    DiscountConfig::default().discount_for(cart.amount())
}

/// [`CartLookup`] backed by [`load_cart`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixtureCarts;

impl CartLookup for FixtureCarts {
    fn load_cart(&self, id: &CartId) -> Option<Cart> {
        load_cart(id)
    }
}

/// [`DiscountRuleLookup`] granting gold customers a discount.
///
/// The rule divides the cart amount as `config` says; with the default
/// configuration that halves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GoldCustomerDiscount {
    config: DiscountConfig,
}

impl GoldCustomerDiscount {
    /// Creates the lookup with the given discount policy.
    #[must_use]
    pub const fn new(config: DiscountConfig) -> Self {
        Self { config }
    }

    /// The discount policy applied by the rule.
    #[must_use]
    pub const fn config(&self) -> &DiscountConfig {
        &self.config
    }
}

impl DiscountRuleLookup for GoldCustomerDiscount {
    fn lookup_discount_rule(&self, id: &CustomerId) -> Option<DiscountRule> {
        let config = self.config;
        id.as_str().contains("gold").then(|| {
            Box::new(move |cart: Cart| config.discount_for(cart.amount())) as DiscountRule
        })
    }
}
