//! Immutable domain values: identifiers, amounts and the cart aggregate.

use std::fmt;

use rust_decimal::Decimal;

/// Identifier of a cart.
///
/// # Examples
///
/// ```
/// use functional_refactoring::discount::CartId;
///
/// let id = CartId::new("gold-42");
/// assert_eq!(id.as_str(), "gold-42");
/// assert_eq!(id.to_string(), "gold-42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CartId(String);

impl CartId {
    /// Creates a cart identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for CartId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Identifier of the customer owning a cart.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CustomerId(String);

impl CustomerId {
    /// Creates a customer identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A monetary value backed by an arbitrary-precision decimal.
///
/// Equality is numeric, so `50` and `50.00` compare equal.
///
/// # Examples
///
/// ```
/// use functional_refactoring::discount::Amount;
/// use rust_decimal::Decimal;
///
/// let total = Amount::new(Decimal::ONE_HUNDRED);
/// let discount = Amount::new(Decimal::from(30));
/// assert_eq!(total.subtract(discount), Amount::new(Decimal::from(70)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Amount(Decimal);

impl Amount {
    /// Wraps a decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `self - other`, exactly, without rounding.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A shopping cart: who owns it and how much it is worth.
///
/// A `Cart` is never updated in place. [`Cart::with_amount`] returns a new
/// value.
///
/// # Examples
///
/// ```
/// use functional_refactoring::discount::{Amount, Cart, CartId, CustomerId};
/// use rust_decimal::Decimal;
///
/// let cart = Cart::new(
///     CartId::new("gold-1"),
///     CustomerId::new("gold-customer"),
///     Amount::new(Decimal::ONE_HUNDRED),
/// );
/// let cheaper = cart.clone().with_amount(Amount::new(Decimal::from(50)));
///
/// assert_eq!(cart.amount().value(), Decimal::ONE_HUNDRED);
/// assert_eq!(cheaper.amount().value(), Decimal::from(50));
/// assert_eq!(cheaper.id(), cart.id());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cart {
    id: CartId,
    customer_id: CustomerId,
    amount: Amount,
}

impl Cart {
    /// Creates a cart.
    #[must_use]
    pub const fn new(id: CartId, customer_id: CustomerId, amount: Amount) -> Self {
        Self {
            id,
            customer_id,
            amount,
        }
    }

    /// Returns the cart identifier.
    #[must_use]
    pub const fn id(&self) -> &CartId {
        &self.id
    }

    /// Returns the owning customer.
    #[must_use]
    pub const fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Returns the cart amount.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    /// Returns the same cart carrying `amount`.
    #[must_use]
    pub fn with_amount(self, amount: Amount) -> Self {
        Self { amount, ..self }
    }
}
