//! Rounding policy for discount computation.
//!
//! Decimal division may produce more digits than a currency can carry, so
//! every discount is rounded explicitly instead of relying on a library
//! default. The default policy divides by two and rounds half to even at
//! two decimal places.
//!
//! # Example
//!
//! ```rust
//! use functional_refactoring::discount::{Amount, DiscountConfig, Rounding};
//! use rust_decimal::Decimal;
//!
//! let config = DiscountConfig::new(Decimal::from(4), 0, Rounding::HalfUp)?;
//! assert_eq!(
//!     config.discount_for(Amount::new(Decimal::from(10))),
//!     Amount::new(Decimal::from(3)),
//! );
//! # Ok::<(), functional_refactoring::discount::ConfigError>(())
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use super::value_objects::Amount;

/// Largest scale a `Decimal` can represent.
pub const MAX_SCALE: u32 = 28;

/// Errors raised while building a [`DiscountConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The divisor is below one.
    #[error("discount divisor must be at least 1, got {0}")]
    DivisorTooSmall(Decimal),
    /// The scale exceeds [`MAX_SCALE`].
    #[error("decimal scale must be at most 28, got {0}")]
    ScaleOutOfRange(u32),
}

/// How a discount is rounded to the configured scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rounding {
    /// Midpoints go to the even neighbour (banker's rounding).
    #[default]
    HalfEven,
    /// Midpoints go away from zero.
    HalfUp,
    /// Midpoints go toward zero.
    HalfDown,
    /// Truncates.
    TowardZero,
    /// Any remainder rounds away from zero.
    AwayFromZero,
}

impl Rounding {
    /// The matching `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::TowardZero => RoundingStrategy::ToZero,
            Self::AwayFromZero => RoundingStrategy::AwayFromZero,
        }
    }
}

/// Discount policy: the divisor applied to a cart amount, and how the
/// quotient is rounded.
///
/// Built with [`DiscountConfig::new`], which rejects invalid values, or with
/// `Default` (divide by 2, two decimal places, half to even).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "DiscountConfigFields"))]
pub struct DiscountConfig {
    divisor: Decimal,
    scale: u32,
    rounding: Rounding,
}

impl DiscountConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DivisorTooSmall` when `divisor < 1` and
    /// `ConfigError::ScaleOutOfRange` when `scale > MAX_SCALE`.
    pub fn new(divisor: Decimal, scale: u32, rounding: Rounding) -> Result<Self, ConfigError> {
        if divisor < Decimal::ONE {
            return Err(ConfigError::DivisorTooSmall(divisor));
        }
        if scale > MAX_SCALE {
            return Err(ConfigError::ScaleOutOfRange(scale));
        }
        Ok(Self {
            divisor,
            scale,
            rounding,
        })
    }

    /// Returns the same policy with a different rounding mode.
    #[must_use]
    pub const fn with_rounding(self, rounding: Rounding) -> Self {
        Self { rounding, ..self }
    }

    /// The divisor applied to the cart amount.
    #[must_use]
    pub const fn divisor(&self) -> Decimal {
        self.divisor
    }

    /// Number of decimal places kept.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// The rounding mode.
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Computes the discount for `amount`: `amount / divisor`, rounded.
    #[must_use]
    pub fn discount_for(&self, amount: Amount) -> Amount {
        // divisor >= 1, so the quotient cannot overflow
        let quotient = amount.value() / self.divisor;
        Amount::new(quotient.round_dp_with_strategy(self.scale, self.rounding.strategy()))
    }
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            divisor: Decimal::TWO,
            scale: 2,
            rounding: Rounding::HalfEven,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct DiscountConfigFields {
    divisor: Decimal,
    scale: u32,
    rounding: Rounding,
}

#[cfg(feature = "serde")]
impl Default for DiscountConfigFields {
    fn default() -> Self {
        let config = DiscountConfig::default();
        Self {
            divisor: config.divisor,
            scale: config.scale,
            rounding: config.rounding,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<DiscountConfigFields> for DiscountConfig {
    type Error = ConfigError;

    fn try_from(fields: DiscountConfigFields) -> Result<Self, Self::Error> {
        Self::new(fields.divisor, fields.scale, fields.rounding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn decimal(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[rstest]
    fn default_halves_to_two_places_half_even() {
        let config = DiscountConfig::default();

        assert_eq!(config.divisor(), Decimal::TWO);
        assert_eq!(config.scale(), 2);
        assert_eq!(config.rounding(), Rounding::HalfEven);
    }

    #[rstest]
    #[case("100", "50")]
    #[case("0.05", "0.02")]
    #[case("0.07", "0.04")]
    #[case("33.33", "16.66")]
    fn default_discount_rounds_half_to_even(#[case] amount: &str, #[case] expected: &str) {
        let discount = DiscountConfig::default().discount_for(Amount::new(decimal(amount)));
        assert_eq!(discount.value(), decimal(expected));
    }

    #[rstest]
    #[case(Rounding::HalfEven, "0.02")]
    #[case(Rounding::HalfUp, "0.03")]
    #[case(Rounding::HalfDown, "0.02")]
    #[case(Rounding::TowardZero, "0.02")]
    #[case(Rounding::AwayFromZero, "0.03")]
    fn rounding_mode_decides_the_midpoint(#[case] rounding: Rounding, #[case] expected: &str) {
        let config = DiscountConfig::default().with_rounding(rounding);
        let discount = config.discount_for(Amount::new(decimal("0.05")));
        assert_eq!(discount.value(), decimal(expected));
    }

    #[rstest]
    #[case("0.5")]
    #[case("0")]
    #[case("-2")]
    fn divisor_below_one_is_rejected(#[case] divisor: &str) {
        let result = DiscountConfig::new(decimal(divisor), 2, Rounding::HalfEven);
        assert_eq!(result, Err(ConfigError::DivisorTooSmall(decimal(divisor))));
    }

    #[rstest]
    fn scale_above_the_decimal_limit_is_rejected() {
        let result = DiscountConfig::new(Decimal::TWO, 29, Rounding::HalfEven);
        assert_eq!(result, Err(ConfigError::ScaleOutOfRange(29)));
    }

    #[rstest]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::ScaleOutOfRange(30).to_string(),
            "decimal scale must be at most 28, got 30"
        );
        assert_eq!(
            ConfigError::DivisorTooSmall(decimal("0.5")).to_string(),
            "discount divisor must be at least 1, got 0.5"
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserializes_with_defaults_and_validation() {
        let config: DiscountConfig = serde_json::from_str(r#"{"rounding": "half_up"}"#).unwrap();
        assert_eq!(config, DiscountConfig::default().with_rounding(Rounding::HalfUp));

        let invalid = serde_json::from_str::<DiscountConfig>(r#"{"divisor": "0.1"}"#);
        assert!(invalid.is_err());
    }
}
