//! Exact percentages for the attack/defense differential.
//!
//! Percentages are kept as reduced fractions so that a value such as 37.5 %
//! survives until the final rounding step instead of being truncated early.

use core::fmt;

use crate::config::CombatConfig;
use crate::error::{ErrorSeverity, GameError};

/// A percentage `numerator / denominator` in the range `0..=99`.
///
/// Deserialization goes through [`Percentage::from_fraction`], so a decoded
/// value always has a non-zero denominator and stays under the cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Percentage {
    numerator: u64,
    denominator: u64,
}

impl Percentage {
    /// The cap applied to every bonus and reduction.
    pub const SATURATED: Self = Self {
        numerator: CombatConfig::MAX_PERCENT,
        denominator: 1,
    };

    /// Percentage by which `excess` exceeds `reference`, relative to `reference`.
    ///
    /// Saturates at [`Self::SATURATED`] once `excess >= reference`, and when
    /// `reference` is zero. The division is never evaluated in that case.
    pub fn of_excess(excess: u32, reference: u32) -> Self {
        if reference == 0 || excess >= reference {
            return Self::SATURATED;
        }

        let numerator = u64::from(excess) * 100;
        let denominator = u64::from(reference);

        // Ratios in (99, 100) still clamp.
        if numerator > CombatConfig::MAX_PERCENT * denominator {
            return Self::SATURATED;
        }

        Self::reduced(numerator, denominator)
    }

    /// Build a percentage from an explicit `numerator / denominator` pair.
    ///
    /// Unlike [`Self::of_excess`] this does not clamp: a value above the cap is
    /// an error.
    pub fn from_fraction(numerator: u64, denominator: u64) -> Result<Self, PercentageError> {
        if denominator == 0 {
            return Err(PercentageError::ZeroDenominator);
        }
        if numerator > CombatConfig::MAX_PERCENT * denominator {
            return Err(PercentageError::AboveCap {
                numerator,
                denominator,
            });
        }
        Ok(Self::reduced(numerator, denominator))
    }

    fn reduced(numerator: u64, denominator: u64) -> Self {
        let divisor = gcd(numerator, denominator);
        Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        }
    }

    /// Returns true if this percentage sits at the cap.
    pub fn is_saturated(&self) -> bool {
        *self == Self::SATURATED
    }

    /// Whole part of the percentage, rounded down.
    pub fn whole(&self) -> u64 {
        self.numerator / self.denominator
    }

    /// `ceil(self * amount / 100)`
    pub fn scale_ceil(&self, amount: u32) -> u64 {
        let (product, divisor) = self.scaled(amount);
        product.div_ceil(divisor) as u64
    }

    /// `floor(self * amount / 100)`
    pub fn scale_floor(&self, amount: u32) -> u64 {
        let (product, divisor) = self.scaled(amount);
        (product / divisor) as u64
    }

    // Quotients are bounded by `amount`, so narrowing back to u64 is lossless.
    fn scaled(&self, amount: u32) -> (u128, u128) {
        (
            u128::from(self.numerator) * u128::from(amount),
            u128::from(self.denominator) * 100,
        )
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tenths = (self.numerator * 10 / self.denominator) % 10;
        if self.numerator % self.denominator == 0 {
            write!(f, "{}%", self.whole())
        } else {
            write!(f, "{}.{}%", self.whole(), tenths)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Percentage {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Fraction {
            numerator: u64,
            denominator: u64,
        }

        let Fraction {
            numerator,
            denominator,
        } = Fraction::deserialize(deserializer)?;
        Self::from_fraction(numerator, denominator).map_err(serde::de::Error::custom)
    }
}

/// Errors raised when a fraction cannot form a [`Percentage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PercentageError {
    #[error("percentage denominator must not be zero")]
    ZeroDenominator,

    #[error("percentage {numerator}/{denominator} exceeds the 99% cap")]
    AboveCap { numerator: u64, denominator: u64 },
}

impl GameError for PercentageError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroDenominator => "PERCENT_ZERO_DENOMINATOR",
            Self::AboveCap { .. } => "PERCENT_ABOVE_CAP",
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}
