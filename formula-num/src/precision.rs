//! The precision tiers supported by the engine.

use crate::error::PrecisionTooLarge;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The supported precisions, in decimal digits, in increasing order.
pub const TIERS: [u32; 18] = [
    16, 24, 32, 48, 64, 96, 128, 192, 256, 384, 512, 768, 1024, 2048, 3072, 4096, 6144, 8192,
];

/// Extra bits carried by every number so that the last requested digit is rounded correctly.
const GUARD_BITS: u32 = 16;

/// The precision of a number, expressed as one of the supported [`TIERS`] of decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Precision(u32);

impl Precision {
    /// The smallest supported precision.
    pub const MIN: Self = Self(TIERS[0]);

    /// The largest supported precision.
    pub const MAX: Self = Self(TIERS[TIERS.len() - 1]);

    /// Selects the smallest tier that holds at least `digits` decimal digits. A request of `0`
    /// selects [`Precision::MIN`].
    ///
    /// Returns an error if `digits` is larger than the largest tier.
    pub fn nearest(digits: u32) -> Result<Self, PrecisionTooLarge> {
        TIERS.iter()
            .find(|&&tier| digits <= tier)
            .map(|&tier| Self(tier))
            .ok_or(PrecisionTooLarge { requested: digits, max: Self::MAX.0 })
    }

    /// The number of decimal digits of this precision.
    pub fn digits(self) -> u32 {
        self.0
    }

    /// The number of mantissa bits needed to represent this many decimal digits.
    pub fn bits(self) -> u32 {
        (self.0 as f64 * std::f64::consts::LOG2_10).ceil() as u32 + GUARD_BITS
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::MIN
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} digits", self.0)
    }
}
