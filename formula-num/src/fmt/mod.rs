//! Formatting options for numbers.

pub mod complex;
pub mod float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Formatting options for numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatOptions {
    /// How to format a number.
    pub number: NumberFormat,

    /// Which suffix notation to use for scientific notation.
    ///
    /// This option is ignored if [`number`] is [`NumberFormat::Decimal`].
    ///
    /// [`number`]: FormatOptions::number
    pub scientific: Scientific,

    /// The number of significant digits to show. If [`None`], every digit stored in the number
    /// is shown.
    ///
    /// Numbers are computed with a few more bits than their precision tier guarantees, so the
    /// last few digits of an unrounded number are usually noise. Formatting with the digit count
    /// of the precision tier hides them.
    ///
    /// This option **does not** control the precision of the number during calculation, only the
    /// number of digits to display during formatting.
    pub precision: Option<usize>,

    /// Whether to display separators for large numbers.
    pub separators: Separator,
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }
}

/// The different ways to format a number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberFormat {
    /// Chooses between decimal and scientific notation based on the magnitude of the number.
    ///
    /// Numbers that are in the ranges `[-1e-6, 1e-6]` U `[-inf, -1e+12] U [1e+12, inf]` will be
    /// represented in scientific notation, while all other numbers are formatted in decimal
    /// notation. Zero is always formatted as `0`.
    ///
    /// This is the default option.
    #[default]
    Auto,

    /// Formats the number as a decimal, with no regard to the magnitude of the number.
    Decimal,

    /// Formats the number in scientific notation.
    ///
    /// The formatting of this option can be further customized using the [`scientific`] option in
    /// the [`FormatOptions`] struct.
    ///
    /// [`scientific`]: FormatOptions::scientific
    Scientific,
}

/// The different ways to format the suffix of scientific notation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scientific {
    /// Uses `e` notation to denote the exponent, such as `1.5e3`.
    ///
    /// Numbers written this way can be parsed back as formula literals.
    ///
    /// This is the default option.
    #[default]
    E,

    /// Uses the suffix `× 10 ^` to denote the exponent, such as `1.5 × 10 ^ 3`.
    Times,
}

impl Scientific {
    /// Utility function to create a new [`FormatOptions`] with the same formating options as the
    /// given [`FormatOptions`], but with the scientific notation format set to this value.
    pub fn inside(self, options: FormatOptions) -> FormatOptions {
        FormatOptions {
            scientific: self,
            ..options
        }
    }
}

/// Whether to display separators for large numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Separator {
    /// Always display separators. For example, the number _one million_ is rendered with commas as
    /// `1,000,000`.
    Always,

    /// Never display separators.
    ///
    /// This is the default option.
    #[default]
    Never,
}

impl NumberFormat {
    /// Utility function to create a new [`FormatOptions`] with the same formating options as the
    /// given [`FormatOptions`], but with the number format set to this value.
    pub fn inside(self, options: FormatOptions) -> FormatOptions {
        FormatOptions {
            number: self,
            ..options
        }
    }
}

/// Helper struct to build a [`FormatOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number format. See [`NumberFormat`] for more information.
    pub fn number(mut self, number: NumberFormat) -> Self {
        self.0.number = number;
        self
    }

    /// Sets the scientific notation suffix. See [`Scientific`] for more information.
    pub fn scientific(mut self, scientific: Scientific) -> Self {
        self.0.scientific = scientific;
        self
    }

    /// Sets the number of significant digits to show. If [`None`], every stored digit is shown.
    /// See [`FormatOptions::precision`] for more information.
    pub fn precision(mut self, precision: Option<usize>) -> Self {
        self.0.precision = precision;
        self
    }

    /// Sets whether to display separators for large numbers. See [`Separator`] for more
    /// information.
    pub fn separators(mut self, separators: Separator) -> Self {
        self.0.separators = separators;
        self
    }

    /// Builds the [`FormatOptions`] struct.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use crate::{precision::Precision, primitive::{complex, float, float_from_str}, scalar::Scalar};
    use pretty_assertions::assert_eq;
    use rug::{ops::Pow, Float};
    use super::*;

    fn digits(n: usize) -> FormatOptions {
        FormatOptionsBuilder::new().precision(Some(n)).build()
    }

    #[test]
    fn exact_integers() {
        let precision = Precision::MIN;
        assert_eq!(float(precision, 2).formatted(digits(16)).to_string(), "2");
        assert_eq!(float(precision, -8).formatted(digits(16)).to_string(), "-8");
        assert_eq!(float(precision, 0).formatted(digits(16)).to_string(), "0");
        assert_eq!(float(precision, 1500).formatted(digits(16)).to_string(), "1500");
    }

    #[test]
    fn rounded_fraction() {
        let n = float_from_str(Precision::MIN, "-0.0025").unwrap();
        assert_eq!(n.formatted(digits(16)).to_string(), "-0.0025");

        let third = float(Precision::MIN, 1) / 3u32;
        assert_eq!(third.formatted(digits(5)).to_string(), "0.33333");
    }

    #[test]
    fn pi_digits() {
        let pi = <Float as Scalar>::pi(Precision::MIN);
        assert_eq!(pi.formatted(digits(16)).to_string(), "3.141592653589793");
        assert_eq!(pi.formatted(digits(3)).to_string(), "3.14");
    }

    #[test]
    fn highly_precise_decimal() {
        let precision = Precision::nearest(150).unwrap();
        let n = float_from_str(precision, "2.1").unwrap().pow(100u16);
        let opts = FormatOptionsBuilder::new()
            .number(NumberFormat::Decimal)
            .precision(Some(150))
            .build();

        // this is the exact value
        assert_eq!(
            n.formatted(opts).to_string(),
            "166697648439633735919597210805076.6529167300667828951014331365469362133029070327866633033064632426906380900918045096212631206355582001",
        );
    }

    #[test]
    fn scientific_suffixes() {
        let n = float(Precision::MIN, 1500);
        let e = FormatOptionsBuilder::new()
            .number(NumberFormat::Scientific)
            .precision(Some(16))
            .build();
        assert_eq!(n.formatted(e).to_string(), "1.5e3");
        assert_eq!(
            n.formatted(Scientific::Times.inside(e)).to_string(),
            "1.5 × 10 ^ 3",
        );
    }

    #[test]
    fn auto_switches_to_scientific() {
        let tiny = float_from_str(Precision::MIN, "2.5e-9").unwrap();
        assert_eq!(tiny.formatted(digits(16)).to_string(), "2.5e-9");

        let huge = float_from_str(Precision::MIN, "-3e15").unwrap();
        assert_eq!(huge.formatted(digits(16)).to_string(), "-3e15");
    }

    #[test]
    fn separators() {
        let n = float(Precision::MIN, 37000000);
        let opts = FormatOptionsBuilder::new()
            .precision(Some(16))
            .separators(Separator::Always)
            .build();
        assert_eq!(n.formatted(opts).to_string(), "37,000,000");
    }

    #[test]
    fn complex_parts() {
        let c = complex(Precision::MIN, (3, -2));
        assert_eq!(c.formatted(digits(16)).to_string(), "3+i*(-2)");

        let neg_one = complex(Precision::MIN, (-1, 0));
        assert_eq!(neg_one.formatted(digits(16)).to_string(), "-1+i*(0)");
    }
}
