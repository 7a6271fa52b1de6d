//! Arbitrary-precision numbers for the formula engine.
//!
//! Every number the engine touches implements [`Scalar`]: [`rug::Float`] for real-valued
//! formulas and [`rug::Complex`] for complex-valued ones. The precision of a number is chosen at
//! runtime from one of the supported [`Precision`] tiers.

pub mod consts;
pub mod error;
pub mod fmt;
pub mod precision;
pub mod primitive;
pub mod scalar;

pub use fmt::{FormatOptions, FormatOptionsBuilder, NumberFormat, Scientific, Separator};
pub use precision::Precision;
pub use rug::{Complex, Float};
pub use scalar::{DomainViolation, Scalar};
