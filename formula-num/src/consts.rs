//! Constants used by the engine.
//!
//! Constants are computed once at the largest supported precision and rounded to the
//! precision they are requested at.

use crate::precision::Precision;
use once_cell::sync::Lazy;
use rug::{float::Constant, Float};

/// π at the largest supported precision.
static PI: Lazy<Float> = Lazy::new(|| Float::with_val(Precision::MAX.bits(), Constant::Pi));

/// Returns π rounded to the given precision.
pub fn pi(precision: Precision) -> Float {
    Float::with_val(precision.bits(), &*PI)
}
