use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

/// Marker trait for the primitive leaf types (`f32`, `f64`).
///
/// Bundles the numeric and utility traits needed throughout fwdiff.
/// Only primitive float types implement this; `Dual` does not.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
    /// Lift an `f64` literal, rounding to the nearest representable value.
    fn from_f64_lossy(x: f64) -> Self;
}

impl Float for f32 {
    #[inline]
    fn from_f64_lossy(x: f64) -> Self {
        x as f32
    }
}

impl Float for f64 {
    #[inline]
    fn from_f64_lossy(x: f64) -> Self {
        x
    }
}
