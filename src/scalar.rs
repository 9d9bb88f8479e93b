//! The [`Scalar`] trait for writing AD-generic numeric code.
//!
//! Functions written as `fn f<T: Scalar>(x: T) -> T` work transparently with
//! plain `f64`, with `Dual<f64, N>`, and with nested duals such as
//! `Dual<Dual<f64, 2>, 2>`. Every operation in [`Dual`] is written against
//! this trait, and `Dual<T, N>` implements it again, which is what lets the
//! same code recurse through any nesting depth.

use std::fmt::{Debug, Display};

use num_traits::FromPrimitive;

use crate::dual::Dual;
use crate::float::Float;

/// The central trait for AD-generic numeric code.
///
/// Beyond the `num_traits::Float` hierarchy this carries the special
/// functions (`erf`, `erfc`, Bessel functions of the first kind) that the
/// standard library does not provide.
pub trait Scalar:
    num_traits::Float
    + num_traits::FloatConst
    + FromPrimitive
    + Copy
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// The underlying primitive float type.
    type Float: Float;

    /// Lift a plain float to this scalar (constant: zero derivative).
    fn from_f(val: Self::Float) -> Self;

    /// Extract the innermost primal value.
    fn value(&self) -> Self::Float;

    /// Error function.
    fn erf(self) -> Self;

    /// Complementary error function.
    fn erfc(self) -> Self;

    /// Bessel function of the first kind, order 0.
    fn bessel_j0(self) -> Self;

    /// Bessel function of the first kind, order 1.
    fn bessel_j1(self) -> Self;

    /// Bessel function of the first kind, order `n`.
    fn bessel_jn(self, n: i32) -> Self;

    /// Lift an `f64` literal as a constant.
    #[inline]
    fn lit(x: f64) -> Self {
        Self::from_f(<Self::Float as Float>::from_f64_lossy(x))
    }
}

impl Scalar for f32 {
    type Float = f32;

    #[inline]
    fn from_f(val: f32) -> Self {
        val
    }

    #[inline]
    fn value(&self) -> f32 {
        *self
    }

    #[inline]
    fn erf(self) -> Self {
        libm::erff(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        libm::erfcf(self)
    }

    #[inline]
    fn bessel_j0(self) -> Self {
        libm::j0f(self)
    }

    #[inline]
    fn bessel_j1(self) -> Self {
        libm::j1f(self)
    }

    #[inline]
    fn bessel_jn(self, n: i32) -> Self {
        libm::jnf(n, self)
    }
}

impl Scalar for f64 {
    type Float = f64;

    #[inline]
    fn from_f(val: f64) -> Self {
        val
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn erf(self) -> Self {
        libm::erf(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        libm::erfc(self)
    }

    #[inline]
    fn bessel_j0(self) -> Self {
        libm::j0(self)
    }

    #[inline]
    fn bessel_j1(self) -> Self {
        libm::j1(self)
    }

    #[inline]
    fn bessel_jn(self, n: i32) -> Self {
        libm::jn(n, self)
    }
}

impl<T: Scalar, const N: usize> Scalar for Dual<T, N> {
    type Float = T::Float;

    #[inline]
    fn from_f(val: T::Float) -> Self {
        Dual::constant(T::from_f(val))
    }

    #[inline]
    fn value(&self) -> T::Float {
        self.re.value()
    }

    #[inline]
    fn erf(self) -> Self {
        Dual::erf(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        Dual::erfc(self)
    }

    #[inline]
    fn bessel_j0(self) -> Self {
        Dual::bessel_j0(self)
    }

    #[inline]
    fn bessel_j1(self) -> Self {
        Dual::bessel_j1(self)
    }

    #[inline]
    fn bessel_jn(self, n: i32) -> Self {
        Dual::bessel_jn(self, n)
    }
}
