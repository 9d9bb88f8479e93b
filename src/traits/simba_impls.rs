//! simba trait implementations for `Dual<T, N>`.
//!
//! Makes the dual number an ordinary scalar for nalgebra matrices and
//! decompositions. Every impl is generic over the value type, so nested duals
//! such as `Dual<Dual<f64, 2>, 2>` are scalars too.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Zero;
use simba::scalar::{ComplexField, Field, RealField, SubsetOf, SupersetOf};
use simba::simd::{PrimitiveSimdValue, SimdValue};

use crate::dual::Dual;
use crate::scalar::Scalar;

// ══════════════════════════════════════════════
//  SimdValue: trivial scalar lane (LANES=1)
// ══════════════════════════════════════════════

impl<T: Scalar, const N: usize> SimdValue for Dual<T, N> {
    const LANES: usize = 1;
    type Element = Self;
    type SimdBool = bool;

    #[inline(always)]
    fn splat(val: Self::Element) -> Self {
        val
    }
    #[inline(always)]
    fn extract(&self, _: usize) -> Self::Element {
        *self
    }
    #[inline(always)]
    unsafe fn extract_unchecked(&self, _: usize) -> Self::Element {
        *self
    }
    #[inline(always)]
    fn replace(&mut self, _: usize, val: Self::Element) {
        *self = val;
    }
    #[inline(always)]
    unsafe fn replace_unchecked(&mut self, _: usize, val: Self::Element) {
        *self = val;
    }
    #[inline(always)]
    fn select(self, cond: Self::SimdBool, other: Self) -> Self {
        if cond {
            self
        } else {
            other
        }
    }
}

impl<T: Scalar, const N: usize> PrimitiveSimdValue for Dual<T, N> {}

impl<T: Scalar, const N: usize> Field for Dual<T, N> {}

// ══════════════════════════════════════════════
//  SubsetOf conversions
// ══════════════════════════════════════════════

impl<T: Scalar, const N: usize> SubsetOf<Dual<T, N>> for Dual<T, N> {
    #[inline]
    fn to_superset(&self) -> Dual<T, N> {
        *self
    }
    #[inline]
    fn from_superset_unchecked(element: &Dual<T, N>) -> Self {
        *element
    }
    #[inline]
    fn is_in_subset(_: &Dual<T, N>) -> bool {
        true
    }
}

// A plain float enters as a constant at every nesting level. Going back
// drops the tangent, so only constants are in the subset.
macro_rules! impl_primitive_subset {
    ($f:ty) => {
        impl<T, const N: usize> SubsetOf<Dual<T, N>> for $f
        where
            T: Scalar + SupersetOf<$f>,
        {
            #[inline]
            fn to_superset(&self) -> Dual<T, N> {
                Dual::constant(T::from_subset(self))
            }
            #[inline]
            fn from_superset_unchecked(element: &Dual<T, N>) -> Self {
                <T as SupersetOf<$f>>::to_subset_unchecked(&element.re)
            }
            #[inline]
            fn is_in_subset(element: &Dual<T, N>) -> bool {
                <T as SupersetOf<$f>>::is_in_subset(&element.re)
                    && element.eps.iter().all(|e| e.is_zero())
            }
        }
    };
}

impl_primitive_subset!(f32);
impl_primitive_subset!(f64);

// ══════════════════════════════════════════════
//  AbsDiffEq / RelativeEq / UlpsEq
//  (required by RealField; compare values only)
// ══════════════════════════════════════════════

impl<T, const N: usize> AbsDiffEq for Dual<T, N>
where
    T: Scalar + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = Self;

    #[inline]
    fn default_epsilon() -> Self {
        Dual::constant(T::default_epsilon())
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon.re)
    }
}

impl<T, const N: usize> RelativeEq for Dual<T, N>
where
    T: Scalar + RelativeEq<Epsilon = T>,
{
    #[inline]
    fn default_max_relative() -> Self {
        Dual::constant(T::default_max_relative())
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self, max_relative: Self) -> bool {
        self.re.relative_eq(&other.re, epsilon.re, max_relative.re)
    }
}

impl<T, const N: usize> UlpsEq for Dual<T, N>
where
    T: Scalar + UlpsEq<Epsilon = T>,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self, max_ulps: u32) -> bool {
        self.re.ulps_eq(&other.re, epsilon.re, max_ulps)
    }
}

// ══════════════════════════════════════════════
//  ComplexField
// ══════════════════════════════════════════════

impl<T, const N: usize> ComplexField for Dual<T, N>
where
    T: Scalar
        + SupersetOf<f32>
        + SupersetOf<f64>
        + RelativeEq<Epsilon = T>
        + UlpsEq<Epsilon = T>,
{
    type RealField = Self;

    #[inline]
    fn from_real(re: Self::RealField) -> Self {
        re
    }
    #[inline]
    fn real(self) -> Self::RealField {
        self
    }
    #[inline]
    fn imaginary(self) -> Self::RealField {
        Self::zero()
    }
    #[inline]
    fn modulus(self) -> Self::RealField {
        Dual::abs(self)
    }
    #[inline]
    fn modulus_squared(self) -> Self::RealField {
        self * self
    }
    #[inline]
    fn argument(self) -> Self::RealField {
        if self.re >= T::zero() {
            Self::zero()
        } else {
            Dual::constant(T::PI())
        }
    }
    #[inline]
    fn norm1(self) -> Self::RealField {
        Dual::abs(self)
    }
    #[inline]
    fn scale(self, factor: Self::RealField) -> Self {
        self * factor
    }
    #[inline]
    fn unscale(self, factor: Self::RealField) -> Self {
        self / factor
    }
    #[inline]
    fn floor(self) -> Self {
        Dual::floor(self)
    }
    #[inline]
    fn ceil(self) -> Self {
        Dual::ceil(self)
    }
    #[inline]
    fn round(self) -> Self {
        Dual::round(self)
    }
    #[inline]
    fn trunc(self) -> Self {
        Dual::trunc(self)
    }
    #[inline]
    fn fract(self) -> Self {
        Dual::fract(self)
    }
    #[inline]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Dual::mul_add(self, a, b)
    }
    #[inline]
    fn abs(self) -> Self::RealField {
        Dual::abs(self)
    }
    #[inline]
    fn hypot(self, other: Self) -> Self::RealField {
        Dual::hypot(self, other)
    }
    #[inline]
    fn recip(self) -> Self {
        Dual::recip(self)
    }
    #[inline]
    fn conjugate(self) -> Self {
        self
    }
    #[inline]
    fn sin(self) -> Self {
        Dual::sin(self)
    }
    #[inline]
    fn cos(self) -> Self {
        Dual::cos(self)
    }
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        Dual::sin_cos(self)
    }
    #[inline]
    fn tan(self) -> Self {
        Dual::tan(self)
    }
    #[inline]
    fn asin(self) -> Self {
        Dual::asin(self)
    }
    #[inline]
    fn acos(self) -> Self {
        Dual::acos(self)
    }
    #[inline]
    fn atan(self) -> Self {
        Dual::atan(self)
    }
    #[inline]
    fn sinh(self) -> Self {
        Dual::sinh(self)
    }
    #[inline]
    fn cosh(self) -> Self {
        Dual::cosh(self)
    }
    #[inline]
    fn tanh(self) -> Self {
        Dual::tanh(self)
    }
    #[inline]
    fn asinh(self) -> Self {
        Dual::asinh(self)
    }
    #[inline]
    fn acosh(self) -> Self {
        Dual::acosh(self)
    }
    #[inline]
    fn atanh(self) -> Self {
        Dual::atanh(self)
    }
    #[inline]
    fn log(self, base: Self::RealField) -> Self {
        Dual::log(self, base)
    }
    #[inline]
    fn log2(self) -> Self {
        Dual::log2(self)
    }
    #[inline]
    fn log10(self) -> Self {
        Dual::log10(self)
    }
    #[inline]
    fn ln(self) -> Self {
        Dual::ln(self)
    }
    #[inline]
    fn ln_1p(self) -> Self {
        Dual::ln_1p(self)
    }
    #[inline]
    fn sqrt(self) -> Self {
        Dual::sqrt(self)
    }
    #[inline]
    fn exp(self) -> Self {
        Dual::exp(self)
    }
    #[inline]
    fn exp2(self) -> Self {
        Dual::exp2(self)
    }
    #[inline]
    fn exp_m1(self) -> Self {
        Dual::exp_m1(self)
    }
    #[inline]
    fn powi(self, n: i32) -> Self {
        Dual::powi(self, n)
    }
    #[inline]
    fn powf(self, n: Self::RealField) -> Self {
        Dual::powf(self, n)
    }
    #[inline]
    fn powc(self, n: Self) -> Self {
        Dual::powf(self, n)
    }
    #[inline]
    fn cbrt(self) -> Self {
        Dual::cbrt(self)
    }
    #[inline]
    fn is_finite(&self) -> bool {
        Dual::is_finite(*self)
    }
    #[inline]
    fn try_sqrt(self) -> Option<Self> {
        if self.re >= T::zero() {
            Some(Dual::sqrt(self))
        } else {
            None
        }
    }
}

// ══════════════════════════════════════════════
//  RealField
// ══════════════════════════════════════════════

impl<T, const N: usize> RealField for Dual<T, N>
where
    T: Scalar
        + SupersetOf<f32>
        + SupersetOf<f64>
        + RelativeEq<Epsilon = T>
        + UlpsEq<Epsilon = T>,
{
    #[inline]
    fn is_sign_positive(&self) -> bool {
        self.re.is_sign_positive()
    }
    #[inline]
    fn is_sign_negative(&self) -> bool {
        self.re.is_sign_negative()
    }
    #[inline]
    fn copysign(self, sign: Self) -> Self {
        if sign.re.is_sign_negative() {
            -Dual::abs(self)
        } else {
            Dual::abs(self)
        }
    }
    #[inline]
    fn max(self, other: Self) -> Self {
        Dual::max(self, other)
    }
    #[inline]
    fn min(self, other: Self) -> Self {
        Dual::min(self, other)
    }
    #[inline]
    fn clamp(self, min: Self, max: Self) -> Self {
        Dual::max(Dual::min(self, max), min)
    }
    #[inline]
    fn atan2(self, other: Self) -> Self {
        Dual::atan2(self, other)
    }
    #[inline]
    fn min_value() -> Option<Self> {
        Some(Dual::constant(T::min_value()))
    }
    #[inline]
    fn max_value() -> Option<Self> {
        Some(Dual::constant(T::max_value()))
    }

    // ── Constants ──
    #[inline]
    fn pi() -> Self {
        Dual::constant(T::PI())
    }
    #[inline]
    fn two_pi() -> Self {
        Dual::constant(T::TAU())
    }
    #[inline]
    fn frac_pi_2() -> Self {
        Dual::constant(T::FRAC_PI_2())
    }
    #[inline]
    fn frac_pi_3() -> Self {
        Dual::constant(T::FRAC_PI_3())
    }
    #[inline]
    fn frac_pi_4() -> Self {
        Dual::constant(T::FRAC_PI_4())
    }
    #[inline]
    fn frac_pi_6() -> Self {
        Dual::constant(T::FRAC_PI_6())
    }
    #[inline]
    fn frac_pi_8() -> Self {
        Dual::constant(T::FRAC_PI_8())
    }
    #[inline]
    fn frac_1_pi() -> Self {
        Dual::constant(T::FRAC_1_PI())
    }
    #[inline]
    fn frac_2_pi() -> Self {
        Dual::constant(T::FRAC_2_PI())
    }
    #[inline]
    fn frac_2_sqrt_pi() -> Self {
        Dual::constant(T::FRAC_2_SQRT_PI())
    }
    #[inline]
    fn e() -> Self {
        Dual::constant(T::E())
    }
    #[inline]
    fn log2_e() -> Self {
        Dual::constant(T::LOG2_E())
    }
    #[inline]
    fn log10_e() -> Self {
        Dual::constant(T::LOG10_E())
    }
    #[inline]
    fn ln_2() -> Self {
        Dual::constant(T::LN_2())
    }
    #[inline]
    fn ln_10() -> Self {
        Dual::constant(T::LN_10())
    }
}
