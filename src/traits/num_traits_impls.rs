use std::num::FpCategory;

use num_traits::{
    Float as NumFloat, FloatConst, FromPrimitive, Num, NumCast, One, Pow, Signed, ToPrimitive,
    Zero,
};

use crate::dual::Dual;
use crate::scalar::Scalar;

impl<T: Scalar, const N: usize> Zero for Dual<T, N> {
    #[inline]
    fn zero() -> Self {
        Dual::constant(T::zero())
    }
    /// Zero by value; the tangent is ignored.
    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero()
    }
}

impl<T: Scalar, const N: usize> One for Dual<T, N> {
    #[inline]
    fn one() -> Self {
        Dual::constant(T::one())
    }
}

impl<T: Scalar, const N: usize> Num for Dual<T, N> {
    type FromStrRadixErr = T::FromStrRadixErr;
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        T::from_str_radix(str, radix).map(Dual::constant)
    }
}

impl<T: Scalar, const N: usize> FromPrimitive for Dual<T, N> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        T::from_i64(n).map(Dual::constant)
    }
    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        T::from_u64(n).map(Dual::constant)
    }
    #[inline]
    fn from_f32(n: f32) -> Option<Self> {
        T::from_f32(n).map(Dual::constant)
    }
    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        T::from_f64(n).map(Dual::constant)
    }
}

impl<T: Scalar, const N: usize> ToPrimitive for Dual<T, N> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.re.to_i64()
    }
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.re.to_u64()
    }
    #[inline]
    fn to_f32(&self) -> Option<f32> {
        self.re.to_f32()
    }
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.re.to_f64()
    }
}

impl<T: Scalar, const N: usize> NumCast for Dual<T, N> {
    #[inline]
    fn from<P: ToPrimitive>(n: P) -> Option<Self> {
        <T as NumCast>::from(n).map(Dual::constant)
    }
}

impl<T: Scalar, const N: usize> Signed for Dual<T, N> {
    #[inline]
    fn abs(&self) -> Self {
        Dual::abs(*self)
    }
    #[inline]
    fn abs_sub(&self, other: &Self) -> Self {
        if self.re > other.re {
            *self - *other
        } else {
            Self::zero()
        }
    }
    #[inline]
    fn signum(&self) -> Self {
        Dual::signum(*self)
    }
    #[inline]
    fn is_positive(&self) -> bool {
        self.re.is_sign_positive()
    }
    #[inline]
    fn is_negative(&self) -> bool {
        self.re.is_sign_negative()
    }
}

macro_rules! float_consts {
    ($($name:ident)*) => {
        impl<T: Scalar, const N: usize> FloatConst for Dual<T, N> {
            $(
                #[inline]
                fn $name() -> Self {
                    Dual::constant(T::$name())
                }
            )*
        }
    };
}

float_consts! {
    E FRAC_1_PI FRAC_1_SQRT_2 FRAC_2_PI FRAC_2_SQRT_PI FRAC_PI_2 FRAC_PI_3
    FRAC_PI_4 FRAC_PI_6 FRAC_PI_8 LN_10 LN_2 LOG10_E LOG2_E PI SQRT_2 TAU
    LOG10_2 LOG2_10
}

impl<T: Scalar, const N: usize> NumFloat for Dual<T, N> {
    fn nan() -> Self { Dual::constant(T::nan()) }
    fn infinity() -> Self { Dual::constant(T::infinity()) }
    fn neg_infinity() -> Self { Dual::constant(T::neg_infinity()) }
    fn neg_zero() -> Self { Dual::constant(T::neg_zero()) }

    fn min_value() -> Self { Dual::constant(T::min_value()) }
    fn min_positive_value() -> Self { Dual::constant(T::min_positive_value()) }
    fn max_value() -> Self { Dual::constant(T::max_value()) }
    fn epsilon() -> Self { Dual::constant(T::epsilon()) }

    // Classification looks at every component.
    fn is_nan(self) -> bool { Dual::is_nan(self) }
    fn is_infinite(self) -> bool { Dual::is_infinite(self) }
    fn is_finite(self) -> bool { Dual::is_finite(self) }
    fn is_normal(self) -> bool { Dual::is_normal(self) }
    fn classify(self) -> FpCategory { Dual::classify(self) }
    fn is_sign_positive(self) -> bool { self.re.is_sign_positive() }
    fn is_sign_negative(self) -> bool { self.re.is_sign_negative() }

    fn floor(self) -> Self { Dual::floor(self) }
    fn ceil(self) -> Self { Dual::ceil(self) }
    fn round(self) -> Self { Dual::round(self) }
    fn trunc(self) -> Self { Dual::trunc(self) }
    fn fract(self) -> Self { Dual::fract(self) }
    fn abs(self) -> Self { Dual::abs(self) }
    fn signum(self) -> Self { Dual::signum(self) }

    fn mul_add(self, a: Self, b: Self) -> Self { Dual::mul_add(self, a, b) }

    fn recip(self) -> Self { Dual::recip(self) }
    fn powi(self, n: i32) -> Self { Dual::powi(self, n) }
    fn powf(self, n: Self) -> Self { Dual::powf(self, n) }
    fn sqrt(self) -> Self { Dual::sqrt(self) }
    fn cbrt(self) -> Self { Dual::cbrt(self) }

    fn exp(self) -> Self { Dual::exp(self) }
    fn exp2(self) -> Self { Dual::exp2(self) }
    fn exp_m1(self) -> Self { Dual::exp_m1(self) }
    fn ln(self) -> Self { Dual::ln(self) }
    fn log2(self) -> Self { Dual::log2(self) }
    fn log10(self) -> Self { Dual::log10(self) }
    fn ln_1p(self) -> Self { Dual::ln_1p(self) }
    fn log(self, base: Self) -> Self { Dual::log(self, base) }

    fn sin(self) -> Self { Dual::sin(self) }
    fn cos(self) -> Self { Dual::cos(self) }
    fn tan(self) -> Self { Dual::tan(self) }
    fn sin_cos(self) -> (Self, Self) { Dual::sin_cos(self) }
    fn asin(self) -> Self { Dual::asin(self) }
    fn acos(self) -> Self { Dual::acos(self) }
    fn atan(self) -> Self { Dual::atan(self) }
    fn atan2(self, other: Self) -> Self { Dual::atan2(self, other) }

    fn sinh(self) -> Self { Dual::sinh(self) }
    fn cosh(self) -> Self { Dual::cosh(self) }
    fn tanh(self) -> Self { Dual::tanh(self) }
    fn asinh(self) -> Self { Dual::asinh(self) }
    fn acosh(self) -> Self { Dual::acosh(self) }
    fn atanh(self) -> Self { Dual::atanh(self) }

    fn hypot(self, other: Self) -> Self { Dual::hypot(self, other) }

    fn max(self, other: Self) -> Self { Dual::max(self, other) }
    fn min(self, other: Self) -> Self { Dual::min(self, other) }

    fn abs_sub(self, other: Self) -> Self {
        if self.re > other.re { self - other } else { Self::zero() }
    }

    fn integer_decode(self) -> (u64, i16, i8) { self.re.integer_decode() }

    fn to_degrees(self) -> Self { Dual::to_degrees(self) }
    fn to_radians(self) -> Self { Dual::to_radians(self) }
}

// ──────────────────────────────────────────────
//  Pow
// ──────────────────────────────────────────────

impl<T: Scalar, const N: usize> Pow<Dual<T, N>> for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn pow(self, exponent: Self) -> Self {
        Dual::powf(self, exponent)
    }
}

impl<T: Scalar, const N: usize> Pow<T> for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn pow(self, exponent: T) -> Self {
        Dual::powf_scalar(self, exponent)
    }
}

macro_rules! impl_scalar_pow {
    ($f:ty) => {
        impl<const N: usize> Pow<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn pow(self, exponent: Dual<$f, N>) -> Dual<$f, N> {
                Dual::scalar_powf(self, exponent)
            }
        }
    };
}

impl_scalar_pow!(f32);
impl_scalar_pow!(f64);
