//! Forward-mode dual numbers with `N` tangent directions.
//!
//! [`Dual<T, N>`] carries a primal value and `N` directional derivatives.
//! The value type `T` is any [`Scalar`], including another `Dual`, so
//! `Dual<Dual<f64, N>, N>` propagates second derivatives and so on.
//!
//! Undefined or singular results are represented by IEEE special values,
//! never by panics or error returns. Use [`Dual::is_finite`] and friends to
//! detect them.

use std::fmt::{self, Display};
use std::num::FpCategory;

use num_traits::{Float as _, One, Zero};

use crate::scalar::Scalar;

/// Forward-mode dual number: a value with `N` tangent lanes.
///
/// `Dual { re, eps }` represents `re + Σ eps[k]·ε_k` where `ε_j·ε_k = 0`.
#[derive(Clone, Copy, Debug)]
pub struct Dual<T: Scalar, const N: usize> {
    /// Primal (real) value.
    pub re: T,
    /// Tangent (derivative) values, one per direction.
    pub eps: [T; N],
}

impl<T: Scalar, const N: usize> Default for Dual<T, N> {
    fn default() -> Self {
        Dual::constant(T::zero())
    }
}

impl<T: Scalar, const N: usize> Display for Dual<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.re)?;
        for (i, e) in self.eps.iter().enumerate() {
            write!(f, " + {}\u{03b5}{}", e, i)?;
        }
        Ok(())
    }
}

impl<T: Scalar, const N: usize> From<T> for Dual<T, N> {
    #[inline]
    fn from(val: T) -> Self {
        Dual::constant(val)
    }
}

impl<T: Scalar, const N: usize> Dual<T, N> {
    /// Create a new dual number.
    #[inline]
    pub fn new(re: T, eps: [T; N]) -> Self {
        Dual { re, eps }
    }

    /// Create a constant (zero derivatives in all directions).
    #[inline]
    pub fn constant(re: T) -> Self {
        Dual {
            re,
            eps: [T::zero(); N],
        }
    }

    /// Seed `re` as the independent variable for direction `index`.
    ///
    /// The tangent is the `index`-th standard basis vector. An `index >= N`
    /// yields a constant.
    #[inline]
    pub fn variable(re: T, index: usize) -> Self {
        Dual {
            re,
            eps: std::array::from_fn(|k| if k == index { T::one() } else { T::zero() }),
        }
    }

    /// Apply the chain rule: given `f(self.re)` and `f'(self.re)`, produce the dual result.
    #[inline(always)]
    fn chain(self, f_val: T, f_deriv: T) -> Self {
        Dual {
            re: f_val,
            eps: std::array::from_fn(|k| self.eps[k] * f_deriv),
        }
    }

    /// Two-argument chain rule with partials `dx` (w.r.t. `self`) and `dy` (w.r.t. `other`).
    #[inline(always)]
    fn chain2(self, other: Self, f_val: T, dx: T, dy: T) -> Self {
        Dual {
            re: f_val,
            eps: std::array::from_fn(|k| self.eps[k] * dx + other.eps[k] * dy),
        }
    }

    /// Integer-valued result: the tangent is identically zero.
    #[inline(always)]
    fn flat(f_val: T) -> Self {
        Dual::constant(f_val)
    }

    // -- Classification --

    /// True iff the value and every tangent entry are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.eps.iter().all(|&e| e.is_finite())
    }

    /// True iff the value and every tangent entry are IEEE-normal.
    ///
    /// Zero is not normal, so a constant (zero tangent) is never normal for `N > 0`.
    #[inline]
    pub fn is_normal(self) -> bool {
        self.re.is_normal() && self.eps.iter().all(|&e| e.is_normal())
    }

    /// True iff any component is infinite.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.re.is_infinite() || self.eps.iter().any(|&e| e.is_infinite())
    }

    /// True iff any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.eps.iter().any(|&e| e.is_nan())
    }

    /// `Nan` if any component is NaN, else `Infinite` if any is infinite,
    /// else the category of the value.
    #[inline]
    pub fn classify(self) -> FpCategory {
        if self.is_nan() {
            FpCategory::Nan
        } else if self.is_infinite() {
            FpCategory::Infinite
        } else {
            self.re.classify()
        }
    }

    // -- Powers --

    #[inline]
    pub fn recip(self) -> Self {
        let inv = T::one() / self.re;
        self.chain(inv, -inv * inv)
    }

    /// Square root. The tangent is non-finite at zero.
    #[inline]
    pub fn sqrt(self) -> Self {
        let s = self.re.sqrt();
        let two = T::one() + T::one();
        self.chain(s, T::one() / (two * s))
    }

    /// Cube root, defined with sign for negative values.
    #[inline]
    pub fn cbrt(self) -> Self {
        let c = self.re.cbrt();
        let three = T::lit(3.0);
        self.chain(c, T::one() / (three * c * c))
    }

    /// Integer power.
    ///
    /// `x^0` is the constant 1 for every `x`, including zero, so `powi(0)`
    /// has a zero tangent where `powf` at `0^0` reports a non-finite one.
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Dual::constant(T::one());
        }
        let val = self.re.powi(n);
        let deriv = T::lit(f64::from(n)) * self.re.powi(n.saturating_sub(1));
        self.chain(val, deriv)
    }

    /// `self^exponent` with both arguments differentiable.
    ///
    /// The closed form `e·b^(e-1)·db + b^e·ln(b)·de` breaks down on a zero or
    /// negative base, so those cases are branched explicitly:
    ///
    /// | base | exponent | value | tangent |
    /// |---|---|---|---|
    /// | 0 | > 1 | 0 | 0 |
    /// | 0 | 1 | 0 | tangent of base |
    /// | 0 | (0, 1) | 0 | non-finite |
    /// | 0 | ≤ 0 | non-finite or 1 | non-finite |
    /// | < 0 | integral | `b^e` | `e·b^(e-1)·db`, NaN wherever `de ≠ 0` |
    /// | < 0 | non-integral | NaN | NaN |
    ///
    /// Branch keys are the innermost primal values, so nested duals take the
    /// same branch at every level. Integrality is exact equality with
    /// `floor`, with no tolerance.
    pub fn powf(self, exponent: Self) -> Self {
        let zero = T::zero();
        let one = T::one();
        let b = self.re.value();
        let e = exponent.re.value();

        if b == <T::Float as Zero>::zero() && e >= <T::Float as One>::one() {
            // The exponent direction contributes b^e·ln(b) -> 0.
            let val = self.re.powf(exponent.re);
            let dx = exponent.re * self.re.powf(exponent.re - one);
            return self.chain(val, dx);
        }

        if b < <T::Float as Zero>::zero() && e == e.floor() {
            // Any change in the exponent leaves the reals.
            let val = self.re.powf(exponent.re);
            let dx = exponent.re * self.re.powf(exponent.re - one);
            return Dual {
                re: val,
                eps: std::array::from_fn(|k| {
                    if exponent.eps[k] != zero {
                        T::nan()
                    } else {
                        self.eps[k] * dx
                    }
                }),
            };
        }

        // Remaining zero-base cases let ln(0) and 0^negative produce the
        // non-finite tangents.
        let val = self.re.powf(exponent.re);
        let dx = exponent.re * self.re.powf(exponent.re - one);
        let dy = val * self.re.ln();
        self.chain2(exponent, val, dx, dy)
    }

    /// `self^exponent` with a constant exponent.
    #[inline]
    pub fn powf_scalar(self, exponent: T) -> Self {
        let val = self.re.powf(exponent);
        let deriv = exponent * self.re.powf(exponent - T::one());
        self.chain(val, deriv)
    }

    /// `base^exponent` with a constant base.
    ///
    /// A zero base with a positive exponent is exactly zero. A negative base
    /// with an integral exponent keeps its real value, with NaN in each
    /// direction the exponent moves in.
    pub fn scalar_powf(base: T, exponent: Self) -> Self {
        let zero = T::zero();
        let b = base.value();
        let e = exponent.re.value();

        if b == <T::Float as Zero>::zero() && e > <T::Float as Zero>::zero() {
            return Dual::constant(base.powf(exponent.re));
        }

        if b < <T::Float as Zero>::zero() && e == e.floor() {
            return Dual {
                re: base.powf(exponent.re),
                eps: std::array::from_fn(|k| {
                    if exponent.eps[k] != zero {
                        T::nan()
                    } else {
                        zero
                    }
                }),
            };
        }

        let val = base.powf(exponent.re);
        exponent.chain(val, val * base.ln())
    }

    // -- Exp/Log --

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.re.exp();
        self.chain(e, e)
    }

    #[inline]
    pub fn exp2(self) -> Self {
        let e = self.re.exp2();
        self.chain(e, e * T::LN_2())
    }

    #[inline]
    pub fn exp_m1(self) -> Self {
        self.chain(self.re.exp_m1(), self.re.exp())
    }

    #[inline]
    pub fn ln(self) -> Self {
        self.chain(self.re.ln(), T::one() / self.re)
    }

    #[inline]
    pub fn log2(self) -> Self {
        self.chain(self.re.log2(), T::one() / (self.re * T::LN_2()))
    }

    #[inline]
    pub fn log10(self) -> Self {
        self.chain(self.re.log10(), T::one() / (self.re * T::LN_10()))
    }

    #[inline]
    pub fn ln_1p(self) -> Self {
        self.chain(self.re.ln_1p(), T::one() / (T::one() + self.re))
    }

    #[inline]
    pub fn log(self, base: Self) -> Self {
        self.ln() / base.ln()
    }

    // -- Trig --

    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.re.sin(), self.re.cos())
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.re.cos(), -self.re.sin())
    }

    #[inline]
    pub fn tan(self) -> Self {
        let t = self.re.tan();
        self.chain(t, T::one() + t * t)
    }

    #[inline]
    pub fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.re.sin_cos();
        (self.chain(s, c), self.chain(c, -s))
    }

    #[inline]
    pub fn asin(self) -> Self {
        self.chain(
            self.re.asin(),
            T::one() / (T::one() - self.re * self.re).sqrt(),
        )
    }

    #[inline]
    pub fn acos(self) -> Self {
        self.chain(
            self.re.acos(),
            -T::one() / (T::one() - self.re * self.re).sqrt(),
        )
    }

    #[inline]
    pub fn atan(self) -> Self {
        self.chain(self.re.atan(), T::one() / (T::one() + self.re * self.re))
    }

    /// Four-quadrant arctangent of `self / other` (`self` is `y`, `other` is `x`).
    #[inline]
    pub fn atan2(self, other: Self) -> Self {
        // x/(x²+y²) as (x/h)/h so large arguments don't overflow.
        let h = self.re.hypot(other.re);
        self.chain2(
            other,
            self.re.atan2(other.re),
            other.re / h / h,
            -(self.re / h) / h,
        )
    }

    // -- Hyperbolic --

    #[inline]
    pub fn sinh(self) -> Self {
        self.chain(self.re.sinh(), self.re.cosh())
    }

    #[inline]
    pub fn cosh(self) -> Self {
        self.chain(self.re.cosh(), self.re.sinh())
    }

    #[inline]
    pub fn tanh(self) -> Self {
        let t = self.re.tanh();
        self.chain(t, T::one() - t * t)
    }

    #[inline]
    pub fn asinh(self) -> Self {
        self.chain(
            self.re.asinh(),
            T::one() / (self.re * self.re + T::one()).sqrt(),
        )
    }

    #[inline]
    pub fn acosh(self) -> Self {
        self.chain(
            self.re.acosh(),
            T::one() / (self.re * self.re - T::one()).sqrt(),
        )
    }

    #[inline]
    pub fn atanh(self) -> Self {
        self.chain(self.re.atanh(), T::one() / (T::one() - self.re * self.re))
    }

    // -- Special functions --

    /// Error function: `erf'(a) = 2/√π · exp(-a²)`.
    #[inline]
    pub fn erf(self) -> Self {
        let deriv = T::FRAC_2_SQRT_PI() * (-self.re * self.re).exp();
        self.chain(self.re.erf(), deriv)
    }

    #[inline]
    pub fn erfc(self) -> Self {
        let deriv = -T::FRAC_2_SQRT_PI() * (-self.re * self.re).exp();
        self.chain(self.re.erfc(), deriv)
    }

    /// Bessel `J0`, with `J0' = -J1`.
    #[inline]
    pub fn bessel_j0(self) -> Self {
        self.chain(self.re.bessel_j0(), -self.re.bessel_j1())
    }

    /// Bessel `J1`, with `J1' = (J0 - J2) / 2`.
    #[inline]
    pub fn bessel_j1(self) -> Self {
        let half = T::lit(0.5);
        self.chain(
            self.re.bessel_j1(),
            half * (self.re.bessel_j0() - self.re.bessel_jn(2)),
        )
    }

    /// Bessel `Jn`, with `Jn' = (J(n-1) - J(n+1)) / 2`.
    #[inline]
    pub fn bessel_jn(self, n: i32) -> Self {
        let half = T::lit(0.5);
        self.chain(
            self.re.bessel_jn(n),
            half * (self.re.bessel_jn(n.saturating_sub(1)) - self.re.bessel_jn(n.saturating_add(1))),
        )
    }

    // -- Misc --

    /// Absolute value; the tangent is `sign(a)·v`, zero at `a == 0`.
    #[inline]
    pub fn abs(self) -> Self {
        let zero = T::zero();
        let sign = if self.re > zero {
            T::one()
        } else if self.re < zero {
            -T::one()
        } else {
            zero
        };
        self.chain(self.re.abs(), sign)
    }

    #[inline]
    pub fn signum(self) -> Self {
        Dual::flat(self.re.signum())
    }

    #[inline]
    pub fn floor(self) -> Self {
        Dual::flat(self.re.floor())
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Dual::flat(self.re.ceil())
    }

    #[inline]
    pub fn round(self) -> Self {
        Dual::flat(self.re.round())
    }

    #[inline]
    pub fn trunc(self) -> Self {
        Dual::flat(self.re.trunc())
    }

    #[inline]
    pub fn fract(self) -> Self {
        Dual {
            re: self.re.fract(),
            eps: self.eps,
        }
    }

    #[inline]
    pub fn mul_add(self, a: Self, b: Self) -> Self {
        // d(x*a + b) = a*dx + x*da + db
        Dual {
            re: self.re.mul_add(a.re, b.re),
            eps: std::array::from_fn(|k| self.eps[k] * a.re + self.re * a.eps[k] + b.eps[k]),
        }
    }

    /// `sqrt(self² + other²)` without intermediate overflow or underflow.
    ///
    /// The value comes from the leaf `hypot`, which rescales internally. The
    /// partials `x/h` and `y/h` are bounded by one, so `hypot(x, 0)` returns
    /// `x` (value and tangent) even at `f64::MIN_POSITIVE` or `f64::MAX`.
    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        let h = self.re.hypot(other.re);
        self.chain2(other, h, self.re / h, other.re / h)
    }

    /// Select the operand with the larger value, unchanged.
    ///
    /// Ties keep `self`; a NaN value loses to a non-NaN operand. Only the
    /// innermost value decides, never the tangents.
    #[inline]
    pub fn fmax(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.value().is_nan() || self.re < other.re {
            other
        } else {
            self
        }
    }

    /// Select the operand with the smaller value, unchanged.
    ///
    /// Ties keep `self`; a NaN value loses to a non-NaN operand.
    #[inline]
    pub fn fmin(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        if self.value().is_nan() || other.re < self.re {
            other
        } else {
            self
        }
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.fmax(other)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.fmin(other)
    }

    #[inline]
    pub fn to_degrees(self) -> Self {
        let factor = T::lit(180.0) / T::PI();
        self.chain(self.re.to_degrees(), factor)
    }

    #[inline]
    pub fn to_radians(self) -> Self {
        let factor = T::PI() / T::lit(180.0);
        self.chain(self.re.to_radians(), factor)
    }
}
