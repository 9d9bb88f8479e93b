use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::dual::Dual;
use crate::scalar::Scalar;

// ──────────────────────────────────────────────
//  Dual<T, N> ⊕ Dual<T, N>
// ──────────────────────────────────────────────

impl<T: Scalar, const N: usize> Add for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dual {
            re: self.re + rhs.re,
            eps: std::array::from_fn(|k| self.eps[k] + rhs.eps[k]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Dual {
            re: self.re - rhs.re,
            eps: std::array::from_fn(|k| self.eps[k] - rhs.eps[k]),
        }
    }
}

impl<T: Scalar, const N: usize> Mul for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Dual {
            re: self.re * rhs.re,
            eps: std::array::from_fn(|k| rhs.re * self.eps[k] + self.re * rhs.eps[k]),
        }
    }
}

impl<T: Scalar, const N: usize> Div for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        // (v1*a2 - a1*v2)/a2² rewritten through the quotient.
        let inv = T::one() / rhs.re;
        let q = self.re * inv;
        Dual {
            re: q,
            eps: std::array::from_fn(|k| (self.eps[k] - q * rhs.eps[k]) * inv),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Dual {
            re: -self.re,
            eps: self.eps.map(|e| -e),
        }
    }
}

impl<T: Scalar, const N: usize> Rem for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        // a1 % a2 = a1 - trunc(a1/a2)*a2
        let q = (self.re / rhs.re).trunc();
        Dual {
            re: self.re % rhs.re,
            eps: std::array::from_fn(|k| self.eps[k] - q * rhs.eps[k]),
        }
    }
}

// ──────────────────────────────────────────────
//  Dual<T, N> ⊕ T
// ──────────────────────────────────────────────

impl<T: Scalar, const N: usize> Add<T> for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: T) -> Self {
        Dual {
            re: self.re + rhs,
            eps: self.eps,
        }
    }
}

impl<T: Scalar, const N: usize> Sub<T> for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: T) -> Self {
        Dual {
            re: self.re - rhs,
            eps: self.eps,
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Dual {
            re: self.re * rhs,
            eps: self.eps.map(|e| e * rhs),
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        let inv = T::one() / rhs;
        Dual {
            re: self.re * inv,
            eps: self.eps.map(|e| e * inv),
        }
    }
}

impl<T: Scalar, const N: usize> Rem<T> for Dual<T, N> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: T) -> Self {
        Dual {
            re: self.re % rhs,
            eps: self.eps,
        }
    }
}

// ──────────────────────────────────────────────
//  Compound assignment
// ──────────────────────────────────────────────

macro_rules! impl_assign_ops {
    ($($trait:ident, $method:ident, $op:tt;)*) => {
        $(
            impl<T: Scalar, const N: usize> $trait for Dual<T, N> {
                #[inline]
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl<T: Scalar, const N: usize> $trait<T> for Dual<T, N> {
                #[inline]
                fn $method(&mut self, rhs: T) {
                    *self = *self $op rhs;
                }
            }
        )*
    };
}

impl_assign_ops! {
    AddAssign, add_assign, +;
    SubAssign, sub_assign, -;
    MulAssign, mul_assign, *;
    DivAssign, div_assign, /;
    RemAssign, rem_assign, %;
}

// Primitive ⊕ Dual. The orphan rule rules out a blanket `T ⊕ Dual<T, N>`,
// so the leaf types get their own impls.
macro_rules! impl_dual_scalar_ops {
    ($f:ty) => {
        impl<const N: usize> Add<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn add(self, rhs: Dual<$f, N>) -> Dual<$f, N> {
                rhs + self
            }
        }

        impl<const N: usize> Sub<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn sub(self, rhs: Dual<$f, N>) -> Dual<$f, N> {
                Dual {
                    re: self - rhs.re,
                    eps: rhs.eps.map(|e| -e),
                }
            }
        }

        impl<const N: usize> Mul<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn mul(self, rhs: Dual<$f, N>) -> Dual<$f, N> {
                rhs * self
            }
        }

        impl<const N: usize> Div<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn div(self, rhs: Dual<$f, N>) -> Dual<$f, N> {
                let q = self / rhs.re;
                let scale = -q / rhs.re;
                Dual {
                    re: q,
                    eps: rhs.eps.map(|e| e * scale),
                }
            }
        }

        impl<const N: usize> Rem<Dual<$f, N>> for $f {
            type Output = Dual<$f, N>;
            #[inline]
            fn rem(self, rhs: Dual<$f, N>) -> Dual<$f, N> {
                Dual::constant(self) % rhs
            }
        }
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);

// ──────────────────────────────────────────────
//  Comparison
// ──────────────────────────────────────────────

/// Exact componentwise equality of value and every tangent entry.
impl<T: Scalar, const N: usize> PartialEq for Dual<T, N> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.eps == other.eps
    }
}

/// Ordering by value only.
impl<T: Scalar, const N: usize> PartialOrd for Dual<T, N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.re.partial_cmp(&other.re)
    }
}

// ──────────────────────────────────────────────
//  Reductions
// ──────────────────────────────────────────────

impl<T: Scalar, const N: usize> Sum for Dual<T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::constant(T::zero()), |acc, x| acc + x)
    }
}

impl<'a, T: Scalar, const N: usize> Sum<&'a Dual<T, N>> for Dual<T, N> {
    fn sum<I: Iterator<Item = &'a Dual<T, N>>>(iter: I) -> Self {
        iter.fold(Dual::constant(T::zero()), |acc, x| acc + *x)
    }
}

impl<T: Scalar, const N: usize> Product for Dual<T, N> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Dual::constant(T::one()), |acc, x| acc * x)
    }
}

impl<'a, T: Scalar, const N: usize> Product<&'a Dual<T, N>> for Dual<T, N> {
    fn product<I: Iterator<Item = &'a Dual<T, N>>>(iter: I) -> Self {
        iter.fold(Dual::constant(T::one()), |acc, x| acc * *x)
    }
}
