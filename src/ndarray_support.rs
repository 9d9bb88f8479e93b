//! ndarray adapters for dual-number arrays.
//!
//! Mixed element-wise arithmetic (`Array<Dual> * Array<T>`, `Array<Dual> + T`)
//! works directly through the `Dual ⊕ T` operators; these helpers cover
//! promotion, extraction, and the Jacobian driver.

use ndarray::{Array, Array1, Array2, ArrayBase, Data, Dimension, ScalarOperand};

use crate::api::jacobian_chunked;
use crate::dual::Dual;
use crate::error::FwdiffError;
use crate::scalar::Scalar;

/// Lets a single dual scale or shift a whole dual array: `&a * d`.
impl<T: Scalar, const N: usize> ScalarOperand for Dual<T, N> {}

/// Lift a plain array to constant duals.
pub fn promote<T, const N: usize, S, D>(a: &ArrayBase<S, D>) -> Array<Dual<T, N>, D>
where
    T: Scalar,
    S: Data<Elem = T>,
    D: Dimension,
{
    a.mapv(Dual::constant)
}

/// The primal values of a dual array.
pub fn values<T, const N: usize, S, D>(a: &ArrayBase<S, D>) -> Array<T, D>
where
    T: Scalar,
    S: Data<Elem = Dual<T, N>>,
    D: Dimension,
{
    a.mapv(|d| d.re)
}

/// The `k`-th tangent lane of a dual array; zero if `k >= N`.
pub fn tangent<T, const N: usize, S, D>(a: &ArrayBase<S, D>, k: usize) -> Array<T, D>
where
    T: Scalar,
    S: Data<Elem = Dual<T, N>>,
    D: Dimension,
{
    a.mapv(|d| d.eps.get(k).copied().unwrap_or_else(T::zero))
}

/// Jacobian of `f : R^n → R^m`, seeding `N` inputs per evaluation.
///
/// Returns `(f(x), J)` with `J[[i, j]] = ∂f_i/∂x_j`.
pub fn jacobian_ndarray<T: Scalar, const N: usize>(
    f: impl Fn(&Array1<Dual<T, N>>) -> Array1<Dual<T, N>>,
    x: &Array1<T>,
) -> Result<(Array1<T>, Array2<T>), FwdiffError> {
    let xs = x.to_vec();
    let (vals, jac) = jacobian_chunked::<T, N>(|d| f(&Array1::from(d.to_vec())).to_vec(), &xs)?;
    let m = vals.len();
    let n = xs.len();
    let jac = Array2::from_shape_fn((m, n), |(i, j)| jac[i][j]);
    Ok((Array1::from(vals), jac))
}
