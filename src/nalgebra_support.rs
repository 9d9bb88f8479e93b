//! nalgebra adapters for dual-number matrices.
//!
//! Promotion of plain matrices, mixed dual×plain products, value and tangent
//! extraction, and a one-pass Jacobian over statically sized vectors.

use nalgebra::allocator::Allocator;
use nalgebra::{DMatrix, DVector, DefaultAllocator, Dim, Matrix, OMatrix, SVector, Storage};
use tracing::debug;

use crate::dual::Dual;
use crate::scalar::Scalar;

/// Lift a plain matrix to constant duals.
///
/// Equivalent to `m.cast::<Dual<T, N>>()` without going through `SubsetOf`.
pub fn promote<T, const N: usize, R, C, S>(m: &Matrix<T, R, C, S>) -> OMatrix<Dual<T, N>, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: Storage<T, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    m.map(Dual::constant)
}

/// The primal values of a dual matrix.
pub fn values<T, const N: usize, R, C, S>(m: &Matrix<Dual<T, N>, R, C, S>) -> OMatrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: Storage<Dual<T, N>, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    m.map(|d| d.re)
}

/// The `k`-th tangent lane of a dual matrix; zero if `k >= N`.
pub fn tangent<T, const N: usize, R, C, S>(
    m: &Matrix<Dual<T, N>, R, C, S>,
    k: usize,
) -> OMatrix<T, R, C>
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: Storage<Dual<T, N>, R, C>,
    DefaultAllocator: Allocator<R, C>,
{
    m.map(|d| d.eps.get(k).copied().unwrap_or_else(T::zero))
}

/// `a * b` for a dual matrix `a` and a plain matrix `b`.
///
/// Equal to `a * promote(b)` but skips the zero-tangent products.
///
/// # Panics
///
/// Panics if `a.ncols() != b.nrows()`.
pub fn mul_plain<T, const N: usize, R1, C1, R2, C2, SA, SB>(
    a: &Matrix<Dual<T, N>, R1, C1, SA>,
    b: &Matrix<T, R2, C2, SB>,
) -> OMatrix<Dual<T, N>, R1, C2>
where
    T: Scalar,
    R1: Dim,
    C1: Dim,
    R2: Dim,
    C2: Dim,
    SA: Storage<Dual<T, N>, R1, C1>,
    SB: Storage<T, R2, C2>,
    DefaultAllocator: Allocator<R1, C2>,
{
    assert_eq!(
        a.ncols(),
        b.nrows(),
        "inner dimensions must agree for a matrix product"
    );
    let (rows, _) = a.shape_generic();
    let (_, cols) = b.shape_generic();
    let inner = a.ncols();
    OMatrix::from_fn_generic(rows, cols, |i, j| {
        (0..inner).map(|k| a[(i, k)] * b[(k, j)]).sum()
    })
}

/// Value and Jacobian of `f : R^N → R^m` in a single pass.
///
/// Returns `(f(x), J)` with `J[(i, j)] = ∂f_i/∂x_j`.
pub fn jacobian_nalgebra<T: Scalar, const N: usize>(
    f: impl Fn(&SVector<Dual<T, N>, N>) -> DVector<Dual<T, N>>,
    x: &SVector<T, N>,
) -> (DVector<T>, DMatrix<T>) {
    let seeded = SVector::<Dual<T, N>, N>::from_fn(|i, _| Dual::variable(x[i], i));
    let out = f(&seeded);
    debug!(inputs = N, outputs = out.len(), "nalgebra jacobian");
    let values = out.map(|d| d.re);
    let jac = DMatrix::from_fn(out.len(), N, |i, j| out[i].eps[j]);
    (values, jac)
}
