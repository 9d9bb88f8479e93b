//! Forward-mode drivers.
//!
//! The dual type never seeds itself; these functions choose which inputs are
//! perturbed, evaluate the user function, and read the tangents back out.

use tracing::{debug, warn};

use crate::dual::Dual;
use crate::error::FwdiffError;
use crate::scalar::Scalar;

/// Seed every entry of `x` as an independent variable.
///
/// Entry `i` gets the `i`-th standard basis vector as its tangent.
pub fn seed<T: Scalar, const N: usize>(x: [T; N]) -> [Dual<T, N>; N] {
    std::array::from_fn(|i| Dual::variable(x[i], i))
}

/// Value and first derivative of a univariate function.
///
/// ```
/// let (v, d) = fwdiff::derivative(|x| x * x * x, 2.0_f64);
/// assert_eq!(v, 8.0);
/// assert_eq!(d, 12.0);
/// ```
pub fn derivative<T: Scalar>(f: impl Fn(Dual<T, 1>) -> Dual<T, 1>, x: T) -> (T, T) {
    let out = f(Dual::variable(x, 0));
    (out.re, out.eps[0])
}

/// Value and gradient of `f : R^N → R` in a single pass.
pub fn gradient<T: Scalar, const N: usize>(
    f: impl Fn(&[Dual<T, N>; N]) -> Dual<T, N>,
    x: [T; N],
) -> (T, [T; N]) {
    let out = f(&seed(x));
    (out.re, out.eps)
}

/// Value and Jacobian of `f : R^N → R^M` in a single pass.
///
/// Returns `(f(x), J)` where `J[i][j] = ∂f_i/∂x_j`.
pub fn jacobian<T: Scalar, const N: usize, const M: usize>(
    f: impl Fn(&[Dual<T, N>; N]) -> [Dual<T, N>; M],
    x: [T; N],
) -> ([T; M], [[T; N]; M]) {
    let out = f(&seed(x));
    (out.map(|d| d.re), out.map(|d| d.eps))
}

/// Jacobian-vector product: `(f(x), J·v)`.
///
/// Evaluates `f` once with every input carrying its component of `v` as the
/// tangent.
pub fn jvp<T: Scalar>(
    f: impl Fn(&[Dual<T, 1>]) -> Vec<Dual<T, 1>>,
    x: &[T],
    v: &[T],
) -> Result<(Vec<T>, Vec<T>), FwdiffError> {
    if x.len() != v.len() {
        return Err(FwdiffError::DimensionMismatch {
            expected: x.len(),
            found: v.len(),
        });
    }
    let inputs: Vec<Dual<T, 1>> = x
        .iter()
        .zip(v.iter())
        .map(|(&xi, &vi)| Dual::new(xi, [vi]))
        .collect();
    let outputs = f(&inputs);
    let values = outputs.iter().map(|d| d.re).collect();
    let tangents = outputs.iter().map(|d| d.eps[0]).collect();
    Ok((values, tangents))
}

/// Jacobian of `f : R^n → R^m` with `N` input directions seeded per pass.
///
/// Input `j` is seeded in pass `j / N`, lane `j % N`, so the function is
/// evaluated `ceil(n / N)` times (once if `n == 0`). Returns `(f(x), J)`
/// where `J[i][j] = ∂f_i/∂x_j`.
pub fn jacobian_chunked<T: Scalar, const N: usize>(
    f: impl Fn(&[Dual<T, N>]) -> Vec<Dual<T, N>>,
    x: &[T],
) -> Result<(Vec<T>, Vec<Vec<T>>), FwdiffError> {
    let n = x.len();
    if N == 0 && n > 0 {
        return Err(FwdiffError::ZeroTangentWidth);
    }
    let passes = if n == 0 { 1 } else { n.div_ceil(N) };
    debug!(inputs = n, width = N, passes, "chunked jacobian");

    let mut first_len: Option<usize> = None;
    let mut values = Vec::new();
    let mut jac: Vec<Vec<T>> = Vec::new();

    for pass in 0..passes {
        let start = pass * N;
        let inputs: Vec<Dual<T, N>> = x
            .iter()
            .enumerate()
            .map(|(j, &xj)| {
                if j >= start && j - start < N {
                    Dual::variable(xj, j - start)
                } else {
                    Dual::constant(xj)
                }
            })
            .collect();
        let outputs = f(&inputs);

        match first_len {
            None => {
                first_len = Some(outputs.len());
                values = outputs.iter().map(|d| d.re).collect();
                jac = vec![vec![T::zero(); n]; outputs.len()];
            }
            Some(first) if first != outputs.len() => {
                return Err(FwdiffError::OutputLengthChanged {
                    first,
                    later: outputs.len(),
                });
            }
            Some(_) => {}
        }

        for (row, out) in jac.iter_mut().zip(outputs.iter()) {
            for (lane, &d) in out.eps.iter().enumerate() {
                if let Some(slot) = row.get_mut(start + lane) {
                    *slot = d;
                }
            }
        }
        debug!(pass, start, outputs = outputs.len(), "pass complete");
    }

    let non_finite = jac.iter().flatten().filter(|d| !d.is_finite()).count();
    if non_finite > 0 {
        warn!(non_finite, "jacobian contains non-finite entries");
    }

    Ok((values, jac))
}
