//! Forward-mode automatic differentiation with const-generic tangents.
//!
//! [`Dual<T, N>`] pairs a value with `N` directional derivatives and can be
//! dropped into generic numeric code in place of `f64`. Because `Dual<T, N>`
//! is itself a [`Scalar`], duals nest: `Dual<Dual<f64, 1>, 1>` carries second
//! derivatives.
//!
//! ```
//! use fwdiff::Dual64;
//!
//! let x = Dual64::<2>::variable(3.0, 0);
//! let y = Dual64::<2>::variable(4.0, 1);
//! let r = x.hypot(y);
//! assert_eq!(r.re, 5.0);
//! assert!((r.eps[0] - 0.6).abs() < 1e-15);
//! assert!((r.eps[1] - 0.8).abs() < 1e-15);
//! ```

pub mod api;
pub mod dual;
pub mod error;
pub mod float;
pub mod scalar;
mod traits;

#[cfg(feature = "nalgebra")]
pub mod nalgebra_support;
#[cfg(feature = "ndarray")]
pub mod ndarray_support;

pub use api::{derivative, gradient, jacobian, jacobian_chunked, jvp, seed};
pub use dual::Dual;
pub use error::FwdiffError;
pub use float::Float;
pub use scalar::Scalar;

/// Dual numbers over `f64` with `N` tangent directions.
pub type Dual64<const N: usize> = Dual<f64, N>;
/// Dual numbers over `f32` with `N` tangent directions.
pub type Dual32<const N: usize> = Dual<f32, N>;
