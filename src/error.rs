use std::fmt;

/// Shape errors reported by the slice-based drivers in [`api`](crate::api).
///
/// Numerical domain errors never show up here; they surface as NaN or
/// infinite components of the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FwdiffError {
    /// The direction vector does not match the input length.
    DimensionMismatch {
        /// Length of the input point.
        expected: usize,
        /// Length of the direction supplied.
        found: usize,
    },
    /// The function returned a different number of outputs on a later pass.
    OutputLengthChanged {
        /// Output count of the first pass.
        first: usize,
        /// Output count of the offending pass.
        later: usize,
    },
    /// A chunked driver was asked to seed a non-empty input with `N = 0`.
    ZeroTangentWidth,
}

impl fmt::Display for FwdiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FwdiffError::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "direction has length {} but the input has length {}",
                    found, expected
                )
            }
            FwdiffError::OutputLengthChanged { first, later } => {
                write!(
                    f,
                    "function returned {} outputs after returning {} on the first pass",
                    later, first
                )
            }
            FwdiffError::ZeroTangentWidth => {
                write!(f, "cannot seed input directions with a zero-width tangent")
            }
        }
    }
}

impl std::error::Error for FwdiffError {}
