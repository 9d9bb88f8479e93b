use std::cell::Cell;

use approx::assert_relative_eq;
use fwdiff::{derivative, gradient, jacobian, jacobian_chunked, jvp, seed, Dual, FwdiffError};

fn rosenbrock<T: fwdiff::Scalar>(x: &[T]) -> T {
    let one = T::one();
    let hundred = T::lit(100.0);
    x.windows(2).fold(T::zero(), |acc, w| {
        let a = one - w[0];
        let b = w[1] - w[0] * w[0];
        acc + a * a + hundred * b * b
    })
}

#[test]
fn seed_places_unit_tangents() {
    let s = seed([1.0, 2.0, 3.0]);
    for (i, d) in s.iter().enumerate() {
        assert_eq!(d.re, (i + 1) as f64);
        for k in 0..3 {
            assert_eq!(d.eps[k], if k == i { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn derivative_of_sin_squared() {
    let (v, d) = derivative(|x| x.sin() * x.sin(), 0.8_f64);
    assert_relative_eq!(v, 0.8_f64.sin().powi(2), max_relative = 1e-14);
    assert_relative_eq!(d, (2.0 * 0.8_f64).sin(), max_relative = 1e-14);
}

#[test]
fn gradient_rosenbrock() {
    let (v, g) = gradient(|x: &[Dual<f64, 2>; 2]| rosenbrock(x), [1.0, 2.0]);
    assert_relative_eq!(v, 100.0, max_relative = 1e-14);
    assert!((g[0] - (-400.0)).abs() < 1e-10, "g[0]={}", g[0]);
    assert!((g[1] - 200.0).abs() < 1e-10, "g[1]={}", g[1]);
}

#[test]
fn gradient_at_minimum_is_zero() {
    let (v, g) = gradient(|x: &[Dual<f64, 3>; 3]| rosenbrock(x), [1.0, 1.0, 1.0]);
    assert_eq!(v, 0.0);
    assert_eq!(g, [0.0, 0.0, 0.0]);
}

#[test]
fn jacobian_of_linear_map_is_the_matrix() {
    let a = [[1.0, -2.0, 0.5], [3.0, 0.0, 4.0]];
    let (vals, jac) = jacobian(
        |x: &[Dual<f64, 3>; 3]| -> [Dual<f64, 3>; 2] {
            std::array::from_fn(|i| x[0] * a[i][0] + x[1] * a[i][1] + x[2] * a[i][2])
        },
        [1.0, 1.0, 2.0],
    );
    assert_eq!(vals, [0.0, 11.0]);
    assert_eq!(jac, a);
}

#[test]
fn jvp_matches_jacobian_times_direction() {
    let f = |x: &[Dual<f64, 1>]| vec![x[0] * x[1], x[0].exp() + x[1]];
    let (vals, tangents) = jvp(f, &[2.0, 3.0], &[1.0, -1.0]).unwrap();
    assert_relative_eq!(vals[0], 6.0, max_relative = 1e-14);
    assert_relative_eq!(vals[1], 2.0_f64.exp() + 3.0, max_relative = 1e-14);
    // J = [[3, 2], [e², 1]]
    assert_relative_eq!(tangents[0], 3.0 - 2.0, max_relative = 1e-14);
    assert_relative_eq!(tangents[1], 2.0_f64.exp() - 1.0, max_relative = 1e-14);
}

#[test]
fn jvp_rejects_mismatched_direction() {
    let err = jvp(|x: &[Dual<f64, 1>]| x.to_vec(), &[1.0, 2.0], &[1.0]).unwrap_err();
    assert_eq!(
        err,
        FwdiffError::DimensionMismatch {
            expected: 2,
            found: 1
        }
    );
}

#[test]
fn chunked_jacobian_matches_single_pass() {
    let x = [0.3, -1.1, 2.0, 0.7, 1.5];
    let f = |v: &[Dual<f64, 5>; 5]| -> [Dual<f64, 5>; 2] {
        [rosenbrock(v), v[0].sin() * v[4] + v[2] / v[3]]
    };
    let (vals_full, jac_full) = jacobian(f, x);

    let calls = Cell::new(0);
    let (vals, jac) = jacobian_chunked::<f64, 2>(
        |v| {
            calls.set(calls.get() + 1);
            vec![rosenbrock(v), v[0].sin() * v[4] + v[2] / v[3]]
        },
        &x,
    )
    .unwrap();

    assert_eq!(calls.get(), 3, "5 inputs at width 2 take 3 passes");
    assert_eq!(vals.len(), 2);
    assert_eq!(jac.len(), 2);
    for i in 0..2 {
        assert_relative_eq!(vals[i], vals_full[i], max_relative = 1e-14);
        assert_eq!(jac[i].len(), 5);
        for j in 0..5 {
            assert!(
                (jac[i][j] - jac_full[i][j]).abs() < 1e-12,
                "J[{i}][{j}]: chunked {} vs full {}",
                jac[i][j],
                jac_full[i][j]
            );
        }
    }
}

#[test]
fn chunked_jacobian_with_no_inputs_still_evaluates() {
    let calls = Cell::new(0);
    let (vals, jac) = jacobian_chunked::<f64, 4>(
        |_| {
            calls.set(calls.get() + 1);
            vec![Dual::constant(7.0)]
        },
        &[],
    )
    .unwrap();
    assert_eq!(calls.get(), 1);
    assert_eq!(vals, vec![7.0]);
    assert_eq!(jac, vec![Vec::<f64>::new()]);
}

#[test]
fn chunked_jacobian_detects_output_length_change() {
    let calls = Cell::new(0);
    let err = jacobian_chunked::<f64, 1>(
        |v| {
            calls.set(calls.get() + 1);
            if calls.get() == 1 {
                v.to_vec()
            } else {
                v[..1].to_vec()
            }
        },
        &[1.0, 2.0, 3.0],
    )
    .unwrap_err();
    assert_eq!(err, FwdiffError::OutputLengthChanged { first: 3, later: 1 });
}

#[test]
fn chunked_jacobian_rejects_zero_width() {
    let err = jacobian_chunked::<f64, 0>(|v| v.to_vec(), &[1.0]).unwrap_err();
    assert_eq!(err, FwdiffError::ZeroTangentWidth);
}

#[test]
fn error_messages() {
    let e = FwdiffError::DimensionMismatch {
        expected: 3,
        found: 2,
    };
    assert_eq!(e.to_string(), "direction has length 2 but the input has length 3");
    let e = FwdiffError::OutputLengthChanged { first: 4, later: 1 };
    assert_eq!(
        e.to_string(),
        "function returned 1 outputs after returning 4 on the first pass"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(FwdiffError::ZeroTangentWidth);
    assert!(boxed.to_string().contains("zero-width"));
}
