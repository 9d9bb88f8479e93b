#![allow(dead_code)]

use approx::assert_relative_eq;
use fwdiff::Dual;

pub type J = Dual<f64, 2>;

/// Identity tolerance for closed-form comparisons.
pub const TOL: f64 = 1e-12;

const STEP: f64 = 1e-8;
const NUMERICAL_TOL: f64 = 1e-6;

pub fn jet(a: f64, v0: f64, v1: f64) -> J {
    Dual::new(a, [v0, v1])
}

pub fn assert_close(x: f64, y: f64, tol: f64) {
    assert_relative_eq!(x, y, epsilon = tol, max_relative = tol);
}

pub fn assert_jets_close(x: J, y: J) {
    assert_close(x.re, y.re, TOL);
    assert_close(x.eps[0], y.eps[0], TOL);
    assert_close(x.eps[1], y.eps[1], TOL);
}

/// Compare the exact derivative with a central difference of the value path.
pub fn numerical_check(name: &str, f: impl Fn(J) -> J, x: f64) {
    let exact = f(jet(x, 1.0, 0.0)).eps[0];
    let estimated = (f(J::constant(x + STEP)).re - f(J::constant(x - STEP)).re) / (2.0 * STEP);
    assert!(
        approx::relative_eq!(exact, estimated, epsilon = NUMERICAL_TOL, max_relative = NUMERICAL_TOL),
        "{name}({x}): exact {exact}, estimated {estimated}"
    );
}

/// Two-argument variant; also checks that seeding lanes are interchangeable.
pub fn numerical_check2(name: &str, f: impl Fn(J, J) -> J, x: f64, y: f64) {
    let exact = f(jet(x, 1.0, 0.0), jet(y, 0.0, 1.0));
    let (dx, dy) = (exact.eps[0], exact.eps[1]);

    assert_eq!(dx, f(jet(x, 1.0, 0.0), jet(y, 0.0, 0.0)).eps[0]);
    assert_eq!(dx, f(jet(x, 0.0, 1.0), jet(y, 0.0, 0.0)).eps[1]);
    assert_eq!(dy, f(jet(x, 0.0, 0.0), jet(y, 1.0, 0.0)).eps[0]);
    assert_eq!(dy, f(jet(x, 0.0, 0.0), jet(y, 0.0, 1.0)).eps[1]);

    let c = J::constant;
    let est_dx = (f(c(x + STEP), c(y)).re - f(c(x - STEP), c(y)).re) / (2.0 * STEP);
    let est_dy = (f(c(x), c(y + STEP)).re - f(c(x), c(y - STEP)).re) / (2.0 * STEP);
    assert!(
        approx::relative_eq!(dx, est_dx, epsilon = NUMERICAL_TOL, max_relative = NUMERICAL_TOL),
        "{name}({x}, {y}): exact dx {dx}, estimated {est_dx}"
    );
    assert!(
        approx::relative_eq!(dy, est_dy, epsilon = NUMERICAL_TOL, max_relative = NUMERICAL_TOL),
        "{name}({x}, {y}): exact dy {dy}, estimated {est_dy}"
    );
}

/// The two reference points most identities are checked at.
pub fn xy() -> (J, J) {
    (jet(2.3, -2.7, 1e-3), jet(1.7, 0.5, 1e2))
}
