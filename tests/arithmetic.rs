mod common;

use approx::assert_relative_eq;
use common::{assert_jets_close, jet, xy, J};
use fwdiff::{Dual, Dual64};
use num_traits::{FromPrimitive, NumCast, One, Zero};

// ── Construction ──

#[test]
fn constant_has_zero_tangent() {
    let c = Dual64::<3>::constant(4.5);
    assert_eq!(c.re, 4.5);
    assert_eq!(c.eps, [0.0; 3]);

    let d: Dual64<3> = 4.5_f64.into();
    assert_eq!(c, d);
    assert_eq!(Dual64::<3>::default(), Dual64::<3>::zero());
}

#[test]
fn variable_seeds_basis_vector() {
    let x = Dual64::<3>::variable(1.5, 1);
    assert_eq!(x.eps, [0.0, 1.0, 0.0]);

    // Out-of-range index seeds nothing.
    let y = Dual64::<3>::variable(1.5, 7);
    assert_eq!(y, Dual64::<3>::constant(1.5));
}

#[test]
fn numeric_conversions_are_constants() {
    let a = <Dual64<2> as FromPrimitive>::from_i64(-3).unwrap();
    assert_eq!(a, jet(-3.0, 0.0, 0.0));
    let b = <Dual64<2> as NumCast>::from(2.5_f32).unwrap();
    assert_eq!(b, jet(2.5, 0.0, 0.0));
    assert_eq!(J::one(), jet(1.0, 0.0, 0.0));
}

#[test]
fn display_lists_value_and_tangent() {
    let x = jet(1.5, 2.0, -0.5);
    assert_eq!(x.to_string(), "1.5 + 2\u{03b5}0 + -0.5\u{03b5}1");
}

// ── Dual ⊕ Dual ──

#[test]
fn product_rule() {
    let a = jet(3.0, 1.0, 0.0);
    let b = jet(4.0, 0.0, 1.0);
    let c = a * b;
    assert_eq!(c, jet(12.0, 4.0, 3.0));
}

#[test]
fn quotient_rule() {
    // d/dx (x / (x+1)) at x=2: 1/(x+1)^2 = 1/9
    let x = Dual64::<1>::variable(2.0, 0);
    let y = x / (x + Dual::constant(1.0));
    assert_relative_eq!(y.re, 2.0 / 3.0, max_relative = 1e-14);
    assert_relative_eq!(y.eps[0], 1.0 / 9.0, max_relative = 1e-14);
}

#[test]
fn product_then_quotient_round_trips() {
    let (x, y) = xy();
    assert_jets_close((x * y) / x, y);
}

#[test]
fn remainder_follows_truncated_quotient() {
    // 7.5 % 2 = 1.5, d/da = 1, d/db = -trunc(7.5/2) = -3
    let a = jet(7.5, 1.0, 0.0);
    let b = jet(2.0, 0.0, 1.0);
    let r = a % b;
    assert_eq!(r, jet(1.5, 1.0, -3.0));
}

#[test]
fn negation() {
    let x = jet(2.0, 1.0, -3.0);
    assert_eq!(-x, jet(-2.0, -1.0, 3.0));
}

// ── Dual ⊕ scalar ──

#[test]
fn scalar_addition_commutes() {
    let (x, _) = xy();
    let a = x + 1.0;
    let b = 1.0 + x;
    let mut c = x;
    c += 1.0;
    let d = x + J::constant(1.0);
    assert_jets_close(a, b);
    assert_jets_close(a, c);
    assert_jets_close(a, d);
}

#[test]
fn scalar_subtraction_negates() {
    let (x, _) = xy();
    let a = 1.0 - x;
    let b = -(x - 1.0);
    let mut c = x;
    c -= 1.0;
    let e = J::constant(1.0) - x;
    assert_jets_close(a, b);
    assert_jets_close(a, -c);
    assert_jets_close(a, e);
}

#[test]
fn scalar_scaling_round_trips() {
    let (x, _) = xy();
    let a = x / 5.0;
    let b = x * 5.0;
    let mut c = x;
    c /= 5.0;
    let mut d = x;
    d *= 5.0;
    let g = 1.0 / (5.0 / x);
    let h = 5.0 * x;

    assert_jets_close(5.0 * a, b / 5.0);
    assert_jets_close(a, c);
    assert_jets_close(b, d);
    assert_jets_close(5.0 * g, h / 5.0);
}

#[test]
fn scalar_division_reciprocates() {
    let (x, y) = xy();
    let a = x / y;
    let b = 1.0 / (y / x);
    assert_jets_close(a, b);
}

#[test]
fn mixed_ops_match_promoted_ops() {
    let (x, _) = xy();
    let s = 3.1;
    let sd = J::constant(s);
    assert_jets_close(x + s, x + sd);
    assert_jets_close(x - s, x - sd);
    assert_jets_close(x * s, x * sd);
    assert_jets_close(x / s, x / sd);
    assert_jets_close(s - x, sd - x);
    assert_jets_close(s / x, sd / x);
    assert_eq!(x % s, x % sd);
}

#[test]
fn f32_mixed_ops() {
    let x = Dual::<f32, 1>::variable(2.0, 0);
    let y = 3.0_f32 * x + 1.0_f32;
    assert_eq!(y.re, 7.0);
    assert_eq!(y.eps[0], 3.0);
    let z = 1.0_f32 / x;
    assert_eq!(z.re, 0.5);
    assert_eq!(z.eps[0], -0.25);
}

// ── Comparison ──

#[test]
fn equality_is_componentwise() {
    assert_eq!(jet(1.0, 2.0, 3.0), jet(1.0, 2.0, 3.0));
    assert_ne!(jet(1.0, 2.0, 3.0), jet(1.0, 2.0, 3.5));
    assert_ne!(jet(1.0, 2.0, 3.0), jet(1.5, 2.0, 3.0));
}

#[test]
fn ordering_uses_value_only() {
    let a = jet(1.0, 100.0, 0.0);
    let b = jet(2.0, -100.0, 0.0);
    assert!(a < b);
    assert!(b > a);
    assert_eq!(
        jet(1.0, 5.0, 0.0).partial_cmp(&jet(1.0, -5.0, 0.0)),
        Some(std::cmp::Ordering::Equal)
    );
}

// ── Reductions ──

#[test]
fn sum_matches_pairwise_addition() {
    let (x, y) = xy();
    let v = [x, y, jet(5.3, -4.7, 1e-3)];
    let total: J = v.iter().sum();
    assert_jets_close(total, v[0] + v[1] + v[2]);
    let owned: J = v.into_iter().sum();
    assert_eq!(owned, total);
}

#[test]
fn product_matches_pairwise_multiplication() {
    let (x, y) = xy();
    let v = [x, y];
    let p: J = v.iter().product();
    assert_jets_close(p, x * y);
}
