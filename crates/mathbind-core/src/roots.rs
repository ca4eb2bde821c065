//! Real roots of low-degree polynomials.
//!
//! Non-real roots are reported as NaN, matching the convention of
//! returning a fixed-width result: real roots come first in ascending
//! order, NaN pads the rest.

/// Real roots of ax² + bx + c.
///
/// Degenerate cases: a = 0 reduces to the linear root (second slot NaN);
/// a = b = 0 has no roots. A negative discriminant yields (NaN, NaN).
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> (f64, f64) {
    if a == 0.0 {
        if b == 0.0 {
            return (f64::NAN, f64::NAN);
        }
        return (-c / b, f64::NAN);
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return (f64::NAN, f64::NAN);
    }
    // Cancellation-free form: compute the larger-magnitude root first.
    let s = disc.sqrt();
    let q = if b >= 0.0 { -(b + s) / 2.0 } else { -(b - s) / 2.0 };
    let (x0, x1) = if q == 0.0 { (0.0, 0.0) } else { (q / a, c / q) };
    if x0 <= x1 {
        (x0, x1)
    } else {
        (x1, x0)
    }
}

/// Real roots of ax³ + bx² + cx + d.
///
/// a = 0 falls back to the quadratic solver with the third slot NaN.
pub fn cubic_roots(a: f64, b: f64, c: f64, d: f64) -> [f64; 3] {
    if a == 0.0 {
        let (r0, r1) = quadratic_roots(b, c, d);
        return [r0, r1, f64::NAN];
    }
    let b = b / a;
    let c = c / a;
    let d = d / a;

    // Depress: x = t − b/3 turns the cubic into t³ + pt + q.
    let shift = b / 3.0;
    let p = c - b * b / 3.0;
    let q = 2.0 * b * b * b / 27.0 - b * c / 3.0 + d;
    let half_q = q / 2.0;
    let disc = half_q * half_q + p * p * p / 27.0;

    if disc > 0.0 {
        // One real root (Cardano).
        let s = disc.sqrt();
        let t = (-half_q + s).cbrt() + (-half_q - s).cbrt();
        [t - shift, f64::NAN, f64::NAN]
    } else if disc == 0.0 {
        if p == 0.0 {
            let r = -shift;
            return [r, r, r];
        }
        // Double root plus a simple one.
        let u = (-half_q).cbrt();
        let mut roots = [2.0 * u - shift, -u - shift, -u - shift];
        roots.sort_by(f64::total_cmp);
        roots
    } else {
        // Three distinct real roots (trigonometric method).
        let r = (-p / 3.0).sqrt();
        let arg = (3.0 * q / (2.0 * p) * (-3.0 / p).sqrt()).clamp(-1.0, 1.0);
        let theta = arg.acos() / 3.0;
        let mut roots = [0.0; 3];
        for (k, root) in roots.iter_mut().enumerate() {
            let angle = theta - 2.0 * std::f64::consts::PI * k as f64 / 3.0;
            *root = 2.0 * r * angle.cos() - shift;
        }
        roots.sort_by(f64::total_cmp);
        roots
    }
}

/// Evaluate ax³ + bx² + cx + d at `x` by Horner's scheme. The
/// coefficients travel as one positional 4-tuple.
pub fn cubic_evaluate(coefficients: (f64, f64, f64, f64), x: f64) -> f64 {
    let (a, b, c, d) = coefficients;
    ((a * x + b) * x + c) * x + d
}
