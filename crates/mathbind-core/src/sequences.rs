//! Orthogonal polynomial values, single and as accumulated series.
//!
//! The `_sequence` variants follow the sink convention: they append the
//! first `n` polynomial values at `x` to the output vector by repeated
//! application of the three-term recurrence. `n = 0` appends nothing.

/// Chebyshev polynomial of the first kind, Tₙ(x).
pub fn chebyshev_t(n: u32, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let (mut prev, mut curr) = (1.0, x);
            for _ in 1..n {
                let next = 2.0 * x * curr - prev;
                prev = curr;
                curr = next;
            }
            curr
        }
    }
}

/// Appends T₀(x) … Tₙ₋₁(x) to `out`.
pub fn chebyshev_t_sequence(n: u32, x: f64, out: &mut Vec<f64>) {
    if n == 0 {
        return;
    }
    out.push(1.0);
    if n == 1 {
        return;
    }
    out.push(x);
    let (mut prev, mut curr) = (1.0, x);
    for _ in 2..n {
        let next = 2.0 * x * curr - prev;
        out.push(next);
        prev = curr;
        curr = next;
    }
}

/// Legendre polynomial Pₙ(x).
pub fn legendre_p(n: u32, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let (mut prev, mut curr) = (1.0, x);
            for k in 1..n {
                let k = f64::from(k);
                let next = ((2.0 * k + 1.0) * x * curr - k * prev) / (k + 1.0);
                prev = curr;
                curr = next;
            }
            curr
        }
    }
}

/// Appends P₀(x) … Pₙ₋₁(x) to `out`.
pub fn legendre_p_sequence(n: u32, x: f64, out: &mut Vec<f64>) {
    if n == 0 {
        return;
    }
    out.push(1.0);
    if n == 1 {
        return;
    }
    out.push(x);
    let (mut prev, mut curr) = (1.0, x);
    for k in 1..(n - 1) {
        let k = f64::from(k);
        let next = ((2.0 * k + 1.0) * x * curr - k * prev) / (k + 1.0);
        out.push(next);
        prev = curr;
        curr = next;
    }
}
