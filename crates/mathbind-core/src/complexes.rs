//! Elementary functions over complex doubles.

use num_complex::Complex64;

pub fn sin(z: Complex64) -> Complex64 {
    z.sin()
}

pub fn cos(z: Complex64) -> Complex64 {
    z.cos()
}

pub fn tan(z: Complex64) -> Complex64 {
    z.tan()
}

pub fn exp(z: Complex64) -> Complex64 {
    z.exp()
}

/// Principal branch of the complex logarithm.
pub fn log(z: Complex64) -> Complex64 {
    z.ln()
}

/// Principal square root.
pub fn sqrt(z: Complex64) -> Complex64 {
    z.sqrt()
}

/// Build a complex number from a polar (radius, angle) pair.
pub fn from_polar(p: (f64, f64)) -> Complex64 {
    Complex64::from_polar(p.0, p.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Complex64, b: Complex64, tol: f64) {
        assert!((a - b).norm() <= tol * b.norm().max(1.0), "{a} vs {b}");
    }

    #[test]
    fn test_sin_matches_expansion() {
        // sin(x + iy) = sin x cosh y + i cos x sinh y
        let z = Complex64::new(3.0, 4.0);
        let expected = Complex64::new(
            3.0_f64.sin() * 4.0_f64.cosh(),
            3.0_f64.cos() * 4.0_f64.sinh(),
        );
        close(sin(z), expected, 1e-12);
    }

    #[test]
    fn test_exp_log_inverse() {
        let z = Complex64::new(0.3, -1.2);
        close(log(exp(z)), z, 1e-12);
    }

    #[test]
    fn test_sqrt_squares_back() {
        let z = Complex64::new(-5.0, 2.0);
        let r = sqrt(z);
        close(r * r, z, 1e-12);
    }

    #[test]
    fn test_from_polar() {
        let z = from_polar((2.0, std::f64::consts::FRAC_PI_2));
        close(z, Complex64::new(0.0, 2.0), 1e-12);
    }
}
