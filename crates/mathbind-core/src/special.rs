//! Scalar special functions.
//!
//! Thin wrappers over the external numeric stack (statrs and std). The
//! fallible ones surface invalid arguments as [`DomainError`] instead of
//! panicking, so the binding layer can report them as conditions.

use crate::DomainError;
use statrs::function::{beta as beta_fn, erf as erf_fn, gamma as gamma_fn};

/// Euler-Mascheroni constant γ.
pub fn euler_gamma() -> f64 {
    0.577_215_664_901_532_9
}

/// Golden ratio φ = (1 + √5)/2.
pub fn phi() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// Γ(x).
pub fn tgamma(x: f64) -> f64 {
    gamma_fn::gamma(x)
}

/// ln Γ(x).
pub fn lgamma(x: f64) -> f64 {
    gamma_fn::ln_gamma(x)
}

/// Digamma ψ(x) = Γ'(x)/Γ(x).
pub fn digamma(x: f64) -> f64 {
    gamma_fn::digamma(x)
}

/// Error function erf(x).
pub fn erf(x: f64) -> f64 {
    erf_fn::erf(x)
}

/// Complementary error function erfc(x) = 1 − erf(x).
pub fn erfc(x: f64) -> f64 {
    erf_fn::erfc(x)
}

/// Inverse error function.
pub fn erf_inv(x: f64) -> f64 {
    erf_fn::erf_inv(x)
}

/// Inverse complementary error function.
pub fn erfc_inv(x: f64) -> f64 {
    erf_fn::erfc_inv(x)
}

/// Beta function B(a, b). Requires a > 0 and b > 0.
pub fn beta(a: f64, b: f64) -> Result<f64, DomainError> {
    beta_fn::checked_beta(a, b).map_err(Into::into)
}

/// ln B(a, b). Requires a > 0 and b > 0.
pub fn ln_beta(a: f64, b: f64) -> Result<f64, DomainError> {
    beta_fn::checked_ln_beta(a, b).map_err(Into::into)
}

/// Regularized incomplete beta function I_x(a, b).
pub fn ibeta(a: f64, b: f64, x: f64) -> Result<f64, DomainError> {
    beta_fn::checked_beta_reg(a, b, x).map_err(Into::into)
}

/// Regularized lower incomplete gamma function P(a, x).
pub fn gamma_p(a: f64, x: f64) -> Result<f64, DomainError> {
    gamma_fn::checked_gamma_lr(a, x).map_err(Into::into)
}

/// Regularized upper incomplete gamma function Q(a, x) = 1 − P(a, x).
pub fn gamma_q(a: f64, x: f64) -> Result<f64, DomainError> {
    gamma_fn::checked_gamma_ur(a, x).map_err(Into::into)
}

/// eˣ − 1, accurate near zero.
pub fn expm1(x: f64) -> f64 {
    x.exp_m1()
}

/// ln(1 + x), accurate near zero.
pub fn log1p(x: f64) -> f64 {
    x.ln_1p()
}

/// Cube root, defined for negative inputs.
pub fn cbrt(x: f64) -> f64 {
    x.cbrt()
}

/// √(x² + y²) without intermediate overflow.
pub fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

/// xʸ − 1, accurate when xʸ is close to one.
pub fn powm1(x: f64, y: f64) -> f64 {
    if x > 0.0 {
        (y * x.ln()).exp_m1()
    } else {
        x.powf(y) - 1.0
    }
}
