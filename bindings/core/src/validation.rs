//! Validation fixtures for host bindings.
//!
//! Canonical wire values that binding layers can use to verify their
//! marshalling is correct. All semantic validation happens in
//! `mathbind-core`; these fixtures just ensure the data round-trips
//! correctly through the codec.

use crate::value::DynamicValue;
use num_complex::Complex64;

/// Canonical scalar fixture.
pub const SCALAR_FIXTURE: f64 = 2.5;

/// Canonical complex fixture (matches the `complex_sin_` worked example).
pub const COMPLEX_FIXTURE: Complex64 = Complex64::new(3.0, 4.0);

/// Wire form of [`SCALAR_FIXTURE`].
pub fn scalar_wire() -> DynamicValue {
    DynamicValue::scalar(SCALAR_FIXTURE)
}

/// Wire form of [`COMPLEX_FIXTURE`].
pub fn complex_wire() -> DynamicValue {
    DynamicValue::complex(COMPLEX_FIXTURE)
}

/// Four collinear (x, y) points, correlation exactly 1.
pub fn collinear_points_wire() -> DynamicValue {
    DynamicValue::list(vec![
        DynamicValue::reals(vec![0.0, 1.0]),
        DynamicValue::reals(vec![1.0, 3.0]),
        DynamicValue::reals(vec![2.0, 5.0]),
        DynamicValue::reals(vec![3.0, 7.0]),
    ])
}

/// A numeric sequence too short for any fixed-width shape of size >= 2.
/// Decoding this as a pair, tuple, or array must fail, never read past
/// the end.
pub fn truncated_wire() -> DynamicValue {
    DynamicValue::scalar(1.0)
}
