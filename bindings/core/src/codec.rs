//! Type-directed conversion between host values and native shapes.
//!
//! Every native type the catalog uses carries exactly one [`Wire`]
//! implementation, so the shape used for a given argument or return is
//! resolved entirely by the static type. The trait is sealed: a type
//! outside the closed shape set fails to compile at the declaration site,
//! never at call time. [`NativeShape`] tags mirror the impls and exist for
//! manifest metadata and diagnostics.
//!
//! Decoding deep-copies out of the host value; encoding allocates a fresh
//! one. Encoding is infallible: every value of a wire type has a wire
//! form, so there is no encode-side error to report.

use crate::value::{DynamicValue, ValueTag};
use num_complex::Complex64;
use std::fmt;
use thiserror::Error;

/// The closed set of native shapes the codec understands.
///
/// Listed in dispatch priority order; the `Wire` impls keep a one-to-one
/// correspondence with these tags, and trait coherence guarantees no type
/// can match two of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeShape {
    /// Single double; 1-element numeric sequence on the wire.
    Scalar,
    /// (re, im) pair; 1-element complex-tagged sequence on the wire.
    Complex,
    /// Two doubles; 2-element numeric sequence on the wire.
    Pair,
    /// N positional doubles; N-element numeric sequence on the wire.
    FixedTuple(usize),
    /// N positional doubles; N-element numeric sequence on the wire.
    FixedArray(usize),
    /// Ordered sequence of N-wide arrays; list of N-element sequences.
    VectorOfFixedArray(usize),
    /// Anything the host's own default codec covers (plain numeric or
    /// integer sequences). Lowest priority; never shadows a more specific
    /// shape because each native type has exactly one impl.
    Generic,
}

impl fmt::Display for NativeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Complex => write!(f, "complex"),
            Self::Pair => write!(f, "pair"),
            Self::FixedTuple(n) => write!(f, "tuple of {n} reals"),
            Self::FixedArray(n) => write!(f, "array of {n} reals"),
            Self::VectorOfFixedArray(n) => write!(f, "list of {n}-real arrays"),
            Self::Generic => write!(f, "generic"),
        }
    }
}

/// A wire value could not be decoded into the declared native shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    #[error("expected a {expected} value, found {found}")]
    UnexpectedTag { expected: ValueTag, found: ValueTag },

    #[error("expected a sequence of length {expected}, found length {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("expected a non-negative integer, found {value}")]
    NotUnsigned { value: f64 },

    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: Box<CodecError>,
    },
}

fn unexpected(expected: ValueTag, found: &DynamicValue) -> CodecError {
    CodecError::UnexpectedTag {
        expected,
        found: found.tag(),
    }
}

fn expect_len(found: usize, expected: usize) -> Result<(), CodecError> {
    if found == expected {
        Ok(())
    } else {
        Err(CodecError::WrongLength { expected, found })
    }
}

mod sealed {
    use num_complex::Complex64;

    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for Complex64 {}
    impl Sealed for (f64, f64) {}
    impl Sealed for (f64, f64, f64, f64) {}
    impl<const N: usize> Sealed for [f64; N] {}
    impl<const N: usize> Sealed for Vec<[f64; N]> {}
    impl Sealed for Vec<f64> {}
    impl Sealed for u32 {}
}

/// A native type with exactly one wire representation.
///
/// The trait is sealed; the impls below are the whole shape set. Adding a
/// binding over an unlisted type is rejected by the compiler where the
/// binding is declared.
pub trait Wire: Sized + sealed::Sealed {
    /// The shape tag this type maps to. Used for manifest metadata.
    const SHAPE: NativeShape;

    /// Deep-copy a native value out of a host value.
    fn decode(value: &DynamicValue) -> Result<Self, CodecError>;

    /// Build a freshly allocated host value from a native one.
    fn encode(self) -> DynamicValue;
}

/// Decode a host value into `T`, dispatched on the static type.
pub fn decode<T: Wire>(value: &DynamicValue) -> Result<T, CodecError> {
    T::decode(value)
}

/// Encode a native value into a freshly allocated host value.
pub fn encode<T: Wire>(value: T) -> DynamicValue {
    value.encode()
}

impl Wire for f64 {
    const SHAPE: NativeShape = NativeShape::Scalar;

    fn decode(value: &DynamicValue) -> Result<Self, CodecError> {
        match value {
            DynamicValue::Reals(xs) => {
                expect_len(xs.len(), 1)?;
                Ok(xs[0])
            }
            // Host coercion: a 1-element integer sequence reads as a double.
            DynamicValue::Integers(xs) => {
                expect_len(xs.len(), 1)?;
                Ok(xs[0] as f64)
            }
            other => Err(unexpected(ValueTag::Reals, other)),
        }
    }

    fn encode(self) -> DynamicValue {
        DynamicValue::scalar(self)
    }
}

impl Wire for Complex64 {
    const SHAPE: NativeShape = NativeShape::Complex;

    fn decode(value: &DynamicValue) -> Result<Self, CodecError> {
        match value {
            DynamicValue::Complexes(zs) => {
                expect_len(zs.len(), 1)?;
                Ok(zs[0])
            }
            other => Err(unexpected(ValueTag::Complexes, other)),
        }
    }

    fn encode(self) -> DynamicValue {
        DynamicValue::complex(self)
    }
}

impl Wire for (f64, f64) {
    const SHAPE: NativeShape = NativeShape::Pair;

    fn decode(value: &DynamicValue) -> Result<Self, CodecError> {
        let fields = real_fields::<2>(value)?;
        Ok((fields[0], fields[1]))
    }

    fn encode(self) -> DynamicValue {
        DynamicValue::reals(vec![self.0, self.1])
    }
}

impl Wire for (f64, f64, f64, f64) {
    const SHAPE: NativeShape = NativeShape::FixedTuple(4);

    fn decode(value: &DynamicValue) -> Result<Self, CodecError> {
        let fields = real_fields::<4>(value)?;
        Ok((fields[0], fields[1], fields[2], fields[3]))
    }

    fn encode(self) -> DynamicValue {
        DynamicValue::reals(vec![self.0, self.1, self.2, self.3])
    }
}

impl<const N: usize> Wire for [f64; N] {
    const SHAPE: NativeShape = NativeShape::FixedArray(N);

    fn decode(value: &DynamicValue) -> Result<Self, CodecError> {
        real_fields::<N>(value)
    }

    fn encode(self) -> DynamicValue {
        DynamicValue::reals(self.to_vec())
    }
}

impl<const N: usize> Wire for Vec<[f64; N]> {
    const SHAPE: NativeShape = NativeShape::VectorOfFixedArray(N);

    fn decode(value: &DynamicValue) -> Result<Self, CodecError> {
        let DynamicValue::List(items) = value else {
            return Err(unexpected(ValueTag::List, value));
        };
        // An empty host list is a valid empty sequence, not an error.
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                <[f64; N]>::decode(item).map_err(|source| CodecError::Element {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }

    fn encode(self) -> DynamicValue {
        DynamicValue::list(self.into_iter().map(Wire::encode).collect())
    }
}

impl Wire for Vec<f64> {
    const SHAPE: NativeShape = NativeShape::Generic;

    fn decode(value: &DynamicValue) -> Result<Self, CodecError> {
        match value {
            DynamicValue::Reals(xs) => Ok(xs.as_ref().clone()),
            DynamicValue::Integers(xs) => Ok(xs.iter().map(|&x| x as f64).collect()),
            other => Err(unexpected(ValueTag::Reals, other)),
        }
    }

    fn encode(self) -> DynamicValue {
        DynamicValue::reals(self)
    }
}

impl Wire for u32 {
    const SHAPE: NativeShape = NativeShape::Generic;

    fn decode(value: &DynamicValue) -> Result<Self, CodecError> {
        match value {
            DynamicValue::Integers(xs) => {
                expect_len(xs.len(), 1)?;
                u32::try_from(xs[0]).map_err(|_| CodecError::NotUnsigned {
                    value: xs[0] as f64,
                })
            }
            DynamicValue::Reals(xs) => {
                expect_len(xs.len(), 1)?;
                let x = xs[0];
                if x.is_finite() && x >= 0.0 && x <= u32::MAX as f64 && x.fract() == 0.0 {
                    Ok(x as u32)
                } else {
                    Err(CodecError::NotUnsigned { value: x })
                }
            }
            other => Err(unexpected(ValueTag::Integers, other)),
        }
    }

    fn encode(self) -> DynamicValue {
        DynamicValue::integers(vec![i64::from(self)])
    }
}

/// Read exactly N positional numeric fields out of a numeric sequence.
/// A sequence of any other length is a decode error, never a partial or
/// out-of-bounds read.
fn real_fields<const N: usize>(value: &DynamicValue) -> Result<[f64; N], CodecError> {
    let DynamicValue::Reals(xs) = value else {
        return Err(unexpected(ValueTag::Reals, value));
    };
    expect_len(xs.len(), N)?;
    let mut out = [0.0; N];
    out.copy_from_slice(xs);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<T: Wire + Clone + PartialEq + std::fmt::Debug>(native: T) {
        let wire = encode(native.clone());
        let back: T = decode(&wire).unwrap();
        assert_eq!(back, native);
        // Structural inverse on the wire side as well.
        assert_eq!(encode(back), wire);
    }

    #[test]
    fn test_roundtrip_every_shape() {
        roundtrip(1.5_f64);
        roundtrip(Complex64::new(3.0, 4.0));
        roundtrip((0.5, -0.5));
        roundtrip((1.0, 2.0, 3.0, 4.0));
        roundtrip([9.0, 8.0, 7.0]);
        roundtrip(vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        roundtrip(vec![0.25, 0.5, 0.75]);
        roundtrip(7_u32);
    }

    #[test]
    fn test_scalar_requires_single_element() {
        let err = decode::<f64>(&DynamicValue::reals(vec![1.0, 2.0])).unwrap_err();
        assert_eq!(
            err,
            CodecError::WrongLength {
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn test_scalar_coerces_integer_wire() {
        let x: f64 = decode(&DynamicValue::integers(vec![3])).unwrap();
        assert_eq!(x, 3.0);
    }

    #[test]
    fn test_fixed_array_rejects_short_sequence() {
        let err = decode::<[f64; 4]>(&DynamicValue::reals(vec![1.0, 2.0])).unwrap_err();
        assert_eq!(
            err,
            CodecError::WrongLength {
                expected: 4,
                found: 2
            }
        );
    }

    #[test]
    fn test_pair_rejects_short_sequence() {
        let err = decode::<(f64, f64)>(&DynamicValue::reals(vec![1.0])).unwrap_err();
        assert!(matches!(err, CodecError::WrongLength { expected: 2, .. }));
    }

    #[test]
    fn test_complex_rejects_real_wire() {
        let err = decode::<Complex64>(&DynamicValue::scalar(1.0)).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnexpectedTag {
                expected: ValueTag::Complexes,
                found: ValueTag::Reals
            }
        );
    }

    #[test]
    fn test_empty_list_decodes_to_empty_vector() {
        let v: Vec<[f64; 2]> = decode(&DynamicValue::list(Vec::new())).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_vector_of_arrays_reports_bad_element() {
        let wire = DynamicValue::list(vec![
            DynamicValue::reals(vec![1.0, 2.0]),
            DynamicValue::reals(vec![3.0]),
        ]);
        let err = decode::<Vec<[f64; 2]>>(&wire).unwrap_err();
        let CodecError::Element { index, source } = err else {
            panic!("expected element error, got {err:?}");
        };
        assert_eq!(index, 1);
        assert!(matches!(
            *source,
            CodecError::WrongLength {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_decode_deep_copies() {
        let wire = DynamicValue::reals(vec![1.0, 2.0, 3.0]);
        let mut native: Vec<f64> = decode(&wire).unwrap();
        native[0] = 99.0;
        let DynamicValue::Reals(xs) = &wire else {
            unreachable!();
        };
        assert_eq!(xs[0], 1.0);
    }

    #[test]
    fn test_unsigned_rejects_negative_and_fractional() {
        assert!(matches!(
            decode::<u32>(&DynamicValue::integers(vec![-1])).unwrap_err(),
            CodecError::NotUnsigned { .. }
        ));
        assert!(matches!(
            decode::<u32>(&DynamicValue::scalar(2.5)).unwrap_err(),
            CodecError::NotUnsigned { .. }
        ));
        assert_eq!(decode::<u32>(&DynamicValue::scalar(6.0)).unwrap(), 6);
    }

    #[test]
    fn test_shape_tags() {
        assert_eq!(<[f64; 3]>::SHAPE, NativeShape::FixedArray(3));
        assert_eq!(<Vec<[f64; 2]>>::SHAPE, NativeShape::VectorOfFixedArray(2));
        assert_eq!(<(f64, f64)>::SHAPE, NativeShape::Pair);
        assert_eq!(Vec::<f64>::SHAPE, NativeShape::Generic);
        assert_eq!(NativeShape::FixedArray(3).to_string(), "array of 3 reals");
    }
}
