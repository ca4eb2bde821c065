//! The host runtime's tagged value, as seen from the binding layer.
//!
//! `DynamicValue` models the host's dynamically typed, reference-counted
//! value. The binding layer never mutates one in place and never keeps a
//! reference past the span of a single call: decoding deep-copies into an
//! independent native value, encoding allocates a fresh value whose
//! ownership transfers to the caller.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A tagged, reference-counted host value.
///
/// Only the variants relevant to the math catalog are modeled: numeric
/// sequences, integer sequences, complex-tagged sequences, and lists of
/// sequences. Cloning bumps a reference count; it does not copy the
/// underlying buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", content = "data", rename_all = "snake_case")]
pub enum DynamicValue {
    /// Numeric sequence (the host's "double vector").
    Reals(Arc<Vec<f64>>),
    /// Integer sequence.
    Integers(Arc<Vec<i64>>),
    /// Complex-tagged sequence; each element carries (re, im).
    Complexes(Arc<Vec<Complex64>>),
    /// List of values. The catalog only produces lists of numeric
    /// sequences, but the host may hand us anything.
    List(Arc<Vec<DynamicValue>>),
}

impl DynamicValue {
    /// A 1-element numeric sequence.
    pub fn scalar(x: f64) -> Self {
        Self::Reals(Arc::new(vec![x]))
    }

    /// A numeric sequence.
    pub fn reals(xs: Vec<f64>) -> Self {
        Self::Reals(Arc::new(xs))
    }

    /// An integer sequence.
    pub fn integers(xs: Vec<i64>) -> Self {
        Self::Integers(Arc::new(xs))
    }

    /// A 1-element complex-tagged sequence.
    pub fn complex(z: Complex64) -> Self {
        Self::Complexes(Arc::new(vec![z]))
    }

    /// A complex-tagged sequence.
    pub fn complexes(zs: Vec<Complex64>) -> Self {
        Self::Complexes(Arc::new(zs))
    }

    /// A list of values.
    pub fn list(items: Vec<DynamicValue>) -> Self {
        Self::List(Arc::new(items))
    }

    /// The host-level tag of this value.
    pub fn tag(&self) -> ValueTag {
        match self {
            Self::Reals(_) => ValueTag::Reals,
            Self::Integers(_) => ValueTag::Integers,
            Self::Complexes(_) => ValueTag::Complexes,
            Self::List(_) => ValueTag::List,
        }
    }

    /// Number of elements in the underlying sequence or list.
    pub fn len(&self) -> usize {
        match self {
            Self::Reals(xs) => xs.len(),
            Self::Integers(xs) => xs.len(),
            Self::Complexes(zs) => zs.len(),
            Self::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Discriminant of a [`DynamicValue`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTag {
    Reals,
    Integers,
    Complexes,
    List,
}

impl ValueTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reals => "real",
            Self::Integers => "integer",
            Self::Complexes => "complex",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
