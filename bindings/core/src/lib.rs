//! # mathbind-bindings-core
//!
//! Shared value codec for mathbind host bindings.
//!
//! This crate provides:
//! - **`DynamicValue`**: the host runtime's tagged, reference-counted value
//! - **`Wire`**: the sealed codec trait covering the closed shape set
//! - **Validation fixtures**: canonical wire values for binding tests
//!
//! ## Design Principle
//!
//! **Bindings do not define semantics.**
//!
//! All mathematics lives in `mathbind-core`. This crate only provides the
//! data transformations that move values across the host boundary:
//!
//! ```text
//! host value → Wire::decode → native value → math → Wire::encode → host value
//! ```
//!
//! Each supported native type carries exactly one [`codec::Wire`] impl, so
//! shape dispatch is resolved by the type checker; a binding declared over
//! an unsupported type does not compile.

pub mod codec;
pub mod validation;
pub mod value;

// Re-export the codec surface
pub use codec::{decode, encode, CodecError, NativeShape, Wire};

// Re-export the host value model
pub use value::{DynamicValue, ValueTag};
