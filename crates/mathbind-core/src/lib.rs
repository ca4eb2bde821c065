//! # mathbind-core
//!
//! The statically typed math surface exposed through mathbind.
//!
//! Everything here operates on native values (doubles, complex numbers,
//! fixed-width arrays, plain vectors) and knows nothing about the host
//! runtime or its tagged values. The binding crates marshal in and out;
//! this crate owns the semantics.
//!
//! ## Key Guarantees
//!
//! 1. **Pure**: every function is a function of its arguments only
//! 2. **No panics on user input**: invalid arguments come back as
//!    [`DomainError`], never as an unwind
//! 3. **Parallel-safe**: no shared mutable state anywhere
//!
//! ## Modules
//!
//! - [`special`]: scalar special functions (gamma, beta, erf, ...)
//! - [`complexes`]: elementary functions over complex doubles
//! - [`roots`]: real roots of low-degree polynomials
//! - [`sequences`]: orthogonal polynomial values and accumulated series
//! - [`stats`]: bivariate statistics over point sets
//! - [`distributions`]: parameterized probability distributions

pub mod complexes;
pub mod distributions;
pub mod roots;
pub mod sequences;
pub mod special;
pub mod stats;

pub use distributions::DistOp;

use statrs::StatsError;
use thiserror::Error;

/// A mathematical implementation rejected its native arguments.
///
/// This is the expected, user-facing failure kind: parameters outside a
/// distribution's valid domain, a probability outside [0, 1], a
/// degenerate point set. The binding layer reports it through the host's
/// error channel.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid distribution parameters: {0}")]
    InvalidParameters(#[from] StatsError),

    #[error("{0}")]
    OutOfDomain(String),
}
