//! Host-facing entry points for the mathbind catalog.
//!
//! This crate owns the boundary between a dynamically typed host runtime
//! and the statically typed numeric core. Every exported operation goes
//! through the same pipeline: decode the host's tagged values into native
//! types, invoke the core callable, encode the result back. Failures of
//! any kind (malformed arguments, domain violations, panics) are
//! converted into [`BoundaryError`] values before control returns to the
//! host.
//!
//! The exported surface is declared once, in [`catalog`], as plain data
//! handed to a fixed set of arity-generic factories. Distribution
//! families are declared once each and expanded into their five entry
//! points by [`distributions::DistributionFamily`].

pub mod boundary;
pub mod catalog;
pub mod distributions;
pub mod registry;

pub use boundary::{error_report, BoundaryError, BoundaryFn, Convention};
pub use catalog::{global, standard_bindings, standard_registry};
pub use distributions::{standard_families, DistributionFamily};
pub use registry::{Binding, Registry, RegistryError};
