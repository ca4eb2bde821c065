//! Named bindings and the symbol registry.
//!
//! A [`Binding`] pairs an exported symbol with its boundary pipeline.
//! [`Binding::invoke`] is the actual host boundary: arity is checked,
//! the pipeline runs under `catch_unwind`, and every failure leaves as a
//! [`BoundaryError`]. Bindings are immutable once registered and live for
//! the process lifetime; the registry is read-only after construction, so
//! concurrent calls need no locking.

use crate::boundary::{BoundaryError, BoundaryFn, Convention};
use mathbind_bindings_core::{DynamicValue, NativeShape};
use std::any::Any;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// A declared exposed operation: symbol plus boundary pipeline.
#[derive(Debug)]
pub struct Binding {
    symbol: String,
    boundary: BoundaryFn,
}

impl Binding {
    /// Symbol naming convention: `<name>_` by default,
    /// `<name>_<suffix>` when a disambiguating suffix is declared.
    pub fn new(name: &str, suffix: Option<&str>, boundary: BoundaryFn) -> Self {
        let symbol = match suffix {
            Some(suffix) => format!("{name}_{suffix}"),
            None => format!("{name}_"),
        };
        Self { symbol, boundary }
    }

    /// A binding whose full symbol is built elsewhere (distribution
    /// family members use `<distribution>_<operation>_`).
    pub fn with_symbol(symbol: String, boundary: BoundaryFn) -> Self {
        Self { symbol, boundary }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn arity(&self) -> usize {
        self.boundary.arity()
    }

    pub fn arg_shapes(&self) -> &[NativeShape] {
        self.boundary.arg_shapes()
    }

    pub fn result_shape(&self) -> NativeShape {
        self.boundary.result_shape()
    }

    pub fn convention(&self) -> Convention {
        self.boundary.convention()
    }

    /// Run one call through the boundary.
    ///
    /// Decode, invocation, and encode failures, including panics from
    /// the domain layer, are all converted into [`BoundaryError`] here;
    /// nothing unwinds into the host and nothing is swallowed.
    pub fn invoke(&self, args: &[DynamicValue]) -> Result<DynamicValue, BoundaryError> {
        if args.len() != self.arity() {
            let err = BoundaryError::Arity {
                symbol: self.symbol.clone(),
                expected: self.arity(),
                found: args.len(),
            };
            tracing::warn!(symbol = %self.symbol, error = %err, "call rejected");
            return Err(err);
        }
        match panic::catch_unwind(AssertUnwindSafe(|| self.boundary.run(args))) {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                tracing::warn!(symbol = %self.symbol, error = %err, "call failed");
                Err(err)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(symbol = %self.symbol, message = %message, "panic intercepted at boundary");
                Err(BoundaryError::Panic {
                    symbol: self.symbol.clone(),
                    message,
                })
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// A defect in the catalog declaration itself, surfaced at registration
/// time rather than at call time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate symbol `{0}`")]
    DuplicateSymbol(String),
}

/// Symbol table of all declared bindings.
///
/// Backed by a `BTreeMap` so iteration order is deterministic.
#[derive(Debug, Default)]
pub struct Registry {
    bindings: BTreeMap<String, Binding>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, binding: Binding) -> Result<(), RegistryError> {
        match self.bindings.entry(binding.symbol().to_string()) {
            Entry::Occupied(entry) => Err(RegistryError::DuplicateSymbol(entry.key().clone())),
            Entry::Vacant(entry) => {
                tracing::debug!(
                    symbol = %binding.symbol(),
                    arity = binding.arity(),
                    "registered binding"
                );
                entry.insert(binding);
                Ok(())
            }
        }
    }

    pub fn register_all(
        &mut self,
        bindings: impl IntoIterator<Item = Binding>,
    ) -> Result<(), RegistryError> {
        for binding in bindings {
            self.register(binding)?;
        }
        Ok(())
    }

    pub fn get(&self, symbol: &str) -> Option<&Binding> {
        self.bindings.get(symbol)
    }

    /// Resolve a symbol and invoke it.
    pub fn call(&self, symbol: &str, args: &[DynamicValue]) -> Result<DynamicValue, BoundaryError> {
        let binding = self
            .bindings
            .get(symbol)
            .ok_or_else(|| BoundaryError::UnknownSymbol(symbol.to_string()))?;
        binding.invoke(args)
    }

    /// All registered symbols in deterministic order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
