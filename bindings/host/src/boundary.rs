//! Boundary function factories.
//!
//! A [`BoundaryFn`] is one exported operation's decode → invoke → encode
//! pipeline, type-erased behind a call closure, together with the
//! declaration metadata (argument shapes, result shape, calling
//! convention) that forms the catalog manifest. The factories below are
//! the fixed set of arity-specialized generators; argument and result
//! shapes are pulled from the `Wire` impls at declaration time, so a
//! factory applied to an unsupported type does not compile.

use mathbind_bindings_core::{codec, CodecError, DynamicValue, NativeShape, Wire};
use mathbind_core::DomainError;
use thiserror::Error;

/// How a binding forwards to its domain callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// Decoded arguments are passed through as-is.
    Direct,
    /// The domain callable fills a sequence sink; the wrapper drains it
    /// fully before encoding once.
    VectorAccumulating,
    /// A distribution is built from a parameter prefix, then one of the
    /// five family operations is applied.
    Distribution,
}

/// A failure intercepted at the host boundary.
///
/// Every way a call can go wrong is converted into one of these before
/// control returns to the host; nothing unwinds past the binding layer
/// and nothing is silently dropped.
#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("argument {position}: {source}")]
    Decode {
        position: usize,
        #[source]
        source: CodecError,
    },

    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("`{symbol}` expects {expected} argument(s), got {found}")]
    Arity {
        symbol: String,
        expected: usize,
        found: usize,
    },

    #[error("no binding named `{0}`")]
    UnknownSymbol(String),

    #[error("`{symbol}` panicked: {message}")]
    Panic { symbol: String, message: String },
}

impl BoundaryError {
    /// Stable discriminant for the host's condition machinery.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Decode { .. } => "decode",
            Self::Domain(_) => "domain",
            Self::Arity { .. } => "arity",
            Self::UnknownSymbol(_) => "unknown_symbol",
            Self::Panic { .. } => "panic",
        }
    }
}

/// Render a boundary failure as the JSON condition object the host's
/// error channel consumes.
pub fn error_report(err: &BoundaryError) -> serde_json::Value {
    serde_json::json!({
        "kind": err.kind(),
        "error": err.to_string(),
    })
}

type CallFn = Box<dyn Fn(&[DynamicValue]) -> Result<DynamicValue, BoundaryError> + Send + Sync>;

/// One operation's boundary pipeline plus its manifest metadata.
pub struct BoundaryFn {
    convention: Convention,
    arg_shapes: Vec<NativeShape>,
    result_shape: NativeShape,
    run: CallFn,
}

impl BoundaryFn {
    pub(crate) fn from_parts(
        convention: Convention,
        arg_shapes: Vec<NativeShape>,
        result_shape: NativeShape,
        run: CallFn,
    ) -> Self {
        Self {
            convention,
            arg_shapes,
            result_shape,
            run,
        }
    }

    pub fn arity(&self) -> usize {
        self.arg_shapes.len()
    }

    pub fn arg_shapes(&self) -> &[NativeShape] {
        &self.arg_shapes
    }

    pub fn result_shape(&self) -> NativeShape {
        self.result_shape
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Run the pipeline. Arity is checked by the owning binding.
    pub(crate) fn run(&self, args: &[DynamicValue]) -> Result<DynamicValue, BoundaryError> {
        (self.run)(args)
    }
}

impl std::fmt::Debug for BoundaryFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryFn")
            .field("convention", &self.convention)
            .field("arg_shapes", &self.arg_shapes)
            .field("result_shape", &self.result_shape)
            .finish_non_exhaustive()
    }
}

/// Decode one positional argument, attributing failures to its position.
pub(crate) fn decode_arg<T: Wire>(
    args: &[DynamicValue],
    position: usize,
) -> Result<T, BoundaryError> {
    codec::decode(&args[position]).map_err(|source| BoundaryError::Decode { position, source })
}

pub fn nullary<R, F>(f: F) -> BoundaryFn
where
    R: Wire,
    F: Fn() -> R + Send + Sync + 'static,
{
    BoundaryFn::from_parts(
        Convention::Direct,
        Vec::new(),
        R::SHAPE,
        Box::new(move |_args| Ok(codec::encode(f()))),
    )
}

pub fn unary<A, R, F>(f: F) -> BoundaryFn
where
    A: Wire,
    R: Wire,
    F: Fn(A) -> R + Send + Sync + 'static,
{
    BoundaryFn::from_parts(
        Convention::Direct,
        vec![A::SHAPE],
        R::SHAPE,
        Box::new(move |args| Ok(codec::encode(f(decode_arg(args, 0)?)))),
    )
}

pub fn binary<A, B, R, F>(f: F) -> BoundaryFn
where
    A: Wire,
    B: Wire,
    R: Wire,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    BoundaryFn::from_parts(
        Convention::Direct,
        vec![A::SHAPE, B::SHAPE],
        R::SHAPE,
        Box::new(move |args| {
            Ok(codec::encode(f(
                decode_arg(args, 0)?,
                decode_arg(args, 1)?,
            )))
        }),
    )
}

pub fn ternary<A, B, C, R, F>(f: F) -> BoundaryFn
where
    A: Wire,
    B: Wire,
    C: Wire,
    R: Wire,
    F: Fn(A, B, C) -> R + Send + Sync + 'static,
{
    BoundaryFn::from_parts(
        Convention::Direct,
        vec![A::SHAPE, B::SHAPE, C::SHAPE],
        R::SHAPE,
        Box::new(move |args| {
            Ok(codec::encode(f(
                decode_arg(args, 0)?,
                decode_arg(args, 1)?,
                decode_arg(args, 2)?,
            )))
        }),
    )
}

pub fn quaternary<A, B, C, D, R, F>(f: F) -> BoundaryFn
where
    A: Wire,
    B: Wire,
    C: Wire,
    D: Wire,
    R: Wire,
    F: Fn(A, B, C, D) -> R + Send + Sync + 'static,
{
    BoundaryFn::from_parts(
        Convention::Direct,
        vec![A::SHAPE, B::SHAPE, C::SHAPE, D::SHAPE],
        R::SHAPE,
        Box::new(move |args| {
            Ok(codec::encode(f(
                decode_arg(args, 0)?,
                decode_arg(args, 1)?,
                decode_arg(args, 2)?,
                decode_arg(args, 3)?,
            )))
        }),
    )
}

pub fn try_unary<A, R, F>(f: F) -> BoundaryFn
where
    A: Wire,
    R: Wire,
    F: Fn(A) -> Result<R, DomainError> + Send + Sync + 'static,
{
    BoundaryFn::from_parts(
        Convention::Direct,
        vec![A::SHAPE],
        R::SHAPE,
        Box::new(move |args| Ok(codec::encode(f(decode_arg(args, 0)?)?))),
    )
}

pub fn try_binary<A, B, R, F>(f: F) -> BoundaryFn
where
    A: Wire,
    B: Wire,
    R: Wire,
    F: Fn(A, B) -> Result<R, DomainError> + Send + Sync + 'static,
{
    BoundaryFn::from_parts(
        Convention::Direct,
        vec![A::SHAPE, B::SHAPE],
        R::SHAPE,
        Box::new(move |args| {
            Ok(codec::encode(f(
                decode_arg(args, 0)?,
                decode_arg(args, 1)?,
            )?))
        }),
    )
}

pub fn try_ternary<A, B, C, R, F>(f: F) -> BoundaryFn
where
    A: Wire,
    B: Wire,
    C: Wire,
    R: Wire,
    F: Fn(A, B, C) -> Result<R, DomainError> + Send + Sync + 'static,
{
    BoundaryFn::from_parts(
        Convention::Direct,
        vec![A::SHAPE, B::SHAPE, C::SHAPE],
        R::SHAPE,
        Box::new(move |args| {
            Ok(codec::encode(f(
                decode_arg(args, 0)?,
                decode_arg(args, 1)?,
                decode_arg(args, 2)?,
            )?))
        }),
    )
}

/// Vector-accumulating convention: the domain callable pushes into a
/// sequence sink. The sink is drained completely into one value before
/// encoding; zero productions encode to an empty numeric sequence, never
/// an absent value.
pub fn binary_accumulating<A, B, F>(f: F) -> BoundaryFn
where
    A: Wire,
    B: Wire,
    F: Fn(A, B, &mut Vec<f64>) + Send + Sync + 'static,
{
    BoundaryFn::from_parts(
        Convention::VectorAccumulating,
        vec![A::SHAPE, B::SHAPE],
        NativeShape::Generic,
        Box::new(move |args| {
            let a = decode_arg(args, 0)?;
            let b = decode_arg(args, 1)?;
            let mut out = Vec::new();
            f(a, b, &mut out);
            Ok(codec::encode(out))
        }),
    )
}
