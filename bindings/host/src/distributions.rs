//! Distribution family adapter.
//!
//! A [`DistributionFamily`] describes one parameterized distribution:
//! its name, how many shape/scale/location parameters it takes, and a
//! type-erased evaluator over the five operations. `into_bindings`
//! expands a family into exactly five entry points (pdf, logpdf, cdf,
//! logcdf, quantile) that share the same parameter decoding.
//!
//! Positional layout follows the exported convention: argument 0 is the
//! evaluation point, arguments 1..K the family parameters.

use crate::boundary::{decode_arg, BoundaryFn, Convention};
use crate::registry::Binding;
use mathbind_bindings_core::{codec, DynamicValue, NativeShape};
use mathbind_core::{distributions, DistOp, DomainError};
use std::sync::Arc;

type EvalFn = Arc<dyn Fn(&[f64], DistOp, f64) -> Result<f64, DomainError> + Send + Sync>;

/// One parameterized distribution family.
pub struct DistributionFamily {
    name: &'static str,
    param_count: usize,
    eval_shape: NativeShape,
    eval: EvalFn,
}

impl DistributionFamily {
    pub fn one_param(
        name: &'static str,
        f: fn(f64, DistOp, f64) -> Result<f64, DomainError>,
    ) -> Self {
        Self {
            name,
            param_count: 1,
            eval_shape: NativeShape::Scalar,
            eval: Arc::new(move |params, op, x| f(params[0], op, x)),
        }
    }

    pub fn two_params(
        name: &'static str,
        f: fn(f64, f64, DistOp, f64) -> Result<f64, DomainError>,
    ) -> Self {
        Self {
            name,
            param_count: 2,
            eval_shape: NativeShape::Scalar,
            eval: Arc::new(move |params, op, x| f(params[0], params[1], op, x)),
        }
    }

    pub fn three_params(
        name: &'static str,
        f: fn(f64, f64, f64, DistOp, f64) -> Result<f64, DomainError>,
    ) -> Self {
        Self {
            name,
            param_count: 3,
            eval_shape: NativeShape::Scalar,
            eval: Arc::new(move |params, op, x| f(params[0], params[1], params[2], op, x)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Expand into the five family bindings, `<distribution>_<operation>_`.
    pub fn into_bindings(self) -> Vec<Binding> {
        DistOp::ALL
            .iter()
            .map(|&op| {
                let eval = Arc::clone(&self.eval);
                let param_count = self.param_count;

                // The quantile evaluation point is a probability and is
                // always decoded as a plain scalar, whatever shape the
                // family declares for the other operations. Fixed
                // convention, kept from the exported surface.
                let point_shape = match op {
                    DistOp::Quantile => NativeShape::Scalar,
                    _ => self.eval_shape,
                };
                let mut arg_shapes = Vec::with_capacity(param_count + 1);
                arg_shapes.push(point_shape);
                arg_shapes.extend(std::iter::repeat(NativeShape::Scalar).take(param_count));

                let boundary = BoundaryFn::from_parts(
                    Convention::Distribution,
                    arg_shapes,
                    NativeShape::Scalar,
                    Box::new(move |args: &[DynamicValue]| {
                        let x: f64 = decode_arg(args, 0)?;
                        let mut params = Vec::with_capacity(param_count);
                        for position in 1..=param_count {
                            params.push(decode_arg::<f64>(args, position)?);
                        }
                        let y = eval(&params, op, x)?;
                        Ok(codec::encode(y))
                    }),
                );
                Binding::with_symbol(format!("{}_{}_", self.name, op.symbol()), boundary)
            })
            .collect()
    }
}

/// The distribution families in the standard catalog.
pub fn standard_families() -> Vec<DistributionFamily> {
    vec![
        DistributionFamily::one_param("exponential", distributions::exponential),
        DistributionFamily::one_param("students_t", distributions::students_t),
        DistributionFamily::one_param("chi_squared", distributions::chi_squared),
        DistributionFamily::two_params("normal", distributions::normal),
        DistributionFamily::two_params("gamma", distributions::gamma),
        DistributionFamily::two_params("beta", distributions::beta),
        DistributionFamily::two_params("cauchy", distributions::cauchy),
        DistributionFamily::two_params("weibull", distributions::weibull),
        DistributionFamily::two_params("lognormal", distributions::lognormal),
        DistributionFamily::three_params("triangular", distributions::triangular),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_expands_to_five_bindings() {
        let bindings = DistributionFamily::two_params("normal", distributions::normal)
            .into_bindings();
        let symbols: Vec<_> = bindings.iter().map(|b| b.symbol().to_string()).collect();
        assert_eq!(
            symbols,
            [
                "normal_pdf_",
                "normal_logpdf_",
                "normal_cdf_",
                "normal_logcdf_",
                "normal_quantile_"
            ]
        );
        for binding in &bindings {
            assert_eq!(binding.arity(), 3);
            assert_eq!(binding.convention(), Convention::Distribution);
            assert_eq!(binding.result_shape(), NativeShape::Scalar);
        }
    }

    #[test]
    fn test_shared_parameter_decoding() {
        let bindings = DistributionFamily::one_param("exponential", distributions::exponential)
            .into_bindings();
        let args = [DynamicValue::scalar(1.0), DynamicValue::scalar(2.0)];
        let pdf = bindings[0].invoke(&args).unwrap();
        let cdf = bindings[2].invoke(&args).unwrap();
        let expected_pdf = 2.0 * (-2.0_f64).exp();
        let expected_cdf = 1.0 - (-2.0_f64).exp();
        let DynamicValue::Reals(ps) = pdf else {
            panic!("scalar result expected");
        };
        let DynamicValue::Reals(cs) = cdf else {
            panic!("scalar result expected");
        };
        assert!((ps[0] - expected_pdf).abs() < 1e-12);
        assert!((cs[0] - expected_cdf).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_parameters_reach_host_as_domain_errors() {
        let bindings =
            DistributionFamily::two_params("normal", distributions::normal).into_bindings();
        let args = [
            DynamicValue::scalar(0.0),
            DynamicValue::scalar(0.0),
            DynamicValue::scalar(-1.0),
        ];
        let err = bindings[0].invoke(&args).unwrap_err();
        assert_eq!(err.kind(), "domain");
    }

    #[test]
    fn test_standard_families_are_unique() {
        let families = standard_families();
        assert_eq!(families.len(), 10);
        let mut names: Vec<_> = families.iter().map(|f| f.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 10);
    }
}
