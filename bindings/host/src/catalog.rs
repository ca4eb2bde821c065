//! The standard binding catalog.
//!
//! One declaration per exported operation: symbol name, optional suffix,
//! domain callable, and calling convention, handed to the arity-generic
//! factories. Argument and result shapes come from the callable's types,
//! so the whole manifest is checked when this module compiles.

use crate::boundary::{
    binary, binary_accumulating, nullary, quaternary, ternary, try_binary, try_ternary, try_unary,
    unary,
};
use crate::distributions::standard_families;
use crate::registry::{Binding, Registry, RegistryError};
use mathbind_core::{complexes, roots, sequences, special, stats};
use once_cell::sync::Lazy;

/// Every binding in the standard catalog.
pub fn standard_bindings() -> Vec<Binding> {
    let mut bindings = vec![
        // Constants
        Binding::new("euler_gamma", None, nullary(special::euler_gamma)),
        Binding::new("phi", None, nullary(special::phi)),
        // Gamma function family
        Binding::new("tgamma", None, unary(special::tgamma)),
        Binding::new("lgamma", None, unary(special::lgamma)),
        Binding::new("digamma", None, unary(special::digamma)),
        Binding::new("gamma_p", None, try_binary(special::gamma_p)),
        Binding::new("gamma_q", None, try_binary(special::gamma_q)),
        // Error function family
        Binding::new("erf", None, unary(special::erf)),
        Binding::new("erfc", None, unary(special::erfc)),
        Binding::new("erf_inv", None, unary(special::erf_inv)),
        Binding::new("erfc_inv", None, unary(special::erfc_inv)),
        // Beta function family
        Binding::new("beta", None, try_binary(special::beta)),
        Binding::new("ln_beta", None, try_binary(special::ln_beta)),
        Binding::new("ibeta", None, try_ternary(special::ibeta)),
        // Scalar helpers
        Binding::new("expm1", None, unary(special::expm1)),
        Binding::new("log1p", None, unary(special::log1p)),
        Binding::new("cbrt", None, unary(special::cbrt)),
        Binding::new("hypot", None, binary(special::hypot)),
        Binding::new("powm1", None, binary(special::powm1)),
        // Complex elementary functions
        Binding::new("complex_sin", None, unary(complexes::sin)),
        Binding::new("complex_cos", None, unary(complexes::cos)),
        Binding::new("complex_tan", None, unary(complexes::tan)),
        Binding::new("complex_exp", None, unary(complexes::exp)),
        Binding::new("complex_log", None, unary(complexes::log)),
        Binding::new("complex_sqrt", None, unary(complexes::sqrt)),
        Binding::new("polar", None, unary(complexes::from_polar)),
        // Polynomial tools
        Binding::new("quadratic_roots", None, ternary(roots::quadratic_roots)),
        Binding::new("cubic_roots", None, quaternary(roots::cubic_roots)),
        Binding::new("cubic_evaluate", None, binary(roots::cubic_evaluate)),
        // Bivariate statistics over point sets
        Binding::new(
            "correlation",
            None,
            try_unary(|pts: Vec<[f64; 2]>| stats::correlation(&pts)),
        ),
        Binding::new(
            "means_and_covariance",
            None,
            try_unary(|pts: Vec<[f64; 2]>| stats::means_and_covariance(&pts)),
        ),
        // Orthogonal polynomials, single value and accumulated series
        Binding::new("chebyshev_t", None, binary(sequences::chebyshev_t)),
        Binding::new("legendre_p", None, binary(sequences::legendre_p)),
        Binding::new(
            "chebyshev_t",
            Some("seq"),
            binary_accumulating(sequences::chebyshev_t_sequence),
        ),
        Binding::new(
            "legendre_p",
            Some("seq"),
            binary_accumulating(sequences::legendre_p_sequence),
        ),
    ];

    for family in standard_families() {
        bindings.extend(family.into_bindings());
    }
    bindings
}

/// Build a registry holding the standard catalog.
pub fn standard_registry() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    registry.register_all(standard_bindings())?;
    Ok(registry)
}

static GLOBAL: Lazy<Registry> = Lazy::new(|| match standard_registry() {
    Ok(registry) => registry,
    // A duplicate symbol is a defect in the catalog declaration itself;
    // registration happens once at process start, so fail loudly there.
    Err(err) => panic!("standard catalog is malformed: {err}"),
});

/// The process-lifetime registry of the standard catalog.
pub fn global() -> &'static Registry {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryError;
    use mathbind_bindings_core::validation::{
        collinear_points_wire, complex_wire, truncated_wire, COMPLEX_FIXTURE,
    };
    use mathbind_bindings_core::{decode, DynamicValue, NativeShape};
    use num_complex::Complex64;

    fn scalar(x: f64) -> DynamicValue {
        DynamicValue::scalar(x)
    }

    fn call_scalar(symbol: &str, args: &[DynamicValue]) -> f64 {
        let value = global().call(symbol, args).unwrap();
        decode::<f64>(&value).unwrap()
    }

    fn close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol * b.abs().max(1.0), "{a} vs {b}");
    }

    #[test]
    fn test_catalog_size_and_determinism() {
        assert_eq!(standard_bindings().len(), 85);
        assert_eq!(global().len(), 85);
        let symbols: Vec<_> = global().symbols().collect();
        let mut sorted = symbols.clone();
        sorted.sort_unstable();
        assert_eq!(symbols, sorted);
    }

    #[test]
    fn test_oracle_equivalence_scalar() {
        close(
            call_scalar("tgamma_", &[scalar(4.5)]),
            special::tgamma(4.5),
            1e-9,
        );
        close(
            call_scalar("hypot_", &[scalar(3.0), scalar(4.0)]),
            5.0,
            1e-12,
        );
        close(
            call_scalar("ibeta_", &[scalar(2.0), scalar(3.0), scalar(0.4)]),
            special::ibeta(2.0, 3.0, 0.4).unwrap(),
            1e-9,
        );
        close(call_scalar("euler_gamma_", &[]), 0.5772156649015329, 1e-12);
    }

    #[test]
    fn test_complex_sin_worked_example() {
        let value = global().call("complex_sin_", &[complex_wire()]).unwrap();
        let z = decode::<Complex64>(&value).unwrap();
        let oracle = complexes::sin(COMPLEX_FIXTURE);
        assert!((z - oracle).norm() < 1e-12);
        // sin(3 + 4i) against the closed form.
        close(z.re, 3.853738037919377, 1e-9);
        close(z.im, -27.016813258003936, 1e-9);
    }

    #[test]
    fn test_normal_quantile_worked_example() {
        let q = call_scalar(
            "normal_quantile_",
            &[scalar(0.975), scalar(0.0), scalar(1.0)],
        );
        close(q, 1.959963984540054, 1e-7);
    }

    #[test]
    fn test_quantile_inverts_cumulative_through_wrappers() {
        for &x in &[0.2, 1.0, 3.0] {
            let params = [scalar(1.5), scalar(2.0)];
            let mut cdf_args = vec![scalar(x)];
            cdf_args.extend_from_slice(&params);
            let p = call_scalar("weibull_cdf_", &cdf_args);
            let mut q_args = vec![scalar(p)];
            q_args.extend_from_slice(&params);
            close(call_scalar("weibull_quantile_", &q_args), x, 1e-9);
        }
    }

    #[test]
    fn test_quantile_argument_is_always_scalar() {
        let q = global().get("normal_quantile_").unwrap();
        assert_eq!(q.arg_shapes()[0], NativeShape::Scalar);
        assert_eq!(q.arity(), 3);
    }

    #[test]
    fn test_accumulating_sequence_and_empty_production() {
        let empty = global()
            .call(
                "chebyshev_t_seq",
                &[DynamicValue::integers(vec![0]), scalar(0.5)],
            )
            .unwrap();
        assert_eq!(empty, DynamicValue::reals(Vec::new()));

        let value = global()
            .call(
                "legendre_p_seq",
                &[DynamicValue::integers(vec![4]), scalar(0.3)],
            )
            .unwrap();
        let series = decode::<Vec<f64>>(&value).unwrap();
        assert_eq!(series.len(), 4);
        for (k, p) in series.iter().enumerate() {
            close(*p, sequences::legendre_p(k as u32, 0.3), 1e-12);
        }
    }

    #[test]
    fn test_cubic_roots_through_wire() {
        let value = global()
            .call(
                "cubic_roots_",
                &[scalar(1.0), scalar(-6.0), scalar(11.0), scalar(-6.0)],
            )
            .unwrap();
        let roots = decode::<[f64; 3]>(&value).unwrap();
        close(roots[0], 1.0, 1e-9);
        close(roots[1], 2.0, 1e-9);
        close(roots[2], 3.0, 1e-9);
    }

    #[test]
    fn test_means_and_covariance_fixture() {
        let value = global()
            .call("means_and_covariance_", &[collinear_points_wire()])
            .unwrap();
        let (mx, my, cov, r) = decode::<(f64, f64, f64, f64)>(&value).unwrap();
        close(mx, 1.5, 1e-12);
        close(my, 4.0, 1e-12);
        close(cov, 10.0 / 3.0, 1e-12);
        close(r, 1.0, 1e-12);
    }

    #[test]
    fn test_malformed_input_is_rejected_not_read() {
        let err = global()
            .call("cubic_evaluate_", &[truncated_wire(), scalar(1.0)])
            .unwrap_err();
        assert!(matches!(err, BoundaryError::Decode { position: 0, .. }));

        let err = global().call("tgamma_", &[DynamicValue::reals(vec![])]).unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[test]
    fn test_domain_error_reaches_host() {
        let err = global()
            .call(
                "gamma_pdf_",
                &[scalar(1.0), scalar(-2.0), scalar(1.0)],
            )
            .unwrap_err();
        assert_eq!(err.kind(), "domain");
        let report = crate::boundary::error_report(&err);
        assert_eq!(report["kind"], "domain");
    }

    #[test]
    fn test_isolation_under_concurrency() {
        std::thread::scope(|scope| {
            for worker in 0..8 {
                scope.spawn(move || {
                    for i in 0..50 {
                        let p = 0.01 + 0.012 * (worker * 50 + i) as f64 / 5.0;
                        let q = call_scalar(
                            "normal_quantile_",
                            &[scalar(p), scalar(0.0), scalar(1.0)],
                        );
                        let oracle = mathbind_core::distributions::normal(
                            0.0,
                            1.0,
                            mathbind_core::DistOp::Quantile,
                            p,
                        )
                        .unwrap();
                        assert_eq!(q, oracle);

                        let x = 0.5 + worker as f64 + i as f64 / 100.0;
                        close(call_scalar("tgamma_", &[scalar(x)]), special::tgamma(x), 1e-12);
                    }
                });
            }
        });
    }
}
