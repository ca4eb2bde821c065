//! Bivariate statistics over (x, y) point sets.

use crate::DomainError;

/// Sample means, covariance, and correlation of a point set.
///
/// Returns (mean x, mean y, covariance, correlation). Covariance uses the
/// n − 1 denominator. Correlation is NaN when either coordinate is
/// constant. Fewer than two points is a domain error.
pub fn means_and_covariance(points: &[[f64; 2]]) -> Result<(f64, f64, f64, f64), DomainError> {
    if points.len() < 2 {
        return Err(DomainError::OutOfDomain(format!(
            "bivariate statistics need at least two points, got {}",
            points.len()
        )));
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p[1]).sum::<f64>() / n;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for p in points {
        let dx = p[0] - mean_x;
        let dy = p[1] - mean_y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let covariance = sxy / (n - 1.0);
    let correlation = if sxx == 0.0 || syy == 0.0 {
        f64::NAN
    } else {
        sxy / (sxx * syy).sqrt()
    };
    Ok((mean_x, mean_y, covariance, correlation))
}

/// Pearson correlation coefficient of a point set.
///
/// A degenerate set (constant x or y) is a domain error rather than NaN,
/// so the condition reaches the host with an explanation.
pub fn correlation(points: &[[f64; 2]]) -> Result<f64, DomainError> {
    let (_, _, _, r) = means_and_covariance(points)?;
    if r.is_nan() {
        return Err(DomainError::OutOfDomain(
            "correlation is undefined when a coordinate is constant".to_string(),
        ));
    }
    Ok(r)
}
