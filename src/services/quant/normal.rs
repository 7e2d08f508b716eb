//! Inverse standard-normal CDF.

use crate::error::QuantError;

// Acklam's rational approximation; relative error below 1.15e-9.
const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];
const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];
const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];
const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

const P_LOW: f64 = 0.02425;
const P_HIGH: f64 = 1.0 - P_LOW;

/// Quantile of the standard normal distribution (`z` such that `Φ(z) = p`).
///
/// `p` must lie strictly inside (0, 1).
pub fn inverse_normal_cdf(p: f64) -> Result<f64, QuantError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(QuantError::invalid(format!(
            "probability must be in (0, 1), got {}",
            p
        )));
    }

    let z = if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    Ok(z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_quantiles() {
        assert!((inverse_normal_cdf(0.95).unwrap() - 1.644_853_6).abs() < 1e-6);
        assert!((inverse_normal_cdf(0.99).unwrap() - 2.326_347_9).abs() < 1e-6);
        assert!((inverse_normal_cdf(0.975).unwrap() - 1.959_964_0).abs() < 1e-6);
        assert!(inverse_normal_cdf(0.5).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_symmetry() {
        for p in [0.001, 0.01, 0.1, 0.3] {
            let lo = inverse_normal_cdf(p).unwrap();
            let hi = inverse_normal_cdf(1.0 - p).unwrap();
            assert!((lo + hi).abs() < 1e-8, "asymmetric at p={}", p);
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = f64::NEG_INFINITY;
        for i in 1..1000 {
            let z = inverse_normal_cdf(i as f64 / 1000.0).unwrap();
            assert!(z > prev);
            prev = z;
        }
    }

    #[test]
    fn test_rejects_bounds() {
        assert!(inverse_normal_cdf(0.0).is_err());
        assert!(inverse_normal_cdf(1.0).is_err());
        assert!(inverse_normal_cdf(-0.2).is_err());
        assert!(inverse_normal_cdf(f64::NAN).is_err());
    }
}
