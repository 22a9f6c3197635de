//! Standard normal distribution functions.
//!
//! This module provides:
//! - `erf`: Gauss error function
//! - `norm_cdf`: Cumulative distribution function (CDF)
//!
//! The CDF is evaluated through the Gauss error function,
//! Φ(x) = ½·(1 + erf(x/√2)), using `libm::erf` (the musl/FreeBSD libm
//! routine, accurate to within one ulp) rather than a low-order polynomial
//! fit.

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Gauss error function.
///
/// erf(x) = (2/√π) ∫₀ˣ e^(-t²) dt
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::erf;
///
/// assert_eq!(erf(0.0), 0.0);
/// assert!((erf(1.0) - 0.8427007929497149).abs() < 1e-15);
/// ```
#[inline]
pub fn erf(x: f64) -> f64 {
    libm::erf(x)
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * (1 + erf(x / sqrt(2)))
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_relative_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        // Φ(-x) + Φ(x) = 1
        let test_values = [-3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values from standard normal tables
        assert_relative_eq!(norm_cdf(1.0), 0.8413447460685429, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 0.15865525393145707, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.0), 0.9772498680518208, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-2.0), 0.022750131948179195, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(3.0), 0.9986501019683699, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_bounds_and_monotonic() {
        let values: Vec<f64> = (-80..=80).map(|i| i as f64 * 0.1).collect();
        for pair in values.windows(2) {
            let (a, b) = (norm_cdf(pair[0]), norm_cdf(pair[1]));
            assert!((0.0..=1.0).contains(&a));
            assert!(b >= a, "CDF not monotonic at x = {}", pair[0]);
        }
    }

    #[test]
    fn test_norm_cdf_propagates_nan() {
        assert!(norm_cdf(f64::NAN).is_nan());
    }

    #[test]
    fn test_erf_odd() {
        for x in [0.1, 0.5, 1.0, 2.5] {
            assert_relative_eq!(erf(-x), -erf(x), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_erf_reference_values() {
        // erf(1/√2) = P(|Z| < 1)
        assert_relative_eq!(erf(std::f64::consts::FRAC_1_SQRT_2), 0.6826894921370859, epsilon = 1e-15);
        assert_relative_eq!(erf(1.0), 0.8427007929497149, epsilon = 1e-15);
        assert_relative_eq!(erf(2.0), 0.9953222650189527, epsilon = 1e-15);
    }

    #[test]
    fn test_norm_cdf_tail_values() {
        assert_relative_eq!(norm_cdf(-5.0), 2.866515718791939e-7, max_relative = 1e-9);
        assert_relative_eq!(norm_cdf(5.0), 0.9999997133484281, epsilon = 1e-15);
    }
}
