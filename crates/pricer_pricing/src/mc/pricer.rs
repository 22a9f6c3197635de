//! Monte Carlo pricing engine.
//!
//! [`simulate`] coordinates:
//! 1. Random number generation (via [`PricerRng`](crate::rng::PricerRng)), one
//!    generator per call seeded from the configuration
//! 2. Terminal price sampling (via [`terminal_prices`])
//! 3. Payoff evaluation, discounting and aggregation

use pricer_models::instruments::{PricingRequest, SimulationConfig};
use tracing::debug;

use crate::rng::PricerRng;

/// Result of a Monte Carlo valuation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Present value: e^(-rT) · mean(payoff).
    pub price: f64,
    /// Standard error of the price estimate (zero for fewer than two paths).
    pub std_error: f64,
    /// Number of terminal draws used.
    pub n_paths: usize,
}

/// Maps standard normal draws to terminal prices, in place.
///
/// ```text
/// S_T = S · exp((r - ½σ²)T + σ√T · Z)
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::PricingRequest;
/// use pricer_pricing::mc::terminal_prices;
///
/// let request = PricingRequest::default();
/// let mut draws = vec![0.0, 1.0, -1.0];
/// terminal_prices(&request, &mut draws);
///
/// // Z = 0 gives the median terminal price S·exp((r - ½σ²)T)
/// assert!((draws[0] - 100.0 * (0.03_f64).exp()).abs() < 1e-12);
/// assert!(draws[1] > draws[0] && draws[0] > draws[2]);
/// ```
pub fn terminal_prices(request: &PricingRequest, draws: &mut [f64]) {
    let drift =
        (request.rate - 0.5 * request.volatility * request.volatility) * request.expiry;
    let diffusion = request.volatility * request.expiry.sqrt();

    for z in draws.iter_mut() {
        *z = request.spot * (drift + diffusion * *z).exp();
    }
}

/// Prices a European option by Monte Carlo and reports the standard error.
///
/// A fresh generator is seeded from `config.seed` on every call, so the
/// result depends only on the configuration.
///
/// `n_paths == 0` is a precondition violation: the mean is 0/0 and the
/// returned price is NaN.
pub fn simulate(config: &SimulationConfig) -> SimulationResult {
    let request = &config.request;
    let n_paths = config.n_paths;

    let mut rng = PricerRng::from_seed(config.seed);
    let mut samples = rng.normals(n_paths);

    terminal_prices(request, &mut samples);

    // Payoffs overwrite the terminal prices
    for value in samples.iter_mut() {
        *value = request.option_type.intrinsic(*value, request.strike);
    }

    let discount_factor = request.discount_factor();
    let sum: f64 = samples.iter().sum();
    let mean = sum / n_paths as f64;

    let std_error = if n_paths > 1 {
        let variance: f64 =
            samples.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n_paths - 1) as f64;
        variance.sqrt() / (n_paths as f64).sqrt()
    } else {
        0.0
    };

    let result = SimulationResult {
        price: mean * discount_factor,
        std_error: std_error * discount_factor,
        n_paths,
    };

    debug!(
        strike = request.strike,
        option_type = %request.option_type,
        n_paths,
        seed = rng.seed(),
        price = result.price,
        std_error = result.std_error,
        "monte carlo price"
    );
    result
}

/// Prices a European option by Monte Carlo.
///
/// Equivalent to `simulate(config).price`.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{PricingRequest, SimulationConfig};
/// use pricer_pricing::mc::price;
///
/// let config = SimulationConfig::new(PricingRequest::default(), 200_000);
/// let value = price(&config);
/// assert!((value - 10.45).abs() < 0.2);
/// ```
#[inline]
pub fn price(config: &SimulationConfig) -> f64 {
    simulate(config).price
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::OptionType;

    fn config(option_type: OptionType, n_paths: usize) -> SimulationConfig {
        let request = PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type);
        SimulationConfig::new(request, n_paths)
    }

    #[test]
    fn test_reproducible_bit_for_bit() {
        let cfg = config(OptionType::Call, 10_000);
        let first = price(&cfg);
        let second = price(&cfg);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_seed_changes_estimate() {
        let cfg = config(OptionType::Call, 1_000);
        assert_ne!(price(&cfg), price(&cfg.with_seed(1)));
    }

    #[test]
    fn test_call_close_to_closed_form() {
        let result = simulate(&config(OptionType::Call, 100_000));
        // Black-Scholes 10.4506
        assert!(
            (result.price - 10.4506).abs() < 4.0 * result.std_error,
            "price={} se={}",
            result.price,
            result.std_error
        );
    }

    #[test]
    fn test_put_close_to_closed_form() {
        let result = simulate(&config(OptionType::Put, 100_000));
        // Black-Scholes 5.5735
        assert!(
            (result.price - 5.5735).abs() < 4.0 * result.std_error,
            "price={} se={}",
            result.price,
            result.std_error
        );
    }

    #[test]
    fn test_std_error_shrinks_with_paths() {
        let small = simulate(&config(OptionType::Call, 1_000));
        let large = simulate(&config(OptionType::Call, 100_000));
        assert!(large.std_error < small.std_error);
        assert_eq!(large.n_paths, 100_000);
    }

    #[test]
    fn test_single_path() {
        let result = simulate(&config(OptionType::Call, 1));
        assert!(result.price.is_finite());
        assert!(result.price >= 0.0);
        assert_eq!(result.std_error, 0.0);
    }

    #[test]
    fn test_zero_paths_is_nan() {
        assert!(price(&config(OptionType::Call, 0)).is_nan());
    }

    #[test]
    fn test_terminal_prices_match_formula() {
        let request = PricingRequest::new(50.0, 50.0, 2.0, 0.03, 0.25, OptionType::Put);
        let z = [0.5, -1.5];
        let mut draws = z;
        terminal_prices(&request, &mut draws);
        for (s_t, z) in draws.iter().zip(z) {
            let expected =
                50.0 * ((0.03 - 0.5 * 0.0625) * 2.0 + 0.25 * 2.0_f64.sqrt() * z).exp();
            assert_relative_eq!(*s_t, expected, epsilon = 1e-12);
        }
    }
}
