//! Engine-specific extensions of [`PricingRequest`].

use pricer_core::types::PricingError;

use super::request::PricingRequest;

/// Default number of binomial steps.
pub const DEFAULT_LATTICE_STEPS: usize = 100;

/// Default number of Monte Carlo draws.
pub const DEFAULT_SIMULATION_PATHS: usize = 10_000;

/// Seed used by every simulation unless a test overrides it.
pub const DEFAULT_SEED: u64 = 0;

/// Binomial lattice configuration.
///
/// Larger `steps` increases accuracy at O(N²) cost.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{LatticeConfig, PricingRequest, DEFAULT_LATTICE_STEPS};
///
/// let config = LatticeConfig::with_default_steps(PricingRequest::default());
/// assert_eq!(config.steps, DEFAULT_LATTICE_STEPS);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeConfig {
    /// Option and market parameters.
    pub request: PricingRequest,
    /// Number of time steps (N).
    pub steps: usize,
}

impl LatticeConfig {
    /// Creates a lattice configuration.
    #[inline]
    pub fn new(request: PricingRequest, steps: usize) -> Self {
        Self { request, steps }
    }

    /// Creates a lattice configuration with [`DEFAULT_LATTICE_STEPS`].
    #[inline]
    pub fn with_default_steps(request: PricingRequest) -> Self {
        Self::new(request, DEFAULT_LATTICE_STEPS)
    }

    /// Checks the request invariant and N ≥ 1.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` on the first violation.
    pub fn validate(&self) -> Result<(), PricingError> {
        self.request.validate()?;
        if self.steps == 0 {
            return Err(PricingError::invalid_input("steps must be at least 1"));
        }
        Ok(())
    }
}

/// Monte Carlo configuration.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{PricingRequest, SimulationConfig, DEFAULT_SEED};
///
/// let config = SimulationConfig::new(PricingRequest::default(), 50_000);
/// assert_eq!(config.n_paths, 50_000);
/// assert_eq!(config.seed, DEFAULT_SEED);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Option and market parameters.
    pub request: PricingRequest,
    /// Number of terminal draws (M).
    pub n_paths: usize,
    /// Generator seed.
    pub seed: u64,
}

impl SimulationConfig {
    /// Creates a simulation configuration seeded with [`DEFAULT_SEED`].
    #[inline]
    pub fn new(request: PricingRequest, n_paths: usize) -> Self {
        Self {
            request,
            n_paths,
            seed: DEFAULT_SEED,
        }
    }

    /// Creates a simulation configuration with [`DEFAULT_SIMULATION_PATHS`].
    #[inline]
    pub fn with_default_paths(request: PricingRequest) -> Self {
        Self::new(request, DEFAULT_SIMULATION_PATHS)
    }

    /// Returns a copy using a different seed.
    #[inline]
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Checks the request invariant and M ≥ 1.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` on the first violation.
    pub fn validate(&self) -> Result<(), PricingError> {
        self.request.validate()?;
        if self.n_paths == 0 {
            return Err(PricingError::invalid_input("n_paths must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_defaults() {
        let config = LatticeConfig::with_default_steps(PricingRequest::default());
        assert_eq!(config.steps, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lattice_zero_steps_invalid() {
        let config = LatticeConfig::new(PricingRequest::default(), 0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("steps"));
    }

    #[test]
    fn test_lattice_propagates_request_error() {
        let request = PricingRequest {
            volatility: -0.1,
            ..PricingRequest::default()
        };
        assert!(LatticeConfig::new(request, 10).validate().is_err());
    }

    #[test]
    fn test_simulation_defaults() {
        let config = SimulationConfig::with_default_paths(PricingRequest::default());
        assert_eq!(config.n_paths, 10_000);
        assert_eq!(config.seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_simulation_with_seed() {
        let config = SimulationConfig::new(PricingRequest::default(), 10).with_seed(7);
        assert_eq!(config.seed, 7);
        assert_eq!(config.n_paths, 10);
    }

    #[test]
    fn test_simulation_zero_paths_invalid() {
        let config = SimulationConfig::new(PricingRequest::default(), 0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("n_paths"));
    }
}
