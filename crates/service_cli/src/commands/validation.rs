//! Input bounds enforced before any pricer is called.
//!
//! The pricing library does no checking of its own; these bounds keep every
//! request strictly inside the region where all three engines are defined.

use pricer_models::instruments::{LatticeConfig, PricingRequest, SimulationConfig};

use crate::config::MIN_SIMULATIONS;
use crate::{CliError, Result};

/// Smallest accepted spot price.
pub const MIN_SPOT: f64 = 1.0;
/// Smallest accepted strike price.
pub const MIN_STRIKE: f64 = 1.0;
/// Smallest accepted time to expiry in years.
pub const MIN_EXPIRY: f64 = 0.01;
/// Accepted risk-free rate range.
pub const RATE_RANGE: (f64, f64) = (0.0, 1.0);
/// Accepted volatility range.
pub const VOLATILITY_RANGE: (f64, f64) = (0.01, 1.0);

fn at_least(name: &str, value: f64, min: f64) -> Result<()> {
    if value.is_nan() || value < min {
        return Err(CliError::invalid_argument(format!(
            "{} must be at least {} (got {})",
            name, min, value
        )));
    }
    if value.is_infinite() {
        return Err(CliError::invalid_argument(format!("{} must be finite", name)));
    }
    Ok(())
}

fn within(name: &str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if value.is_nan() || value < min || value > max {
        return Err(CliError::invalid_argument(format!(
            "{} must be between {} and {} (got {})",
            name, min, max, value
        )));
    }
    Ok(())
}

/// Checks the strike-independent market inputs.
pub fn check_market(spot: f64, expiry: f64, rate: f64, volatility: f64) -> Result<()> {
    at_least("spot", spot, MIN_SPOT)?;
    at_least("expiry", expiry, MIN_EXPIRY)?;
    within("rate", rate, RATE_RANGE)?;
    within("volatility", volatility, VOLATILITY_RANGE)
}

/// Checks a complete single-price request.
pub fn check_request(request: &PricingRequest) -> Result<()> {
    check_market(request.spot, request.expiry, request.rate, request.volatility)?;
    at_least("strike", request.strike, MIN_STRIKE)?;
    request.validate()?;
    Ok(())
}

/// Checks a binomial tree configuration (N ≥ 1).
pub fn check_lattice(config: &LatticeConfig) -> Result<()> {
    config.validate()?;
    Ok(())
}

/// Checks a Monte Carlo configuration against the CLI's path floor.
pub fn check_simulation(config: &SimulationConfig) -> Result<()> {
    config.validate()?;
    if config.n_paths < MIN_SIMULATIONS {
        return Err(CliError::invalid_argument(format!(
            "simulations must be at least {} (got {})",
            MIN_SIMULATIONS, config.n_paths
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::OptionType;

    fn request() -> PricingRequest {
        PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
    }

    #[test]
    fn test_accepts_typical_request() {
        assert!(check_request(&request()).is_ok());
    }

    #[test]
    fn test_accepts_bounds_inclusive() {
        let edge = PricingRequest::new(1.0, 1.0, 0.01, 0.0, 0.01, OptionType::Put);
        assert!(check_request(&edge).is_ok());
        let top = PricingRequest { rate: 1.0, volatility: 1.0, ..edge };
        assert!(check_request(&top).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        let cases = [
            PricingRequest { spot: 0.5, ..request() },
            PricingRequest { strike: 0.0, ..request() },
            PricingRequest { expiry: 0.001, ..request() },
            PricingRequest { rate: -0.01, ..request() },
            PricingRequest { rate: 1.5, ..request() },
            PricingRequest { volatility: 0.0, ..request() },
            PricingRequest { volatility: 2.0, ..request() },
            PricingRequest { spot: f64::NAN, ..request() },
            PricingRequest { strike: f64::INFINITY, ..request() },
        ];
        for case in cases {
            let err = check_request(&case).unwrap_err();
            assert!(matches!(err, CliError::InvalidArgument(_)), "{:?}", case);
        }
    }

    #[test]
    fn test_error_names_the_field() {
        let err = check_market(100.0, 1.0, 0.05, 1.2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: volatility must be between 0.01 and 1 (got 1.2)"
        );
    }

    #[test]
    fn test_lattice_config_checks() {
        assert!(check_lattice(&LatticeConfig::new(request(), 1)).is_ok());

        let err = check_lattice(&LatticeConfig::new(request(), 0)).unwrap_err();
        assert!(matches!(err, CliError::Pricing(_)));
        assert!(err.to_string().contains("steps must be at least 1"));
    }

    #[test]
    fn test_simulation_config_checks() {
        assert!(check_simulation(&SimulationConfig::new(request(), 1_000)).is_ok());

        // Zero paths fail the library invariant; 1..1000 fail the CLI floor
        let err = check_simulation(&SimulationConfig::new(request(), 0)).unwrap_err();
        assert!(matches!(err, CliError::Pricing(_)));
        let err = check_simulation(&SimulationConfig::new(request(), 999)).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }
}
