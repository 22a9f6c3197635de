//! European option pricing inputs.
//!
//! - [`PricingRequest`]: spot, strike, expiry, rate, volatility and option type
//! - [`LatticeConfig`]: request plus binomial step count
//! - [`SimulationConfig`]: request plus path count and seed

mod config;
mod request;

pub use config::{
    LatticeConfig, SimulationConfig, DEFAULT_LATTICE_STEPS, DEFAULT_SEED,
    DEFAULT_SIMULATION_PATHS,
};
pub use request::PricingRequest;
