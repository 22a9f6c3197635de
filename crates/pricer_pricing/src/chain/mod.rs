//! Option chain generation.
//!
//! A chain prices one option type with one engine at evenly spaced strikes
//! across `[0.8·S, 1.2·S]`, endpoints included.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_models::models::PricingModel;
//! use pricer_pricing::chain::generate_default_chain;
//!
//! let chain = generate_default_chain(100.0, 1.0, 0.05, 0.2, PricingModel::BlackScholes, OptionType::Call);
//! assert_eq!(chain.len(), 10);
//! let strikes = chain.strikes();
//! assert!((strikes[0] - 80.0).abs() < 1e-12);
//! assert!((strikes[9] - 120.0).abs() < 1e-12);
//! ```

mod generator;
mod strikes;

pub use generator::{
    generate_chain, generate_default_chain, ChainEntry, OptionChain, CHAIN_LATTICE_STEPS,
    CHAIN_SIMULATION_PATHS, DEFAULT_STRIKE_COUNT,
};
pub use strikes::{linspace, strike_grid, LOWER_STRIKE_FACTOR, UPPER_STRIKE_FACTOR};
