//! Monte Carlo pricing under the risk-neutral measure.
//!
//! Terminal prices are sampled directly from the exact GBM solution
//!
//! ```text
//! S_T = S · exp((r - ½σ²)T + σ√T · Z),   Z ~ N(0, 1)
//! ```
//!
//! and the price is the discounted mean payoff. There is one draw per path,
//! no time stepping, and no variance reduction, so the estimator under a
//! fixed seed is fully determined by `(request, n_paths, seed)`.
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{PricingRequest, SimulationConfig};
//! use pricer_pricing::mc;
//!
//! let config = SimulationConfig::with_default_paths(PricingRequest::default());
//!
//! let result = mc::simulate(&config);
//! println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
//!
//! // Same configuration, same price
//! assert_eq!(mc::price(&config), result.price);
//! ```

mod pricer;

pub use pricer::{price, simulate, terminal_prices, SimulationResult};
