//! # Pricer Engines (Layer 3)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing holds the three European option pricing engines and the
//! option chain generator built on top of them:
//! - [`analytical`]: closed-form Black-Scholes
//! - [`lattice`]: Cox-Ross-Rubinstein binomial tree with backward induction
//! - [`mc`]: seeded Monte Carlo under risk-neutral GBM (random draws via [`rng`])
//! - [`chain`]: prices across a strike range with a selected engine
//!
//! All engines are pure functions of their inputs. They perform no input
//! validation and hold no state between calls; each simulation builds its
//! own generator, so repeated calls with the same configuration return
//! bit-identical prices.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_models::instruments::{LatticeConfig, PricingRequest};
//! use pricer_models::models::PricingModel;
//! use pricer_pricing::{analytical, lattice, price_with_model};
//!
//! let request = PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//!
//! let closed_form = analytical::black_scholes::price(&request);
//! let tree = lattice::binomial::price(&LatticeConfig::new(request, 500));
//! assert!((closed_form - tree).abs() < 0.05);
//!
//! let via_dispatch = price_with_model(PricingModel::BlackScholes, &request, 100, 10_000);
//! assert_eq!(via_dispatch, closed_form);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod chain;
pub mod lattice;
pub mod mc;
pub mod rng;

mod dispatch;

// Re-export commonly used items for convenience
pub use chain::{generate_chain, generate_default_chain, ChainEntry, OptionChain};
pub use dispatch::price_with_model;
pub use mc::SimulationResult;
