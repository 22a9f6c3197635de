//! # Random Number Generation
//!
//! Seeded pseudo-random generation for the Monte Carlo engine.
//!
//! - **Reproducibility**: every generator is built from an explicit seed
//! - **Locality**: generators are constructed per pricing call; there is no
//!   process-wide generator to reseed or share between threads
//! - **Efficiency**: batch operations fill caller-owned `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(0);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
