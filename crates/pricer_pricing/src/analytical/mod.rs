//! Analytical (closed-form) solutions for option pricing.
//!
//! # Available Solutions
//!
//! - **Black-Scholes**: European call and put on a non-dividend-paying underlying
//!
//! # Usage
//!
//! ```rust
//! use pricer_models::instruments::PricingRequest;
//! use pricer_pricing::analytical::black_scholes;
//!
//! let price = black_scholes::price(&PricingRequest::default());
//! assert!((price - 10.4506).abs() < 1e-3);
//! ```

pub mod black_scholes;

pub use black_scholes::{d1, d2};
