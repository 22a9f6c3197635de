//! Discrete lattice (tree) pricing.
//!
//! - [`binomial`]: Cox-Ross-Rubinstein binomial tree for European options
//!
//! The forward price lattice is stored triangularly and indexed by
//! `(step, down_moves)` with `down_moves <= step`.

pub mod binomial;

pub use binomial::{price, LatticeParameters, PriceLattice};
