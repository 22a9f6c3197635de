//! Core financial types.
//!
//! This module provides:
//! - `option`: Call/put option type with intrinsic payoff
//! - `error`: Structured error types for input validation and parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionType`] from `option`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option::OptionType;
