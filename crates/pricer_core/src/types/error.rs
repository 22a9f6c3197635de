//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from input validation and identifier parsing
//!
//! The pricing engines themselves never return errors: degenerate inputs
//! surface as non-finite prices. `PricingError` is produced by the
//! `validate()` methods and `FromStr` implementations that the calling
//! layer uses before handing inputs to an engine.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing inputs with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: A computed value is not finite
/// - `UnsupportedModel`: Unknown model or option type identifier
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model or option type identifier not recognised
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),
}

impl PricingError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a numerical instability error
    pub fn numerical(msg: impl Into<String>) -> Self {
        Self::NumericalInstability(msg.into())
    }

    /// Create an unsupported model error
    pub fn unsupported_model(msg: impl Into<String>) -> Self {
        Self::UnsupportedModel(msg.into())
    }
}

/// Checks that `value` is finite and strictly positive.
///
/// # Errors
/// Returns `PricingError::InvalidInput` naming the parameter otherwise.
///
/// # Examples
/// ```
/// use pricer_core::types::error::ensure_positive;
///
/// assert!(ensure_positive("spot", 100.0).is_ok());
/// assert!(ensure_positive("spot", 0.0).is_err());
/// assert!(ensure_positive("spot", f64::NAN).is_err());
/// ```
pub fn ensure_positive(name: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidInput(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

/// Checks that `value` is finite.
///
/// # Errors
/// Returns `PricingError::InvalidInput` naming the parameter otherwise.
pub fn ensure_finite(name: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidInput(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}
