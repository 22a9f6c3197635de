//! Market and contract parameters of a European option.

use pricer_core::types::error::{ensure_finite, ensure_positive};
use pricer_core::types::{OptionType, PricingError};

/// Parameters shared by all three pricing engines.
///
/// Construction is unchecked: the engines evaluate whatever they are given
/// and degenerate values (zero expiry, zero volatility) surface as
/// non-finite prices. Callers that accept user input run
/// [`validate`](Self::validate) first.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_models::instruments::PricingRequest;
///
/// let request = PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// assert!(request.validate().is_ok());
///
/// let otm = request.with_strike(120.0);
/// assert_eq!(otm.strike, 120.0);
/// assert_eq!(otm.spot, 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingRequest {
    /// Current underlying price (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to expiry in years (T).
    pub expiry: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Annualised volatility (σ).
    pub volatility: f64,
    /// Call or put.
    pub option_type: OptionType,
}

impl PricingRequest {
    /// Creates a new request.
    ///
    /// # Arguments
    ///
    /// * `spot` - Current underlying price
    /// * `strike` - Strike price
    /// * `expiry` - Time to expiry (years)
    /// * `rate` - Risk-free rate (annualised)
    /// * `volatility` - Volatility (annualised)
    /// * `option_type` - Call or put
    #[inline]
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
        }
    }

    /// Returns a copy with a different strike.
    #[inline]
    pub fn with_strike(&self, strike: f64) -> Self {
        Self { strike, ..*self }
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Discount factor e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Checks the record invariant S > 0, K > 0, T > 0, σ > 0 (all finite).
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` naming the first offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        ensure_positive("spot", self.spot)?;
        ensure_positive("strike", self.strike)?;
        ensure_positive("expiry", self.expiry)?;
        ensure_finite("rate", self.rate)?;
        ensure_positive("volatility", self.volatility)?;
        Ok(())
    }
}

impl Default for PricingRequest {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            expiry: 1.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: OptionType::Call,
        }
    }
}
