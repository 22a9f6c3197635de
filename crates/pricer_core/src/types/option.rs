//! Option type definition.
//!
//! [`OptionType`] is the closed call/put selector shared by every engine.
//! It replaces string comparison on `"call"`/`"put"` with enum dispatch.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Right conveyed by a European option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// let put: OptionType = "PUT".parse().unwrap();
/// assert_eq!(put, OptionType::Put);
/// assert_eq!(put.to_string(), "put");
/// assert_eq!(put.intrinsic(90.0, 100.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Settlement value at expiry for underlying price `spot`.
    ///
    /// - Call: max(0, S - K)
    /// - Put: max(0, K - S)
    ///
    /// NaN inputs propagate (`f64::max` would swallow them, so the
    /// comparison is written out).
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        let diff = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        if diff > 0.0 || diff.is_nan() {
            diff
        } else {
            0.0
        }
    }

    /// Lowercase label, as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidInput(format!(
                "Unknown option type: {}. Supported: call, put",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_call_intrinsic() {
        assert_relative_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Call.intrinsic(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_put_intrinsic() {
        assert_relative_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_intrinsic_propagates_nan() {
        assert!(OptionType::Call.intrinsic(f64::NAN, 100.0).is_nan());
        assert!(OptionType::Put.intrinsic(100.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" Put ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("c".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!("straddle".parse::<OptionType>().is_err());

        assert_eq!(OptionType::Call.to_string(), "call");
        assert_eq!(OptionType::Put.to_string(), "put");
    }

    #[test]
    fn test_default_is_call() {
        assert_eq!(OptionType::default(), OptionType::Call);
    }

    proptest! {
        #[test]
        fn prop_intrinsic_non_negative(spot in 0.01f64..1000.0, strike in 0.01f64..1000.0) {
            prop_assert!(OptionType::Call.intrinsic(spot, strike) >= 0.0);
            prop_assert!(OptionType::Put.intrinsic(spot, strike) >= 0.0);
        }

        #[test]
        fn prop_call_minus_put_is_forward(spot in 0.01f64..1000.0, strike in 0.01f64..1000.0) {
            let diff = OptionType::Call.intrinsic(spot, strike) - OptionType::Put.intrinsic(spot, strike);
            prop_assert!((diff - (spot - strike)).abs() < 1e-9);
        }
    }
}
