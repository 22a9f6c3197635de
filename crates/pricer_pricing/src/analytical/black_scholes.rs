//! Black-Scholes pricing for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! No special-casing of T → 0 or σ → 0: the division by σ√T is left to
//! produce inf/NaN, which the caller is expected to prevent.

use pricer_core::math::distributions::norm_cdf;
use pricer_core::types::OptionType;
use pricer_models::instruments::PricingRequest;
use tracing::trace;

/// Computes the d1 term of the Black-Scholes formula.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
#[inline]
pub fn d1(request: &PricingRequest) -> f64 {
    let PricingRequest {
        spot,
        strike,
        expiry,
        rate,
        volatility,
        ..
    } = *request;

    ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * expiry)
        / (volatility * expiry.sqrt())
}

/// Computes the d2 term of the Black-Scholes formula.
///
/// d₂ = d₁ - σ√T
#[inline]
pub fn d2(request: &PricingRequest) -> f64 {
    d1(request) - request.volatility * request.expiry.sqrt()
}

/// Computes the European option price for the request's option type.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_models::instruments::PricingRequest;
/// use pricer_pricing::analytical::black_scholes::price;
///
/// let call = PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// let put = call.with_option_type(OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = price(&call) - price(&put) - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
pub fn price(request: &PricingRequest) -> f64 {
    let d1 = d1(request);
    let d2 = d1 - request.volatility * request.expiry.sqrt();
    let discounted_strike = request.strike * request.discount_factor();

    let value = match request.option_type {
        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        OptionType::Call => request.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        OptionType::Put => discounted_strike * norm_cdf(-d2) - request.spot * norm_cdf(-d1),
    };

    trace!(
        strike = request.strike,
        option_type = %request.option_type,
        d1,
        d2,
        value,
        "black-scholes price"
    );
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn atm(option_type: OptionType) -> PricingRequest {
        PricingRequest::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type)
    }

    #[test]
    fn test_atm_call_reference() {
        // Hull reference value 10.4506
        assert_abs_diff_eq!(price(&atm(OptionType::Call)), 10.450583572185565, epsilon = 1e-10);
    }

    #[test]
    fn test_atm_put_reference() {
        assert_abs_diff_eq!(price(&atm(OptionType::Put)), 5.573526022256971, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_d2() {
        let request = atm(OptionType::Call);
        // d1 = (0 + 0.07) / 0.2 = 0.35
        assert_relative_eq!(d1(&request), 0.35, epsilon = 1e-12);
        assert_relative_eq!(d2(&request), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_atm_parity_difference() {
        let diff = price(&atm(OptionType::Call)) - price(&atm(OptionType::Put));
        assert_abs_diff_eq!(diff, 100.0 - 100.0 * (-0.05_f64).exp(), epsilon = 1e-10);
        assert_abs_diff_eq!(diff, 4.88, epsilon = 0.01);
    }

    #[test]
    fn test_deep_itm_call_approaches_forward_intrinsic() {
        let request = PricingRequest::new(400.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        let intrinsic = 400.0 - 100.0 * (-0.05_f64).exp();
        assert_abs_diff_eq!(price(&request), intrinsic, epsilon = 1e-6);
    }

    #[test]
    fn test_deep_otm_call_is_near_zero() {
        let request = PricingRequest::new(50.0, 100.0, 0.25, 0.05, 0.2, OptionType::Call);
        let value = price(&request);
        assert!(value >= 0.0);
        assert!(value < 1e-6);
    }

    #[test]
    fn test_zero_volatility_is_not_guarded() {
        let request = PricingRequest {
            volatility: 0.0,
            ..atm(OptionType::Call)
        };
        // r·T divided by σ√T = 0
        assert!(d1(&request).is_infinite());
    }

    #[test]
    fn test_zero_expiry_produces_nan() {
        let request = PricingRequest {
            expiry: 0.0,
            ..atm(OptionType::Call)
        };
        // 0/0 in d1 for an at-the-money request
        assert!(d1(&request).is_nan());
        assert!(price(&request).is_nan());
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 1.0f64..500.0,
            strike in 1.0f64..500.0,
            expiry in 0.01f64..5.0,
            rate in 0.0f64..1.0,
            volatility in 0.01f64..1.0,
        ) {
            let call = PricingRequest::new(spot, strike, expiry, rate, volatility, OptionType::Call);
            let put = call.with_option_type(OptionType::Put);
            let lhs = price(&call) - price(&put);
            let rhs = spot - strike * (-rate * expiry).exp();
            let scale = spot.max(strike);
            prop_assert!((lhs - rhs).abs() <= 1e-6 * scale, "lhs={} rhs={}", lhs, rhs);
        }

        #[test]
        fn prop_call_increases_with_spot(
            spot in 10.0f64..200.0,
            bump in 0.1f64..10.0,
            volatility in 0.05f64..1.0,
        ) {
            let low = PricingRequest::new(spot, 100.0, 1.0, 0.05, volatility, OptionType::Call);
            let high = PricingRequest { spot: spot + bump, ..low };
            prop_assert!(price(&high) >= price(&low) - 1e-12);
        }
    }
}
