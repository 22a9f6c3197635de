//! Single-price dispatch over [`PricingModel`].

use pricer_models::instruments::{LatticeConfig, PricingRequest, SimulationConfig};
use pricer_models::models::PricingModel;

use crate::{analytical, lattice, mc};

/// Prices `request` with the selected engine.
///
/// `steps` is used only by [`PricingModel::BinomialTree`] and `n_paths` only
/// by [`PricingModel::MonteCarlo`] (which always uses the default seed).
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::PricingRequest;
/// use pricer_models::models::PricingModel;
/// use pricer_pricing::price_with_model;
///
/// let request = PricingRequest::default();
/// for model in PricingModel::ALL {
///     let value = price_with_model(model, &request, 200, 50_000);
///     assert!((value - 10.45).abs() < 0.3, "{} gave {}", model, value);
/// }
/// ```
pub fn price_with_model(
    model: PricingModel,
    request: &PricingRequest,
    steps: usize,
    n_paths: usize,
) -> f64 {
    match model {
        PricingModel::BlackScholes => analytical::black_scholes::price(request),
        PricingModel::BinomialTree => {
            lattice::binomial::price(&LatticeConfig::new(*request, steps))
        }
        PricingModel::MonteCarlo => mc::price(&SimulationConfig::new(*request, n_paths)),
    }
}
