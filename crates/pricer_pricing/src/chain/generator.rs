//! Chain pricing over a strike grid.

use pricer_core::types::OptionType;
use pricer_models::instruments::{PricingRequest, DEFAULT_LATTICE_STEPS, DEFAULT_SIMULATION_PATHS};
use pricer_models::models::PricingModel;
use tracing::debug;

use super::strikes::strike_grid;
use crate::dispatch::price_with_model;

/// Number of strikes when the caller does not choose one.
pub const DEFAULT_STRIKE_COUNT: usize = 10;

/// Lattice steps used for every chain entry priced on a binomial tree.
pub const CHAIN_LATTICE_STEPS: usize = DEFAULT_LATTICE_STEPS;

/// Paths used for every chain entry priced by Monte Carlo.
pub const CHAIN_SIMULATION_PATHS: usize = DEFAULT_SIMULATION_PATHS;

/// One priced strike.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainEntry {
    /// Strike price.
    pub strike: f64,
    /// Option value at that strike.
    pub price: f64,
}

/// Prices for one option type and one engine across ascending strikes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionChain {
    model: PricingModel,
    option_type: OptionType,
    entries: Vec<ChainEntry>,
}

impl OptionChain {
    /// Engine used for every entry.
    #[inline]
    pub fn model(&self) -> PricingModel {
        self.model
    }

    /// Option type shared by every entry.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Entries ordered by strike.
    #[inline]
    pub fn entries(&self) -> &[ChainEntry] {
        &self.entries
    }

    /// Number of strikes.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the chain has no strikes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, ChainEntry> {
        self.entries.iter()
    }

    /// Strikes, in chain order.
    pub fn strikes(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.strike).collect()
    }

    /// Prices, in chain order.
    pub fn prices(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.price).collect()
    }
}

impl<'a> IntoIterator for &'a OptionChain {
    type Item = &'a ChainEntry;
    type IntoIter = std::slice::Iter<'a, ChainEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Prices `strike_count` options across `[0.8·spot, 1.2·spot]`.
///
/// Every entry is priced with [`CHAIN_LATTICE_STEPS`] or
/// [`CHAIN_SIMULATION_PATHS`] as the model requires. Monte Carlo entries
/// each start from the default seed, so the same draws are reused across
/// strikes.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_models::models::PricingModel;
/// use pricer_pricing::chain::generate_chain;
///
/// let chain = generate_chain(100.0, 1.0, 0.05, 0.2, PricingModel::BinomialTree, OptionType::Put, 5);
/// assert_eq!(chain.len(), 5);
///
/// // Puts gain value as the strike rises
/// let prices = chain.prices();
/// assert!(prices.windows(2).all(|p| p[1] > p[0]));
/// ```
pub fn generate_chain(
    spot: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    model: PricingModel,
    option_type: OptionType,
    strike_count: usize,
) -> OptionChain {
    let base = PricingRequest::new(spot, spot, expiry, rate, volatility, option_type);

    let entries: Vec<ChainEntry> = strike_grid(spot, strike_count)
        .into_iter()
        .map(|strike| {
            let request = base.with_strike(strike);
            ChainEntry {
                strike,
                price: price_with_model(
                    model,
                    &request,
                    CHAIN_LATTICE_STEPS,
                    CHAIN_SIMULATION_PATHS,
                ),
            }
        })
        .collect();

    debug!(
        spot,
        model = %model,
        option_type = %option_type,
        strikes = entries.len(),
        "generated option chain"
    );

    OptionChain {
        model,
        option_type,
        entries,
    }
}

/// [`generate_chain`] with [`DEFAULT_STRIKE_COUNT`] strikes.
#[inline]
pub fn generate_default_chain(
    spot: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    model: PricingModel,
    option_type: OptionType,
) -> OptionChain {
    generate_chain(
        spot,
        expiry,
        rate,
        volatility,
        model,
        option_type,
        DEFAULT_STRIKE_COUNT,
    )
}
