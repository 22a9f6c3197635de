//! Static dispatch enum for pricing models.
//!
//! `PricingModel` selects one of the three engines. Using a closed enum
//! instead of string labels turns an unknown model into a parse error at
//! the boundary rather than a silent fall-through.
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::PricingModel;
//!
//! let model: PricingModel = "Binomial Tree".parse().unwrap();
//! assert_eq!(model, PricingModel::BinomialTree);
//! assert_eq!(model.to_string(), "Binomial Tree");
//! assert_eq!("mc".parse::<PricingModel>().unwrap(), PricingModel::MonteCarlo);
//! ```

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

/// Pricing engine selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PricingModel {
    /// Closed-form Black-Scholes.
    #[default]
    BlackScholes,
    /// Cox-Ross-Rubinstein binomial lattice.
    BinomialTree,
    /// Seeded Monte Carlo under risk-neutral GBM.
    MonteCarlo,
}

impl PricingModel {
    /// All models, in display order.
    pub const ALL: [PricingModel; 3] = [
        PricingModel::BlackScholes,
        PricingModel::BinomialTree,
        PricingModel::MonteCarlo,
    ];

    /// Human-readable model name.
    pub fn model_name(&self) -> &'static str {
        match self {
            PricingModel::BlackScholes => "Black-Scholes",
            PricingModel::BinomialTree => "Binomial Tree",
            PricingModel::MonteCarlo => "Monte Carlo",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_name())
    }
}

impl FromStr for PricingModel {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalised.as_str() {
            "black-scholes" | "bs" | "analytic" => Ok(PricingModel::BlackScholes),
            "binomial-tree" | "binomial" | "crr" | "lattice" => Ok(PricingModel::BinomialTree),
            "monte-carlo" | "mc" | "simulation" => Ok(PricingModel::MonteCarlo),
            _ => Err(PricingError::unsupported_model(format!(
                "{}. Supported: black-scholes, binomial-tree, monte-carlo",
                s
            ))),
        }
    }
}
