//! Pricing model identifiers.
//!
//! [`PricingModel`] names the engine used for a single price or a chain.

mod model_enum;

pub use model_enum::PricingModel;
