//! # Pricer Models (L2: Definitions)
//!
//! Input records and model identifiers shared by the pricing engines.
//!
//! This crate provides:
//! - [`instruments::PricingRequest`]: market and contract parameters of a European option
//! - [`instruments::LatticeConfig`] / [`instruments::SimulationConfig`]: engine-specific extensions
//! - [`models::PricingModel`]: closed enum selecting one of the three engines
//!
//! ## Design Principles
//!
//! - **Plain value records**: `Copy`, immutable once built, no identity
//! - **Unchecked construction**: engines accept any values; `validate()` is
//!   the calling layer's responsibility
//! - **Enum-based model selection** for static dispatch

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod models;
