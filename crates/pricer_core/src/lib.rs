//! # pricer_core: Foundation Types for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Option type with intrinsic value (`types::option`)
//! - Error types: `PricingError` (`types::error`)
//! - Standard normal distribution functions (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - libm: `erf` ported from the FreeBSD/musl math library
//! - thiserror: error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::OptionType;
//!
//! let call = OptionType::Call;
//! assert_eq!(call.intrinsic(110.0, 100.0), 10.0);
//! assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
