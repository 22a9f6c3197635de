//! Mathematical building blocks shared by the pricing engines.
//!
//! - [`distributions`]: error function and standard normal CDF

pub mod distributions;

pub use distributions::{erf, norm_cdf};
