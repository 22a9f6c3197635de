//! CLI command implementations
//!
//! Each command module exposes `run`, which writes to stdout, and `run_to`,
//! which writes to any [`std::io::Write`] so output can be tested.

pub mod chain;
pub mod check;
pub mod output;
pub mod price;
pub mod validation;
