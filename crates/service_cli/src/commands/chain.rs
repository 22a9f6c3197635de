//! Chain command implementation

use std::io::{self, Write};

use pricer_core::types::OptionType;
use pricer_models::models::PricingModel;
use pricer_pricing::generate_chain;
use tracing::info;

use super::{output, validation};
use crate::config::CliConfig;
use crate::Result;

/// Market inputs shared by every strike of a chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainInputs {
    /// Current underlying price
    pub spot: f64,
    /// Time to expiry in years
    pub expiry: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub volatility: f64,
}

/// Run the chain command
pub fn run(
    inputs: ChainInputs,
    model: PricingModel,
    option_type: OptionType,
    config: &CliConfig,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(inputs, model, option_type, config, &mut out)
}

/// Run the chain command, writing results to `out`
pub fn run_to<W: Write>(
    inputs: ChainInputs,
    model: PricingModel,
    option_type: OptionType,
    config: &CliConfig,
    out: &mut W,
) -> Result<()> {
    validation::check_market(inputs.spot, inputs.expiry, inputs.rate, inputs.volatility)?;

    info!(
        model = %model,
        option_type = %option_type,
        strikes = config.strikes,
        format = %config.format,
        "generating option chain"
    );

    let chain = generate_chain(
        inputs.spot,
        inputs.expiry,
        inputs.rate,
        inputs.volatility,
        model,
        option_type,
        config.strikes,
    );
    output::write_chain(&chain, config.format, out)
}
