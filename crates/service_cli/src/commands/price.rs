//! Price command implementation
//!
//! Prices a single European option and optionally the chain around it.

use std::io::{self, Write};

use pricer_core::types::PricingError;
use pricer_models::instruments::{LatticeConfig, PricingRequest, SimulationConfig};
use pricer_models::models::PricingModel;
use pricer_pricing::{generate_chain, price_with_model};
use tracing::{info, warn};

use super::{output, validation};
use crate::config::CliConfig;
use crate::Result;

/// Run the price command
pub fn run(
    request: &PricingRequest,
    model: PricingModel,
    config: &CliConfig,
    with_chain: bool,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(request, model, config, with_chain, &mut out)
}

/// Run the price command, writing results to `out`
pub fn run_to<W: Write>(
    request: &PricingRequest,
    model: PricingModel,
    config: &CliConfig,
    with_chain: bool,
    out: &mut W,
) -> Result<()> {
    validation::check_request(request)?;
    match model {
        PricingModel::BinomialTree => {
            validation::check_lattice(&LatticeConfig::new(*request, config.steps))?
        }
        PricingModel::MonteCarlo => {
            validation::check_simulation(&SimulationConfig::new(*request, config.simulations))?
        }
        PricingModel::BlackScholes => {}
    }

    info!(
        model = %model,
        option_type = %request.option_type,
        spot = request.spot,
        strike = request.strike,
        expiry = request.expiry,
        rate = request.rate,
        volatility = request.volatility,
        "pricing option"
    );

    let price = price_with_model(model, request, config.steps, config.simulations);
    if !price.is_finite() {
        warn!(price, "pricer returned a non-finite value");
        return Err(PricingError::numerical(format!("{} price is {}", model, price)).into());
    }

    writeln!(out, "{}", output::price_line(request.option_type, model, price))?;

    if with_chain {
        let chain = generate_chain(
            request.spot,
            request.expiry,
            request.rate,
            request.volatility,
            model,
            request.option_type,
            config.strikes,
        );
        output::write_chain(&chain, config.format, out)?;
    }

    info!("Pricing complete");
    Ok(())
}
