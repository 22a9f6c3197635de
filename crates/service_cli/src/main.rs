//! optionlab - European option pricing from the command line
//!
//! # Commands
//!
//! - `optionlab price` - Price one option with a chosen model, optionally with its chain
//! - `optionlab chain` - Price a strike ladder across 80%–120% of spot
//! - `optionlab check` - Print the resolved configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate owns input validation,
//! configuration and output formatting. Pricing itself is delegated to
//! `pricer_pricing`, which performs no validation of its own.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pricer_core::types::OptionType;
use pricer_models::instruments::PricingRequest;
use pricer_models::models::PricingModel;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::chain::ChainInputs;
use config::{build_config, CliArgs, LogLevel};

/// European option pricing with Black-Scholes, binomial tree and Monte Carlo models
#[derive(Parser)]
#[command(name = "optionlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Strike-independent market inputs
#[derive(Args, Debug, Clone, Copy)]
struct MarketArgs {
    /// Current stock price
    #[arg(short, long)]
    spot: f64,

    /// Time to expiration in years
    #[arg(short, long)]
    expiry: f64,

    /// Risk-free rate, e.g. 0.05
    #[arg(short, long, allow_negative_numbers = true)]
    rate: f64,

    /// Volatility (σ), e.g. 0.2
    #[arg(long, visible_alias = "sigma")]
    volatility: f64,

    /// Pricing model (black-scholes, binomial-tree, monte-carlo)
    #[arg(short, long, default_value = "black-scholes")]
    model: PricingModel,

    /// Option type (call, put)
    #[arg(short = 't', long, default_value = "call")]
    option_type: OptionType,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single option
    Price {
        #[command(flatten)]
        market: MarketArgs,

        /// Strike price
        #[arg(short = 'k', long)]
        strike: f64,

        /// Binomial tree steps
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Monte Carlo simulations
        #[arg(long)]
        simulations: Option<usize>,

        /// Also print the option chain around the spot price
        #[arg(long)]
        chain: bool,

        /// Number of strikes when printing the chain
        #[arg(long)]
        strikes: Option<usize>,

        /// Chain output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Price an option chain across strikes from 80% to 120% of spot
    Chain {
        #[command(flatten)]
        market: MarketArgs,

        /// Number of strikes
        #[arg(long)]
        strikes: Option<usize>,

        /// Output format (table, json, csv)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Check configuration
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            verbose: self.verbose,
            ..Default::default()
        };

        match &self.command {
            Commands::Price {
                steps,
                simulations,
                strikes,
                format,
                ..
            } => {
                args.steps = *steps;
                args.simulations = *simulations;
                args.strikes = *strikes;
                args.format = format.clone();
            }
            Commands::Chain {
                strikes, format, ..
            } => {
                args.strikes = *strikes;
                args.format = format.clone();
            }
            Commands::Check => {}
        }
        args
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli.config_args())?;

    init_tracing(config.log_level);
    debug!(
        log_level = %config.log_level,
        steps = config.steps,
        simulations = config.simulations,
        strikes = config.strikes,
        format = %config.format,
        "configuration loaded"
    );

    match cli.command {
        Commands::Price {
            market,
            strike,
            chain,
            ..
        } => {
            let request = PricingRequest::new(
                market.spot,
                strike,
                market.expiry,
                market.rate,
                market.volatility,
                market.option_type,
            );
            commands::price::run(&request, market.model, &config, chain)
        }
        Commands::Chain { market, .. } => {
            let inputs = ChainInputs {
                spot: market.spot,
                expiry: market.expiry,
                rate: market.rate,
                volatility: market.volatility,
            };
            commands::chain::run(inputs, market.model, market.option_type, &config)
        }
        Commands::Check => commands::check::run(&config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "command failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
