//! Check command implementation
//!
//! Prints the resolved configuration as TOML.

use std::io::{self, Write};

use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &CliConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(config, &mut out)
}

/// Run the check command, writing results to `out`
pub fn run_to<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    let rendered =
        toml::to_string_pretty(config).map_err(|e| CliError::Serialisation(e.to_string()))?;

    writeln!(out, "# optionlab {}", env!("CARGO_PKG_VERSION"))?;
    write!(out, "{}", rendered)?;
    Ok(())
}
