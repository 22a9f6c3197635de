//! Output formatting.

use std::io::Write;

use pricer_core::types::OptionType;
use pricer_models::models::PricingModel;
use pricer_pricing::OptionChain;

use crate::config::OutputFormat;
use crate::Result;

/// Formats a single price sentence, rounded to cents.
pub fn price_line(option_type: OptionType, model: PricingModel, price: f64) -> String {
    format!(
        "The {} option price using the {} model is: ${:.2}",
        option_type, model, price
    )
}

/// Writes `chain` to `out` in the requested format.
pub fn write_chain<W: Write>(chain: &OptionChain, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "Option Chain:")?;
            for entry in chain {
                writeln!(out, "Strike: {:.2}, Price: {:.2}", entry.strike, entry.price)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, chain)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for entry in chain {
                writer.serialize(entry)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
