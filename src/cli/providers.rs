//! Providers command handler
//!
//! Lists geocoding providers and output formats.

use crate::config::Config;
use crate::error::Result;
use crate::format::available_formats;
use crate::geo::available_providers;
use clap::Args;

/// Providers command arguments
#[derive(Args)]
pub struct ProvidersArgs {
    /// Also list output formats
    #[arg(long, short = 'F')]
    pub formats: bool,
}

/// Run the providers command
pub fn run(args: ProvidersArgs) -> Result<()> {
    let config = Config::load()?;

    println!("Providers:");
    for info in available_providers() {
        let marker = if info.name == config.geocoder.provider { "*" } else { " " };
        let key_note = if info.requires_api_key { " [api key]" } else { "" };
        println!("  {} {:<14} {}{}", marker, info.name, info.description, key_note);
    }

    if args.formats {
        println!();
        println!("Formats:");
        for info in available_formats() {
            println!("    {:<14} {}", info.name, info.description);
        }
    }

    Ok(())
}
