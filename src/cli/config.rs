//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "geocoder.provider" or "extra.zoom")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,

    /// Remove a request default (e.g. --unset extra.zoom)
    #[arg(long, conflicts_with_all = ["key", "value"])]
    pub unset: Option<String>,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    // Show path
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    // Reset config
    if args.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    if let Some(key) = &args.unset {
        let name = key.strip_prefix("extra.").unwrap_or(key);
        if config.extra.remove(name).is_some() {
            config.save()?;
            println!("removed extra.{}", name);
        } else {
            eprintln!("extra.{} is not set", name);
        }
        return Ok(());
    }

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            show_all_config(&config);
        }

        // Key only: show that value
        (Some(key), None) => {
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                eprintln!("Unknown config key: {}", key);
                eprintln!("\nAvailable keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                std::process::exit(1);
            }
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            eprintln!("Error: Must specify a key to set a value");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[geocoder]");
    println!("provider = \"{}\"", config.geocoder.provider);
    println!("server = \"{}\"", config.geocoder.server);
    println!("timeout_secs = {}", config.geocoder.timeout_secs);
    println!();

    println!("[output]");
    println!("format = \"{}\"", config.output.format);
    println!();

    println!("[api_keys]");
    if config.api_keys.mapquest.is_empty() {
        println!("mapquest = \"\" # not configured");
    } else {
        println!("mapquest = \"***\" # configured");
    }
    println!();

    println!("[extra]");
    for (name, value) in &config.extra {
        println!("{} = {}", name, value);
    }
}
