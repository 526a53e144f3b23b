//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod geocode;
pub mod providers;
pub mod reverse;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::get_formatter;
use crate::geo::{get_geocoder, Geocoder, Provider, ResultSet};
use crate::http::ReqwestAdapter;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Multi-provider geocoding client
#[derive(Parser)]
#[command(name = "geocoder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log requests and responses to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up coordinates for an address
    Geocode(geocode::GeocodeArgs),

    /// Look up the address at a point
    Reverse(reverse::ReverseArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// List providers and output formats
    Providers(providers::ProvidersArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Geocode(args) => geocode::run(args).await,
        Commands::Reverse(args) => reverse::run(args).await,
        Commands::Config(args) => config::run(args),
        Commands::Providers(args) => providers::run(args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Build the configured geocoder, optionally overriding the provider
fn build_geocoder(config: &Config, provider: Option<&str>) -> Result<Box<dyn Geocoder>> {
    let provider: Provider = match provider {
        Some(name) => name.parse()?,
        None => config.provider()?,
    };

    let http = Arc::new(ReqwestAdapter::with_timeout(config.timeout())?);
    get_geocoder(provider, http, config.provider_config(provider))
}

/// Print results using the named (or configured) format
fn print_results(config: &Config, format: Option<&str>, results: &ResultSet) -> Result<()> {
    let name = format.unwrap_or(config.output.format.as_str());
    let formatter =
        get_formatter(name).ok_or_else(|| Error::InvalidArgument(format!("Unknown format: {}", name)))?;

    print!("{}", formatter.format(results)?);
    Ok(())
}

/// Parse a `key=value` request parameter
fn parse_param_arg(s: &str) -> std::result::Result<(String, Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;

    if key.is_empty() {
        return Err(format!("missing parameter name in '{}'", s));
    }

    Ok((key.to_string(), crate::config::parse_param(value)))
}
