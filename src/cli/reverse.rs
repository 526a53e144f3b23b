//! Reverse command handler
//!
//! Resolves a point to the address at that location.

use crate::config::Config;
use crate::error::Result;
use crate::geo::Coordinates;
use clap::Args;
use serde_json::Value;

/// Reverse command arguments
#[derive(Args)]
pub struct ReverseArgs {
    /// Latitude (WGS84 degrees)
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude (WGS84 degrees)
    #[arg(allow_negative_numbers = true)]
    pub lon: f64,

    /// Level of detail (Nominatim zoom, 0-18)
    #[arg(long, short = 'z')]
    pub zoom: Option<u8>,

    /// Extra request parameter (e.g. accept-language=vi)
    #[arg(long = "param", short = 'P', value_parser = super::parse_param_arg)]
    pub params: Vec<(String, Value)>,

    /// Provider (overrides config)
    #[arg(long, short = 'p')]
    pub provider: Option<String>,

    /// Output format: text, json or raw
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

impl ReverseArgs {
    pub fn to_coordinates(&self) -> Coordinates {
        let mut coords = Coordinates::new(self.lat, self.lon);
        for (key, value) in &self.params {
            coords = coords.with(key.clone(), value.clone());
        }
        if let Some(zoom) = self.zoom {
            coords = coords.with("zoom", zoom);
        }
        coords
    }
}

/// Run the reverse command
pub async fn run(args: ReverseArgs) -> Result<()> {
    let config = Config::load()?;
    let coords = args.to_coordinates();

    let geocoder = super::build_geocoder(&config, args.provider.as_deref())?;
    let results = geocoder.reverse(coords)?.await?;

    super::print_results(&config, args.format.as_deref(), &results)
}
