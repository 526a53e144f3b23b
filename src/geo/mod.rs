//! Geocoding module
//!
//! Provider adapters share one contract ([`Geocoder`]): validate the query,
//! build a provider-specific request, call the injected HTTP adapter and
//! normalize the response into [`Location`] values.
//!
//! ## Flex Point
//! Adding a provider requires:
//! 1. A variant in [`Provider`] with its endpoint and credential data
//! 2. `src/geo/{provider}.rs` implementing `Geocoder` and `BuildGeocoder`
//! 3. A match arm in [`get_geocoder`]

pub mod lookup;
pub mod mapquest;
pub mod normalize;
pub mod openstreetmap;
pub mod provider;
pub mod query;
pub mod request;
pub mod validate;

use crate::error::Result;
use crate::http::HttpAdapter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Deref;
use std::sync::Arc;

pub use lookup::{Direction, Lookup};
pub use mapquest::MapquestGeocoder;
pub use openstreetmap::OpenStreetMapGeocoder;
pub use provider::{BuildGeocoder, Endpoints, GeocoderBuilder, Provider, ProviderConfig};
pub use query::{Coordinates, Params, Query};
pub use request::GeoRequest;

/// A normalized geocoding result
///
/// Every field is present for every provider; values missing upstream are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Provider display name, verbatim
    pub formatted_address: String,
    pub country: String,
    /// Upper-case ISO 3166-1 alpha-2
    pub country_code: String,
    pub province: String,
    pub city: String,
    pub zipcode: String,
    pub street_name: String,
    pub street_number: String,
    pub suburb: String,
    pub quarter: String,
}

/// Ordered results of one lookup plus the untouched provider payload
///
/// Iterating yields only [`Location`]s; the payload is reachable through
/// [`ResultSet::raw`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    results: Vec<Location>,
    raw: Value,
}

impl ResultSet {
    pub fn new(results: Vec<Location>, raw: Value) -> Self {
        Self { results, raw }
    }

    /// The provider response exactly as received
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_parts(self) -> (Vec<Location>, Value) {
        (self.results, self.raw)
    }
}

impl Deref for ResultSet {
    type Target = [Location];

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}

impl IntoIterator for ResultSet {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Shared contract of all provider adapters
///
/// Both operations validate and build their request synchronously, so bad
/// input fails before anything is sent. The returned [`Lookup`] performs the
/// single HTTP call.
pub trait Geocoder: Send + Sync {
    /// Adapter name used in error messages
    fn name(&self) -> &'static str;

    /// Forward geocode a free-form or structured query
    fn geocode(&self, query: Query) -> Result<Lookup>;

    /// Reverse geocode a point
    fn reverse(&self, coords: Coordinates) -> Result<Lookup>;
}

/// Information about a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (used in config/CLI)
    pub name: String,
    /// Human-readable description
    pub description: String,
    pub requires_api_key: bool,
}

/// Build the adapter for `provider`
pub fn get_geocoder(
    provider: Provider,
    http: Arc<dyn HttpAdapter>,
    config: ProviderConfig,
) -> Result<Box<dyn Geocoder>> {
    match provider {
        Provider::OpenStreetMap => Ok(Box::new(OpenStreetMapGeocoder::new(Some(http), config)?)),
        Provider::Mapquest => Ok(Box::new(MapquestGeocoder::new(Some(http), config)?)),
    }
}

/// List all available providers with their info
pub fn available_providers() -> Vec<ProviderInfo> {
    Provider::ALL
        .iter()
        .map(|provider| ProviderInfo {
            name: provider.name().to_string(),
            description: provider.description().to_string(),
            requires_api_key: provider.requires_api_key(),
        })
        .collect()
}
