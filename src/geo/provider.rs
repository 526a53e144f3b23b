//! Provider table and adapter construction options

use crate::constants::api::{MAPQUEST_URL, OPENSTREETMAP_URL, REVERSE_PATH, SEARCH_PATH};
use crate::constants::params::MAPQUEST_KEY;
use crate::error::{Error, Result};
use crate::geo::Params;
use crate::http::HttpAdapter;
use serde_json::Value;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

/// Supported geocoding services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Free public Nominatim instance (or a self-hosted one)
    OpenStreetMap,
    /// MapQuest's commercial Nominatim proxy
    Mapquest,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::OpenStreetMap, Provider::Mapquest];

    /// Config/CLI name
    pub fn name(self) -> &'static str {
        match self {
            Provider::OpenStreetMap => "openstreetmap",
            Provider::Mapquest => "mapquest",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Provider::OpenStreetMap => "OpenStreetMap Nominatim (free, no key)",
            Provider::Mapquest => "MapQuest Nominatim proxy (requires API key)",
        }
    }

    /// Base URL the endpoint paths are appended to
    pub fn base_url(self) -> &'static str {
        match self {
            Provider::OpenStreetMap => OPENSTREETMAP_URL,
            Provider::Mapquest => MAPQUEST_URL,
        }
    }

    /// Name of the query parameter carrying the API key, if one is needed
    pub fn credential_param(self) -> Option<&'static str> {
        match self {
            Provider::OpenStreetMap => None,
            Provider::Mapquest => Some(MAPQUEST_KEY),
        }
    }

    pub fn requires_api_key(self) -> bool {
        self.credential_param().is_some()
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "openstreetmap" | "osm" => Ok(Provider::OpenStreetMap),
            "mapquest" | "nominatimmapquest" => Ok(Provider::Mapquest),
            other => Err(Error::UnknownProvider(other.to_string())),
        }
    }
}

/// Geocode/reverse URL pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub search: String,
    pub reverse: String,
}

impl Endpoints {
    /// Derive both endpoints from a base URL
    pub fn for_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            search: format!("{}{}", base, SEARCH_PATH),
            reverse: format!("{}{}", base, REVERSE_PATH),
        }
    }
}

/// Options captured once at adapter construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    /// Required by commercial providers, ignored by free ones
    pub api_key: Option<String>,
    /// Defaults merged into every request; caller values win
    pub extra: Params,
    /// Base URL override for self-hosted Nominatim instances
    pub server: Option<String>,
}

impl ProviderConfig {
    /// The configured key, treating an empty string as absent
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// Construction hook used by [`GeocoderBuilder`]
pub trait BuildGeocoder: Sized {
    fn assemble(http: Option<Arc<dyn HttpAdapter>>, config: ProviderConfig) -> Result<Self>;
}

/// Fluent construction for provider adapters
pub struct GeocoderBuilder<G> {
    http: Option<Arc<dyn HttpAdapter>>,
    config: ProviderConfig,
    _geocoder: PhantomData<G>,
}

impl<G: BuildGeocoder> GeocoderBuilder<G> {
    pub fn new() -> Self {
        Self {
            http: None,
            config: ProviderConfig::default(),
            _geocoder: PhantomData,
        }
    }

    pub fn http_adapter(mut self, http: Arc<dyn HttpAdapter>) -> Self {
        self.http = Some(http);
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Add one default request parameter
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.extra.insert(key.into(), value.into());
        self
    }

    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.config.server = Some(server.into());
        self
    }

    /// Replace all options at once
    pub fn config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<G> {
        G::assemble(self.http, self.config)
    }
}

impl<G: BuildGeocoder> Default for GeocoderBuilder<G> {
    fn default() -> Self {
        Self::new()
    }
}
