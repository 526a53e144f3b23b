//! MapQuest Nominatim geocoder
//!
//! Commercial proxy in front of the OpenStreetMap dataset. Every request
//! carries the API key as `key`.

use crate::error::{Error, Result};
use crate::geo::lookup::{Direction, Lookup};
use crate::geo::provider::{BuildGeocoder, Endpoints, GeocoderBuilder, Provider, ProviderConfig};
use crate::geo::request::{build_geocode_request, build_reverse_request, Credential};
use crate::geo::validate::{validate, validate_coordinates};
use crate::geo::{Coordinates, Geocoder, Params, Query};
use crate::http::HttpAdapter;
use std::sync::Arc;

const NAME: &str = "NominatimMapquestGeocoder";
const PROVIDER: Provider = Provider::Mapquest;

/// MapQuest Nominatim adapter
pub struct MapquestGeocoder {
    http: Arc<dyn HttpAdapter>,
    api_key: String,
    extra: Params,
    endpoints: Endpoints,
}

impl MapquestGeocoder {
    /// Create an adapter
    ///
    /// The HTTP adapter is checked first, then the API key.
    pub fn new(http: Option<Arc<dyn HttpAdapter>>, config: ProviderConfig) -> Result<Self> {
        let http = http.ok_or(Error::MissingDependency { provider: NAME })?;
        let api_key = config
            .api_key()
            .ok_or(Error::MissingCredential { provider: NAME })?
            .to_string();

        Ok(Self {
            http,
            api_key,
            extra: config.extra,
            endpoints: Endpoints::for_base(PROVIDER.base_url()),
        })
    }

    pub fn builder() -> GeocoderBuilder<Self> {
        GeocoderBuilder::new()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn credential(&self) -> Option<Credential<'_>> {
        PROVIDER.credential_param().map(|param| Credential {
            param,
            value: &self.api_key,
        })
    }
}

impl BuildGeocoder for MapquestGeocoder {
    fn assemble(http: Option<Arc<dyn HttpAdapter>>, config: ProviderConfig) -> Result<Self> {
        Self::new(http, config)
    }
}

impl Geocoder for MapquestGeocoder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn geocode(&self, query: Query) -> Result<Lookup> {
        validate(NAME, &query)?;

        let request =
            build_geocode_request(&self.endpoints.search, &query, &self.extra, self.credential());
        Ok(Lookup::new(NAME, Direction::Forward, request, Arc::clone(&self.http)))
    }

    fn reverse(&self, coords: Coordinates) -> Result<Lookup> {
        validate_coordinates(&coords)?;

        let request =
            build_reverse_request(&self.endpoints.reverse, &coords, &self.extra, self.credential());
        Ok(Lookup::new(NAME, Direction::Reverse, request, Arc::clone(&self.http)))
    }
}

impl std::fmt::Debug for MapquestGeocoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(NAME)
            .field("api_key", &"***")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}
