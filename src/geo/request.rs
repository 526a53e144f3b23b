//! Request construction
//!
//! Parameters are layered in a fixed order: provider defaults, then caller
//! values, then the parameters the adapter owns (`format`, `addressdetails`,
//! credential). The last layer always wins so the normalizer can rely on a
//! JSON response with an address breakdown.

use crate::constants::params::{ADDRESS_DETAILS, FORMAT, FORMAT_JSON, LAT, LON, QUERY};
use crate::geo::{Coordinates, Params, Query};
use serde_json::Value;

/// Fully built provider request
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRequest {
    pub url: String,
    pub params: Params,
}

/// API key and the parameter name it travels under
#[derive(Debug, Clone, Copy)]
pub struct Credential<'a> {
    pub param: &'static str,
    pub value: &'a str,
}

/// Build a forward geocoding request
pub fn build_geocode_request(
    url: &str,
    query: &Query,
    defaults: &Params,
    credential: Option<Credential<'_>>,
) -> GeoRequest {
    let mut params = defaults.clone();

    match query {
        Query::Text(text) => {
            params.insert(QUERY.to_string(), Value::from(text.as_str()));
        }
        Query::Structured(fields) => {
            params.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }

    force_params(&mut params, credential);

    GeoRequest {
        url: url.to_string(),
        params,
    }
}

/// Build a reverse geocoding request
pub fn build_reverse_request(
    url: &str,
    coords: &Coordinates,
    defaults: &Params,
    credential: Option<Credential<'_>>,
) -> GeoRequest {
    let mut params = defaults.clone();
    params.extend(coords.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    params.insert(LAT.to_string(), Value::from(coords.lat));
    params.insert(LON.to_string(), Value::from(coords.lon));

    force_params(&mut params, credential);

    GeoRequest {
        url: url.to_string(),
        params,
    }
}

fn force_params(params: &mut Params, credential: Option<Credential<'_>>) {
    params.insert(FORMAT.to_string(), Value::from(FORMAT_JSON));
    params.insert(ADDRESS_DETAILS.to_string(), Value::from(1));
    if let Some(credential) = credential {
        params.insert(credential.param.to_string(), Value::from(credential.value));
    }
}
