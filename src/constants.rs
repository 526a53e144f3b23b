//! Centralized constants for the geocoder crate
//!
//! Endpoint table and the request parameters every provider adapter owns.

/// External API endpoints
pub mod api {
    /// Free OpenStreetMap Nominatim instance
    pub const OPENSTREETMAP_URL: &str = "http://nominatim.openstreetmap.org";

    /// MapQuest-hosted Nominatim proxy (requires API key)
    pub const MAPQUEST_URL: &str = "http://open.mapquestapi.com/nominatim/v1";

    /// Forward geocoding path, appended to a base URL
    pub const SEARCH_PATH: &str = "/search";

    /// Reverse geocoding path, appended to a base URL
    pub const REVERSE_PATH: &str = "/reverse";
}

/// Request parameter names and forced values
pub mod params {
    /// Response format parameter
    pub const FORMAT: &str = "format";

    /// Always request JSON
    pub const FORMAT_JSON: &str = "json";

    /// Address breakdown parameter
    pub const ADDRESS_DETAILS: &str = "addressdetails";

    /// Free-text query parameter
    pub const QUERY: &str = "q";

    pub const LAT: &str = "lat";

    pub const LON: &str = "lon";

    /// MapQuest credential parameter
    pub const MAPQUEST_KEY: &str = "key";
}

/// User-Agent sent by the default HTTP adapter
pub const USER_AGENT: &str = concat!("geocoder/", env!("CARGO_PKG_VERSION"));
