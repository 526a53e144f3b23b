//! Geocode queries and reverse-geocode coordinates

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request parameter map, sorted by key
pub type Params = serde_json::Map<String, Value>;

/// A forward geocoding query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    /// Free-form address, sent as `q`
    Text(String),
    /// Structured search (`street`, `city`, `country`, `limit`, ...)
    Structured(Params),
}

impl Query {
    /// Build a structured query from key/value pairs
    pub fn structured<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Query::Structured(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// The free-form text, if this is a text query
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Query::Text(text) => Some(text),
            Query::Structured(_) => None,
        }
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query::Text(text.to_string())
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Query::Text(text)
    }
}

impl From<Params> for Query {
    fn from(params: Params) -> Self {
        Query::Structured(params)
    }
}

/// WGS84 point to reverse geocode, plus provider extras such as `zoom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
    /// Forwarded verbatim to the provider
    #[serde(flatten)]
    pub extra: Params,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            extra: Params::new(),
        }
    }

    /// Add an extra request parameter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
