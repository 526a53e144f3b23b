//! HTTP adapter capability
//!
//! Provider adapters never talk to the network directly. They hand a URL and
//! a parameter map to an injected [`HttpAdapter`], which owns transport
//! concerns (TLS, timeouts, retries) and JSON decoding.

pub mod recording;
pub mod reqwest_adapter;

use crate::geo::Params;
use async_trait::async_trait;
use serde_json::Value;

pub use recording::{RecordedCall, RecordingAdapter};
pub use reqwest_adapter::ReqwestAdapter;

/// Opaque transport failure reported by an [`HttpAdapter`]
pub type HttpError = Box<dyn std::error::Error + Send + Sync>;

/// Performs GET requests on behalf of provider adapters
///
/// Implementations must be thread-safe so one instance can be shared by
/// several geocoders and used from spawned tasks.
#[async_trait]
pub trait HttpAdapter: Send + Sync {
    /// Issue a GET to `url` with `params` encoded as the query string
    ///
    /// Returns the decoded JSON body.
    async fn get(&self, url: &str, params: &Params) -> std::result::Result<Value, HttpError>;
}

/// Flatten a parameter map into query-string pairs
///
/// Strings are sent verbatim, other scalars as their JSON text. Nulls are skipped.
pub fn query_pairs(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), value)
        })
        .collect()
}
