//! geocoder: Multi-Provider Geocoding
//!
//! A library and CLI tool that queries third-party geocoding services and
//! returns results in one normalized schema, whatever the provider.
//!
//! ## Features
//!
//! - OpenStreetMap Nominatim and MapQuest Nominatim providers
//! - Free-form and structured address queries, reverse geocoding
//! - Uniform [`Location`] fields; missing values are empty strings
//! - Injected HTTP adapter (reqwest by default)
//! - Await a lookup or hand it a callback
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use geocoder::geo::{Geocoder, OpenStreetMapGeocoder};
//! use geocoder::http::ReqwestAdapter;
//! use std::sync::Arc;
//!
//! # async fn demo() -> geocoder::Result<()> {
//! let osm = OpenStreetMapGeocoder::builder()
//!     .http_adapter(Arc::new(ReqwestAdapter::new()?))
//!     .build()?;
//!
//! let results = osm.geocode("12 Ngô Quyền, Hà Nội".into())?.await?;
//! for location in &results {
//!     println!("{} ({}, {})", location.formatted_address, location.latitude, location.longitude);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod geo;
pub mod http;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use geo::{Coordinates, Geocoder, Location, Lookup, Provider, ProviderConfig, Query, ResultSet};
pub use http::HttpAdapter;
