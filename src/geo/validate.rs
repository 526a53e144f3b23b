//! Input validation for geocode queries and reverse coordinates
//!
//! Runs before any request is built. IP literals are rejected outright;
//! geocoding an address never falls back to IP geolocation.

use crate::error::{Error, IpKind, Result};
use crate::geo::{Coordinates, Query};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Reject text queries that are IPv4 or IPv6 literals
///
/// Structured queries have no literal to test and always pass.
pub fn validate(provider: &'static str, query: &Query) -> Result<()> {
    let Some(text) = query.as_text() else {
        return Ok(());
    };

    if let Some(kind) = ip_kind(text) {
        return Err(Error::UnsupportedQueryKind { provider, kind });
    }

    Ok(())
}

/// Reject coordinates that cannot be sent as `lat`/`lon`
pub fn validate_coordinates(coords: &Coordinates) -> Result<()> {
    if !coords.lat.is_finite() || !coords.lon.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "coordinates must be finite, got ({}, {})",
            coords.lat, coords.lon
        )));
    }

    Ok(())
}

fn ip_kind(text: &str) -> Option<IpKind> {
    let text = text.trim();
    if text.parse::<Ipv4Addr>().is_ok() {
        return Some(IpKind::V4);
    }

    // [addr] and addr%zone are both IPv6 literals
    let unbracketed = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text);
    let addr = unbracketed
        .split_once('%')
        .map_or(unbracketed, |(addr, _zone)| addr);

    addr.parse::<Ipv6Addr>().ok().map(|_| IpKind::V6)
}
