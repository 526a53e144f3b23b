//! Pending geocoding lookups
//!
//! A [`Lookup`] is returned once a query has passed validation and its
//! request has been built. It is the single completion primitive behind both
//! calling conventions: await it directly, or hand it a callback with
//! [`Lookup::on_complete`].

use crate::error::{Error, Result};
use crate::geo::normalize::normalize;
use crate::geo::request::GeoRequest;
use crate::geo::ResultSet;
use crate::http::HttpAdapter;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Which way a lookup resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Address to coordinates
    Forward,
    /// Coordinates to address
    Reverse,
}

/// A built request waiting to be sent
pub struct Lookup {
    provider: &'static str,
    direction: Direction,
    request: GeoRequest,
    http: Arc<dyn HttpAdapter>,
}

impl Lookup {
    pub(crate) fn new(
        provider: &'static str,
        direction: Direction,
        request: GeoRequest,
        http: Arc<dyn HttpAdapter>,
    ) -> Self {
        Self {
            provider,
            direction,
            request,
            http,
        }
    }

    /// The request that will be sent
    pub fn request(&self) -> &GeoRequest {
        &self.request
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Send the request and normalize the response
    ///
    /// Transport errors are returned untouched and skip normalization.
    pub async fn send(self) -> Result<ResultSet> {
        debug!(
            provider = self.provider,
            url = %self.request.url,
            direction = ?self.direction,
            "dispatching request"
        );

        let raw = match self.http.get(&self.request.url, &self.request.params).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(provider = self.provider, error = %e, "transport error");
                return Err(Error::Transport(e));
            }
        };

        let results = normalize(raw, self.direction)?;
        debug!(provider = self.provider, count = results.len(), "normalized response");

        Ok(results)
    }

    /// Run the lookup on the current tokio runtime and deliver the outcome to `callback`
    ///
    /// Fails with [`Error::Runtime`] when called outside a runtime; the
    /// callback is then never invoked.
    pub fn on_complete<F>(self, callback: F) -> Result<JoinHandle<()>>
    where
        F: FnOnce(Result<ResultSet>) + Send + 'static,
    {
        let handle = Handle::try_current()?;
        Ok(handle.spawn(async move { callback(self.send().await) }))
    }
}

impl std::fmt::Debug for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lookup")
            .field("provider", &self.provider)
            .field("direction", &self.direction)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl IntoFuture for Lookup {
    type Output = Result<ResultSet>;
    type IntoFuture = Pin<Box<dyn Future<Output = Result<ResultSet>> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}
