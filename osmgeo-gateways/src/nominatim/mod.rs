//! Geocoding with [Nominatim](https://nominatim.org).
//!
//! See also the [usage policy](https://operations.osmfoundation.org/policies/nominatim/)
//! of the public instance.

use std::sync::Arc;

use osmgeo_core::{
    cache::ResultCache,
    gateways::geocode::{self, GeoCodingGateway},
};
use osmgeo_entities::{params::GeocodingParams, place::GeocodedPlace};
use serde_json::Value;
use thiserror::Error;
use url::form_urlencoded;

use crate::http::{self, JsonTransport, ReqwestTransport};

mod parse;
mod record;

#[cfg(test)]
mod tests;

pub use self::{parse::*, record::*};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] http::Error),
    #[error("Expected a JSON array of places")]
    NotAnArray,
    #[error("Invalid place #{index}: {source}")]
    Record {
        index: usize,
        source: serde_json::Error,
    },
}

impl From<Error> for geocode::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Transport(err) => Self::Transport(Box::new(err)),
            err => Self::Response(Box::new(err)),
        }
    }
}

/// A Nominatim client that remembers the results of
/// previous requests.
#[derive(Debug)]
pub struct Nominatim<T = ReqwestTransport> {
    base_url: String,
    transport: T,
    cache: Arc<ResultCache>,
}

impl<T> Nominatim<T>
where
    T: JsonTransport,
{
    pub fn new(base_url: &str, transport: T) -> Self {
        Self::with_cache(base_url, transport, Arc::new(ResultCache::new()))
    }

    /// Use a cache that might be shared with other clients.
    pub fn with_cache(base_url: &str, transport: T, cache: Arc<ResultCache>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_owned();
        Self {
            base_url,
            transport,
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn search_url(&self, query: &str, params: &GeocodingParams) -> String {
        let query: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        let mut url = format!(
            "{}/search?format=json&q={query}&addressdetails=1&limit={}",
            self.base_url,
            params.limit_or_default()
        );
        if let Some(bbox) = params.view_box() {
            url.push_str(&format!(
                "&viewbox={:.5},{:.5},{:.5},{:.5}",
                bbox.xmin, bbox.ymax, bbox.xmax, bbox.ymin
            ));
        }
        if params.bounded {
            url.push_str("&bounded=1");
        }
        url
    }

    pub fn geocode(&self, query: &str, params: &GeocodingParams) -> Result<Vec<GeocodedPlace>, Error> {
        let url = self.search_url(query, params);
        self.cache.get_or_try_fetch(&url, || self.fetch(&url))
    }

    fn fetch(&self, url: &str) -> Result<Vec<GeocodedPlace>, Error> {
        let Value::Array(items) = self.transport.get_json(url)? else {
            return Err(Error::NotAnArray);
        };
        let places = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value::<Record>(item)
                    .map(|record| parse_place(&record))
                    .map_err(|source| Error::Record { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Received {} place(s) from {url}", places.len());
        Ok(places)
    }
}

impl<T> GeoCodingGateway for Nominatim<T>
where
    T: JsonTransport,
{
    fn geocode(&self, query: &str, params: &GeocodingParams) -> Result<Vec<GeocodedPlace>, geocode::Error> {
        Ok(Nominatim::geocode(self, query, params)?)
    }
}
