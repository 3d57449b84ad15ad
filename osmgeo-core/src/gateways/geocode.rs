use osmgeo_entities::{params::GeocodingParams, place::GeocodedPlace};
use std::error::Error as StdError;
use thiserror::Error;

pub type BoxedError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The geocoding service could not be reached: {0}")]
    Transport(#[source] BoxedError),
    #[error("The geocoding service responded with an unexpected payload: {0}")]
    Response(#[source] BoxedError),
}

pub trait GeoCodingGateway {
    /// Resolve a free-text query into a list of places.
    ///
    /// Missing fields of a single match never fail the whole
    /// request, only transport or payload failures do.
    fn geocode(&self, query: &str, params: &GeocodingParams) -> Result<Vec<GeocodedPlace>, Error>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn geocode(&self, query: &str, params: &GeocodingParams) -> Result<Vec<GeocodedPlace>, Error> {
        (**self).geocode(query, params)
    }
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn geocode(&self, query: &str, params: &GeocodingParams) -> Result<Vec<GeocodedPlace>, Error> {
        (**self).geocode(query, params)
    }
}
