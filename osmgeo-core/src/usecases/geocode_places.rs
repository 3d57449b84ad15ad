use super::prelude::*;

/// Validate the request and resolve it with the given gateway.
pub fn geocode_places<G>(gw: &G, query: &str, params: &GeocodingParams) -> Result<Vec<GeocodedPlace>>
where
    G: GeoCodingGateway + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::EmptyQuery);
    }
    if params.limit == Some(0) {
        return Err(Error::InvalidLimit);
    }
    if let Some(bbox) = params.view_box() {
        if !bbox.is_valid() {
            return Err(Error::Bbox);
        }
    }
    match gw.geocode(query, params) {
        Ok(places) => {
            log::debug!("Found {} place(s) for '{query}'", places.len());
            Ok(places)
        }
        Err(err) => {
            log::warn!("Failed to geocode '{query}': {err}");
            Err(err.into())
        }
    }
}
