/// Shown instead of a title or description that could not be determined.
pub const PLACEHOLDER: &str = "—";

/// A display-ready geocoding match.
///
/// `x` is the longitude and `y` the latitude in degrees.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeocodedPlace {
    pub title       : String,
    pub description : String,
    pub x           : f64,
    pub y           : f64,
}
