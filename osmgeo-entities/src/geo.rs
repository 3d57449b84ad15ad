use itertools::Itertools;
use std::{num::ParseFloatError, str::FromStr};
use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A rectangular area on a (flat) map given in degrees.
///
/// `x` is the longitude and `y` the latitude, the same
/// convention that is used for the coordinates of a
/// [`GeocodedPlace`](crate::place::GeocodedPlace).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewBox {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl ViewBox {
    pub const fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// The box may still cross the antimeridian (`xmin > xmax`),
    /// but the southern edge must not lie above the northern one.
    pub fn is_valid(&self) -> bool {
        is_lng_deg(self.xmin)
            && is_lng_deg(self.xmax)
            && is_lat_deg(self.ymin)
            && is_lat_deg(self.ymax)
            && self.ymin <= self.ymax
    }
}

fn is_lat_deg(deg: f64) -> bool {
    (LAT_DEG_MIN..=LAT_DEG_MAX).contains(&deg)
}

fn is_lng_deg(deg: f64) -> bool {
    (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&deg)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewBoxParseError {
    #[error("Expected four comma separated values (xmin,ymin,xmax,ymax), got '{0}'")]
    Format(String),
    #[error("Invalid coordinate '{value}': {source}")]
    Coordinate {
        value: String,
        source: ParseFloatError,
    },
}

fn parse_deg(s: &str) -> Result<f64, ViewBoxParseError> {
    let value = s.trim();
    value
        .parse::<f64>()
        .map_err(|source| ViewBoxParseError::Coordinate {
            value: value.to_owned(),
            source,
        })
}

impl FromStr for ViewBox {
    type Err = ViewBoxParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((xmin, ymin, xmax, ymax)) = s.split(',').collect_tuple() else {
            return Err(ViewBoxParseError::Format(s.to_owned()));
        };
        Ok(Self::new(
            parse_deg(xmin)?,
            parse_deg(ymin)?,
            parse_deg(xmax)?,
            parse_deg(ymax)?,
        ))
    }
}
