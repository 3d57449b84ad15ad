use crate::geo::ViewBox;

pub const DEFAULT_LIMIT: u32 = 10;

/// Optional parameters of a geocoding request.
///
/// A missing value omits the corresponding part of the request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeocodingParams {
    pub limit: Option<u32>,
    pub bounded: bool,
    pub xmin: Option<f64>,
    pub ymin: Option<f64>,
    pub xmax: Option<f64>,
    pub ymax: Option<f64>,
}

impl GeocodingParams {
    pub fn limit_or_default(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// A partial bounding box is treated as absent.
    pub fn view_box(&self) -> Option<ViewBox> {
        let Self {
            xmin,
            ymin,
            xmax,
            ymax,
            ..
        } = *self;
        Some(ViewBox::new(xmin?, ymin?, xmax?, ymax?))
    }

    #[must_use]
    pub fn with_view_box(mut self, view_box: ViewBox) -> Self {
        let ViewBox {
            xmin,
            ymin,
            xmax,
            ymax,
        } = view_box;
        self.xmin = Some(xmin);
        self.ymin = Some(ymin);
        self.xmax = Some(xmax);
        self.ymax = Some(ymax);
        self
    }
}
