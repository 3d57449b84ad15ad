pub use self::geocoded_place_builder::*;

pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub mod geocoded_place_builder {

    use super::*;
    use crate::place::{GeocodedPlace, PLACEHOLDER};

    #[derive(Debug)]
    pub struct GeocodedPlaceBuild {
        place: GeocodedPlace,
    }

    impl GeocodedPlaceBuild {
        pub fn title(mut self, title: &str) -> Self {
            self.place.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.place.description = desc.into();
            self
        }
        pub fn pos(mut self, x: f64, y: f64) -> Self {
            self.place.x = x;
            self.place.y = y;
            self
        }
        pub fn finish(self) -> GeocodedPlace {
            self.place
        }
    }

    impl Builder for GeocodedPlace {
        type Build = GeocodedPlaceBuild;
        fn build() -> Self::Build {
            Self::Build {
                place: GeocodedPlace {
                    title: PLACEHOLDER.into(),
                    description: PLACEHOLDER.into(),
                    x: 0.0,
                    y: 0.0,
                },
            }
        }
    }
}
