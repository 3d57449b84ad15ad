pub mod cache;
pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use osmgeo_entities::{geo::*, params::*, place::*};
}
