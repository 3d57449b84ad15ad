mod error;
mod geocode_places;


pub use self::{error::Error, geocode_places::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::GeoCodingGateway};
}
