use crate::gateways::geocode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The query is empty")]
    EmptyQuery,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error(transparent)]
    Gateway(#[from] geocode::Error),
}
