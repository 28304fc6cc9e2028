use gv_core::GeoError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ZoneError {
    #[error("{what} buffer length {len} is not a multiple of the record size {stride}")]
    FlatLayout {
        what:   &'static str,
        len:    usize,
        stride: usize,
    },

    #[error("unknown coverage policy {0:?}: expected \"any\" or \"all\"")]
    UnknownCoverage(String),

    #[error(transparent)]
    Geo(#[from] GeoError),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
