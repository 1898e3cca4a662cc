use crate::{mask::MaskError, rings::RingError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `rings` module")]
    Rings(#[from] RingError),
    #[error("Error in the `mask` module")]
    Mask(#[from] MaskError),
}
