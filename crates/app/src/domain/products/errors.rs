//! Products service errors.

use mongodb::error::Error;
use thiserror::Error;

use crate::database::is_unavailable;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("document store unavailable")]
    Unavailable(#[source] Error),

    #[error("storage error")]
    Storage(#[source] Error),

    #[error("document store returned no object id for the inserted product")]
    MissingInsertedId,
}

impl From<Error> for ProductsServiceError {
    fn from(error: Error) -> Self {
        if is_unavailable(&error) {
            Self::Unavailable(error)
        } else {
            Self::Storage(error)
        }
    }
}
