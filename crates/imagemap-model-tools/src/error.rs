use imagemap_model::error::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("num conversion failed")]
    NumConversion,
    #[error(transparent)]
    Model(#[from] ModelError),
}
