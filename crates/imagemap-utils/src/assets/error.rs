use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("Asset not found: {0}")]
    NotFound(PathBuf),
    #[error("Invalid Path: {0}")]
    InvalidPath(PathBuf),
    #[error("No web base url configured")]
    NoWebBase,
    #[error("Web base url cannot hold a path: {0}")]
    InvalidWebBase(url::Url),
}
