use crate::assets::error::AssetError;
use std::path::PathBuf;
use url::Url;

pub mod error;
pub mod file_system;

/// Where the image of a question lives, relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageLocation {
    pub pool_id: i32,
    pub question_id: i32,
    pub filename: String,
}

impl ImageLocation {
    pub fn new(pool_id: i32, question_id: i32, filename: impl Into<String>) -> Self {
        Self {
            pool_id,
            question_id,
            filename: filename.into(),
        }
    }

    /// `{pool}/{question}/images`
    #[must_use]
    pub fn directory(&self) -> String {
        format!("{}/{}/images", self.pool_id, self.question_id)
    }

    /// `{pool}/{question}/images/{filename}`
    pub fn relative_path(&self) -> Result<String, AssetError> {
        let filename = self.filename.as_str();
        if filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\'])
        {
            return Err(AssetError::InvalidPath(PathBuf::from(filename)));
        }
        Ok(format!("{}/{filename}", self.directory()))
    }
}

pub trait AssetStore {
    fn load(&self, location: &ImageLocation) -> impl Future<Output = Result<Vec<u8>, AssetError>> + Send;
    fn store(&self, location: &ImageLocation, content: &[u8]) -> impl Future<Output = Result<(), AssetError>> + Send;
    fn copy(&self, from: &ImageLocation, to: &ImageLocation) -> impl Future<Output = Result<(), AssetError>> + Send;
    fn exists(&self, location: &ImageLocation) -> impl Future<Output = Result<bool, AssetError>> + Send;

    /// Public url an exported item can reference the image by.
    fn web_url(&self, location: &ImageLocation) -> Result<Url, AssetError>;
}
