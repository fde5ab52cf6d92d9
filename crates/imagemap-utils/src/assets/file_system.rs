use crate::assets::error::AssetError;
use crate::assets::{AssetStore, ImageLocation};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

/// Stores assets below a local directory.
#[derive(Clone, Debug)]
pub struct FileSystemStore {
    base_path: PathBuf,
    web_base: Option<Url>,
}

impl FileSystemStore {
    #[must_use]
    pub fn new(base_path: PathBuf, web_base: Option<Url>) -> Self {
        Self { base_path, web_base }
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn sub_path(&self, location: &ImageLocation) -> Result<PathBuf, AssetError> {
        Ok(self.base_path.join(location.relative_path()?))
    }

    async fn create_parent(path: &Path) -> Result<(), AssetError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

fn not_found(error: std::io::Error, path: &Path) -> AssetError {
    if error.kind() == ErrorKind::NotFound {
        AssetError::NotFound(path.to_path_buf())
    } else {
        error.into()
    }
}

impl AssetStore for FileSystemStore {
    async fn load(&self, location: &ImageLocation) -> Result<Vec<u8>, AssetError> {
        let path = self.sub_path(location)?;
        tracing::trace!(?path, "loading asset");
        fs::read(&path).await.map_err(|error| not_found(error, &path))
    }

    async fn store(&self, location: &ImageLocation, content: &[u8]) -> Result<(), AssetError> {
        let path = self.sub_path(location)?;
        tracing::debug!(?path, size = content.len(), "storing asset");
        Self::create_parent(&path).await?;
        fs::write(&path, content).await?;
        Ok(())
    }

    async fn copy(&self, from: &ImageLocation, to: &ImageLocation) -> Result<(), AssetError> {
        let source = self.sub_path(from)?;
        let target = self.sub_path(to)?;
        tracing::debug!(?source, ?target, "copying asset");
        Self::create_parent(&target).await?;
        fs::copy(&source, &target)
            .await
            .map_err(|error| not_found(error, &source))?;
        Ok(())
    }

    async fn exists(&self, location: &ImageLocation) -> Result<bool, AssetError> {
        let path = self.sub_path(location)?;
        Ok(fs::try_exists(&path).await?)
    }

    fn web_url(&self, location: &ImageLocation) -> Result<Url, AssetError> {
        location.relative_path()?;
        let mut url = self.web_base.clone().ok_or(AssetError::NoWebBase)?;
        let invalid_base = url.clone();
        url.path_segments_mut()
            .map_err(|()| AssetError::InvalidWebBase(invalid_base))?
            .pop_if_empty()
            .push(&location.pool_id.to_string())
            .push(&location.question_id.to_string())
            .push("images")
            .push(&location.filename);
        Ok(url)
    }
}
