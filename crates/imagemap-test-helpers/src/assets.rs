use imagemap_utils::assets::file_system::FileSystemStore;
use std::path::Path;
use tempfile::TempDir;
use url::Url;

pub const TEST_WEB_BASE: &str = "https://lms.example.org/data/";

/// A [`FileSystemStore`] rooted in a temporary directory.
pub struct TestAssets {
    temp_dir: TempDir,
    store: FileSystemStore,
}

impl TestAssets {
    pub fn new() -> Result<Self, std::io::Error> {
        let temp_dir = TempDir::with_prefix("test-imagemap-assets")?;
        let web_base = Url::parse(TEST_WEB_BASE).ok();
        let store = FileSystemStore::new(temp_dir.path().to_path_buf(), web_base);
        Ok(Self { temp_dir, store })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    #[must_use]
    pub fn store(&self) -> FileSystemStore {
        self.store.clone()
    }
}
