use crate::assets::file_system::FileSystemStore;
use clap::Args;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, Args)]
pub struct AssetArgs {
    #[arg(long = "asset-root", help = "Directory the question images are stored in")]
    pub asset_root: PathBuf,

    #[arg(long = "asset-web-base", help = "Public url of the asset root")]
    pub asset_web_base: Option<Url>,
}

impl From<AssetArgs> for FileSystemStore {
    fn from(value: AssetArgs) -> Self {
        FileSystemStore::new(value.asset_root, value.asset_web_base)
    }
}
