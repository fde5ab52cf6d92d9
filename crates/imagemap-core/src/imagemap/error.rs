use imagemap_model::error::AreaError;
use imagemap_utils::assets::error::AssetError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageMapError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Conversion(#[from] imagemap_model_tools::error::Error),

    #[error(transparent)]
    Area(#[from] AreaError),

    #[error("Xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Xml error: {0}")]
    XmlIo(#[from] std::io::Error),

    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("question {0} not found")]
    NotFound(i32),

    #[error("question has not been persisted yet")]
    NotPersisted,

    #[error("question has no original to sync with")]
    NoOriginal,

    #[error("selected area {index} does not exist, the question has {len} areas")]
    InvalidSelection { index: usize, len: usize },

    #[error("test run {0} does not exist")]
    UnknownAttempt(i32),
}
