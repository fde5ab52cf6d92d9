use imagemap_config::imagemap::ImageMapConfig;
use imagemap_model::question::ImageMapQuestion;
use imagemap_utils::assets::{AssetStore, ImageLocation};
use sea_orm::DatabaseConnection;

mod duplicate;
pub mod error;
pub mod map_file;
pub mod page;
mod persistence;
pub mod qti;
mod scoring;

pub use duplicate::DuplicateOverrides;
pub use qti::QtiExportOptions;

/// Loads, stores, scores and exports image map questions.
pub struct ImageMapService<A> {
    conn: DatabaseConnection,
    assets: A,
    config: ImageMapConfig,
}

impl<A: AssetStore + Sync> ImageMapService<A> {
    pub fn new(conn: DatabaseConnection, assets: A, config: ImageMapConfig) -> Self {
        Self { conn, assets, config }
    }

    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    #[must_use]
    pub fn assets(&self) -> &A {
        &self.assets
    }

    #[must_use]
    pub fn config(&self) -> &ImageMapConfig {
        &self.config
    }
}

/// Location of the question's image, `None` for unsaved questions.
#[must_use]
pub fn image_location(question: &ImageMapQuestion) -> Option<ImageLocation> {
    question
        .id
        .map(|id| ImageLocation::new(question.pool_id, id, question.image_filename()))
}
