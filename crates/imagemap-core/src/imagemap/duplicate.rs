use crate::imagemap::error::ImageMapError;
use crate::imagemap::persistence::QuestionWrite;
use crate::imagemap::ImageMapService;
use imagemap_db::question::answer::{self, AreaAnswer};
use imagemap_db::question::header::{self, QuestionHeader};
use imagemap_db::question::{imagemap, page};
use imagemap_db::util::FlattenTransactionResultExt;
use imagemap_model::question::ImageMapQuestion;
use imagemap_model_tools::convert::{IntoDbModel, TryIntoDbModel};
use imagemap_utils::assets::error::AssetError;
use imagemap_utils::assets::{AssetStore, ImageLocation};
use sea_orm::{DbErr, TransactionTrait};
use tracing::instrument;

/// Header fields replaced on the duplicate. `None` keeps the source value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateOverrides {
    pub title: Option<String>,
    pub author: Option<String>,
    pub owner: Option<i32>,
}

impl<A: AssetStore + Sync> ImageMapService<A> {
    /// Saves a copy of `source` under a new id and returns it.
    ///
    /// A copy made for a test keeps the lineage of the source: its `original_id` points at the
    /// pool template the source descends from. Otherwise the copy is a template of its own.
    #[instrument(skip_all, fields(question_id = ?source.id, for_test = for_test))]
    pub async fn duplicate(
        &self,
        source: &ImageMapQuestion,
        for_test: bool,
        overrides: DuplicateOverrides,
    ) -> Result<i32, ImageMapError> {
        let source_id = source.id.ok_or(ImageMapError::NotPersisted)?;
        let lineage_id = header::Query::get_lineage_id(&self.conn, source_id)
            .await?
            .ok_or(ImageMapError::NotFound(source_id))?;

        let mut clone = source.clone();
        if let Some(title) = overrides.title {
            clone.title = title;
        }
        if let Some(author) = overrides.author {
            clone.author = author;
        }
        if let Some(owner) = overrides.owner {
            clone.owner = owner;
        }

        self.save_clone(source, source_id, clone, for_test.then_some(lineage_id))
            .await
    }

    /// Saves a copy of `source` into another question pool and returns its id.
    #[instrument(skip_all, fields(question_id = ?source.id, target_pool = target_pool))]
    pub async fn copy_object(
        &self,
        source: &ImageMapQuestion,
        target_pool: i32,
        title: Option<String>,
    ) -> Result<i32, ImageMapError> {
        let source_id = source.id.ok_or(ImageMapError::NotPersisted)?;

        let mut clone = source.clone();
        clone.pool_id = target_pool;
        if let Some(title) = title {
            clone.title = title;
        }

        self.save_clone(source, source_id, clone, None).await
    }

    async fn save_clone(
        &self,
        source: &ImageMapQuestion,
        source_id: i32,
        mut clone: ImageMapQuestion,
        original_id: Option<i32>,
    ) -> Result<i32, ImageMapError> {
        clone.id = None;
        clone.created_at = None;
        let source_page = page::Query::get_by_question(&self.conn, source_id)
            .await?
            .map(|page| page.content);

        let write = QuestionWrite::new(&clone, original_id)?.with_source_page(source_page);
        let model = self.write_in_transaction(write).await?;
        tracing::info!(source_id, question_id = model.id, "copied question");

        if !source.image_filename().is_empty() {
            let from = ImageLocation::new(source.pool_id, source_id, source.image_filename());
            let to = ImageLocation::new(clone.pool_id, model.id, clone.image_filename());
            match self.assets.copy(&from, &to).await {
                Ok(()) => {}
                Err(AssetError::NotFound(path)) => {
                    tracing::warn!(?path, "source question has no image file to copy");
                }
                Err(error) => {
                    tracing::error!(error = &error as &dyn std::error::Error, ?from, ?to, "failed to copy image");
                    return Err(error.into());
                }
            }
        }
        Ok(model.id)
    }

    /// Writes the question's header, image and areas onto the pool template it was created from.
    /// The template keeps its pool.
    #[instrument(skip_all, fields(question_id = ?question.id, original_id = ?question.original_id))]
    pub async fn sync_with_original(&self, question: &ImageMapQuestion) -> Result<(), ImageMapError> {
        let original_id = question.original_id.ok_or(ImageMapError::NoOriginal)?;
        let header: QuestionHeader = question.into_db_model();
        let answers: Vec<AreaAnswer> = (&question.areas).try_into_db_model()?;
        let image_file = question.image_filename().to_owned();

        self.conn
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    header::Mutation::update_template(txn, original_id, header).await?;
                    imagemap::Mutation::insert_or_update(txn, original_id, image_file).await?;
                    answer::Mutation::replace_all(txn, original_id, answers).await?;
                    Ok(())
                })
            })
            .await
            .flatten_res()?;
        tracing::info!(%original_id, "synced question with original");
        Ok(())
    }
}
