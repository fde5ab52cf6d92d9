use crate::imagemap::error::ImageMapError;
use crate::imagemap::{ImageMapService, page};
use imagemap_db::question::answer::{self, AreaAnswer};
use imagemap_db::question::header::{self, QuestionHeader};
use imagemap_db::question::{imagemap, page as question_page};
use imagemap_db::test::test_question;
use imagemap_db::util::FlattenTransactionResultExt;
use imagemap_entity::question::question::Model as QuestionModel;
use imagemap_model::question::ImageMapQuestion;
use imagemap_model_tools::convert::question::StoredQuestion;
use imagemap_model_tools::convert::{IntoDbModel, TryIntoDbModel, TryIntoModel};
use imagemap_utils::assets::{AssetStore, ImageLocation};
use sea_orm::{ConnectionTrait, DbErr, TransactionTrait};
use tracing::instrument;

/// Everything one save of a question writes.
pub(crate) struct QuestionWrite {
    id: Option<i32>,
    original_id: Option<i32>,
    test_id: Option<i32>,
    header: QuestionHeader,
    image_file: String,
    answers: Vec<AreaAnswer>,
    /// Page to copy onto a newly created question instead of the default page.
    source_page: Option<String>,
}

impl QuestionWrite {
    pub(crate) fn new(question: &ImageMapQuestion, original_id: Option<i32>) -> Result<Self, ImageMapError> {
        Ok(Self {
            id: question.id,
            original_id,
            test_id: question.test_id,
            header: question.into_db_model(),
            image_file: question.image_filename().to_owned(),
            answers: (&question.areas).try_into_db_model()?,
            source_page: None,
        })
    }

    pub(crate) fn with_source_page(mut self, content: Option<String>) -> Self {
        self.source_page = content;
        self
    }

    /// Run inside a transaction.
    pub(crate) async fn execute<C: ConnectionTrait>(self, conn: &C) -> Result<QuestionModel, DbErr> {
        let model = match self.id {
            Some(id) => header::Mutation::update(conn, id, self.header).await?,
            None => {
                let model = header::Mutation::create(conn, self.header, self.original_id).await?;
                let content = self.source_page.map_or_else(
                    || page::default_content(model.id),
                    |content| page::rewrite_question_ref(&content, model.id),
                );
                question_page::Mutation::create(conn, model.id, content).await?;
                if let Some(test_id) = self.test_id {
                    test_question::Mutation::append(conn, test_id, model.id).await?;
                }
                model
            }
        };
        imagemap::Mutation::insert_or_update(conn, model.id, self.image_file).await?;
        answer::Mutation::replace_all(conn, model.id, self.answers).await?;
        Ok(model)
    }
}

impl<A: AssetStore + Sync> ImageMapService<A> {
    #[instrument(skip(self))]
    pub async fn load(&self, question_id: i32) -> Result<ImageMapQuestion, ImageMapError> {
        let Some(question) = header::Query::get_by_id(&self.conn, question_id).await? else {
            return Err(ImageMapError::NotFound(question_id));
        };
        let Some(imagemap) = imagemap::Query::get_by_question(&self.conn, question_id).await? else {
            tracing::warn!(%question_id, "question has no image map row");
            return Err(ImageMapError::NotFound(question_id));
        };
        let answers = answer::Query::load_for_question(&self.conn, question_id).await?;

        let stored = StoredQuestion {
            question,
            imagemap,
            answers,
        };
        Ok(stored.try_into_model()?)
    }

    /// Creates or updates the question with all of its areas. On create the question is
    /// assigned its id and `original_id`, gets a page and is appended to its test.
    #[instrument(skip_all, fields(question_id = ?question.id, original_id = ?original_id))]
    pub async fn persist(
        &self,
        question: &mut ImageMapQuestion,
        original_id: Option<i32>,
    ) -> Result<i32, ImageMapError> {
        let write = QuestionWrite::new(question, original_id)?;
        let model = self.write_in_transaction(write).await?;

        if question.id.is_none() {
            tracing::info!(question_id = model.id, "created question");
            question.original_id = model.original_id;
        }
        question.id = Some(model.id);
        question.created_at = Some(model.created_at);
        Ok(model.id)
    }

    pub(crate) async fn write_in_transaction(&self, write: QuestionWrite) -> Result<QuestionModel, ImageMapError> {
        let model = self
            .conn
            .transaction::<_, QuestionModel, DbErr>(|txn| Box::pin(async move { write.execute(txn).await }))
            .await
            .flatten_res()?;
        Ok(model)
    }

    /// Stores the uploaded image of a persisted question and makes it the question's image.
    /// The question still has to be persisted to keep the new filename.
    #[instrument(skip(self, question, content), fields(question_id = ?question.id))]
    pub async fn store_image(
        &self,
        question: &mut ImageMapQuestion,
        filename: &str,
        content: &[u8],
    ) -> Result<(), ImageMapError> {
        let question_id = question.id.ok_or(ImageMapError::NotPersisted)?;
        let previous = question.image_filename().to_owned();
        question.set_image_filename(filename);
        let location = ImageLocation::new(question.pool_id, question_id, question.image_filename());
        if let Err(error) = self.assets.store(&location, content).await {
            tracing::error!(error = &error as &dyn std::error::Error, ?location, "failed to store image");
            question.set_image_filename(&previous);
            return Err(error.into());
        }
        Ok(())
    }
}
