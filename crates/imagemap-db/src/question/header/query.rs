use imagemap_entity::question::question::{Entity as Question, Model as QuestionModel};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get_by_id<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<Option<QuestionModel>, DbErr> {
        Question::find_by_id(question_id).one(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %question_id, "failed to load question"),
        )
    }

    /// Id of the pool template a question descends from, or the question's own id if it is a
    /// template itself. `None` if the question does not exist.
    pub async fn get_lineage_id<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<Option<i32>, DbErr> {
        let question = Self::get_by_id(conn, question_id).await?;
        Ok(question.map(|question| question.original_id.unwrap_or(question.id)))
    }
}
