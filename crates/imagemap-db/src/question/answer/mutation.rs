use imagemap_entity::question::answer_imagemap::{self, ActiveModel as ActiveAnswer, Area, Entity as AnswerEntity};
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct AreaAnswer {
    pub answer_text: String,
    pub points: f64,
    pub aorder: i32,
    pub correctness: bool,
    pub coords: String,
    pub area: Area,
}

pub struct Mutation;

impl Mutation {
    /// Deletes every answer of the question and inserts `answers` in their place.
    ///
    /// Run it inside a transaction, the two statements are not atomic on their own.
    pub async fn replace_all<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
        answers: Vec<AreaAnswer>,
    ) -> Result<(), DbErr> {
        AnswerEntity::delete_many()
            .filter(answer_imagemap::Column::QuestionId.eq(question_id))
            .exec(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %question_id, "failed to delete answers"),
            )?;

        if answers.is_empty() {
            return Ok(());
        }
        let count = answers.len();
        let data: Vec<_> = answers
            .into_iter()
            .map(|answer| ActiveAnswer {
                id: ActiveValue::NotSet,
                question_id: ActiveValue::Set(question_id),
                answer_text: ActiveValue::Set(answer.answer_text),
                points: ActiveValue::Set(answer.points),
                aorder: ActiveValue::Set(answer.aorder),
                correctness: ActiveValue::Set(answer.correctness),
                coords: ActiveValue::Set(answer.coords),
                area: ActiveValue::Set(answer.area),
            })
            .collect();

        AnswerEntity::insert_many(data).exec(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %question_id, count, "failed to insert answers"),
        )?;
        Ok(())
    }
}
