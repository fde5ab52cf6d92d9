use imagemap_entity::question::answer_imagemap::{self, Entity as AnswerEntity, Model as AnswerModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct Query;

impl Query {
    pub async fn load_for_question<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<Vec<AnswerModel>, DbErr> {
        AnswerEntity::find()
            .filter(answer_imagemap::Column::QuestionId.eq(question_id))
            .order_by_asc(answer_imagemap::Column::Aorder)
            .all(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn std::error::Error, %question_id, "failed to load answers"),
            )
    }
}
