use imagemap_entity::test::test_solution::{self, Entity as Solution};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    /// Removes what the learner stored for the question in this pass and stores `value` instead.
    pub async fn replace<C: ConnectionTrait>(
        conn: &C,
        active_id: i32,
        question_id: i32,
        pass: i32,
        value: Option<String>,
    ) -> Result<(), DbErr> {
        let deleted = Solution::delete_many()
            .filter(test_solution::Column::ActiveId.eq(active_id))
            .filter(test_solution::Column::QuestionId.eq(question_id))
            .filter(test_solution::Column::Pass.eq(pass))
            .exec(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %active_id, %question_id, %pass, "failed to delete solutions");
            })?;
        tracing::debug!(%active_id, %question_id, %pass, rows = deleted.rows_affected, "deleted previous solutions");

        let Some(value) = value else {
            return Ok(());
        };
        let solution = test_solution::ActiveModel {
            id: ActiveValue::NotSet,
            active_id: ActiveValue::Set(active_id),
            question_id: ActiveValue::Set(question_id),
            value1: ActiveValue::Set(Some(value)),
            value2: ActiveValue::Set(None),
            pass: ActiveValue::Set(pass),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        };
        solution.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %active_id, %question_id, %pass, "failed to insert solution");
        })?;
        Ok(())
    }
}
