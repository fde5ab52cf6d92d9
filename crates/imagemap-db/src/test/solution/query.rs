use imagemap_entity::test::test_solution::{self, Entity as Solution};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};
use std::error::Error;

pub struct Query;

impl Query {
    /// Highest pass the learner stored anything in for the question.
    pub async fn max_pass<C: ConnectionTrait>(conn: &C, active_id: i32, question_id: i32) -> Result<Option<i32>, DbErr> {
        let pass = Solution::find()
            .select_only()
            .column_as(test_solution::Column::Pass.max(), "max_pass")
            .filter(test_solution::Column::ActiveId.eq(active_id))
            .filter(test_solution::Column::QuestionId.eq(question_id))
            .into_tuple::<Option<i32>>()
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %active_id, %question_id, "failed to load max pass");
            })?;
        Ok(pass.flatten())
    }

    /// Non-empty `value1` entries stored for the question in the given pass.
    pub async fn load_values<C: ConnectionTrait>(
        conn: &C,
        active_id: i32,
        question_id: i32,
        pass: i32,
    ) -> Result<Vec<String>, DbErr> {
        let solutions = Solution::find()
            .filter(test_solution::Column::ActiveId.eq(active_id))
            .filter(test_solution::Column::QuestionId.eq(question_id))
            .filter(test_solution::Column::Pass.eq(pass))
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %active_id, %question_id, %pass, "failed to load solutions");
            })?;

        Ok(solutions
            .into_iter()
            .filter_map(|solution| solution.value1)
            .filter(|value| !value.is_empty())
            .collect())
    }
}
