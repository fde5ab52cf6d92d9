use imagemap_entity::test::test_question::{self, Entity as TestQuestion, Model as TestQuestionModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    /// Links the question to the test behind every question already in it.
    pub async fn append<C: ConnectionTrait>(
        conn: &C,
        test_id: i32,
        question_id: i32,
    ) -> Result<TestQuestionModel, DbErr> {
        let last = TestQuestion::find()
            .select_only()
            .column_as(test_question::Column::Sequence.max(), "max_sequence")
            .filter(test_question::Column::TestId.eq(test_id))
            .into_tuple::<Option<i32>>()
            .one(conn)
            .await?
            .flatten();

        let link = test_question::ActiveModel {
            id: ActiveValue::NotSet,
            test_id: ActiveValue::Set(test_id),
            question_id: ActiveValue::Set(question_id),
            sequence: ActiveValue::Set(last.map_or(0, |sequence| sequence + 1)),
        };
        link.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %test_id, %question_id, "failed to link question to test");
        })
    }
}
