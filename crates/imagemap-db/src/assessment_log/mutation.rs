use imagemap_entity::assessment_log;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub struct Mutation;

impl Mutation {
    pub async fn log_action<C: ConnectionTrait>(
        conn: &C,
        active_id: i32,
        question_id: i32,
        message: &str,
    ) -> Result<(), DbErr> {
        let entry = assessment_log::ActiveModel {
            id: ActiveValue::NotSet,
            active_id: ActiveValue::Set(active_id),
            question_id: ActiveValue::Set(question_id),
            message: ActiveValue::Set(message.to_owned()),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        };
        entry.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn std::error::Error, %active_id, %question_id, "failed to write assessment log");
        })?;
        Ok(())
    }
}
