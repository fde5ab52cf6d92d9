use imagemap_entity::question::page::{self, Model as PageModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, question_id: i32, content: String) -> Result<PageModel, DbErr> {
        let page = page::ActiveModel {
            question_id: ActiveValue::Set(question_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        };
        page.insert(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %question_id, "failed to create question page"),
        )
    }
}
