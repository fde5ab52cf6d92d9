use imagemap_entity::question::page::{Entity as Page, Model as PageModel};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct Query;

impl Query {
    pub async fn get_by_question<C: ConnectionTrait>(conn: &C, question_id: i32) -> Result<Option<PageModel>, DbErr> {
        Page::find_by_id(question_id).one(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn std::error::Error, %question_id, "failed to load question page"),
        )
    }
}
