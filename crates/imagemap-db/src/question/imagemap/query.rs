use imagemap_entity::question::question_imagemap::{Entity as Imagemap, Model as ImagemapModel};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct Query;

impl Query {
    pub async fn get_by_question<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
    ) -> Result<Option<ImagemapModel>, DbErr> {
        Imagemap::find_by_id(question_id).one(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn std::error::Error, %question_id, "failed to load image map row"),
        )
    }
}
