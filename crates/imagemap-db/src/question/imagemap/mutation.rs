use imagemap_entity::question::question_imagemap::{self, ActiveModel as ActiveImagemap, Entity as Imagemap};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn insert_or_update<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
        image_file: String,
    ) -> Result<(), DbErr> {
        let data = ActiveImagemap {
            question_id: ActiveValue::Set(question_id),
            image_file: ActiveValue::Set(image_file),
        };

        let mut on_conflict = OnConflict::column(question_imagemap::Column::QuestionId);
        on_conflict.update_column(question_imagemap::Column::ImageFile);
        Imagemap::insert(data)
            .on_conflict(on_conflict)
            .exec(conn)
            .await
            .inspect_err(
                |error| tracing::error!(error = error as &dyn Error, %question_id, "failed to store image map row"),
            )?;
        Ok(())
    }
}
