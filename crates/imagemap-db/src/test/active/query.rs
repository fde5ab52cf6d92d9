use imagemap_entity::test::test_active::Entity as Active;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct Query;

impl Query {
    pub async fn current_pass<C: ConnectionTrait>(conn: &C, active_id: i32) -> Result<Option<i32>, DbErr> {
        let active = Active::find_by_id(active_id).one(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn std::error::Error, %active_id, "failed to load test run"),
        )?;
        Ok(active.map(|active| active.pass))
    }
}
