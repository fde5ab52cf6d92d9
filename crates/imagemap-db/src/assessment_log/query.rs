use imagemap_entity::assessment_log::{self, Entity as AssessmentLog, Model as AssessmentLogModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct Query;

impl Query {
    pub async fn load_for_active<C: ConnectionTrait>(
        conn: &C,
        active_id: i32,
    ) -> Result<Vec<AssessmentLogModel>, DbErr> {
        AssessmentLog::find()
            .filter(assessment_log::Column::ActiveId.eq(active_id))
            .order_by_asc(assessment_log::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, %active_id, "failed to load assessment log");
            })
    }
}
