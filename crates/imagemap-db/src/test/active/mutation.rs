use crate::util::RequireAffected;
use imagemap_entity::test::test_active::{self, Entity as Active, Model as ActiveRunModel};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    pub async fn start<C: ConnectionTrait>(conn: &C, user_id: i32, test_id: i32) -> Result<ActiveRunModel, DbErr> {
        let active = test_active::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            test_id: ActiveValue::Set(test_id),
            pass: ActiveValue::Set(0),
        };
        active.insert(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %user_id, %test_id, "failed to start test run"),
        )
    }

    /// Moves the run on to its next pass.
    pub async fn next_pass<C: ConnectionTrait>(conn: &C, active_id: i32) -> Result<(), DbErr> {
        Active::update_many()
            .col_expr(test_active::Column::Pass, Expr::col(test_active::Column::Pass).add(1))
            .filter(test_active::Column::Id.eq(active_id))
            .exec(conn)
            .await
            .map(|res| res.rows_affected)
            .require_affected("test run")
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %active_id, "failed to advance pass"))?;
        Ok(())
    }
}
