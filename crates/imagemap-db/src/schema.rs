use imagemap_entity::assessment_log;
use imagemap_entity::question::{answer_imagemap, page, question, question_imagemap};
use imagemap_entity::test::{test_active, test_question, test_solution};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};

async fn create_table<C: ConnectionTrait, E: EntityTrait>(conn: &C, entity: E) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();
    conn.execute(backend.build(&statement)).await?;
    Ok(())
}

/// Creates every table that does not exist yet. Tables referenced by foreign keys come first.
pub async fn create_tables<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    create_table(conn, question::Entity).await?;
    create_table(conn, question_imagemap::Entity).await?;
    create_table(conn, answer_imagemap::Entity).await?;
    create_table(conn, page::Entity).await?;
    create_table(conn, test_active::Entity).await?;
    create_table(conn, test_question::Entity).await?;
    create_table(conn, test_solution::Entity).await?;
    create_table(conn, assessment_log::Entity).await?;
    tracing::info!("database schema is up to date");
    Ok(())
}
