mod assets;
mod sqlite;

pub use assets::*;
pub use sqlite::*;
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::borrow::Cow;

pub trait TestDb {
    fn db_uri(&self) -> Cow<'_, str>;
}

/// Connects to `db` and creates all tables.
pub async fn connect<D: TestDb>(db: &D) -> Result<DatabaseConnection, DbErr> {
    let conn = Database::connect(db.db_uri().as_ref()).await?;
    imagemap_db::schema::create_tables(&conn).await?;
    Ok(conn)
}
