pub mod question;

use sea_orm::{Database, DatabaseConnection};

pub async fn setup_db() -> DatabaseConnection {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    imagemap_db::schema::create_tables(&conn).await.unwrap();
    conn
}
