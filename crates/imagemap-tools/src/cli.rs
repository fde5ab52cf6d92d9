pub(crate) mod opt;
mod question;
mod schema;
mod test_run;

use crate::opt::{Commands, Service};
use anyhow::Error;
use imagemap_config::imagemap::ImageMapConfig;
use imagemap_core::imagemap::ImageMapService;
use imagemap_utils::args::db::DbArgs;
use imagemap_utils::assets::file_system::FileSystemStore;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Init(o) => init(o).await,
        Commands::Create(o) => question::create(o).await,
        Commands::Show(o) => question::show(o).await,
        Commands::Image(o) => question::image(o).await,
        Commands::ImportMap(o) => question::import_map(o).await,
        Commands::Export(o) => question::export(o).await,
        Commands::Duplicate(o) => question::duplicate(o).await,
        Commands::Copy(o) => question::copy(o).await,
        Commands::Sync(o) => question::sync(o).await,
        Commands::Score(o) => test_run::score(o).await,
        Commands::Submit(o) => test_run::submit(o).await,
        Commands::Schema(o) => schema::exec(o),
    }
}

fn build_connect_options(db: &DbArgs) -> ConnectOptions {
    let mut options = ConnectOptions::new(db.db_url.as_str());
    if let Some(min_connections) = db.db_min_connections {
        options.min_connections(min_connections);
    }
    if let Some(max_connections) = db.db_max_connections {
        options.max_connections(max_connections);
    }
    options.sqlx_logging_level(log::LevelFilter::Debug);
    options
}

async fn connect(db: &DbArgs) -> Result<DatabaseConnection, Error> {
    Ok(Database::connect(build_connect_options(db)).await?)
}

async fn init(o: opt::Init) -> Result<(), Error> {
    let conn = connect(&o.db).await?;
    imagemap_db::schema::create_tables(&conn).await?;
    println!("Database is ready");
    Ok(())
}

impl Service {
    pub(crate) async fn build(self) -> Result<ImageMapService<FileSystemStore>, Error> {
        let config = match &self.config {
            Some(path) => ImageMapConfig::load(path).await?,
            None => ImageMapConfig::default(),
        };
        let conn = connect(&self.db).await?;
        Ok(ImageMapService::new(conn, self.assets.into(), config))
    }
}
