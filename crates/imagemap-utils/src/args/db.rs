use clap::Args;
use url::Url;

#[derive(Debug, Clone, Args)]
pub struct DbArgs {
    #[arg(long, help = "Database url, e.g. sqlite://imagemap.sqlite?mode=rwc")]
    pub db_url: Url,

    #[arg(long, help = "Min connections")]
    pub db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub db_max_connections: Option<u32>,
}
