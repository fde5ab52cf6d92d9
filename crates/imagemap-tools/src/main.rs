mod cli;

use anyhow::Result;
use clap::Parser;
use cli::opt;
use imagemap_utils::tracing::TracingConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let opt = opt::Cli::parse();
    imagemap_utils::tracing::setup(
        TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .json(opt.json_logs)
            .build(),
    )?;
    cli::exec(opt.command).await
}
