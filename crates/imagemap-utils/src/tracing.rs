use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Debug)]
pub struct TracingConfig {
    pub package: &'static str,
    pub version: &'static str,
    #[builder(setter(into), default = String::from("dev"))]
    pub env: String,
    /// Emit one json object per event instead of human readable lines.
    #[builder(default)]
    pub json: bool,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TracingInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber. Events go to stderr, filtered by `RUST_LOG` (default `info`).
pub fn setup(config: TracingConfig) -> Result<(), Error> {
    let (plain, json) = if config.json {
        (None, Some(fmt::layer().json().with_writer(std::io::stderr)))
    } else {
        (Some(fmt::layer().with_writer(std::io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(plain)
        .with(json)
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init()?;

    tracing::debug!(
        package = config.package,
        version = config.version,
        env = %config.env,
        "tracing initialized"
    );
    Ok(())
}
