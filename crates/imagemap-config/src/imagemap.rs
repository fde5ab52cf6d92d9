use crate::error::ConfigError;
use crate::imagemap::v01::{ImageMapConfigV01, default_platform_version};
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::Path;

pub mod v01;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { imagemap: ImageMapConfigV01 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMapConfig {
    pub installation_id: i32,
    pub platform_version: String,
    pub assessment_logging: bool,
}

impl Default for ImageMapConfig {
    fn default() -> Self {
        Self {
            installation_id: 0,
            platform_version: default_platform_version(),
            assessment_logging: false,
        }
    }
}

impl From<ImageMapConfigV01> for ImageMapConfig {
    fn from(value: ImageMapConfigV01) -> Self {
        Self {
            installation_id: value.installation_id,
            platform_version: value.platform_version,
            assessment_logging: value.assessment_logging,
        }
    }
}

impl ImageMapConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let VersionConfig::V01 { imagemap } = serde_yml::from_str::<VersionConfig>(content)?;
        Ok(imagemap.into())
    }

    /// Loads the config file at `path`. A missing file yields the defaults.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(?path, "loading config");
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(?path, "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_yaml_str(&content)
    }
}
