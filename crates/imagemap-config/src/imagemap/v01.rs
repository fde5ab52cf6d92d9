use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ImageMapConfigV01 {
    /// # Installation id
    /// Used in exported item identifiers (`il_{installation-id}_qst_{question}`).
    #[serde(default)]
    pub installation_id: i32,
    /// # Platform version
    /// Written to the `ILIAS_VERSION` metadata field of exported items.
    #[serde(default = "default_platform_version")]
    pub platform_version: String,
    /// # Assessment logging
    /// Write an assessment log entry for every stored answer.
    #[serde(default)]
    pub assessment_logging: bool,
}

pub(crate) fn default_platform_version() -> String {
    "unknown".to_owned()
}
