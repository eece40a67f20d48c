use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Loads `configuration/base.yaml` (`test.yaml` in tests) from the current directory
/// and overlays `APP_` prefixed environment variables, e.g. `APP_DATABASE__PASSWORD`.
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let base_path = std::env::current_dir().context("Failed to determine the current directory")?;
    let configuration_directory = base_path.join("configuration");
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    config_from(&configuration_directory.join(file))
}

pub fn config_from<Settings: DeserializeOwned>(file: &Path) -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::from(file))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .with_context(|| format!("Failed to build configuration from {}", file.display()))?;

    settings
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
