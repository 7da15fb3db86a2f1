//! Fixture configuration loader.
//!
//! Reads `config.toml` and deserializes it into [`FixtureConfig`]. Falls back
//! to sensible defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use specimen_types::config::FixtureConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "SPECIMEN_CONFIG";

/// Location of the fixture config file.
///
/// `SPECIMEN_CONFIG` when set, otherwise `specimen/config.toml` under the
/// platform config directory (current directory when there is none).
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("specimen")
        .join("config.toml")
}

/// Load fixture configuration from `path`.
///
/// - If the file does not exist, returns [`FixtureConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_fixture_config(path: &Path) -> FixtureConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return FixtureConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return FixtureConfig::default();
        }
    };

    match toml::from_str::<FixtureConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            FixtureConfig::default()
        }
    }
}
