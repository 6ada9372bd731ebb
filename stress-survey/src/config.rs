//! Runtime configuration loaded from `stress-test.toml`.
//!
//! Every section and key is optional; anything missing falls back to the
//! defaults below.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Default file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "stress-test.toml";

/// Default pause between recording an answer and moving on.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 150;

pub const DEFAULT_COUNSELING_URL: &str = "https://clover.uc.ac.kr/clientMain/a/t/main.do";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// What happens when an answer changes after the score was computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditPolicy {
    /// Edits are allowed; a changed answer clears the score.
    #[default]
    Invalidate,
    /// Edits are rejected once a score exists.
    Locked,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub settle_delay_ms: u64,
    pub edit_policy: EditPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            edit_policy: EditPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Where a completed survey sends the user.
    pub counseling_url: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            counseling_url: DEFAULT_COUNSELING_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub colorful: bool,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colorful: true,
            log_filter: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub submit: SubmitConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults; any other read failure or a
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::from_toml_str(&contents)?;
                tracing::debug!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.engine.settle_delay(), Duration::from_millis(150));
        assert_eq!(config.engine.edit_policy, EditPolicy::Invalidate);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [engine]
            edit_policy = "locked"

            [display]
            colorful = false
            "#,
        )
        .unwrap();

        assert_eq!(config.engine.edit_policy, EditPolicy::Locked);
        assert_eq!(config.engine.settle_delay_ms, DEFAULT_SETTLE_DELAY_MS);
        assert!(!config.display.colorful);
        assert_eq!(config.display.log_filter, "warn");
        assert_eq!(config.submit.counseling_url, DEFAULT_COUNSELING_URL);
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let err = Config::from_toml_str("[engine]\nedit_policy = \"sometimes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load(Path::new("/definitely/not/here/stress-test.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
