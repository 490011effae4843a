//! Configuration loading from YAML files and environment variables.

use crate::schema::Config;
use sc2clips_common::ChannelId;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "SC2CLIPS_CONFIG_PATH";

/// Channel variable of older deployments, read when `CLIPS_CHANNEL_ID` is unset.
const LEGACY_CHANNEL_VAR: &str = "CANAL_CLIPS_ID";

/// Files probed in the working directory when no path is given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Name of the offending variable.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration: defaults, then the YAML file (if any), then the
    /// process environment. The result is validated.
    ///
    /// `explicit_path` takes precedence over `SC2CLIPS_CONFIG_PATH` and the
    /// default file names.
    pub fn load(explicit_path: Option<&Path>) -> Result<Config, ConfigError> {
        let path = explicit_path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
            });

        let mut config = match path {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration file");
                Self::read_file(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_overrides(&mut config, |name| env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a specific file, ignoring the
    /// environment.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let config = Self::read_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a YAML document. Missing sections and keys fall back to defaults.
    pub fn from_yaml_str(content: &str) -> Result<Config, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn read_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Applies overrides read through `lookup`, normally the process
    /// environment.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            config.discord.token = token;
        }

        let channel = match parse_var::<u64, _>(&lookup, "CLIPS_CHANNEL_ID")? {
            Some(channel) => Some(channel),
            None => parse_var(&lookup, LEGACY_CHANNEL_VAR)?,
        };
        if let Some(channel) = channel {
            config.discord.clips_channel_id = ChannelId(channel);
        }

        if let Some(prefix) = lookup("COMMAND_PREFIX") {
            config.discord.command_prefix = prefix;
        }

        if let Some(activity) = lookup("BOT_ACTIVITY") {
            config.discord.activity = activity;
        }

        if let Some(extension) = lookup("REPLAY_EXTENSION") {
            config.gating.replay_extension = extension;
        }

        if let Some(days) = parse_var(&lookup, "COOLDOWN_DAYS")? {
            config.gating.cooldown_days = days;
        }

        if let Some(path) = lookup("CLIPS_STORE_PATH") {
            config.gating.store_path = PathBuf::from(path);
        }

        if let Some(ttl) = parse_var(&lookup, "NOTICE_TTL_SECONDS")? {
            config.gating.notice_ttl_seconds = ttl;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = parse_var(&lookup, "LOG_JSON")? {
            config.logging.json = json;
        }

        if let Some(directory) = lookup("LOG_DIRECTORY") {
            config.logging.directory = Some(PathBuf::from(directory));
        }

        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|raw| {
            raw.trim().parse().map_err(|e: T::Err| ConfigError::EnvParse {
                var: var.to_string(),
                source: Box::new(e),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_overrides_fill_required_fields() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("DISCORD_TOKEN", "abc.def.ghi"),
            ("CLIPS_CHANNEL_ID", "123456789012345678"),
        ]);

        ConfigLoader::apply_overrides(&mut config, lookup).unwrap();

        assert_eq!(config.discord.token, "abc.def.ghi");
        assert_eq!(config.discord.clips_channel_id, ChannelId(123456789012345678));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_legacy_channel_variable_is_accepted() {
        let mut config = Config::default();
        let lookup = lookup_from(&[("CANAL_CLIPS_ID", "223456789012345678")]);

        ConfigLoader::apply_overrides(&mut config, lookup).unwrap();

        assert_eq!(config.discord.clips_channel_id, ChannelId(223456789012345678));
    }

    #[test]
    fn test_current_channel_variable_wins_over_legacy() {
        let mut config = Config::default();
        let lookup = lookup_from(&[
            ("CLIPS_CHANNEL_ID", "123456789012345678"),
            ("CANAL_CLIPS_ID", "223456789012345678"),
        ]);

        ConfigLoader::apply_overrides(&mut config, lookup).unwrap();

        assert_eq!(config.discord.clips_channel_id, ChannelId(123456789012345678));
    }

    #[test]
    fn test_malformed_legacy_channel_names_variable() {
        let mut config = Config::default();
        let lookup = lookup_from(&[("CANAL_CLIPS_ID", "clips")]);

        let err = ConfigLoader::apply_overrides(&mut config, lookup).unwrap_err();
        assert!(matches!(err, ConfigError::EnvParse { ref var, .. } if var == "CANAL_CLIPS_ID"));
    }

    #[test]
    fn test_malformed_number_names_variable() {
        let mut config = Config::default();
        let lookup = lookup_from(&[("COOLDOWN_DAYS", "thirty")]);

        let err = ConfigLoader::apply_overrides(&mut config, lookup).unwrap_err();
        assert!(err.to_string().contains("COOLDOWN_DAYS"));
    }

    #[test]
    fn test_malformed_bool() {
        let mut config = Config::default();
        let lookup = lookup_from(&[("LOG_JSON", "yes please")]);

        let err = ConfigLoader::apply_overrides(&mut config, lookup).unwrap_err();
        assert!(matches!(err, ConfigError::EnvParse { ref var, .. } if var == "LOG_JSON"));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ConfigLoader::from_yaml_str("   \n").unwrap();
        assert_eq!(config, Config::default());
    }
}
