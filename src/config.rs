use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Parser, Debug, Default)]
#[command(name = "letopis", about = "Terminal timeline of key events in Russian history")]
pub struct Cli {
    /// Prefill the date/title search field
    #[arg(long, env = "LETOPIS_QUERY")]
    pub query: Option<String>,

    /// Prefill the year field
    #[arg(long, env = "LETOPIS_YEAR", allow_hyphen_values = true)]
    pub year: Option<String>,

    /// Print the filtered events to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// With --print, emit JSON
    #[arg(long, requires = "print")]
    pub json: bool,

    /// UI tick period in milliseconds
    #[arg(long, env = "LETOPIS_TICK_RATE_MS")]
    pub tick_rate_ms: Option<u64>,

    /// Log file path
    #[arg(long, env = "LETOPIS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Config file path (defaults to <config dir>/letopis/config.toml)
    #[arg(long, env = "LETOPIS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub query: Option<String>,
    pub year: Option<String>,
    pub tick_rate_ms: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFile {
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("letopis").join("config.toml"))
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the file named by `--config`, or the default one.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = match cli.config {
            Some(ref path) => path.clone(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        Ok(Self::load_from(&path)?.unwrap_or_default())
    }
}

/// Effective settings: command line over config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub query: Option<String>,
    pub year: Option<String>,
    pub print: bool,
    pub json: bool,
    pub tick_rate: Duration,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(cli: Cli, file: ConfigFile) -> Self {
        Self {
            query: cli.query.or(file.query),
            year: cli.year.or(file.year),
            print: cli.print,
            json: cli.json,
            tick_rate: Duration::from_millis(
                cli.tick_rate_ms
                    .or(file.tick_rate_ms)
                    .unwrap_or(DEFAULT_TICK_RATE_MS)
                    .max(1),
            ),
            log_file: cli.log_file.or(file.log_file),
        }
    }

    /// Whether the app should search once at startup.
    pub fn has_initial_query(&self) -> bool {
        self.query.is_some() || self.year.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_file() {
        let file = ConfigFile::parse(
            r#"
            query = "мая"
            year = "1945"
            tick_rate_ms = 100
            "#,
        )
        .expect("valid config");
        assert_eq!(file.query.as_deref(), Some("мая"));
        assert_eq!(file.year.as_deref(), Some("1945"));
        assert_eq!(file.tick_rate_ms, Some(100));
        assert!(file.log_file.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(ConfigFile::parse("theme = \"dark\"").is_err());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("letopis-does-not-exist").join("config.toml");
        assert!(matches!(ConfigFile::load_from(&path), Ok(None)));
    }

    #[test]
    fn explicit_missing_file_loads_defaults() {
        let cli = Cli {
            config: Some(std::env::temp_dir().join("letopis-does-not-exist.toml")),
            ..Cli::default()
        };
        assert_eq!(ConfigFile::load(&cli).expect("missing is fine"), ConfigFile::default());
    }

    #[test]
    fn cli_overrides_file_overrides_defaults() {
        let cli = Cli {
            year: Some("1812".to_string()),
            ..Cli::default()
        };
        let file = ConfigFile {
            query: Some("битва".to_string()),
            year: Some("1380".to_string()),
            ..ConfigFile::default()
        };

        let settings = Settings::resolve(cli, file);
        assert_eq!(settings.query.as_deref(), Some("битва"));
        assert_eq!(settings.year.as_deref(), Some("1812"));
        assert_eq!(settings.tick_rate, Duration::from_millis(DEFAULT_TICK_RATE_MS));
        assert!(settings.has_initial_query());
    }

    #[test]
    fn no_query_means_initial_view() {
        let settings = Settings::resolve(Cli::default(), ConfigFile::default());
        assert!(!settings.has_initial_query());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from(["letopis", "--print", "--json", "--year", "1917"])
            .expect("valid args");
        assert!(cli.print);
        assert!(cli.json);
        assert_eq!(cli.year.as_deref(), Some("1917"));
    }
}
