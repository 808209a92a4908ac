// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use replycodec::{CodecError, ParserConfig};

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "REPLYCODEC_LOG";

/// Output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// End `format` output with a newline.
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            trailing_newline: true,
        }
    }
}

/// Contents of the `--config` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

impl CliConfig {
    /// Load settings from `path`, or defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(CliConfig::default());
        };
        let text = std::fs::read_to_string(path)
            .map_err(|e| CodecError::config(path.display().to_string(), e.to_string()))?;
        let config = Self::from_toml(&text)
            .map_err(|message| CodecError::config(path.display().to_string(), message))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    fn from_toml(text: &str) -> std::result::Result<Self, String> {
        let config: CliConfig = toml::from_str(text).map_err(|e| e.message().to_string())?;
        if config.parser.max_depth == 0 {
            return Err("parser.max_depth must be at least 1".to_string());
        }
        Ok(config)
    }
}

/// Install the stderr log subscriber.
///
/// The filter comes from `REPLYCODEC_LOG` (default `warn`); `verbose`
/// forces `debug`.
pub fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Read the whole input from `path`, or from stdin when absent or `-`.
pub fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CliConfig::from_toml("").unwrap();
        assert_eq!(config.parser.max_depth, 128);
        assert!(config.output.trailing_newline);
    }

    #[test]
    fn test_config_sections() {
        let config = CliConfig::from_toml(
            "[parser]\nmax_depth = 16\n\n[output]\ntrailing_newline = false\n",
        )
        .unwrap();
        assert_eq!(config.parser.max_depth, 16);
        assert!(!config.output.trailing_newline);
    }

    #[test]
    fn test_config_rejects_unknown_and_zero() {
        assert!(CliConfig::from_toml("[parser]\ndepth = 3\n").is_err());
        assert!(CliConfig::from_toml("[parser]\nmax_depth = 0\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/replycodec.toml"))).unwrap_err();
        let err = err.downcast::<CodecError>().unwrap();
        assert!(matches!(err, CodecError::Config { .. }));
    }
}
