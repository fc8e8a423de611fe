//! Display configuration for the CLI host.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How score output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Top-level quizscore configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizscoreConfig {
    /// Decimal places shown for score values.
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Output format when `--format` is not given.
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

fn default_precision() -> usize {
    4
}
fn default_format() -> OutputFormat {
    OutputFormat::Text
}

impl Default for QuizscoreConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            format: default_format(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizscore.toml` in the current directory
/// 2. `~/.config/quizscore/config.toml`
///
/// Environment variable overrides: `QUIZSCORE_PRECISION`, `QUIZSCORE_FORMAT`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizscoreConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizscore.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizscoreConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizscoreConfig::default(),
    };

    apply_env_overrides(
        &mut config,
        std::env::var("QUIZSCORE_PRECISION").ok(),
        std::env::var("QUIZSCORE_FORMAT").ok(),
    )?;

    Ok(config)
}

fn apply_env_overrides(
    config: &mut QuizscoreConfig,
    precision: Option<String>,
    format: Option<String>,
) -> Result<()> {
    if let Some(p) = precision {
        config.precision = p
            .trim()
            .parse()
            .with_context(|| format!("invalid QUIZSCORE_PRECISION: {p}"))?;
    }
    if let Some(f) = format {
        config.format = f
            .parse()
            .map_err(|e: String| anyhow::anyhow!("invalid QUIZSCORE_FORMAT: {e}"))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizscore"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizscoreConfig::default();
        assert_eq!(config.precision, 4);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn parse_config() {
        let config: QuizscoreConfig = toml::from_str("precision = 2\nformat = \"table\"\n").unwrap();
        assert_eq!(config.precision, 2);
        assert_eq!(config.format, OutputFormat::Table);

        let partial: QuizscoreConfig = toml::from_str("precision = 1\n").unwrap();
        assert_eq!(partial.format, OutputFormat::Text);
    }

    #[test]
    fn env_overrides() {
        let mut config = QuizscoreConfig::default();
        apply_env_overrides(&mut config, Some("6".into()), Some("JSON".into())).unwrap();
        assert_eq!(config.precision, 6);
        assert_eq!(config.format, OutputFormat::Json);

        assert!(apply_env_overrides(&mut config, Some("many".into()), None).is_err());
        assert!(apply_env_overrides(&mut config, None, Some("xml".into())).is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config_from(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quizscore.toml");
        std::fs::write(&path, "precision = 3\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn output_format_parse() {
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
