use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatlexConfig {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub batch: BatchConfig,
}

/// Layout of the token report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Width of the left-justified kind column.
    #[serde(default = "default_kind_width")]
    pub kind_width: usize,

    /// Number of dashes under the header.
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,

    #[serde(default = "default_kind_header")]
    pub kind_header: String,

    #[serde(default = "default_lexeme_header")]
    pub lexeme_header: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            kind_width: default_kind_width(),
            rule_width: default_rule_width(),
            kind_header: default_kind_header(),
            lexeme_header: default_lexeme_header(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Prepended to the input's file name to name its report.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Directory for reports. `None` writes each report next to its input.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Print each token listing to stdout.
    #[serde(default = "default_true")]
    pub echo: bool,

    /// Maximum number of files processed at once.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_prefix: default_output_prefix(),
            output_dir: None,
            echo: default_true(),
            max_concurrency: default_max_concurrency(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl RatlexConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns the default configuration.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

fn default_kind_width() -> usize {
    15
}

fn default_rule_width() -> usize {
    30
}

fn default_kind_header() -> String {
    "Token".to_string()
}

fn default_lexeme_header() -> String {
    "Lexeme".to_string()
}

fn default_output_prefix() -> String {
    "output_".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_concurrency() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = RatlexConfig::default();
        assert_eq!(config.report.kind_width, 15);
        assert_eq!(config.report.rule_width, 30);
        assert_eq!(config.report.kind_header, "Token");
        assert_eq!(config.report.lexeme_header, "Lexeme");
        assert_eq!(config.batch.output_prefix, "output_");
        assert_eq!(config.batch.output_dir, None);
        assert!(config.batch.echo);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RatlexConfig =
            serde_json::from_str(r#"{ "batch": { "echo": false, "output_dir": "out" } }"#)
                .unwrap();
        assert!(!config.batch.echo);
        assert_eq!(config.batch.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.batch.output_prefix, "output_");
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: RatlexConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RatlexConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "report": {{ "kind_width": 12 }} }}"#).unwrap();

        let config = RatlexConfig::from_file(file.path()).unwrap();
        assert_eq!(config.report.kind_width, 12);
        assert_eq!(config.report.rule_width, 30);
    }

    #[test]
    fn test_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = RatlexConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(
            RatlexConfig::from_file(&path),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(
            RatlexConfig::load_or_default(&path).unwrap(),
            RatlexConfig::default()
        );
    }
}
