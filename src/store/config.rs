//! Source configuration file support.
//!
//! Reads data-source settings (store root, bucket, prefix) from a TOML file,
//! with environment-variable fallbacks for container deployments.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::StoreError;

/// Data-source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub source: SourceSettings,
}

/// Where the canonical record supplier reads from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// Root directory served by the local object store.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Bucket (subdirectory) holding the traffic CSVs.
    pub bucket: String,
    /// Object key prefix to narrow the listing.
    #[serde(default)]
    pub prefix: String,
}

fn default_root() -> PathBuf {
    PathBuf::from("data")
}

impl SourceConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::Configuration(format!("failed to read config file: {}", e))
        })?;
        toml::from_str(&content)
            .map_err(|e| StoreError::Configuration(format!("failed to parse config file: {}", e)))
    }

    /// Load configuration from the default locations.
    ///
    /// Searches for `routelens.toml` in the current directory, then
    /// `config/`, then the parent directory; falls back to environment
    /// variables (`ROUTELENS_ROOT`, `ROUTELENS_BUCKET`, `ROUTELENS_PREFIX`)
    /// when no file is found.
    pub fn load() -> Result<Self, StoreError> {
        let candidates = [
            PathBuf::from("routelens.toml"),
            PathBuf::from("config/routelens.toml"),
            PathBuf::from("../routelens.toml"),
        ];
        for candidate in &candidates {
            if candidate.exists() {
                return Self::from_file(candidate);
            }
        }
        Self::from_env()
    }

    /// Build configuration from environment variables.
    pub fn from_env() -> Result<Self, StoreError> {
        let bucket = env::var("ROUTELENS_BUCKET").map_err(|_| {
            StoreError::Configuration(
                "no routelens.toml found and ROUTELENS_BUCKET is not set".to_string(),
            )
        })?;
        Ok(Self {
            source: SourceSettings {
                root: env::var("ROUTELENS_ROOT")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_root()),
                bucket,
                prefix: env::var("ROUTELENS_PREFIX").unwrap_or_default(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let toml_text = r#"
[source]
root = "/var/lib/routelens"
bucket = "airline-traffic"
prefix = "t100-"
"#;
        let config: SourceConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.source.bucket, "airline-traffic");
        assert_eq!(config.source.prefix, "t100-");
        assert_eq!(config.source.root, PathBuf::from("/var/lib/routelens"));
    }

    #[test]
    fn test_defaults_applied() {
        let toml_text = r#"
[source]
bucket = "airline-traffic"
"#;
        let config: SourceConfig = toml::from_str(toml_text).unwrap();
        assert_eq!(config.source.prefix, "");
        assert_eq!(config.source.root, PathBuf::from("data"));
    }

    #[test]
    fn test_from_file_missing_bucket_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nprefix = \"x\"").unwrap();
        let err = SourceConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Configuration(_)));
    }
}
