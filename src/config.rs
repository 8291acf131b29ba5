//! Configuration loading
//!
//! Resolution order for every setting:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::csv_handler::CSVHandler;
use crate::data_types::{ResourceKind, ResourceSource};
use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "freefuse-hub.toml";
pub const DATA_DIR_ENV: &str = "FREEFUSE_DATA_DIR";
pub const CONFIG_ENV: &str = "FREEFUSE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the resource files
    pub data_dir: PathBuf,
    pub delimiter: char,
    pub log_level: String,
    /// Per-resource file name overrides, relative to `data_dir` unless absolute
    pub files: BTreeMap<ResourceKind, PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("build"),
            delimiter: ',',
            log_level: "info".to_string(),
            files: BTreeMap::new(),
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Config> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read an explicitly named config file; failing to read or parse it is
    /// an error.
    pub fn from_file(path: &Path) -> Result<Config> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Config::from_toml(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolve the configuration from CLI overrides, environment and files.
    /// `env` is the environment lookup, injected so resolution can be tested
    /// without touching process state.
    pub fn resolve<F>(overrides: &Overrides, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let explicit_file = overrides
            .config_file
            .clone()
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from));

        let mut config = match explicit_file {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Config::from_file(&path)?
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Config::from_file(default_path)?
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Config::default()
                }
            }
        };

        if let Some(dir) = env(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = &overrides.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(level) = &overrides.log_level {
            config.log_level = level.clone();
        }

        if !config.delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "delimiter '{}' must be a single ASCII character",
                config.delimiter
            )));
        }

        Ok(config)
    }

    pub fn resource_path(&self, kind: ResourceKind) -> PathBuf {
        let file = self
            .files
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| PathBuf::from(kind.default_file_name()));
        self.data_dir.join(file)
    }

    /// Loader input: one source per resource
    pub fn sources(&self) -> Vec<ResourceSource> {
        ResourceKind::ALL
            .into_iter()
            .map(|kind| ResourceSource::new(self.resource_path(kind), kind))
            .collect()
    }

    pub fn csv_handler(&self) -> CSVHandler {
        CSVHandler::with_delimiter(self.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_build_directory() {
        let config = Config::default();
        assert_eq!(
            config.resource_path(ResourceKind::Tasks),
            PathBuf::from("build/onboarding_checklist.csv")
        );
        assert_eq!(config.sources().len(), 6);
    }

    #[test]
    fn toml_overrides_individual_fields() {
        let config = Config::from_toml(
            r#"
            data_dir = "/srv/hub"
            delimiter = ";"

            [files]
            interns = "people.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.delimiter, ';');
        assert_eq!(config.log_level, "info");
        assert_eq!(config.resource_path(ResourceKind::Interns), PathBuf::from("/srv/hub/people.csv"));
        assert_eq!(
            config.resource_path(ResourceKind::Contacts),
            PathBuf::from("/srv/hub/contacts_stakeholders.csv")
        );
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(Config::from_toml("data_dir = ["), Err(Error::Config(_))));
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("hub.toml");
        std::fs::write(&file, "data_dir = \"from-file\"\nlog_level = \"debug\"\n").unwrap();

        let overrides = Overrides {
            config_file: Some(file.clone()),
            ..Overrides::default()
        };
        let from_file = Config::resolve(&overrides, env_from(&[])).unwrap();
        assert_eq!(from_file.data_dir, PathBuf::from("from-file"));
        assert_eq!(from_file.log_level, "debug");

        let from_env = Config::resolve(&overrides, env_from(&[(DATA_DIR_ENV, "from-env")])).unwrap();
        assert_eq!(from_env.data_dir, PathBuf::from("from-env"));

        let overrides = Overrides {
            config_file: Some(file),
            data_dir: Some(PathBuf::from("from-cli")),
            log_level: Some("warn".into()),
        };
        let from_cli = Config::resolve(&overrides, env_from(&[(DATA_DIR_ENV, "from-env")])).unwrap();
        assert_eq!(from_cli.data_dir, PathBuf::from("from-cli"));
        assert_eq!(from_cli.log_level, "warn");
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("hub.toml");
        std::fs::write(&file, "delimiter = \"§\"\n").unwrap();

        let overrides = Overrides {
            config_file: Some(file),
            ..Overrides::default()
        };
        assert!(matches!(
            Config::resolve(&overrides, env_from(&[])),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let overrides = Overrides {
            config_file: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Overrides::default()
        };
        assert!(Config::resolve(&overrides, env_from(&[])).is_err());
    }
}
