use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout, read from `sitegen.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Copied verbatim into `output_dir`.
    pub static_dir: PathBuf,
    /// Markdown sources, one page per `.md` file.
    pub content_dir: PathBuf,
    pub template_path: PathBuf,
    /// Wiped and regenerated on every build.
    pub output_dir: PathBuf,
    /// Prefix for root-relative links, e.g. `/my-repo/` for a project page.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("./static"),
            content_dir: PathBuf::from("./content"),
            template_path: PathBuf::from("./template.html"),
            output_dir: PathBuf::from("./docs"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    pub const DEFAULT_FILE: &'static str = "sitegen.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        for path in [
            &mut config.static_dir,
            &mut config.content_dir,
            &mut config.template_path,
            &mut config.output_dir,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }

        Ok(Some(config))
    }

    /// Loads `sitegen.toml` from the working directory.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::DEFAULT_FILE)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
