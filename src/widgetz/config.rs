use crate::error::{Result, WidgetzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Configuration for widgetz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WidgetzConfig {
    /// Socket address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Path prefix for every route and location (e.g. "/rest")
    #[serde(default)]
    pub base_path: String,

    /// JSON file backing the store; widgets live in memory when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Also mount the loose-matching update route under `/compat`
    #[serde(default)]
    pub compat_routes: bool,
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

impl Default for WidgetzConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            base_path: String::new(),
            data_file: None,
            compat_routes: false,
        }
    }
}

impl WidgetzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WidgetzError::Io)?;
        let config: WidgetzConfig = serde_json::from_str(&content).map_err(|e| {
            WidgetzError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WidgetzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WidgetzError::Serialization)?;
        fs::write(&config_path, content).map_err(WidgetzError::Io)?;
        Ok(config_path)
    }

    /// Applies command-line / environment overrides on top of the loaded file.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(bind_addr) = overrides.bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(base_path) = overrides.base_path {
            self.base_path = base_path;
        }
        if let Some(data_file) = overrides.data_file {
            self.data_file = Some(data_file);
        }
        if overrides.compat_routes {
            self.compat_routes = true;
        }
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_addr: Option<String>,
    pub base_path: Option<String>,
    pub data_file: Option<PathBuf>,
    pub compat_routes: bool,
}
