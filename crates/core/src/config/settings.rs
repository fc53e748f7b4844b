use crate::{
    error::{Error, Result},
    log_level::LogLevel,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::SuperDevOptions;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".gwt-runner.json", "gwt-runner.json"];

/// Project-wide GWT settings shared by every task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gwt_version: Option<String>,

    // GWT modules to compile or serve
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_modules: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<Vec<PathBuf>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classpath: Option<Vec<PathBuf>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gen_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_war: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_heap_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_heap_size: Option<String>,

    /// Add the code server artifact and enable super dev mode (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codeserver: Option<bool>,
    /// Add the elemental artifact (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elemental: Option<bool>,

    /// Java executable used to launch GWT tools
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_dev: Option<SuperDevOptions>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a gwt-runner config file.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    pub fn codeserver_enabled(&self) -> bool {
        self.codeserver.unwrap_or(true)
    }

    pub fn elemental_enabled(&self) -> bool {
        self.elemental.unwrap_or(false)
    }

    pub fn java_executable(&self) -> &str {
        self.java.as_deref().unwrap_or("java")
    }

    /// Modules for dev-mode tasks: `dev_modules` when given, otherwise `modules`.
    pub fn dev_task_modules(&self) -> Vec<String> {
        match &self.dev_modules {
            Some(dev_modules) if !dev_modules.is_empty() => dev_modules.clone(),
            _ => self.modules.clone().unwrap_or_default(),
        }
    }
}
