//! Configuration merging logic for gwt-runner
//!
//! Implements the merging hierarchy: root (`PROJECT_ROOT`) -> project.
//! Scalars from a later layer replace earlier ones, `super_dev` options merge
//! field by field and classpath entries accumulate without duplicates.

use super::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ConfigInfo {
    pub root_config_path: Option<PathBuf>,
    pub project_config_path: Option<PathBuf>,
}

#[derive(Default)]
pub struct ConfigMerger {
    root_config: Option<Config>,
    project_config: Option<Config>,
    config_info: ConfigInfo,
}

impl ConfigMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all relevant configs for a path, using `PROJECT_ROOT` for the root layer
    pub fn load_configs_for_path(&mut self, path: &Path) -> Result<()> {
        let project_root = std::env::var("PROJECT_ROOT").ok().map(PathBuf::from);
        self.load_configs_with_root(path, project_root.as_deref())
    }

    pub fn load_configs_with_root(&mut self, path: &Path, project_root: Option<&Path>) -> Result<()> {
        debug!("Loading configs for path: {:?}", path);

        if let Some(project_config_path) = Config::find_config_file(path) {
            debug!("Found project config at: {:?}", project_config_path);
            self.project_config = Some(Config::load_from_file(&project_config_path)?);
            self.config_info.project_config_path = Some(project_config_path);
        }

        if let Some(root) = project_root {
            let root_config_path = super::CONFIG_FILE_NAMES
                .iter()
                .map(|name| root.join(name))
                .find(|candidate| candidate.exists());

            if let Some(root_config_path) = root_config_path {
                if self.is_project_config(&root_config_path) {
                    debug!("Root config is same as project config, skipping duplicate load");
                } else {
                    debug!("Found root config at: {:?}", root_config_path);
                    self.root_config = Some(Config::load_from_file(&root_config_path)?);
                    self.config_info.root_config_path = Some(root_config_path);
                }
            }
        }

        Ok(())
    }

    fn is_project_config(&self, candidate: &Path) -> bool {
        let Some(project_path) = &self.config_info.project_config_path else {
            return false;
        };
        match (project_path.canonicalize(), candidate.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => project_path == candidate,
        }
    }

    /// Get the merged configuration
    pub fn get_merged_config(&self) -> Config {
        let mut config = Config::default();

        if let Some(ref root) = self.root_config {
            config = merge_configs(config, root.clone());
        }

        if let Some(ref project) = self.project_config {
            config = merge_configs(config, project.clone());
        }

        config
    }

    /// Get information about which config files were loaded
    pub fn get_config_info(&self) -> &ConfigInfo {
        &self.config_info
    }
}

/// Merge `layer` on top of `base`
pub fn merge_configs(mut base: Config, layer: Config) -> Config {
    macro_rules! replace {
        ($($field:ident),* $(,)?) => {
            $(
                if layer.$field.is_some() {
                    base.$field = layer.$field;
                }
            )*
        };
    }

    replace!(
        gwt_version,
        modules,
        dev_modules,
        src,
        work_dir,
        gen_dir,
        cache_dir,
        extra_dir,
        dev_war,
        log_level,
        min_heap_size,
        max_heap_size,
        codeserver,
        elemental,
        java,
    );

    // Merge classpath with deduplication
    if let Some(classpath) = layer.classpath {
        match base.classpath {
            Some(ref mut base_classpath) => {
                for entry in classpath {
                    if !base_classpath.contains(&entry) {
                        base_classpath.push(entry);
                    }
                }
            }
            None => base.classpath = Some(classpath),
        }
    }

    if let Some(super_dev) = layer.super_dev {
        match base.super_dev {
            Some(ref mut base_super_dev) => base_super_dev.merge(super_dev),
            None => base.super_dev = Some(super_dev),
        }
    }

    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuperDevOptions;
    use tempfile::TempDir;

    #[test]
    fn test_merge_configs() {
        let base = Config {
            gwt_version: Some("2.7.0".to_string()),
            modules: Some(vec!["com.example.Base".to_string()]),
            classpath: Some(vec![PathBuf::from("lib/a.jar")]),
            super_dev: Some(SuperDevOptions {
                port: Some(9876),
                bind_address: Some("0.0.0.0".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let layer = Config {
            gwt_version: Some("2.8.2".to_string()),
            classpath: Some(vec![PathBuf::from("lib/a.jar"), PathBuf::from("lib/b.jar")]),
            super_dev: Some(SuperDevOptions {
                port: Some(1234),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = merge_configs(base, layer);
        assert_eq!(merged.gwt_version.as_deref(), Some("2.8.2"));
        assert_eq!(merged.modules, Some(vec!["com.example.Base".to_string()]));
        assert_eq!(
            merged.classpath,
            Some(vec![PathBuf::from("lib/a.jar"), PathBuf::from("lib/b.jar")])
        );
        let super_dev = merged.super_dev.unwrap();
        assert_eq!(super_dev.port, Some(1234));
        assert_eq!(super_dev.bind_address.as_deref(), Some("0.0.0.0"));
    }

    #[test]
    fn test_root_same_as_project_is_loaded_once() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            classpath: Some(vec![PathBuf::from("lib/a.jar")]),
            ..Default::default()
        };
        config
            .save_to_file(&temp_dir.path().join(".gwt-runner.json"))
            .unwrap();

        let mut merger = ConfigMerger::new();
        merger
            .load_configs_with_root(temp_dir.path(), Some(temp_dir.path()))
            .unwrap();

        assert!(merger.get_config_info().root_config_path.is_none());
        assert!(merger.get_config_info().project_config_path.is_some());
        assert_eq!(merger.get_merged_config(), config);
    }

    #[test]
    fn test_no_config_files() {
        let temp_dir = TempDir::new().unwrap();
        let mut merger = ConfigMerger::new();
        merger.load_configs_with_root(temp_dir.path(), None).unwrap();
        assert_eq!(merger.get_merged_config(), Config::default());
    }
}
